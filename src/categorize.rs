use crate::classify::UNKNOWN;

/// OS tokens in precedence order. A user-agent naming several of these
/// yields the first in this list, not the one appearing earliest in the
/// string.
pub const OS_TOKENS: &[&str] = &[
    "Windows",
    "Mac OS X",
    "Linux",
    "Android",
    "Darwin",
    "iPhone",
    "FreeBSD",
    "OpenBSD",
    "SunOS",
    "Windows Phone",
];

/// Browser tokens in precedence order.
pub const BROWSER_TOKENS: &[&str] = &[
    "MSIE",
    "Chrome",
    "Trident",
    "Firefox",
    "BonEcho",
    "Safari",
    "Opera",
    "Edge",
];

/// First token (in list order) that occurs anywhere in the user-agent.
/// An explicit ordered loop rather than regex alternation, so precedence
/// does not depend on an engine's alternation resolution order.
pub fn first_token<'a>(user_agent: &str, tokens: &[&'a str]) -> Option<&'a str> {
    tokens.iter().find(|t| user_agent.contains(*t)).copied()
}

/// Canonical (os, browser) labels for a non-bot user-agent.
pub fn categorize(user_agent: &str) -> (String, String) {
    let os = first_token(user_agent, OS_TOKENS).unwrap_or(UNKNOWN);
    let browser = first_token(user_agent, BROWSER_TOKENS).unwrap_or(UNKNOWN);
    (os.to_string(), browser.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_follows_list_order_not_string_order() {
        // Android appears first in the string, Linux first in the list.
        assert_eq!(first_token("Android 9; Linux", OS_TOKENS), Some("Linux"));
    }

    #[test]
    fn windows_phone_resolves_to_windows_by_precedence() {
        let (os, _) = categorize("Mozilla/5.0 (Windows Phone 8.1; ARM)");
        assert_eq!(os, "Windows");
    }

    #[test]
    fn unrecognized_tokens_yield_unknown() {
        let (os, browser) = categorize("SomethingEntirelyElse/1.0");
        assert_eq!(os, "Unknown");
        assert_eq!(browser, "Unknown");
    }
}

use trafficscope::categorize::{categorize, first_token, BROWSER_TOKENS, OS_TOKENS};

#[test]
fn common_desktop_user_agent() {
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/91.0 Safari/537.36";
    let (os, browser) = categorize(ua);
    assert_eq!(os, "Windows");
    // Chrome precedes Safari in the precedence list.
    assert_eq!(browser, "Chrome");
}

#[test]
fn mac_safari_user_agent() {
    let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1 Safari/605.1";
    let (os, browser) = categorize(ua);
    assert_eq!(os, "Mac OS X");
    assert_eq!(browser, "Safari");
}

#[test]
fn precedence_wins_over_string_position() {
    // MSIE appears later in the string than Opera but earlier in the list.
    let ua = "Opera/9.80 compatible; MSIE 9.0";
    assert_eq!(first_token(ua, BROWSER_TOKENS), Some("MSIE"));
    // Android precedes Linux in typical UAs but Linux wins by list order.
    let ua = "Mozilla/5.0 (Android 11; Mobile; Linux armv81) Firefox/89.0";
    assert_eq!(first_token(ua, OS_TOKENS), Some("Linux"));
}

#[test]
fn iphone_user_agent() {
    let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Darwin) Safari/604.1";
    let (os, browser) = categorize(ua);
    // Darwin precedes iPhone in the precedence list.
    assert_eq!(os, "Darwin");
    assert_eq!(browser, "Safari");
}

#[test]
fn unmatched_user_agent_is_unknown_both_ways() {
    let (os, browser) = categorize("Dillo/3.0.5");
    assert_eq!(os, "Unknown");
    assert_eq!(browser, "Unknown");
}

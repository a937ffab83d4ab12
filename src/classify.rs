use crate::categorize;
use crate::geo::CountryResolver;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Label used when a line carries no IP-like substring or a user-agent
/// matches no known OS/browser token.
pub const UNKNOWN: &str = "Unknown";
/// Joint label for automated traffic; always set on os and browser together.
pub const BOT: &str = "bot";

/// Substrings that mark a user-agent as automated traffic. Matched
/// case-insensitively anywhere in the string. Covers feed readers,
/// crawlers, scripting-language default agents, and link-checkers.
pub const BOT_KEYWORDS: &[&str] = &[
    "UniversalFeedParser",
    "Tiny Tiny RSS",
    "python",
    "ruby",
    "java",
    "curl",
    "libwww",
    "Yahoo! Slurp",
    "DTS Agent",
    "irssi",
    "nutch",
    "wget",
    "superblock",
    "commafeed",
    "publish link validator",
    "ia_archiver",
    "bot",
    "Feedbin",
    "Xenu Link Sleuth",
    "portscout",
    "libfetch",
    "spider",
    "binlar",
    "theoldreader",
    "Microsoft Office Protocol Discovery",
    "Embedly",
    "Robosourcer",
    "FlipBoardRSS",
    "simplepie",
    "BingPreview",
    "SiteExplorer",
    "facebookexternalhit",
    "YandexImages",
    "HTTP_Request2",
    "distilator",
    "Ezooms",
    "LiveJournal.com",
    "Feedfetcher-Google",
    "FeedBurner",
];

// Loose dotted-quad: octet ranges are deliberately not validated, any
// four dot-separated digit groups count as an address candidate.
static RE_DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").unwrap());

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("malformed log line {line_number}: fewer than two quoted segments")]
    MalformedLine { line_number: usize },
}

/// One access-log request reduced to the three dimensions we aggregate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub country: String,
    pub os: String,
    pub browser: String,
}

/// Classifies raw log lines against a country resolver and a bot keyword
/// list. The default keyword list is `BOT_KEYWORDS`; tests substitute
/// smaller fixtures via `with_keywords`.
pub struct Classifier<'a, R: CountryResolver> {
    resolver: &'a R,
    keywords: Vec<String>,
}

impl<'a, R: CountryResolver> Classifier<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self::with_keywords(resolver, BOT_KEYWORDS)
    }

    pub fn with_keywords(resolver: &'a R, keywords: &[&str]) -> Self {
        Self {
            resolver,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Classify one raw line. `line_number` is 1-based and only used for
    /// error reporting.
    pub fn classify(&self, line: &str, line_number: usize) -> Result<ClassifiedRecord, ClassifyError> {
        let country = match extract_ip(line) {
            Some(ip) => self.resolver.resolve_country(ip),
            None => UNKNOWN.to_string(),
        };

        let user_agent = user_agent_segment(line)
            .ok_or(ClassifyError::MalformedLine { line_number })?;

        let (os, browser) = if self.is_bot(user_agent) {
            (BOT.to_string(), BOT.to_string())
        } else {
            categorize::categorize(user_agent)
        };

        Ok(ClassifiedRecord { country, os, browser })
    }

    fn is_bot(&self, user_agent: &str) -> bool {
        if user_agent == "-" || user_agent.trim().is_empty() {
            return true;
        }
        let ua = user_agent.to_lowercase();
        self.keywords.iter().any(|k| ua.contains(k))
    }
}

/// First dotted-quad-looking substring of the line, if any.
pub fn extract_ip(line: &str) -> Option<&str> {
    RE_DOTTED_QUAD.find(line).map(|m| m.as_str())
}

/// The second-to-last `"`-delimited segment of the line, which in common
/// access-log formats is the user-agent. Returns `None` when the line has
/// fewer than two quoted segments (fewer than four quote characters).
pub fn user_agent_segment(line: &str) -> Option<&str> {
    let parts: Vec<&str> = line.split('"').collect();
    // Two quoted segments produce at least five split parts.
    if parts.len() < 5 {
        return None;
    }
    Some(parts[parts.len() - 2])
}

/// Handle recognition for X profile links
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::PROFILE_BASE_URL;

/// Optional scheme/host prefix, a 1-15 character handle, optional path suffix.
/// Case folding is ASCII-only: the Kelvin sign or long s never pass as letters.
static HANDLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i-u:https?://(?:www\.)?(?:x|twitter)\.com/)?([A-Za-z0-9_]{1,15})(?:/.*)?$")
        .expect("handle pattern is valid")
});

/// First path segments on X that are navigation or utility routes, not accounts
pub const EXCLUDED_PATHS: &[&str] = &[
    "home",
    "explore",
    "notifications",
    "messages",
    "i",
    "search",
    "settings",
    "compose",
    "tos",
    "privacy",
    "about",
    "help",
    "business",
    "status",
    "intent",
    "share",
    "hashtag",
    "search-advanced",
    "search-live",
    "login",
    "signup",
    "account",
];

/// Extract the handle from a fully-resolved link URL
///
/// Algorithm:
/// 1. Match the URL against the profile pattern (case-insensitive)
/// 2. Take the first path segment as the handle, preserving its case
/// 3. Reject system routes (`/home`, `/explore`, ...)
/// 4. Reject purely numeric handles (`/12345` style id links)
///
/// Examples:
/// - https://x.com/alice → alice
/// - https://twitter.com/Bob_99/status/1 → Bob_99
/// - https://x.com/home → None
/// - https://x.com/42 → None
pub fn parse_handle(url: &str) -> Option<&str> {
    let handle = HANDLE_PATTERN.captures(url)?.get(1)?.as_str();

    if is_excluded_path(handle) || is_numeric_handle(handle) {
        return None;
    }

    Some(handle)
}

pub fn is_excluded_path(handle: &str) -> bool {
    let lower = handle.to_ascii_lowercase();
    EXCLUDED_PATHS.contains(&lower.as_str())
}

pub fn is_numeric_handle(handle: &str) -> bool {
    !handle.is_empty() && handle.chars().all(|c| c.is_ascii_digit())
}

/// Canonical profile URL for a handle
pub fn profile_url(username: &str) -> String {
    Url::parse(PROFILE_BASE_URL)
        .and_then(|base| base.join(username))
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", PROFILE_BASE_URL, username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle_basic() {
        assert_eq!(parse_handle("https://x.com/alice"), Some("alice"));
        assert_eq!(parse_handle("http://x.com/alice"), Some("alice"));
        assert_eq!(parse_handle("https://www.x.com/alice"), Some("alice"));
        assert_eq!(parse_handle("https://twitter.com/alice"), Some("alice"));
    }

    #[test]
    fn test_parse_handle_preserves_case() {
        assert_eq!(parse_handle("https://X.COM/Alice_B"), Some("Alice_B"));
    }

    #[test]
    fn test_parse_handle_with_path_suffix() {
        assert_eq!(parse_handle("https://x.com/alice/status/123"), Some("alice"));
        assert_eq!(parse_handle("https://x.com/alice/"), Some("alice"));
        assert_eq!(parse_handle("https://x.com/alice/followers"), Some("alice"));
    }

    #[test]
    fn test_parse_handle_without_prefix() {
        assert_eq!(parse_handle("alice"), Some("alice"));
        assert_eq!(parse_handle("alice/media"), Some("alice"));
    }

    #[test]
    fn test_parse_handle_length_limit() {
        assert_eq!(parse_handle("https://x.com/abcdefghijklmno"), Some("abcdefghijklmno"));
        assert_eq!(parse_handle("https://x.com/abcdefghijklmnop"), None);
    }

    #[test]
    fn test_parse_handle_rejects_other_sites() {
        assert_eq!(parse_handle("https://example.com/alice"), None);
        assert_eq!(parse_handle("https://x.com.evil.net/alice"), None);
        assert_eq!(parse_handle("https://x.com/"), None);
    }

    #[test]
    fn test_parse_handle_rejects_query_and_invalid_chars() {
        assert_eq!(parse_handle("https://x.com/alice?s=20"), None);
        assert_eq!(parse_handle("https://x.com/al-ice"), None);
    }

    #[test]
    fn test_parse_handle_excluded_paths() {
        assert_eq!(parse_handle("https://x.com/home"), None);
        assert_eq!(parse_handle("https://x.com/Explore"), None);
        assert_eq!(parse_handle("https://x.com/i/lists/1"), None);
        assert_eq!(parse_handle("https://x.com/settings/account"), None);
    }

    #[test]
    fn test_parse_handle_numeric() {
        assert_eq!(parse_handle("https://x.com/42"), None);
        assert_eq!(parse_handle("https://x.com/42abc"), Some("42abc"));
        assert_eq!(parse_handle("https://x.com/4_2"), Some("4_2"));
    }

    #[test]
    fn test_parse_handle_rejects_unicode_case_folds() {
        assert_eq!(parse_handle("https://x.com/\u{212A}evin"), None);
        assert_eq!(parse_handle("https://x.com/\u{017F}am"), None);
        assert_eq!(parse_handle("http\u{017F}://x.com/alice"), None);
        assert_eq!(parse_handle("HTTPS://WWW.TWITTER.COM/Kevin"), Some("Kevin"));
    }

    #[test]
    fn test_is_excluded_path_case_insensitive() {
        assert!(is_excluded_path("HOME"));
        assert!(is_excluded_path("search-live"));
        assert!(!is_excluded_path("homer"));
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url("alice"), "https://x.com/alice");
        assert_eq!(profile_url("Bob_99"), "https://x.com/Bob_99");
    }
}

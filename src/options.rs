//! Configuration options for scraping and extraction.
//!
//! The `Options` struct controls the fetch policy and the few numeric knobs
//! of the extraction heuristics.

use std::time::Duration;

/// Browser user agent sent with every guide request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration options for a scraping run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use wow_shopping_lists::Options;
///
/// let options = Options {
///     request_delay: Duration::from_millis(500),
///     ..Options::default()
/// };
/// assert_eq!(options.sibling_lookahead, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Delay applied before every fetch.
    ///
    /// The extraction core never sleeps; the scraper waits this long before
    /// each request to stay polite with the guide site.
    ///
    /// Default: `2s`
    pub request_delay: Duration,

    /// Network timeout for a single guide request.
    ///
    /// Default: `30s`
    pub timeout: Duration,

    /// User-Agent header sent with each request.
    ///
    /// Default: a desktop Chrome user agent
    pub user_agent: String,

    /// Number of element siblings inspected after a materials heading when
    /// looking for the list it introduces.
    ///
    /// Default: `10`
    pub sibling_lookahead: usize,

    /// Fragments shorter than this (in characters, after trimming) are never
    /// matched.
    ///
    /// Default: `5`
    pub min_fragment_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs(2),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sibling_lookahead: 10,
            min_fragment_len: 5,
        }
    }
}

impl Options {
    /// Same options with a different inter-request delay.
    #[must_use]
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_guide_site_policy() {
        let options = Options::default();
        assert_eq!(options.request_delay, Duration::from_secs(2));
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.sibling_lookahead, 10);
        assert_eq!(options.min_fragment_len, 5);
        assert!(options.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn with_request_delay_overrides_only_delay() {
        let options = Options::default().with_request_delay(Duration::ZERO);
        assert_eq!(options.request_delay, Duration::ZERO);
        assert_eq!(options.timeout, Duration::from_secs(30));
    }
}

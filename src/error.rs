//! Error types for wow-shopping-lists.
//!
//! The extraction core never fails: a page that yields nothing degrades to an
//! empty material list. These errors come from the collaborators around it
//! (fetching, configuration, output files, explicit user selections).

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be built or the request could not be sent.
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    /// Reading or writing a local file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file or value could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The expansion key is not in the guide catalog.
    #[error("Unknown expansion: {0}")]
    UnknownExpansion(String),

    /// The profession name is not supported.
    #[error("Unknown profession: {0}")]
    UnknownProfession(String),

    /// The expansion is marked as incompatible with the extraction heuristics.
    #[error("Expansion {0} is marked incompatible and is skipped")]
    IncompatibleExpansion(String),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error taxonomy for building and presenting URLs.

use thiserror::Error;

/// Why the host/port pair could not be turned into a URL.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IP-like host with a port that is not an integer in 1..=65535.
    #[error("invalid port {port:?}: expected a number between 1 and 65535")]
    InvalidPort { port: String },
    /// Constructed URL was empty.
    #[error("generated an empty URL")]
    Empty,
    /// Constructed URL does not parse.
    #[error("generated an invalid URL {url:?}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Why the go action did not move the screen to presenting.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Host is IP-like and the port is not valid.
    #[error("a valid port is required for an IP address")]
    TriggerDisabled,
    /// A URL is already being presented; dismiss it first.
    #[error("already presenting {url}")]
    AlreadyPresenting { url: String },
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Transport-level failure while a presenter loads a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation cancelled")]
    Cancelled,
    #[error("could not resolve host: {0}")]
    Resolve(String),
    #[error("could not connect: {0}")]
    Connect(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Other(String),
}

/// Error returned by a presenter to its caller.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to load page: {0}")]
    Navigation(#[from] NavigationError),
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("presenter setup failed: {0}")]
    Setup(String),
}

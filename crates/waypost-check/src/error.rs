//! Error types for loading route files.

use std::path::PathBuf;

/// Errors that stop a route file from being checked at all.
///
/// Problems with individual route entries are not errors; they are reported
/// as [`RouteIssue`](crate::RouteIssue)s.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The route file could not be read.
    #[error("failed to read route file '{}': {source}", path.display())]
    Io {
        /// Path to the route file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The route file is not valid JSON.
    #[error("failed to parse route file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The route file is valid JSON but not an array of routes.
    #[error("route file must contain a JSON array of routes")]
    NotAnArray,
}

/// Result type for route file checks.
pub type Result<T> = std::result::Result<T, CheckError>;

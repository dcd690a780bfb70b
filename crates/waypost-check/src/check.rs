//! Loading and validating route files.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};
use waypost::Route;

use crate::error::{CheckError, Result};

/// A route entry that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteIssue {
    /// Position of the entry in the file, starting at zero.
    pub index: usize,
    /// The entry's `name` field, if it had a string one.
    pub name: Option<String>,
    /// Why the entry was rejected.
    pub message: String,
}

impl fmt::Display for RouteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route #{}", self.index)?;
        if let Some(name) = &self.name {
            write!(f, " ({name:?})")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Outcome of checking a route file.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Entries that built valid routes, in file order.
    pub routes: Vec<Route>,
    /// Entries that were rejected, in file order.
    pub issues: Vec<RouteIssue>,
}

impl CheckReport {
    /// Returns whether every entry was valid.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns names shared by more than one valid route, sorted.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for route in &self.routes {
            *counts.entry(route.name()).or_default() += 1;
        }
        let mut names: Vec<&str> = counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }
}

/// Reads a route file and validates every entry in it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or is not an
/// array. Invalid entries do not fail the check; they are collected in
/// [`CheckReport::issues`].
pub fn check_file(path: &Path) -> Result<CheckReport> {
    debug!(path = %path.display(), "Reading route file");
    let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_str(&text)
}

/// Validates every entry of a JSON route document.
///
/// # Errors
///
/// Returns an error if `text` is not JSON or is not an array.
pub fn check_str(text: &str) -> Result<CheckReport> {
    let Value::Array(entries) = serde_json::from_str::<Value>(text)? else {
        return Err(CheckError::NotAnArray);
    };

    let mut report = CheckReport::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        match serde_json::from_value::<Route>(entry) {
            Ok(route) => {
                debug!(index, route = %route, "Route is valid");
                report.routes.push(route);
            }
            Err(e) => {
                let issue = RouteIssue {
                    index,
                    name,
                    message: e.to_string(),
                };
                warn!(index, message = %issue.message, "Invalid route");
                report.issues.push(issue);
            }
        }
    }

    Ok(report)
}

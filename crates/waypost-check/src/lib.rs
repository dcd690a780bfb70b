//! Route file checker for `waypost`.
//!
//! Loads a JSON array of route definitions and builds each one through
//! [`waypost::Route`]'s validation, reporting every entry that is rejected
//! instead of stopping at the first.
//!
//! # Example
//!
//! ```
//! let report = waypost_check::check_str(r#"[
//!     {"name": "home", "uri_pattern": "/", "method": "get",
//!      "controller": "HomeController", "action": "index"},
//!     {"name": "bad", "uri_pattern": "/x", "method": "patch",
//!      "controller": "C", "action": "a"}
//! ]"#).unwrap();
//!
//! assert_eq!(report.routes.len(), 1);
//! assert_eq!(report.issues[0].index, 1);
//! ```

pub mod check;
pub mod config;
pub mod error;

pub use check::{CheckReport, RouteIssue, check_file, check_str};
pub use config::Config;
pub use error::{CheckError, Result};

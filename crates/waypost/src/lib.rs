//! # waypost
//!
//! Validated HTTP route definitions.
//!
//! This crate provides:
//! - [`Route`], a route definition whose fields are checked on every write
//! - [`Method`], the closed set of methods a route can be bound to
//! - [`ParamValue`], values for auxiliary route parameters
//! - [`RouteDefinition`], the read surface a router consumes
//!
//! Matching request paths against URI patterns and dispatching to
//! controllers is left to the router that holds the routes.
//!
//! ## Quick Start
//!
//! ```
//! use waypost::{Method, Route, RouteError};
//!
//! let mut route = Route::new("home", "/", "get", "HomeController", "index")?;
//! assert_eq!(route.method(), Method::Get);
//! assert!(route.params().is_empty());
//!
//! route.set_params([("page", 1), ("per_page", 20)]);
//! route.add_param("page", 2);
//! assert_eq!(route.param("page").and_then(|v| v.as_i64()), Some(2));
//!
//! let err = Route::new("bad", "/x", "patch", "C", "a").unwrap_err();
//! assert!(matches!(err, RouteError::InvalidMethod(_)));
//! # Ok::<(), RouteError>(())
//! ```
//!
//! ## Serialized Routes
//!
//! Routes deserialize through the same validation as [`Route::new`]:
//!
//! ```
//! use waypost::Route;
//!
//! let json = r#"{
//!     "name": "post_detail",
//!     "uri_pattern": "/posts/{id}",
//!     "method": "get",
//!     "controller": "PostController",
//!     "action": "show",
//!     "params": {"format": "html"}
//! }"#;
//! let route: Route = serde_json::from_str(json).unwrap();
//! assert_eq!(route.controller(), "PostController");
//!
//! let blank = r#"{"name": " ", "uri_pattern": "/", "method": "get",
//!                 "controller": "C", "action": "a"}"#;
//! assert!(serde_json::from_str::<Route>(blank).is_err());
//! ```

mod error;
mod method;
mod param;
mod route;

pub use error::{Result, RouteError};
pub use method::Method;
pub use param::ParamValue;
pub use route::{Route, RouteDefinition};

#![allow(dead_code)]

use waypost::{Route, RouteError};

pub fn route(name: &str, uri_pattern: &str, method: &str, controller: &str, action: &str) -> Route {
    Route::new(name, uri_pattern, method, controller, action).unwrap_or_else(|e| {
        panic!("Failed to build route {name:?} {method} {uri_pattern:?}\nError: {e:?}")
    })
}

pub fn route_err(
    name: &str,
    uri_pattern: &str,
    method: &str,
    controller: &str,
    action: &str,
) -> RouteError {
    Route::new(name, uri_pattern, method, controller, action).expect_err(&format!(
        "Expected route error for: {name:?} {uri_pattern:?} {method:?} {controller:?} {action:?}"
    ))
}

pub fn home() -> Route {
    route("home", "/", "get", "HomeController", "index")
}

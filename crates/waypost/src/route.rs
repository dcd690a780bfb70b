//! Route definitions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, RouteError};
use crate::method::Method;
use crate::param::ParamValue;

/// Read access to a route definition.
///
/// A router only needs this surface to match and dispatch, so it can accept
/// any type that describes a route, not just [`Route`].
pub trait RouteDefinition {
    /// Returns the route name.
    fn name(&self) -> &str;

    /// Returns the URI pattern.
    fn uri_pattern(&self) -> &str;

    /// Returns the HTTP method.
    fn method(&self) -> Method;

    /// Returns the controller identifier.
    fn controller(&self) -> &str;

    /// Returns the action identifier.
    fn action(&self) -> &str;

    /// Returns all auxiliary parameters.
    fn params(&self) -> &HashMap<String, ParamValue>;

    /// Returns a single parameter, or `None` if it is not set.
    #[must_use]
    fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params().get(key)
    }
}

/// A single route definition.
///
/// Every field is validated when the route is built and again whenever it
/// is replaced, so a `Route` is always structurally valid:
/// - `name` and `uri_pattern` are stored trimmed and are never blank.
/// - `controller` and `action` are stored as given and are never empty.
///   They are not trimmed, so a whitespace-only value is accepted.
/// - `method` is one of the [`Method`] variants.
///
/// # Example
///
/// ```
/// use waypost::{Method, ParamValue, Route};
///
/// let mut route = Route::new(" post_detail ", "/posts/{id}", "get", "PostController", "show")?;
/// assert_eq!(route.name(), "post_detail");
/// assert_eq!(route.method(), Method::Get);
///
/// route.add_param("format", "html");
/// assert_eq!(route.param("format"), Some(&ParamValue::from("html")));
/// assert!(route.set_method("patch").is_err());
/// # Ok::<(), waypost::RouteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteRecord")]
pub struct Route {
    name: String,
    uri_pattern: String,
    method: Method,
    controller: String,
    action: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    params: HashMap<String, ParamValue>,
}

impl Route {
    /// Creates a new route with no parameters.
    ///
    /// # Errors
    ///
    /// Fields are checked in order (name, URI pattern, method, controller,
    /// action) and the error for the first violation is returned.
    ///
    /// `method` is either a [`Method`] or its lower-case literal.
    pub fn new<M>(
        name: impl Into<String>,
        uri_pattern: impl Into<String>,
        method: M,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self>
    where
        M: TryInto<Method>,
        RouteError: From<M::Error>,
    {
        Self::with_params(
            name,
            uri_pattern,
            method,
            controller,
            action,
            std::iter::empty::<(String, ParamValue)>(),
        )
    }

    /// Creates a new route and applies `params` through [`Route::add_param`].
    ///
    /// # Errors
    ///
    /// Same as [`Route::new`]. Parameter values are never rejected.
    pub fn with_params<M, K, V>(
        name: impl Into<String>,
        uri_pattern: impl Into<String>,
        method: M,
        controller: impl Into<String>,
        action: impl Into<String>,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        M: TryInto<Method>,
        RouteError: From<M::Error>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let name = validate_name(name.into())?;
        let uri_pattern = validate_uri_pattern(uri_pattern.into())?;
        let method: Method = method.try_into()?;
        let controller = validate_controller(controller.into())?;
        let action = validate_action(action.into())?;

        let mut route = Self {
            name,
            uri_pattern,
            method,
            controller,
            action,
            params: HashMap::new(),
        };
        route.set_params(params);

        trace!(route = %route, "Route created");
        Ok(route)
    }

    /// Returns the route name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the route name.
    ///
    /// The name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidName`] if the name is blank. The current
    /// name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = validate_name(name.into())?;
        debug!(old = %self.name, new = %name, "Renaming route");
        self.name = name;
        Ok(())
    }

    /// Returns the URI pattern.
    #[must_use]
    pub fn uri_pattern(&self) -> &str {
        &self.uri_pattern
    }

    /// Replaces the URI pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidUriPattern`] if the pattern is blank.
    pub fn set_uri_pattern(&mut self, uri_pattern: impl Into<String>) -> Result<()> {
        let uri_pattern = validate_uri_pattern(uri_pattern.into())?;
        debug!(
            route = %self.name,
            old = %self.uri_pattern,
            new = %uri_pattern,
            "Replacing route uri pattern"
        );
        self.uri_pattern = uri_pattern;
        Ok(())
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Replaces the HTTP method.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidMethod`] if `method` is text other than
    /// one of the lower-case literals accepted by [`Method`]'s `FromStr`
    /// implementation. Passing a [`Method`] never fails.
    pub fn set_method<M>(&mut self, method: M) -> Result<()>
    where
        M: TryInto<Method>,
        RouteError: From<M::Error>,
    {
        let method: Method = method.try_into()?;
        debug!(route = %self.name, old = %self.method, new = %method, "Replacing route method");
        self.method = method;
        Ok(())
    }

    /// Returns the controller identifier.
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Replaces the controller identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidController`] if the controller is empty.
    pub fn set_controller(&mut self, controller: impl Into<String>) -> Result<()> {
        let controller = validate_controller(controller.into())?;
        debug!(
            route = %self.name,
            old = %self.controller,
            new = %controller,
            "Replacing route controller"
        );
        self.controller = controller;
        Ok(())
    }

    /// Returns the action identifier.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Replaces the action identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidAction`] if the action is empty.
    pub fn set_action(&mut self, action: impl Into<String>) -> Result<()> {
        let action = validate_action(action.into())?;
        debug!(route = %self.name, old = %self.action, new = %action, "Replacing route action");
        self.action = action;
        Ok(())
    }

    /// Returns all auxiliary parameters.
    #[must_use]
    pub const fn params(&self) -> &HashMap<String, ParamValue> {
        &self.params
    }

    /// Returns a parameter value, or `None` if the key is not set.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Adds every pair in `params`, overwriting keys that are already set.
    ///
    /// Keys not present in `params` are left untouched.
    pub fn set_params<K, V>(&mut self, params: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (key, value) in params {
            self.add_param(key, value);
        }
    }

    /// Sets a parameter, replacing any previous value for the same key.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(previous) = self.params.insert(key.clone(), value) {
            debug!(route = %self.name, key = %key, previous = %previous, "Overwrote route parameter");
        }
    }

    /// Removes a parameter. Does nothing if the key is not set.
    pub fn remove_param(&mut self, key: &str) {
        self.params.remove(key);
    }
}

impl RouteDefinition for Route {
    fn name(&self) -> &str {
        &self.name
    }

    fn uri_pattern(&self) -> &str {
        &self.uri_pattern
    }

    fn method(&self) -> Method {
        self.method
    }

    fn controller(&self) -> &str {
        &self.controller
    }

    fn action(&self) -> &str {
        &self.action
    }

    fn params(&self) -> &HashMap<String, ParamValue> {
        &self.params
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} -> {}::{}",
            self.name, self.method, self.uri_pattern, self.controller, self.action
        )
    }
}

/// Unvalidated route data as it appears in serialized form.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteRecord {
    name: String,
    uri_pattern: String,
    method: String,
    controller: String,
    action: String,
    #[serde(default)]
    params: HashMap<String, ParamValue>,
}

impl TryFrom<RouteRecord> for Route {
    type Error = RouteError;

    fn try_from(record: RouteRecord) -> Result<Self> {
        Self::with_params(
            record.name,
            record.uri_pattern,
            record.method.as_str(),
            record.controller,
            record.action,
            record.params,
        )
    }
}

fn validate_name(name: String) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RouteError::InvalidName(name));
    }
    Ok(trimmed.to_string())
}

fn validate_uri_pattern(uri_pattern: String) -> Result<String> {
    let trimmed = uri_pattern.trim();
    if trimmed.is_empty() {
        return Err(RouteError::InvalidUriPattern(uri_pattern));
    }
    Ok(trimmed.to_string())
}

// Controller and action are checked untrimmed.
fn validate_controller(controller: String) -> Result<String> {
    if controller.is_empty() {
        return Err(RouteError::InvalidController(controller));
    }
    Ok(controller)
}

fn validate_action(action: String) -> Result<String> {
    if action.is_empty() {
        return Err(RouteError::InvalidAction(action));
    }
    Ok(action)
}

//! HTTP methods a route can be bound to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// HTTP methods accepted by a route.
///
/// The text form is the lower-case literal, and parsing is case-sensitive:
/// `"get"` parses, `"GET"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// DELETE method
    Delete,
    /// Matches every method.
    Any,
}

impl Method {
    /// Every accepted method, in declaration order.
    pub const ALL: [Self; 5] = [Self::Get, Self::Post, Self::Put, Self::Delete, Self::Any];

    /// Returns the method as its lower-case literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Any => "any",
        }
    }
}

impl FromStr for Method {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            "any" => Ok(Self::Any),
            _ => Err(RouteError::InvalidMethod(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = RouteError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "GET".parse::<Method>(),
            Err(RouteError::InvalidMethod("GET".to_string()))
        );
        assert!("Post".parse::<Method>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!("patch".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
        assert!(" get".parse::<Method>().is_err());
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Method::try_from("post"), Ok(Method::Post));
        assert!(Method::try_from("POST").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::Delete.to_string(), "delete");
        assert_eq!(Method::Any.to_string(), "any");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Method::Put).unwrap(), "\"put\"");
        let method: Method = serde_json::from_str("\"any\"").unwrap();
        assert_eq!(method, Method::Any);
        assert!(serde_json::from_str::<Method>("\"PUT\"").is_err());
    }
}

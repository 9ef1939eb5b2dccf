//! # Endpoint Contract
//!
//! Every Rapyd operation conforms to a single shape: a serialized input, a
//! typed output, a params value used only to compute the request path, and an
//! HTTP method. Adding an endpoint means declaring data, not writing control
//! flow; one transport serves them all.

use crate::error::RapydError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods used by the Rapyd API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Lowercase form, used as the first component of the signed string.
    pub fn signing_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker type for bodiless requests and parameterless paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty;

/// A single Rapyd API operation.
///
/// `path` is pure: it must depend only on `params`, never on external state.
/// It is fallible only for forward compatibility with validated parameters;
/// for well-typed params it should never fail.
pub trait Endpoint {
    /// Serialized as the request body (`Empty` for bodiless requests)
    type Input: Serialize;

    /// Deserialized from the `data` field of a successful response envelope
    type Output: DeserializeOwned;

    /// Used only to compute the request path and query string
    type Params;

    /// HTTP verb, fixed per operation
    const METHOD: Method = Method::Post;

    /// Relative URL including any query string
    fn path(params: &Self::Params) -> Result<String, RapydError>;
}

/// Builds a query string by joining only the present parameters with `&`,
/// in the order they were pushed (the field-declaration order of the
/// operation's params).
#[derive(Debug, Default)]
pub struct QueryString {
    parts: Vec<String>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.parts.push(format!("{key}={value}"));
    }

    pub fn push_opt<T: fmt::Display>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn finish(self) -> String {
        self.parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Get.signing_str(), "get");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_query_string_preserves_push_order() {
        let mut qs = QueryString::new();
        qs.push("country", "US");
        qs.push("currency", "USD");
        assert_eq!(qs.finish(), "country=US&currency=USD");
    }

    #[test]
    fn test_query_string_skips_absent_values() {
        let mut qs = QueryString::new();
        qs.push_opt("beneficiary_country", None::<&String>);
        qs.push_opt("category", Some(&"bank"));
        qs.push_opt("limit", None::<&u32>);
        assert_eq!(qs.finish(), "category=bank");
    }

    #[test]
    fn test_empty_query_string() {
        assert_eq!(QueryString::new().finish(), "");
    }
}

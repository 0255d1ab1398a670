//! JSON interop
//!
//! Converts `serde_json::Value` into [`Value`] so argument lists decoded
//! from JSON can be validated directly. JSON has no `undefined`, dates,
//! regexps, symbols or functions, so only the JSON-shaped variants are
//! produced; object key order is preserved.
//!
//! # Examples
//!
//! ```
//! use param_types::json::json_args;
//! use param_types::prelude::*;
//! use serde_json::json;
//!
//! let point = validate_with_errors_with(
//!     &ValidatorConfig::active(),
//!     "move_to",
//!     checkers![number().required(), number().required()],
//! )
//! .unwrap();
//!
//! assert!(point.call(&json_args(&json!([1, 2]))).is_ok());
//! assert!(point.call(&json_args(&json!([1, "2"]))).is_err());
//! ```

use crate::foundation::{Object, Value};
use serde_json::Value as Json;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        Self::from(json.clone())
    }
}

/// Turns a JSON array into an argument list.
///
/// Any other JSON value becomes a single argument.
#[must_use]
pub fn json_args(json: &Json) -> Vec<Value> {
    match json {
        Json::Array(items) => items.iter().map(Value::from).collect(),
        other => vec![Value::from(other)],
    }
}

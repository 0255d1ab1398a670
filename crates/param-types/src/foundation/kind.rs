//! Value classification
//!
//! Every checker compares values through their [`Kind`], never through the
//! concrete [`Value`] variant. Classification is total: any value, including
//! `null`, maps to exactly one kind.
//!
//! ## Priority
//!
//! Containers and special objects are recognised before the primitive kind:
//!
//! 1. arrays → [`Kind::Array`]
//! 2. regular expressions → [`Kind::RegExp`]
//! 3. dates → [`Kind::Date`]
//! 4. symbols → [`Kind::Symbol`]
//! 5. everything else → its primitive kind (`null` is an `object`)

use crate::foundation::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The classified semantic type of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Array,
    RegExp,
    Date,
    Symbol,
    Object,
    String,
    Number,
    Boolean,
    Function,
    Undefined,
}

impl Kind {
    /// Returns the lowercase name used in failure messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::RegExp => "regexp",
            Self::Date => "date",
            Self::Symbol => "symbol",
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a value.
#[must_use]
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Array(_) => Kind::Array,
        Value::RegExp(_) => Kind::RegExp,
        Value::Date(_) => Kind::Date,
        Value::Symbol(_) => Kind::Symbol,
        Value::Object(_) | Value::Null => Kind::Object,
        Value::String(_) => Kind::String,
        Value::Number(_) => Kind::Number,
        Value::Bool(_) => Kind::Boolean,
        Value::Function(_) => Kind::Function,
        Value::Undefined => Kind::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::value::{Function, Object, Symbol};
    use chrono::Utc;
    use regex::Regex;

    #[test]
    fn test_containers_before_primitives() {
        assert_eq!(classify(&Value::Array(vec![])), Kind::Array);
        assert_eq!(classify(&Value::Date(Utc::now())), Kind::Date);
        assert_eq!(
            classify(&Value::RegExp(Regex::new("a").unwrap())),
            Kind::RegExp
        );
        assert_eq!(classify(&Value::Object(Object::new())), Kind::Object);
    }

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(classify(&Value::from("x")), Kind::String);
        assert_eq!(classify(&Value::from(1.5)), Kind::Number);
        assert_eq!(classify(&Value::from(f64::NAN)), Kind::Number);
        assert_eq!(classify(&Value::from(true)), Kind::Boolean);
        assert_eq!(classify(&Value::Symbol(Symbol::new("s"))), Kind::Symbol);
        assert_eq!(
            classify(&Value::Function(Function::named("f", |_| Value::Undefined))),
            Kind::Function
        );
    }

    #[test]
    fn test_null_is_object_and_undefined_is_undefined() {
        assert_eq!(classify(&Value::Null), Kind::Object);
        assert_eq!(classify(&Value::Undefined), Kind::Undefined);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::RegExp.to_string(), "regexp");
        assert_eq!(Kind::Boolean.as_str(), "boolean");
        assert_eq!(serde_json::to_string(&Kind::Function).unwrap(), "\"function\"");
    }
}

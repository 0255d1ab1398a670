//! Error types for validation failures
//!
//! A checker reports at most one [`ValidationError`]: the first mismatch it
//! finds. The logging policy gathers one error per failing position into
//! [`ValidationErrors`]. A malformed checker list is a [`ConfigError`],
//! raised when the validator is built, never when it is called.
//!
//! Codes and fixed message fragments are `Cow<'static, str>` so the static
//! case does not allocate.

use crate::foundation::kind::Kind;
use crate::foundation::location::Site;
use crate::foundation::value::{Class, Value};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// What went wrong, independent of the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// `null` or `undefined` where a value is required.
    MissingRequired,
    /// The value classified as the wrong [`Kind`].
    TypeMismatch,
    /// The value has the right kind but failed an enum, union or instance test.
    ValueMismatch,
}

/// A single failed check.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let err = number().required().check(&Value::from("1"), &Site::new("add", Location::param(0)))
///     .unwrap_err();
/// assert_eq!(err.code, "type_mismatch");
/// assert_eq!(err.param("actual"), Some("string"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Machine-readable code: `required`, `type_mismatch`, `not_instance`,
    /// `not_one_of` or `no_matching_type`.
    pub code: Cow<'static, str>,

    pub kind: ErrorKind,

    /// Human-readable message naming the location and the method.
    pub message: Cow<'static, str>,

    /// The method whose arguments were validated.
    pub method: String,

    /// Rendered location, e.g. `property c of 0th`.
    pub location: String,

    /// The positional parameter the failure is rooted at.
    pub position: usize,

    /// Ordered details such as `expected` and `actual`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error at `site` with a code and message.
    pub fn new(
        site: &Site<'_>,
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            kind,
            message: message.into(),
            method: site.method().to_owned(),
            location: site.location().to_string(),
            position: site.location().position(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON object.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// `null`/`undefined` given for a required parameter.
    pub fn required(site: &Site<'_>) -> Self {
        Self::new(
            site,
            ErrorKind::MissingRequired,
            "required",
            format!(
                "Required {} parameter was not specified in {}.",
                site.location(),
                site.method()
            ),
        )
    }

    /// The value classified as `actual` instead of `expected`.
    pub fn type_mismatch(site: &Site<'_>, expected: Kind, actual: Kind) -> Self {
        let wanted = match expected {
            Kind::Array => "an array",
            Kind::Object => "an object",
            other => other.as_str(),
        };
        Self::new(
            site,
            ErrorKind::TypeMismatch,
            "type_mismatch",
            format!(
                "Invalid {} parameter of type {actual} supplied to {}, expected {wanted}.",
                site.location(),
                site.method()
            ),
        )
        .with_param("expected", expected.as_str())
        .with_param("actual", actual.as_str())
    }

    /// The value is not an instance of `class`.
    pub fn not_instance(site: &Site<'_>, class: &Class) -> Self {
        Self::new(
            site,
            ErrorKind::ValueMismatch,
            "not_instance",
            format!(
                "Invalid {} parameter supplied to {}, expected instanceof {class}.",
                site.location(),
                site.method()
            ),
        )
        .with_param("expected", class.name().to_owned())
    }

    /// The value is none of the `allowed` values (already serialized).
    pub fn not_one_of(site: &Site<'_>, value: &Value, allowed: &str) -> Self {
        Self::new(
            site,
            ErrorKind::ValueMismatch,
            "not_one_of",
            format!(
                "Invalid {} parameter of value {value} supplied to {}, expected to be one of {allowed}.",
                site.location(),
                site.method()
            ),
        )
        .with_param("value", value.to_string())
        .with_param("allowed", allowed.to_owned())
    }

    /// No checker of a union accepted the value.
    pub fn no_matching_type(site: &Site<'_>, value: &Value, alternatives: usize) -> Self {
        Self::new(
            site,
            ErrorKind::ValueMismatch,
            "no_matching_type",
            format!(
                "Invalid {} parameter of value {value} supplied to {}, \
                 expected it to match one of {alternatives} types.",
                site.location(),
                site.method()
            ),
        )
        .with_param("value", value.to_string())
        .with_param("alternatives", alternatives.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The failures a logging validator reported for one call, in position order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// A checker list that cannot form a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A rest checker was followed by another checker.
    #[error("rest checker of {method} must be the last parameter, but found at position {position}")]
    RestNotLast { method: String, position: usize },
}

// ============================================================================
// TESTS
// ============================================================================

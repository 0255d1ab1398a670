//! Runtime values
//!
//! [`Value`] is the closed set of things a checked call can receive. It
//! mirrors a dynamically typed host: `undefined` and `null` are distinct,
//! numbers are `f64`, objects keep their insertion order, and symbols and
//! functions compare by identity.

use crate::foundation::kind::{Kind, classify};
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed argument value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A missing value; also what absent trailing arguments read as.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Array(Vec<Value>),
    Object(Object),
    Date(DateTime<Utc>),
    RegExp(Regex),
}

impl Value {
    /// Returns `true` for `null` and `undefined`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns `true` if this is a number holding NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// Classifies the value. See [`classify`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        classify(self)
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Strict equality.
    ///
    /// Primitives compare by value (`NaN` is not equal to itself, `0` equals
    /// `-0`), `null` and `undefined` are distinct, symbols and functions
    /// compare by identity, and containers compare structurally.
    #[must_use]
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            (Self::Object(a), Self::Object(b)) => a.strict_eq(b),
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::RegExp(a), Self::RegExp(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }

    /// Class-membership test.
    ///
    /// Arrays, dates, regexps and functions are instances of their built-in
    /// class and of `Object`; objects are instances of their class chain.
    /// Primitives are instances of nothing.
    #[must_use]
    pub fn is_instance_of(&self, class: &Class) -> bool {
        let own = match self {
            Self::Array(_) => Class::array(),
            Self::Date(_) => Class::date(),
            Self::RegExp(_) => Class::regexp(),
            Self::Function(_) => Class::function(),
            Self::Object(object) => object.class().cloned().unwrap_or_else(Class::object),
            _ => return false,
        };
        own.is_subclass_of(class)
    }

    /// Converts to JSON the way enum lists are serialized in messages.
    ///
    /// Values with no JSON form (`undefined`, non-finite numbers, symbols,
    /// functions) become `null`; regexps become an empty object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Undefined | Self::Null | Self::Symbol(_) | Self::Function(_) => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Number(n) => json_number(*n),
            Self::String(s) => Json::String(s.clone()),
            Self::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Self::Object(object) => Json::Object(
                object
                    .iter()
                    .map(|(k, v)| (k.to_owned(), v.to_json()))
                    .collect(),
            ),
            Self::Date(date) => Json::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::RegExp(_) => Json::Object(serde_json::Map::new()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => fmt_number(*n, f),
            Self::String(s) => f.write_str(s),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Function(function) => match function.name() {
                Some(name) => write!(f, "function {name}"),
                None => f.write_str("function anonymous"),
            },
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(object) => match object.class() {
                Some(class) => write!(f, "[object {}]", class.name()),
                None => f.write_str("[object Object]"),
            },
            Self::Date(date) => f.write_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::RegExp(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

fn json_number(n: f64) -> serde_json::Value {
    // Integral values serialize without a fraction, as in `[1,2]`.
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Regex> for Value {
    fn from(value: Regex) -> Self {
        Self::RegExp(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

// ============================================================================
// SYMBOL
// ============================================================================

/// A unique symbol. Clones are the same symbol; separately created symbols
/// never compare equal, even with the same description.
#[derive(Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(Some(description.into())))
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self(Arc::new(None))
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// FUNCTION
// ============================================================================

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value. Equality is identity of the underlying closure.
#[derive(Clone)]
pub struct Function {
    name: Option<Cow<'static, str>>,
    call: Arc<Callable>,
}

impl Function {
    pub fn new<F>(call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            call: Arc::new(call),
        }
    }

    pub fn named<F>(name: impl Into<Cow<'static, str>>, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            call: Arc::new(call),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}

// ============================================================================
// CLASS
// ============================================================================

#[derive(Debug)]
struct ClassNode {
    name: Cow<'static, str>,
    parent: Option<Class>,
}

static OBJECT: LazyLock<Class> = LazyLock::new(|| {
    Class(Arc::new(ClassNode {
        name: Cow::Borrowed("Object"),
        parent: None,
    }))
});
static ARRAY: LazyLock<Class> = LazyLock::new(|| Class::new("Array"));
static DATE: LazyLock<Class> = LazyLock::new(|| Class::new("Date"));
static REGEXP: LazyLock<Class> = LazyLock::new(|| Class::new("RegExp"));
static FUNCTION: LazyLock<Class> = LazyLock::new(|| Class::new("Function"));

/// A named class with an optional parent, used by instance checks.
///
/// Classes have identity: clones are the same class, while two classes
/// created separately are distinct even when their names match. The
/// built-in classes are process-wide singletons.
#[derive(Debug, Clone)]
pub struct Class(Arc<ClassNode>);

impl Class {
    /// Creates a class deriving directly from `Object`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self::extends(name, &Self::object())
    }

    /// Creates a subclass of `parent`.
    pub fn extends(name: impl Into<Cow<'static, str>>, parent: &Class) -> Self {
        Self(Arc::new(ClassNode {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    /// The root class every object-like value is an instance of.
    #[must_use]
    pub fn object() -> Self {
        OBJECT.clone()
    }

    #[must_use]
    pub fn array() -> Self {
        ARRAY.clone()
    }

    #[must_use]
    pub fn date() -> Self {
        DATE.clone()
    }

    #[must_use]
    pub fn regexp() -> Self {
        REGEXP.clone()
    }

    #[must_use]
    pub fn function() -> Self {
        FUNCTION.clone()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Returns `true` if `self` is `other` or inherits from it.
    #[must_use]
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// An insertion-ordered property map with an optional class.
#[derive(Debug, Clone, Default)]
pub struct Object {
    class: Option<Class>,
    properties: IndexMap<String, Value>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty instance of `class`.
    #[must_use]
    pub fn instance_of(class: &Class) -> Self {
        Self {
            class: Some(class.clone()),
            properties: IndexMap::new(),
        }
    }

    /// Adds a property, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    #[must_use]
    pub fn class(&self) -> Option<&Class> {
        self.class.as_ref()
    }

    /// Iterates own properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn strict_eq(&self, other: &Object) -> bool {
        self.class == other.class
            && self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.strict_eq(o)))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            class: None,
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! OBJECT_OF combinator - validates every property value of an object

use crate::foundation::{Checker, Kind, Site, ValidationError, Value};

/// Validates that a value is a plain object whose property values all pass
/// `property`.
///
/// Properties are visited in the object's insertion order; the first
/// failure short-circuits and names the key (`property key2 of 0th`).
/// Arrays, dates and regexps are not objects here.
#[derive(Debug, Clone, Copy)]
pub struct ObjectOf<V> {
    property: V,
}

impl<V> ObjectOf<V> {
    /// Creates a new `ObjectOf` combinator.
    pub fn new(property: V) -> Self {
        Self { property }
    }

    /// Returns a reference to the property checker.
    pub fn property(&self) -> &V {
        &self.property
    }
}

impl<V: Checker> Checker for ObjectOf<V> {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        let object = match value {
            Value::Object(object) => object,
            other => return Err(ValidationError::type_mismatch(site, Kind::Object, other.kind())),
        };

        for (key, item) in object.iter() {
            self.property.check(item, &site.property(key))?;
        }
        Ok(())
    }
}

/// Creates an `ObjectOf` combinator.
pub fn object_of<V: Checker>(property: V) -> ObjectOf<V> {
    ObjectOf::new(property)
}

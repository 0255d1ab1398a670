//! Class-membership validator

use crate::foundation::{Checker, Class, Site, ValidationError, Value};

/// Validates that a value is an instance of `class` or of a subclass.
///
/// See [`Value::is_instance_of`] for how built-in values map to classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceOf {
    class: Class,
}

impl InstanceOf {
    #[must_use]
    pub fn new(class: Class) -> Self {
        Self { class }
    }

    #[must_use]
    pub fn class(&self) -> &Class {
        &self.class
    }
}

impl Checker for InstanceOf {
    fn check_present(&self, value: &Value, site: &Site<'_>) -> Result<(), ValidationError> {
        if value.is_instance_of(&self.class) {
            Ok(())
        } else {
            Err(ValidationError::not_instance(site, &self.class))
        }
    }
}

#[must_use]
pub fn instance_of(class: Class) -> InstanceOf {
    InstanceOf::new(class)
}

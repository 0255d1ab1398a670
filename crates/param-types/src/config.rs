//! Validator configuration
//!
//! Whether validators check anything is decided once, when they are built,
//! from an explicit [`ValidatorConfig`]. Nothing here reads global state
//! unless the caller asks for it with [`BuildProfile::from_env`].

use crate::foundation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// BUILD PROFILE
// ============================================================================

/// Selects between checking validators and permanently no-op ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Validators check every call.
    Active,
    /// Validators are built empty and every call passes without work.
    Disabled,
}

impl BuildProfile {
    /// Environment variable consulted by [`BuildProfile::from_env`].
    pub const ENV_VAR: &'static str = "PARAM_TYPES_PROFILE";

    /// Reads [`ENV_VAR`](Self::ENV_VAR), falling back to the default profile
    /// when it is unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(raw) => raw.parse().unwrap_or_else(|error: ParseProfileError| {
                tracing::warn!(
                    target: "param_types",
                    var = Self::ENV_VAR,
                    %error,
                    "ignoring invalid build profile"
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl Default for BuildProfile {
    /// `Active` in debug builds, `Disabled` in optimized builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Active
        } else {
            Self::Disabled
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised build profile name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown build profile `{0}`, expected `active` or `disabled`")]
pub struct ParseProfileError(pub String);

impl FromStr for BuildProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            _ => Err(ParseProfileError(s.to_owned())),
        }
    }
}

// ============================================================================
// VALIDATOR CONFIG
// ============================================================================

/// Callback receiving each failure reported by a logging validator.
pub type FailureSink = Arc<dyn Fn(&ValidationError) + Send + Sync>;

/// Construction-time settings shared by both validator builders.
///
/// # Examples
///
/// ```rust,ignore
/// use param_types::prelude::*;
///
/// let config = ValidatorConfig::new()
///     .with_profile(BuildProfile::from_env())
///     .with_sink(|error| eprintln!("{error}"));
/// ```
#[derive(Clone, Default)]
pub struct ValidatorConfig {
    pub profile: BuildProfile,
    pub sink: Option<FailureSink>,
}

impl ValidatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that always checks, whatever the build.
    #[must_use]
    pub fn active() -> Self {
        Self::new().with_profile(BuildProfile::Active)
    }

    /// A configuration that never checks.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new().with_profile(BuildProfile::Disabled)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Installs a callback for failures reported by logging validators.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&ValidationError) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field("profile", &self.profile)
            .field("sink", &self.sink.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        assert_eq!("active".parse::<BuildProfile>(), Ok(BuildProfile::Active));
        assert_eq!(" Disabled ".parse::<BuildProfile>(), Ok(BuildProfile::Disabled));
        assert!("production".parse::<BuildProfile>().is_err());
    }

    #[test]
    fn test_default_follows_debug_assertions() {
        assert_eq!(BuildProfile::default().is_active(), cfg!(debug_assertions));
    }

    #[test]
    fn test_profile_deserializes_lowercase() {
        let profile: BuildProfile = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(profile, BuildProfile::Disabled);
        assert_eq!(serde_json::to_string(&BuildProfile::Active).unwrap(), "\"active\"");
    }

    #[test]
    fn test_config_builder() {
        let config = ValidatorConfig::disabled().with_sink(|_| {});
        assert_eq!(config.profile, BuildProfile::Disabled);
        assert!(config.sink.is_some());
        assert!(format!("{config:?}").contains("<callback>"));
    }
}

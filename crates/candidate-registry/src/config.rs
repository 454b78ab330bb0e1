//! Parser configuration read from the environment.
//!
//! The only tunable today is the compound-variant nesting limit, which can be
//! overridden with `CANDIDATE_PARSER_MAX_VARIANT_DEPTH`.

use std::env;

use candidate_parser::DEFAULT_MAX_VARIANT_DEPTH;

use crate::error::RegistryError;

/// Environment variable overriding [`ParserConfig::max_variant_depth`].
pub const MAX_VARIANT_DEPTH_ENV: &str = "CANDIDATE_PARSER_MAX_VARIANT_DEPTH";

/// Limits applied while parsing candidates against a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest compound-variant nesting accepted, e.g. `group-has-not-hover`
    /// nests three levels.
    pub max_variant_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_variant_depth: DEFAULT_MAX_VARIANT_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if an environment variable
    /// contains an invalid value.
    pub fn from_env() -> Result<Self, RegistryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if a looked-up value is
    /// invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RegistryError> {
        let max_variant_depth = match lookup(MAX_VARIANT_DEPTH_ENV) {
            Some(val) => parse_depth(&val)?,
            None => DEFAULT_MAX_VARIANT_DEPTH,
        };
        Ok(Self { max_variant_depth })
    }

    /// Create a new configuration with the specified nesting limit.
    #[must_use]
    pub fn with_max_variant_depth(mut self, depth: usize) -> Self {
        self.max_variant_depth = depth;
        self
    }
}

fn parse_depth(val: &str) -> Result<usize, RegistryError> {
    match val.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(RegistryError::InvalidConfig(format!(
            "invalid variant depth '{val}', expected a positive integer"
        ))),
    }
}

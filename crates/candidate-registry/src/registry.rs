//! In-memory utility and variant registry.

use candidate_parser::{Candidate, DesignSystem, UtilityKind, VariantKind, parse_candidate};
use hashbrown::{HashMap, HashSet};

use crate::config::ParserConfig;
use crate::error::RegistryError;
use crate::snapshot::{RegistrySnapshot, VariantSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VariantEntry {
    kind: VariantKind,
    compounds: bool,
}

/// Registry of utility and variant roots implementing [`DesignSystem`].
///
/// The registry is immutable once built and can be shared across threads.
/// [`Registry::new`] and [`Registry::from_snapshot`] start from
/// [`ParserConfig::default`]; use [`Registry::from_env`] or
/// [`Registry::with_config`] to apply `CANDIDATE_PARSER_MAX_VARIANT_DEPTH`.
///
/// # Examples
/// ```
/// use candidate_registry::Registry;
///
/// let registry = Registry::new()
///     .with_functional_utility("bg")
///     .with_static_variant("hover", true);
/// assert!(registry.parse_candidate("hover:bg-red-500").is_some());
/// assert!(registry.parse_candidate("focus:bg-red-500").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    static_utilities: HashSet<String>,
    functional_utilities: HashSet<String>,
    variants: HashMap<String, VariantEntry>,
    config: ParserConfig,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if
    /// `CANDIDATE_PARSER_MAX_VARIANT_DEPTH` is set to an invalid value.
    pub fn from_env() -> Result<Self, RegistryError> {
        Ok(Self::new().with_config(ParserConfig::from_env()?))
    }

    /// Build a registry from a deserialised snapshot.
    ///
    /// A `maxVariantDepth` in the snapshot overrides the default limit; the
    /// environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyName`] for blank names,
    /// [`RegistryError::ConflictingVariant`] when a variant is declared twice
    /// with different definitions and [`RegistryError::InvalidConfig`] for a
    /// zero nesting limit.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for name in snapshot.utilities.static_names {
            ensure_named(&name, "static utility")?;
            registry.static_utilities.insert(name);
        }
        for name in snapshot.utilities.functional {
            ensure_named(&name, "functional utility")?;
            registry.functional_utilities.insert(name);
        }
        for variant in snapshot.variants {
            ensure_named(&variant.name, "variant")?;
            registry.insert_variant(variant.name, variant.kind, variant.compounds)?;
        }
        if let Some(depth) = snapshot.max_variant_depth {
            if depth == 0 {
                return Err(RegistryError::InvalidConfig(
                    "maxVariantDepth must be a positive integer".to_string(),
                ));
            }
            registry.config = registry.config.with_max_variant_depth(depth);
        }

        log::debug!(
            "loaded registry snapshot with {} static utilities, {} functional utilities and {} variants",
            registry.static_utilities.len(),
            registry.functional_utilities.len(),
            registry.variants.len()
        );
        Ok(registry)
    }

    /// Build a registry from snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] when the text is not a valid snapshot,
    /// and any error of [`Registry::from_snapshot`].
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let snapshot: RegistrySnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Export the registry contents as a snapshot with sorted tables.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut snapshot = RegistrySnapshot::default();
        snapshot.utilities.static_names = sorted(self.static_utilities.iter().cloned());
        snapshot.utilities.functional = sorted(self.functional_utilities.iter().cloned());
        let mut variants: Vec<_> = self
            .variants
            .iter()
            .map(|(name, entry)| VariantSnapshot {
                name: name.clone(),
                kind: entry.kind,
                compounds: entry.compounds,
            })
            .collect();
        variants.sort_by(|a, b| a.name.cmp(&b.name));
        snapshot.variants = variants;
        snapshot.max_variant_depth = Some(self.config.max_variant_depth);
        snapshot
    }

    /// Apply a parser configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// The active parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Register a utility used without a value, e.g. `underline`.
    #[must_use]
    pub fn with_static_utility(mut self, name: impl Into<String>) -> Self {
        self.static_utilities.insert(name.into());
        self
    }

    /// Register a utility taking a value, e.g. `bg`.
    #[must_use]
    pub fn with_functional_utility(mut self, name: impl Into<String>) -> Self {
        self.functional_utilities.insert(name.into());
        self
    }

    /// Register a variant without arguments, replacing any earlier definition.
    #[must_use]
    pub fn with_static_variant(self, name: impl Into<String>, compounds: bool) -> Self {
        self.with_variant(name, VariantKind::Static, compounds)
    }

    /// Register a variant taking a value, replacing any earlier definition.
    #[must_use]
    pub fn with_functional_variant(self, name: impl Into<String>, compounds: bool) -> Self {
        self.with_variant(name, VariantKind::Functional, compounds)
    }

    /// Register a variant wrapping another variant, replacing any earlier
    /// definition.
    #[must_use]
    pub fn with_compound_variant(self, name: impl Into<String>, compounds: bool) -> Self {
        self.with_variant(name, VariantKind::Compound, compounds)
    }

    fn with_variant(mut self, name: impl Into<String>, kind: VariantKind, compounds: bool) -> Self {
        self.variants
            .insert(name.into(), VariantEntry { kind, compounds });
        self
    }

    fn insert_variant(
        &mut self,
        name: String,
        kind: VariantKind,
        compounds: bool,
    ) -> Result<(), RegistryError> {
        let entry = VariantEntry { kind, compounds };
        match self.variants.get(&name) {
            Some(existing) if *existing == entry => {
                log::warn!("ignoring duplicate declaration of variant `{name}`");
                Ok(())
            }
            Some(_) => Err(RegistryError::ConflictingVariant(name)),
            None => {
                self.variants.insert(name, entry);
                Ok(())
            }
        }
    }

    /// Parse a candidate token against this registry.
    #[must_use]
    pub fn parse_candidate(&self, input: &str) -> Option<Candidate> {
        parse_candidate(self, input)
    }

    /// Number of registered utility roots across both kinds.
    #[must_use]
    pub fn utility_count(&self) -> usize {
        self.static_utilities.len() + self.functional_utilities.len()
    }

    /// Number of registered variant roots.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

impl DesignSystem for Registry {
    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        match kind {
            UtilityKind::Static => self.static_utilities.contains(name),
            UtilityKind::Functional => self.functional_utilities.contains(name),
        }
    }

    fn has_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        self.variants.get(name).map(|entry| entry.kind)
    }

    fn variant_compounds(&self, name: &str) -> bool {
        self.variants.get(name).is_some_and(|entry| entry.compounds)
    }

    fn max_variant_depth(&self) -> usize {
        self.config.max_variant_depth
    }
}

fn ensure_named(name: &str, what: &'static str) -> Result<(), RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::EmptyName { what });
    }
    Ok(())
}

fn sorted(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<_> = names.collect();
    names.sort();
    names
}

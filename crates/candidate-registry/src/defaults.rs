//! Stock variant catalogue of the styling language.

use candidate_parser::VariantKind;

use crate::registry::Registry;

/// Pseudo-class variants; they only add a selector to the rule and can be
/// wrapped by `group-*`, `peer-*`, `has-*` and friends.
const PSEUDO_CLASSES: &[&str] = &[
    "force",
    "first",
    "last",
    "only",
    "odd",
    "even",
    "first-of-type",
    "last-of-type",
    "only-of-type",
    "visited",
    "target",
    "open",
    "default",
    "checked",
    "indeterminate",
    "placeholder-shown",
    "autofill",
    "optional",
    "required",
    "valid",
    "invalid",
    "in-range",
    "out-of-range",
    "read-only",
    "empty",
    "focus-within",
    "hover",
    "focus",
    "focus-visible",
    "active",
    "enabled",
    "disabled",
];

/// Pseudo-elements, direction selectors and at-rule variants, none of which
/// can be nested inside a compound variant.
const NON_COMPOUNDING: &[&str] = &[
    "*",
    "first-letter",
    "first-line",
    "marker",
    "selection",
    "file",
    "placeholder",
    "backdrop",
    "before",
    "after",
    "ltr",
    "rtl",
    "motion-safe",
    "motion-reduce",
    "dark",
    "starting",
    "print",
    "portrait",
    "landscape",
    "contrast-more",
    "contrast-less",
    "forced-colors",
    "sm",
    "md",
    "lg",
    "xl",
    "2xl",
];

const FUNCTIONAL: &[(&str, bool)] = &[
    ("aria", true),
    ("data", true),
    ("nth", true),
    ("nth-last", true),
    ("nth-of-type", true),
    ("nth-last-of-type", true),
    ("supports", false),
    ("min", false),
    ("max", false),
    ("@", false),
    ("@min", false),
    ("@max", false),
];

const COMPOUND: &[&str] = &["group", "peer", "has", "not", "in"];

impl Registry {
    /// Register the stock variants: pseudo-classes, pseudo-elements, media
    /// and breakpoint variants, `aria-*`/`data-*`/`supports-*`/`nth-*`,
    /// `min-*`/`max-*`, container queries (`@`, `@min`, `@max`) and the
    /// compound `group`, `peer`, `has`, `not` and `in`.
    ///
    /// Earlier registrations with the same names are replaced.
    ///
    /// # Examples
    /// ```
    /// use candidate_registry::Registry;
    ///
    /// let registry = Registry::new()
    ///     .with_default_variants()
    ///     .with_static_utility("flex");
    /// assert!(registry.parse_candidate("group-has-[:checked]/name:flex").is_some());
    /// assert!(registry.parse_candidate("group-dark:flex").is_none());
    /// ```
    #[must_use]
    pub fn with_default_variants(self) -> Self {
        let registry = PSEUDO_CLASSES
            .iter()
            .fold(self, |registry, name| registry.with_static_variant(*name, true));
        let registry = NON_COMPOUNDING
            .iter()
            .fold(registry, |registry, name| registry.with_static_variant(*name, false));
        let registry = FUNCTIONAL
            .iter()
            .fold(registry, |registry, (name, compounds)| {
                registry.with_functional_variant(*name, *compounds)
            });
        COMPOUND
            .iter()
            .fold(registry, |registry, name| registry.with_compound_variant(*name, true))
    }
}

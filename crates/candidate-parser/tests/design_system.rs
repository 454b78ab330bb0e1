//! Behaviour of the parsers against caller-supplied design systems.

use std::collections::HashMap;

use candidate_parser::{
    Candidate, DesignSystem, UtilityKind, UtilityValue, Variant, VariantKind, parse_candidate,
    parse_variant, parse_variant_at_depth,
};

#[derive(Default)]
struct MapDesign {
    utilities: HashMap<&'static str, UtilityKind>,
    variants: HashMap<&'static str, (VariantKind, bool)>,
}

impl MapDesign {
    fn sample() -> Self {
        let mut design = Self::default();
        design.utilities.insert("flex", UtilityKind::Static);
        design.utilities.insert("bg", UtilityKind::Functional);
        design.utilities.insert("border-color", UtilityKind::Functional);
        design.variants.insert("hover", (VariantKind::Static, true));
        design.variants.insert("print", (VariantKind::Static, false));
        design.variants.insert("group", (VariantKind::Compound, true));
        design
    }
}

impl DesignSystem for MapDesign {
    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        self.utilities.get(name) == Some(&kind)
    }

    fn has_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        self.variants.get(name).map(|(kind, _)| *kind)
    }

    fn variant_compounds(&self, name: &str) -> bool {
        self.variants.get(name).is_some_and(|(_, compounds)| *compounds)
    }
}

/// Extends variant parsing with a `hocus` alias resolved outside the registry.
struct AliasDesign(MapDesign);

impl DesignSystem for AliasDesign {
    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        self.0.has_utility(name, kind)
    }

    fn has_variant(&self, name: &str) -> bool {
        self.0.has_variant(name)
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        self.0.variant_kind(name)
    }

    fn variant_compounds(&self, name: &str) -> bool {
        self.0.variant_compounds(name)
    }

    fn parse_nested_variant(&self, token: &str, depth: usize) -> Option<Variant> {
        if token == "hocus" {
            return Some(Variant::Arbitrary {
                selector: "&:is(:hover, :focus)".into(),
                compounds: true,
            });
        }
        parse_variant_at_depth(self, token, depth)
    }
}

#[test]
fn multi_word_roots_are_matched_greedily() {
    let design = MapDesign::sample();
    let Some(Candidate::Functional { root, value, .. }) =
        parse_candidate(&design, "border-color-red-500")
    else {
        panic!("candidate should parse");
    };
    assert_eq!(root, "border-color");
    assert_eq!(
        value,
        Some(UtilityValue::Named {
            value: "red-500".into(),
            fraction: None,
        })
    );
}

#[test]
fn candidate_parser_delegates_to_overridden_variant_parser() {
    let design = AliasDesign(MapDesign::sample());
    let Some(candidate) = parse_candidate(&design, "hocus:hover:flex") else {
        panic!("candidate should parse");
    };
    assert_eq!(candidate.variants().len(), 2);
    assert!(matches!(
        candidate.variants().last(),
        Some(Variant::Arbitrary { .. })
    ));
    assert!(parse_candidate(&MapDesign::sample(), "hocus:flex").is_none());
}

#[test]
fn overridden_variant_parser_applies_inside_compound_variants() {
    let design = AliasDesign(MapDesign::sample());
    let Some(candidate) = parse_candidate(&design, "group-hocus:flex") else {
        panic!("compound variant should wrap the alias");
    };
    assert_eq!(
        candidate.variants(),
        [Variant::Compound {
            root: "group".into(),
            modifier: None,
            variant: Box::new(Variant::Arbitrary {
                selector: "&:is(:hover, :focus)".into(),
                compounds: true,
            }),
            compounds: true,
        }]
    );
    assert!(parse_candidate(&MapDesign::sample(), "group-hocus:flex").is_none());
}

#[test]
fn fallback_parser_keeps_the_depth_limit() {
    let design = AliasDesign(MapDesign::sample());
    let limit = design.max_variant_depth();
    assert!(parse_variant(&design, "group-group-hocus").is_some());
    assert!(design.parse_nested_variant("group-hover", limit - 1).is_some());
    assert!(design.parse_nested_variant("group-hover", limit).is_none());
}

#[test]
fn works_through_trait_objects() {
    let design: Box<dyn DesignSystem> = Box::new(MapDesign::sample());
    assert!(parse_candidate(design.as_ref(), "group-hover:bg-red").is_some());
    assert!(parse_variant(design.as_ref(), "group-print").is_none());
}

#[test]
fn parses_concurrently_against_a_shared_registry() {
    let design = MapDesign::sample();
    let inputs = ["flex", "hover:bg-red", "group-hover:flex!", "bg-[#fff]/50"];
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&input| {
                let design = &design;
                scope.spawn(move || parse_candidate(design, input))
            })
            .collect();
        for handle in handles {
            let parsed = handle
                .join()
                .unwrap_or_else(|_| panic!("parser thread panicked"));
            assert!(parsed.is_some());
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn serialises_with_kind_tags() {
    let design = MapDesign::sample();
    let Some(candidate) = parse_candidate(&design, "hover:bg-[--brand]/50") else {
        panic!("candidate should parse");
    };
    let json = serde_json::to_value(&candidate)
        .unwrap_or_else(|err| panic!("candidate should serialise: {err}"));
    assert_eq!(json["kind"], "functional");
    assert_eq!(json["value"]["kind"], "arbitrary");
    assert_eq!(json["value"]["dashedIdent"], "--brand");
    assert_eq!(json["value"]["dataType"], serde_json::Value::Null);
    assert_eq!(json["variants"][0]["kind"], "static");
    assert_eq!(json["modifier"]["value"], "50");
}

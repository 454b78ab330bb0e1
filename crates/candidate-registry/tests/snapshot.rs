//! Loading registries from JSON snapshots.

use candidate_parser::{Candidate, DesignSystem, UtilityKind};
use candidate_registry::{Registry, RegistryError};
use rstest::rstest;

const SNAPSHOT: &str = r#"{
    "utilities": {
        "static": ["flex", "underline"],
        "functional": ["bg", "text"]
    },
    "variants": [
        { "name": "hover", "kind": "static" },
        { "name": "before", "kind": "static", "compounds": false },
        { "name": "aria", "kind": "functional" },
        { "name": "group", "kind": "compound" }
    ],
    "maxVariantDepth": 4
}"#;

fn load(json: &str) -> Registry {
    Registry::from_json(json).unwrap_or_else(|err| panic!("snapshot should load: {err}"))
}

#[test]
fn loads_tables_and_depth() {
    let registry = load(SNAPSHOT);
    assert_eq!(registry.utility_count(), 4);
    assert_eq!(registry.variant_count(), 4);
    assert_eq!(registry.config().max_variant_depth, 4);
    assert!(registry.has_utility("bg", UtilityKind::Functional));
    assert!(!registry.has_utility("bg", UtilityKind::Static));
    assert!(!registry.variant_compounds("before"));
}

#[test]
fn loaded_registry_parses_candidates() {
    let registry = load(SNAPSHOT);
    let candidate = registry
        .parse_candidate("group-hover:aria-busy:underline!")
        .unwrap_or_else(|| panic!("candidate should parse"));
    assert!(matches!(candidate, Candidate::Static { .. }));
    assert!(candidate.is_important());
    assert_eq!(candidate.variants().len(), 2);
    assert_eq!(registry.parse_candidate("group-before:flex"), None);
}

#[test]
fn exported_snapshot_round_trips_through_json() {
    let registry = load(SNAPSHOT);
    let json = serde_json::to_string(&registry.snapshot())
        .unwrap_or_else(|err| panic!("snapshot should serialise: {err}"));
    assert!(json.contains(r#""maxVariantDepth":4"#));
    assert_eq!(load(&json).snapshot(), registry.snapshot());
}

#[rstest]
#[case::not_json("utilities:")]
#[case::wrong_shape(r#"{"utilities":{"static":"flex"}}"#)]
#[case::unknown_field(r#"{"variant":[]}"#)]
#[case::unknown_kind(r#"{"variants":[{"name":"hover","kind":"dynamic"}]}"#)]
fn rejects_malformed_json(#[case] json: &str) {
    assert!(matches!(
        Registry::from_json(json),
        Err(RegistryError::Json(_))
    ));
}

#[rstest]
#[case::blank_utility(r#"{"utilities":{"functional":[""]}}"#)]
#[case::blank_variant(r#"{"variants":[{"name":" ","kind":"static"}]}"#)]
fn rejects_blank_names(#[case] json: &str) {
    assert!(matches!(
        Registry::from_json(json),
        Err(RegistryError::EmptyName { .. })
    ));
}

#[test]
fn rejects_conflicting_variants() {
    let json = r#"{"variants":[
        {"name":"hover","kind":"static"},
        {"name":"hover","kind":"static","compounds":false}
    ]}"#;
    let Err(err) = Registry::from_json(json) else {
        panic!("conflicting variants should be rejected");
    };
    assert_eq!(
        err.to_string(),
        "variant `hover` declared with conflicting definitions"
    );
}

#[test]
fn rejects_zero_depth() {
    assert!(matches!(
        Registry::from_json(r#"{"maxVariantDepth":0}"#),
        Err(RegistryError::InvalidConfig(_))
    ));
}

//! Effective property set tests.

use polynav::hir::naming::{attribute_matches_property, camel_to_dash, dash_to_camel};
use polynav::hir::{
    BehaviorDecl, DocumentKind, ElementDecl, FeatureGraph, PropertyDecl, SourceRange,
};
use rstest::rstest;

use crate::helpers::graph_helpers::*;

// =============================================================================
// FIXTURE WORKSPACE
// =============================================================================

#[test]
fn test_effective_properties_walk_behaviors_depth_first() {
    let graph = navigation_graph();
    let names: Vec<_> = graph
        .effective_properties_of_element("behavior-test-elem")
        .keys()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(
        names,
        [
            "localProperty",
            "nonNotifyingProperty",
            "_privateProperty",
            "inheritedProperty",
            "deeplyInheritedProperty",
        ]
    );
}

#[test]
fn test_own_property_shadows_inherited_one() {
    let graph = navigation_graph();
    let props = graph.effective_properties_of_element("behavior-test-elem");
    let property = graph.feature(props["nonNotifyingProperty"]);
    assert_eq!(property.detail.as_deref(), Some("String"));

    let owner = graph.feature(property.owner.unwrap());
    assert_eq!(owner.name, "behavior-test-elem");
}

#[test]
fn test_property_for_attribute() {
    let graph = navigation_graph();
    let id = graph
        .property_for_attribute("behavior-test-elem", "DEEPLY-inherited-property")
        .unwrap();
    assert_eq!(graph.feature(id).name, "deeplyInheritedProperty");
    assert!(graph.property_for_attribute("behavior-test-elem", "id").is_none());
    assert!(graph.property_for_attribute("no-such-elem", "local-property").is_none());
}

// =============================================================================
// SHADOWING BETWEEN SIBLING BEHAVIORS
// =============================================================================

/// `<x-el>` mixes in `[B1, B2]`, both declaring `p` with different types.
fn siblings() -> FeatureGraph {
    let text = "x".repeat(100);
    let mut builder = FeatureGraph::builder();
    let file = builder
        .add_document("siblings.js", DocumentKind::Script, &text)
        .unwrap();
    let r = SourceRange::from_offsets;
    builder
        .add_element(ElementDecl::new("x-el", r(file, 0, 10)).mixes_in(["B1", "B2", "Missing"]))
        .add_behavior(
            BehaviorDecl::new("B2", r(file, 10, 30))
                .property(PropertyDecl::new("p", r(file, 12, 14)).with_type("Number")),
        )
        .add_behavior(
            BehaviorDecl::new("B1", r(file, 40, 60))
                .property(PropertyDecl::new("p", r(file, 42, 44)).with_type("String")),
        );
    builder.build().unwrap()
}

#[test]
fn test_first_behavior_in_mixin_order_wins() {
    let graph = siblings();
    let props = graph.effective_properties_of_element("x-el");
    assert_eq!(props.len(), 1);
    let p = graph.feature(props["p"]);
    assert_eq!(p.detail.as_deref(), Some("String"));
    assert_eq!(graph.feature(p.owner.unwrap()).name, "B1");
}

#[test]
fn test_effective_properties_are_recomputed_identically() {
    let graph = siblings();
    let first = graph.effective_properties_of_element("x-el");
    for _ in 0..5 {
        assert_eq!(graph.effective_properties_of_element("x-el"), first);
    }
}

// =============================================================================
// NAMING
// =============================================================================

#[rstest]
#[case("localProperty", "local-property")]
#[case("deeplyInheritedProperty", "deeply-inherited-property")]
#[case("_privateProperty", "_private-property")]
#[case("URLValue", "-u-r-l-value")]
#[case("plain", "plain")]
fn test_camel_dash_round_trip(#[case] camel: &str, #[case] dash: &str) {
    assert_eq!(camel_to_dash(camel), dash);
    assert_eq!(dash_to_camel(dash), camel);
}

#[rstest]
#[case("local-property", "localProperty", true)]
#[case("Local-Property", "localProperty", true)]
#[case("local-property$", "localProperty", true)]
#[case("localproperty", "localProperty", false)]
#[case("local-property-x", "localProperty", false)]
fn test_attribute_matching(#[case] attribute: &str, #[case] property: &str, #[case] matches: bool) {
    assert_eq!(attribute_matches_property(attribute, property), matches);
}

//! Context classification tests for the IDE layer.

use polynav::base::Position;
use polynav::ide::Context;
use rstest::rstest;

use crate::helpers::graph_helpers::*;
use crate::helpers::source_fixtures::*;

fn classify(path: &str, position: Position) -> Context {
    NAVIGATION.analysis().classify(path, position).unwrap()
}

#[rstest]
#[case::tag_name(INDEX_PATH, position_of(INDEX, "<behavior-test-elem id", 1), "behavior-test-elem")]
#[case::tag_name_end(REFERENCES_PATH, position_of(REFERENCES, "<anonymous-class two", 16), "anonymous-class")]
fn test_classify_tag(#[case] path: &str, #[case] position: Position, #[case] element: &str) {
    match classify(path, position) {
        Context::TagReference { element: found, .. } => assert_eq!(found, element),
        other => panic!("expected a tag reference, got {:?}", other),
    }
}

#[test]
fn test_closing_tag_is_not_classified() {
    let context = classify(REFERENCES_PATH, position_of(REFERENCES, "</anonymous-class>", 3));
    assert!(context.is_none());
}

#[rstest]
#[case::local("local-property", "localProperty")]
#[case::binding_form("deeply-inherited-property$", "deeplyInheritedProperty")]
fn test_classify_attribute(#[case] attribute: &str, #[case] property: &str) {
    match classify(INDEX_PATH, position_of(INDEX, attribute, 1)) {
        Context::AttributeReference {
            element,
            property: found,
            ..
        } => {
            assert_eq!(element, "behavior-test-elem");
            assert_eq!(found, property);
        }
        other => panic!("expected an attribute reference, got {:?}", other),
    }
}

#[test]
fn test_classify_plain_attribute_is_none() {
    assert!(classify(INDEX_PATH, position_of(INDEX, "id=", 0)).is_none());
}

#[rstest]
#[case::public("{{foo", "foo")]
#[case::internal("[[_internal", "_internal")]
#[case::negated_unknown("{{!unknownProp", "unknownProp")]
fn test_classify_databinding(#[case] token: &str, #[case] property: &str) {
    match classify(DATABINDING_PATH, position_of(DATABINDING, token, 3)) {
        Context::DatabindingReference {
            element,
            property: found,
            ..
        } => {
            assert_eq!(element, "element-with-databinding");
            assert_eq!(found, property);
        }
        other => panic!("expected a databinding reference, got {:?}", other),
    }
}

#[test]
fn test_classify_registration_site() {
    let context = classify(SIMPLE_ELEMENT_PATH, position_of(SIMPLE_ELEMENT, "define(", 2));
    assert!(matches!(
        context,
        Context::RegistrationSite { ref element, .. } if element == "simple-element"
    ));
}

#[test]
fn test_classify_range_is_the_token() {
    let analysis = NAVIGATION.analysis();
    let context = classify(INDEX_PATH, position_of(INDEX, "local-property", 6));
    let range = context.range().unwrap();
    let location = analysis.location(&range).unwrap();
    assert_eq!(text_at(&NAVIGATION, &location), "local-property");
}

#[test]
fn test_classify_past_end_of_line_is_out_of_range() {
    let err = NAVIGATION
        .analysis()
        .classify(INDEX_PATH, Position::new(0, 200))
        .unwrap_err();
    assert!(err.is_out_of_range());
}

//! Graph test helpers: locating fixture text and building snapshots.

use once_cell::sync::Lazy;
use polynav::base::{FileId, Position};
use polynav::hir::{
    BehaviorDecl, DocumentKind, ElementDecl, FeatureGraph, FeatureGraphBuilder, OccurrenceDecl,
    PropertyDecl, SourceRange,
};
use polynav::ide::{AnalysisHost, Location};

use super::source_fixtures::*;

// =============================================================================
// LOCATING TEXT
// =============================================================================

fn find(text: &str, needle: &str, from: usize) -> usize {
    text[from..]
        .find(needle)
        .map(|i| i + from)
        .unwrap_or_else(|| panic!("'{}' not found in fixture", needle))
}

fn char_offset(text: &str, byte: usize) -> u32 {
    text[..byte].chars().count() as u32
}

/// The first occurrence of `needle`.
pub fn range_of(file: FileId, text: &str, needle: &str) -> SourceRange {
    range_within(file, text, needle, needle)
}

/// The first `needle` at or after the first `context`.
pub fn range_within(file: FileId, text: &str, context: &str, needle: &str) -> SourceRange {
    let start = find(text, needle, find(text, context, 0));
    SourceRange::from_offsets(
        file,
        char_offset(text, start),
        char_offset(text, start + needle.len()),
    )
}

/// From the first `start` through the end of the next `end`.
pub fn range_between(file: FileId, text: &str, start: &str, end: &str) -> SourceRange {
    let from = find(text, start, 0);
    let to = find(text, end, from) + end.len();
    SourceRange::from_offsets(file, char_offset(text, from), char_offset(text, to))
}

/// Cursor `delta` characters into the first occurrence of `needle`.
pub fn position_of(text: &str, needle: &str, delta: usize) -> Position {
    let prefix = &text[..find(text, needle, 0)];
    let line = prefix.matches('\n').count();
    let column = prefix.rsplit('\n').next().unwrap_or("").chars().count();
    Position::new(line, column + delta)
}

/// The fixture text a location covers.
pub fn text_at(host: &AnalysisHost, location: &Location) -> String {
    let analysis = host.analysis();
    let document = analysis
        .graph()
        .document_by_path(&location.path)
        .expect("location points into the snapshot");
    let start = document.line_index.to_offset(location.span.start).unwrap();
    let end = document.line_index.to_offset(location.span.end).unwrap();
    document
        .text
        .chars()
        .skip(u32::from(start) as usize)
        .take(u32::from(end - start) as usize)
        .collect()
}

// =============================================================================
// SNAPSHOTS
// =============================================================================

fn add(builder: &mut FeatureGraphBuilder, path: &str, text: &str) -> FileId {
    builder
        .add_document(path, DocumentKind::from_path(path), text)
        .unwrap()
}

fn tag(
    builder: &mut FeatureGraphBuilder,
    file: FileId,
    text: &str,
    open: &str,
    close: &str,
    name: &str,
) {
    builder.add_occurrence(OccurrenceDecl::tag(
        name,
        range_within(file, text, open, name),
        range_between(file, text, open, close),
    ));
}

/// Elements, behaviors across documents, a databinding template and an
/// anonymous class registration.
pub fn navigation_graph() -> FeatureGraph {
    let mut builder = FeatureGraph::builder().version(1);
    let index = add(&mut builder, INDEX_PATH, INDEX);
    let elem = add(&mut builder, BEHAVIOR_TEST_ELEM_PATH, BEHAVIOR_TEST_ELEM);
    let behavior = add(&mut builder, SIMPLE_BEHAVIOR_PATH, SIMPLE_BEHAVIOR);
    let refs = add(&mut builder, REFERENCES_PATH, REFERENCES);
    let simple = add(&mut builder, SIMPLE_ELEMENT_PATH, SIMPLE_ELEMENT);
    let binding = add(&mut builder, DATABINDING_PATH, DATABINDING);

    // behavior-test-elem
    let t = BEHAVIOR_TEST_ELEM;
    builder.add_element(
        ElementDecl::new("behavior-test-elem", range_between(elem, t, "Polymer({", "\n  })"))
            .mixes_in(["MyNamespace.SimpleBehavior"])
            .property(
                PropertyDecl::new("localProperty", range_between(elem, t, "localProperty: {", "}"))
                    .with_type("Boolean"),
            )
            .property(
                PropertyDecl::new(
                    "nonNotifyingProperty",
                    range_between(elem, t, "nonNotifyingProperty: {", "}"),
                )
                .with_type("String"),
            )
            .property(
                PropertyDecl::new(
                    "_privateProperty",
                    range_between(elem, t, "_privateProperty: {", "}"),
                )
                .with_type("String"),
            ),
    );
    builder
        .add_occurrence(OccurrenceDecl::databinding(
            "behavior-test-elem",
            "localProperty",
            range_within(elem, t, "[[localProperty", "localProperty"),
        ))
        .add_occurrence(OccurrenceDecl::databinding(
            "behavior-test-elem",
            "inheritedProperty",
            range_within(elem, t, "[[inheritedProperty", "inheritedProperty"),
        ));

    // behaviors
    let t = SIMPLE_BEHAVIOR;
    builder
        .add_behavior(
            BehaviorDecl::new(
                "MyNamespace.DeepBehavior",
                range_between(behavior, t, "MyNamespace.DeepBehavior = {", "\n  };"),
            )
            .property(
                PropertyDecl::new(
                    "deeplyInheritedProperty",
                    range_between(behavior, t, "deeplyInheritedProperty: {", "notify: true\n      }"),
                )
                .with_type("Array"),
            ),
        )
        .add_behavior(
            BehaviorDecl::new(
                "MyNamespace.SimpleBehavior",
                range_between(behavior, t, "MyNamespace.SimpleBehavior = [", "}]"),
            )
            .mixes_in(["MyNamespace.DeepBehavior"])
            .property(
                PropertyDecl::new(
                    "inheritedProperty",
                    range_between(behavior, t, "inheritedProperty: {", "}"),
                )
                .with_type("String"),
            )
            .property(
                PropertyDecl::new(
                    "nonNotifyingProperty",
                    range_between(behavior, t, "nonNotifyingProperty: {", "}"),
                )
                .with_type("Number"),
            ),
        );

    // index.html usages
    let t = INDEX;
    tag(&mut builder, index, t, "<behavior-test-elem", "</behavior-test-elem>", "behavior-test-elem");
    for attribute in ["id", "local-property", "deeply-inherited-property$"] {
        builder.add_occurrence(OccurrenceDecl::attribute(
            "behavior-test-elem",
            attribute,
            range_within(index, t, "<behavior-test-elem", attribute),
        ));
    }

    // anonymous-class and simple-element
    let t = REFERENCES;
    builder.add_element(ElementDecl::new(
        "anonymous-class",
        range_of(refs, t, "class extends HTMLElement{}"),
    ));
    tag(&mut builder, refs, t, "<anonymous-class one>", "</anonymous-class>", "anonymous-class");
    tag(&mut builder, refs, t, "<anonymous-class two>", "</anonymous-class>", "anonymous-class");
    tag(&mut builder, refs, t, "<simple-element one>", "</simple-element>", "simple-element");
    tag(&mut builder, refs, t, "<simple-element two>", "</simple-element>", "simple-element");

    let t = SIMPLE_ELEMENT;
    builder.add_element(
        ElementDecl::new(
            "simple-element",
            range_between(simple, t, "class SimpleElement", "\n    }"),
        )
        .class_name("SimpleElement")
        .registered_at(range_of(
            simple,
            t,
            "customElements.define(SimpleElement.is, SimpleElement)",
        )),
    );

    // element-with-databinding
    let t = DATABINDING;
    builder.add_element(
        ElementDecl::new(
            "element-with-databinding",
            range_between(binding, t, "Polymer({", "\n    })"),
        )
        .property(PropertyDecl::new("foo", range_of(binding, t, "foo: String")).with_type("String"))
        .property(
            PropertyDecl::new("_internal", range_of(binding, t, "_internal: String"))
                .with_type("String"),
        ),
    );
    for (token, expression) in [
        ("{{foo", "foo"),
        ("[[_internal", "_internal"),
        ("{{!unknownProp", "!unknownProp"),
    ] {
        builder.add_occurrence(OccurrenceDecl::databinding(
            "element-with-databinding",
            expression,
            range_within(binding, t, token, expression),
        ));
    }

    builder.build().expect("navigation fixture is consistent")
}

/// Three elements over two documents plus a document with only a usage.
pub fn symbol_graph() -> FeatureGraph {
    let mut builder = FeatureGraph::builder();
    let slots = add(&mut builder, SLOT_TEST_ELEM_PATH, SLOT_TEST_ELEM);
    let user = add(&mut builder, BEHAVIOR_USER_PATH, BEHAVIOR_USER);
    let slot = add(&mut builder, SLOT_PATH, SLOT);

    let t = SLOT_TEST_ELEM;
    builder
        .add_element(
            ElementDecl::new(
                "slot-test-elem",
                range_of(slots, t, "Polymer({is: 'slot-test-elem', properties: {label: String}})"),
            )
            .property(PropertyDecl::new("label", range_of(slots, t, "label: String"))),
        )
        .add_element(ElementDecl::new(
            "slot-one-test-elem",
            range_of(slots, t, "Polymer({is: 'slot-one-test-elem'})"),
        ))
        .add_element(
            ElementDecl::new(
                "behavior-user",
                range_between(user, BEHAVIOR_USER, "Polymer({", "\n  })"),
            )
            .mixes_in(["MyNamespace.SimpleBehavior"]),
        );
    tag(&mut builder, slot, SLOT, "<slot-test-elem", "</slot-test-elem>", "slot-test-elem");
    builder.add_occurrence(OccurrenceDecl::attribute(
        "slot-test-elem",
        "label",
        range_of(slot, SLOT, "label"),
    ));

    builder.build().expect("symbol fixture is consistent")
}

pub static NAVIGATION: Lazy<AnalysisHost> =
    Lazy::new(|| AnalysisHost::from_graph(navigation_graph()));

pub static SYMBOLS: Lazy<AnalysisHost> = Lazy::new(|| AnalysisHost::from_graph(symbol_graph()));

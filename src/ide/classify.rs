//! Context classification: what kind of reference is under the cursor.
//!
//! Classification is syntactic. It decides whether the offset sits on a tag
//! name, an attribute, a binding token or a registration expression; which
//! declaration that points to is left to the resolvers.

use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::{Error, FileId, Result};
use crate::hir::naming::binding_root;
use crate::hir::{FeatureGraph, FeatureId, OccurrenceKind, SourceRange};

/// The syntactic context at an offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Context {
    /// A custom-element name in an opening tag.
    TagReference { element: SmolStr, range: SourceRange },
    /// An attribute naming a declared or inherited property of its tag.
    /// `property` is the property's declared (camelCase) name.
    AttributeReference {
        element: SmolStr,
        property: SmolStr,
        range: SourceRange,
    },
    /// A property read inside a binding expression of `element`'s template.
    DatabindingReference {
        element: SmolStr,
        property: SmolStr,
        range: SourceRange,
    },
    /// The expression that registers `element`.
    RegistrationSite { element: SmolStr, range: SourceRange },
    /// Nothing resolvable.
    None,
}

impl Context {
    pub fn is_none(&self) -> bool {
        matches!(self, Context::None)
    }

    /// The range of the token that was classified.
    pub fn range(&self) -> Option<SourceRange> {
        match self {
            Context::TagReference { range, .. }
            | Context::AttributeReference { range, .. }
            | Context::DatabindingReference { range, .. }
            | Context::RegistrationSite { range, .. } => Some(*range),
            Context::None => None,
        }
    }

    /// The feature this context refers to: the element for tags and
    /// registrations, the effective property for attributes and bindings.
    pub fn target(&self, graph: &FeatureGraph) -> Option<FeatureId> {
        match self {
            Context::TagReference { element, .. } | Context::RegistrationSite { element, .. } => {
                graph.element_id(element)
            }
            Context::AttributeReference {
                element, property, ..
            }
            | Context::DatabindingReference {
                element, property, ..
            } => graph.property_of_element(element, property),
            Context::None => None,
        }
    }
}

/// Classify the token at `offset` in `file`.
///
/// Fails only for an unknown document or an offset past its end.
pub fn classify(graph: &FeatureGraph, file: FileId, offset: TextSize) -> Result<Context> {
    let document = graph.document(file)?;
    let len = document.line_index.len();
    if offset > len {
        return Err(Error::OffsetOutOfRange {
            offset: u32::from(offset) as usize,
            len: u32::from(len) as usize,
        });
    }

    // Innermost token wins; ties go to the earliest one.
    let Some(occurrence) = graph
        .occurrences_at(file, offset)
        .min_by_key(|o| (o.name_range.len(), o.name_range.range.start()))
    else {
        tracing::trace!("no occurrence at {}:{:?}", document.path, offset);
        return Ok(Context::None);
    };

    let element = occurrence.host.clone();
    let range = occurrence.name_range;
    let context = match occurrence.kind {
        OccurrenceKind::Tag => Context::TagReference { element, range },
        OccurrenceKind::Registration => Context::RegistrationSite { element, range },
        OccurrenceKind::Attribute => {
            match graph.property_for_attribute(&element, &occurrence.name) {
                Some(property) => Context::AttributeReference {
                    element,
                    property: graph.feature(property).name.clone(),
                    range,
                },
                None => Context::None,
            }
        }
        OccurrenceKind::Databinding => match binding_root(&occurrence.name) {
            Some(root) => Context::DatabindingReference {
                element,
                property: SmolStr::new(root),
                range,
            },
            None => Context::None,
        },
    };

    tracing::trace!("classified {}:{:?} as {:?}", document.path, offset, context);
    Ok(context)
}

//! Serializable description of a feature graph snapshot.
//!
//! The shape is what an out-of-process analyzer emits: documents with their
//! text, then declarations and use sites whose ranges name a document by
//! path and give character offsets into it.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::FileId;
use crate::hir::{
    BehaviorDecl, DocumentKind, ElementDecl, Feature, FeatureGraph, FeatureGraphBuilder,
    FeatureKind, OccurrenceDecl, OccurrenceKind, PropertyDecl, Scope, SourceRange,
};

use super::InterchangeError;

/// A whole snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDescription {
    #[serde(default)]
    pub version: u64,
    /// Documents in analysis order.
    pub documents: Vec<DocumentDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<BehaviorDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<OccurrenceDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentDescription {
    pub path: String,
    /// Guessed from the extension when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub text: String,
}

/// Character offsets `start..end` in the document at `path`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDescription {
    pub path: String,
    pub start: u32,
    pub end: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescription {
    pub name: String,
    pub range: RangeDescription,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescription {
    pub name: String,
    pub range: RangeDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<RangeDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixes_in: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorDescription {
    pub name: String,
    pub range: RangeDescription,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixes_in: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDescription>,
}

/// A use site. `range` defaults to `name_range`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceDescription {
    pub kind: OccurrenceKind,
    pub host: String,
    pub name: String,
    pub name_range: RangeDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeDescription>,
}

// ============================================================================
// DESCRIPTION → GRAPH
// ============================================================================

impl SnapshotDescription {
    /// Validate paths and feed everything to a [`FeatureGraphBuilder`].
    pub fn into_graph(self) -> Result<FeatureGraph, InterchangeError> {
        let mut builder = FeatureGraphBuilder::new().version(self.version);
        for document in &self.documents {
            let kind = document
                .kind
                .unwrap_or_else(|| DocumentKind::from_path(&document.path));
            builder.add_document(&document.path, kind, &document.text)?;
        }

        let resolver = RangeResolver {
            documents: &self.documents,
        };

        for element in self.elements {
            let mut decl = ElementDecl::new(element.name, resolver.range(&element.range)?)
                .mixes_in(element.mixes_in);
            if let Some(class_name) = element.class_name {
                decl = decl.class_name(class_name);
            }
            if let Some(registration) = &element.registration {
                decl = decl.registered_at(resolver.range(registration)?);
            }
            for property in element.properties {
                decl = decl.property(resolver.property(property)?);
            }
            builder.add_element(decl);
        }

        for behavior in self.behaviors {
            let mut decl = BehaviorDecl::new(behavior.name, resolver.range(&behavior.range)?)
                .mixes_in(behavior.mixes_in);
            for property in behavior.properties {
                decl = decl.property(resolver.property(property)?);
            }
            builder.add_behavior(decl);
        }

        for occurrence in self.occurrences {
            let name_range = resolver.range(&occurrence.name_range)?;
            let range = match &occurrence.range {
                Some(range) => resolver.range(range)?,
                None => name_range,
            };
            builder.add_occurrence(OccurrenceDecl {
                kind: occurrence.kind,
                host: SmolStr::from(occurrence.host),
                name: SmolStr::from(occurrence.name),
                name_range,
                range,
            });
        }

        Ok(builder.build()?)
    }
}

struct RangeResolver<'a> {
    documents: &'a [DocumentDescription],
}

impl RangeResolver<'_> {
    fn range(&self, range: &RangeDescription) -> Result<SourceRange, InterchangeError> {
        let index = self
            .documents
            .iter()
            .position(|document| document.path == range.path)
            .ok_or_else(|| InterchangeError::unknown_path(&range.path))?;
        SourceRange::checked(FileId::new(index as u32), range.start, range.end).ok_or_else(
            || InterchangeError::InvalidRange {
                path: range.path.clone(),
                start: range.start,
                end: range.end,
            },
        )
    }

    fn property(&self, property: PropertyDescription) -> Result<PropertyDecl, InterchangeError> {
        let decl = PropertyDecl::new(property.name, self.range(&property.range)?);
        Ok(match property.type_name {
            Some(type_name) => decl.with_type(type_name),
            None => decl,
        })
    }
}

// ============================================================================
// GRAPH → DESCRIPTION
// ============================================================================

impl SnapshotDescription {
    /// Describe a built graph. Registration occurrences are implied by the
    /// element declarations and are not listed.
    pub fn from_graph(graph: &FeatureGraph) -> Self {
        let range = |range: &SourceRange| RangeDescription {
            path: graph
                .path_of(range)
                .map(|path| path.to_string())
                .unwrap_or_default(),
            start: range.range.start().into(),
            end: range.range.end().into(),
        };
        let properties = |owner: &Feature| -> Vec<PropertyDescription> {
            owner
                .properties
                .iter()
                .map(|&id| {
                    let property = graph.feature(id);
                    PropertyDescription {
                        name: property.name.to_string(),
                        range: range(&property.range),
                        type_name: property.detail.as_ref().map(|t| t.to_string()),
                    }
                })
                .collect()
        };

        let mut description = SnapshotDescription {
            version: graph.version(),
            documents: graph
                .documents()
                .map(|document| DocumentDescription {
                    path: document.path.to_string(),
                    kind: Some(document.kind),
                    text: document.text.to_string(),
                })
                .collect(),
            ..Default::default()
        };

        for document in graph.documents() {
            let features = graph
                .all_features(Scope::Document(document.id))
                .unwrap_or_default();
            for feature in features {
                match feature.kind {
                    FeatureKind::Element => {
                        let registration = graph
                            .occurrences_of(feature.id)
                            .into_iter()
                            .find(|o| o.kind == OccurrenceKind::Registration)
                            .map(|o| o.range)
                            .filter(|r| *r != feature.range);
                        description.elements.push(ElementDescription {
                            name: feature.name.to_string(),
                            range: range(&feature.range),
                            class_name: feature.detail.as_ref().map(|c| c.to_string()),
                            registration: registration.as_ref().map(range),
                            mixes_in: feature.mixes_in.iter().map(|b| b.to_string()).collect(),
                            properties: properties(feature),
                        });
                    }
                    FeatureKind::Behavior => {
                        description.behaviors.push(BehaviorDescription {
                            name: feature.name.to_string(),
                            range: range(&feature.range),
                            mixes_in: feature.mixes_in.iter().map(|b| b.to_string()).collect(),
                            properties: properties(feature),
                        });
                    }
                    FeatureKind::Property => {}
                }
            }

            let occurrences = graph.occurrences_in(document.id).unwrap_or_default();
            for occurrence in occurrences {
                if occurrence.kind == OccurrenceKind::Registration {
                    continue;
                }
                description.occurrences.push(OccurrenceDescription {
                    kind: occurrence.kind,
                    host: occurrence.host.to_string(),
                    name: occurrence.name.to_string(),
                    name_range: range(&occurrence.name_range),
                    range: (occurrence.range != occurrence.name_range)
                        .then(|| range(&occurrence.range)),
                });
            }
        }
        description
    }
}

//! Feature and occurrence types.
//!
//! Contains the declared entities of the component graph (`Feature`), their
//! use sites (`Occurrence`), and the declaration descriptions the analyzer
//! hands to [`FeatureGraphBuilder`](super::FeatureGraphBuilder).

use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::FileId;

// ============================================================================
// SOURCE RANGES
// ============================================================================

/// A character range inside one document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub file: FileId,
    pub range: TextRange,
}

impl SourceRange {
    pub fn new(file: FileId, range: TextRange) -> Self {
        Self { file, range }
    }

    /// Build from raw character offsets.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Analyzer input that may be malformed goes
    /// through [`SourceRange::checked`] instead.
    pub fn from_offsets(file: FileId, start: u32, end: u32) -> Self {
        Self {
            file,
            range: TextRange::new(start.into(), end.into()),
        }
    }

    /// Build from raw character offsets, or `None` if `start > end`.
    pub fn checked(file: FileId, start: u32, end: u32) -> Option<Self> {
        (start <= end).then(|| Self::from_offsets(file, start, end))
    }

    /// Whether `offset` in `file` falls inside the range, both ends inclusive.
    pub fn contains(&self, file: FileId, offset: text_size::TextSize) -> bool {
        self.file == file && self.range.contains_inclusive(offset)
    }

    pub fn len(&self) -> u32 {
        self.range.len().into()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

// ============================================================================
// FEATURES
// ============================================================================

/// Index of a feature within its snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(pub(crate) u32);

impl FeatureId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a declared feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "lowercase"))]
pub enum FeatureKind {
    /// A custom element, named by its tag.
    Element,
    /// A mixin bundle of properties and hooks.
    Behavior,
    /// A property owned by an element or behavior.
    Property,
}

impl FeatureKind {
    pub fn display(&self) -> &'static str {
        match self {
            FeatureKind::Element => "element",
            FeatureKind::Behavior => "behavior",
            FeatureKind::Property => "property",
        }
    }
}

/// A declared, named entity of the component graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id: FeatureId,
    pub kind: FeatureKind,
    /// Tag name, behavior name or property identifier.
    pub name: SmolStr,
    /// The full declaration span.
    pub range: SourceRange,
    /// Behaviors mixed in, in declaration order. Empty for properties.
    pub mixes_in: Vec<SmolStr>,
    /// Owned properties, in declaration order. Empty for properties.
    pub properties: Vec<FeatureId>,
    /// The element or behavior that owns a property.
    pub owner: Option<FeatureId>,
    /// Class name for class-declared elements, value type for properties.
    pub detail: Option<SmolStr>,
}

impl Feature {
    pub fn is_element(&self) -> bool {
        self.kind == FeatureKind::Element
    }
}

// ============================================================================
// OCCURRENCES
// ============================================================================

/// The syntactic form of a use site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "lowercase"))]
pub enum OccurrenceKind {
    /// `<my-element ...>` in markup; the name range covers the opening tag name.
    Tag,
    /// An attribute on a custom-element tag.
    Attribute,
    /// A `{{...}}` / `[[...]]` binding token.
    Databinding,
    /// The expression that registers an element (class or factory call).
    Registration,
}

/// A use site of a feature, as found by the analyzer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub kind: OccurrenceKind,
    /// Tag name for tags, attributes and registrations; the enclosing
    /// element for databindings.
    pub host: SmolStr,
    /// The text as written: tag name, attribute name or binding expression.
    pub name: SmolStr,
    /// The token the cursor has to be on.
    pub name_range: SourceRange,
    /// The range reported by find-references.
    pub range: SourceRange,
    /// The feature this occurrence denotes, if it resolves.
    pub target: Option<FeatureId>,
}

// ============================================================================
// DECLARATION DESCRIPTIONS (builder input)
// ============================================================================

/// A property declaration inside an element or behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: SmolStr,
    pub range: SourceRange,
    pub type_name: Option<SmolStr>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<SmolStr>, range: SourceRange) -> Self {
        Self {
            name: name.into(),
            range,
            type_name: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<SmolStr>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// An element declaration.
///
/// `range` is what go-to-definition returns: the class for class-declared
/// elements, the whole factory call (`Polymer({...})`) otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementDecl {
    pub name: SmolStr,
    pub range: SourceRange,
    pub class_name: Option<SmolStr>,
    /// Registration expression, when it differs from `range`.
    pub registration: Option<SourceRange>,
    pub mixes_in: Vec<SmolStr>,
    pub properties: Vec<PropertyDecl>,
}

impl ElementDecl {
    pub fn new(name: impl Into<SmolStr>, range: SourceRange) -> Self {
        Self {
            name: name.into(),
            range,
            class_name: None,
            registration: None,
            mixes_in: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn class_name(mut self, class_name: impl Into<SmolStr>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn registered_at(mut self, range: SourceRange) -> Self {
        self.registration = Some(range);
        self
    }

    pub fn mixes_in<I, S>(mut self, behaviors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.mixes_in.extend(behaviors.into_iter().map(Into::into));
        self
    }

    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }
}

/// A behavior declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BehaviorDecl {
    pub name: SmolStr,
    pub range: SourceRange,
    pub mixes_in: Vec<SmolStr>,
    pub properties: Vec<PropertyDecl>,
}

impl BehaviorDecl {
    pub fn new(name: impl Into<SmolStr>, range: SourceRange) -> Self {
        Self {
            name: name.into(),
            range,
            mixes_in: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn mixes_in<I, S>(mut self, behaviors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.mixes_in.extend(behaviors.into_iter().map(Into::into));
        self
    }

    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }
}

/// A use site reported by the analyzer. Registrations are derived from
/// [`ElementDecl`]s and cannot be added this way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccurrenceDecl {
    pub kind: OccurrenceKind,
    pub host: SmolStr,
    pub name: SmolStr,
    pub name_range: SourceRange,
    pub range: SourceRange,
}

impl OccurrenceDecl {
    /// A custom-element tag. `name_range` covers the opening tag name,
    /// `element_range` the whole element through its closing tag.
    pub fn tag(tag: impl Into<SmolStr>, name_range: SourceRange, element_range: SourceRange) -> Self {
        let tag = tag.into();
        Self {
            kind: OccurrenceKind::Tag,
            host: tag.clone(),
            name: tag,
            name_range,
            range: element_range,
        }
    }

    /// An attribute written on a `tag`.
    pub fn attribute(
        tag: impl Into<SmolStr>,
        attribute: impl Into<SmolStr>,
        name_range: SourceRange,
    ) -> Self {
        Self {
            kind: OccurrenceKind::Attribute,
            host: tag.into(),
            name: attribute.into(),
            name_range,
            range: name_range,
        }
    }

    /// A binding expression inside the template of `element`.
    pub fn databinding(
        element: impl Into<SmolStr>,
        expression: impl Into<SmolStr>,
        range: SourceRange,
    ) -> Self {
        Self {
            kind: OccurrenceKind::Databinding,
            host: element.into(),
            name: expression.into(),
            name_range: range,
            range,
        }
    }
}

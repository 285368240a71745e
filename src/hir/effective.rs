//! Effective property sets.
//!
//! An element's usable properties are its own plus those of every behavior
//! it mixes in, transitively. The walk is depth-first in mix-in declaration
//! order and the first declaration of a name wins, so an element's own
//! property shadows any inherited one, and an earlier behavior shadows a
//! later one. The walk is recomputed on every call; snapshots are immutable
//! so there is nothing to invalidate.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::{FeatureGraph, FeatureId};
use super::naming::attribute_matches_property;

/// Property name → declaring property, in traversal order.
pub type PropertyMap = IndexMap<SmolStr, FeatureId>;

impl FeatureGraph {
    /// Compute the effective property set of an element or behavior.
    pub fn effective_properties_of(&self, owner: FeatureId) -> PropertyMap {
        let mut walk = Walk {
            graph: self,
            properties: PropertyMap::new(),
            visited: FxHashSet::default(),
            stack: Vec::new(),
        };
        walk.visit(owner);
        walk.properties
    }

    /// Effective property set of the element with tag `name`.
    /// Empty when no such element is declared.
    pub fn effective_properties_of_element(&self, name: &str) -> PropertyMap {
        self.element_id(name)
            .map(|id| self.effective_properties_of(id))
            .unwrap_or_default()
    }

    /// Find the property an attribute on `<tag>` refers to.
    pub fn property_for_attribute(&self, tag: &str, attribute: &str) -> Option<FeatureId> {
        self.effective_properties_of_element(tag)
            .into_iter()
            .find(|(name, _)| attribute_matches_property(attribute, name))
            .map(|(_, id)| id)
    }

    /// Find a property by its exact name on the element with tag `element`.
    pub fn property_of_element(&self, element: &str, property: &str) -> Option<FeatureId> {
        self.effective_properties_of_element(element)
            .get(property)
            .copied()
    }
}

struct Walk<'a> {
    graph: &'a FeatureGraph,
    properties: PropertyMap,
    /// Owners already walked; a behavior reached twice (diamond) adds nothing new.
    visited: FxHashSet<FeatureId>,
    /// Owners on the current path, for cycle reporting.
    stack: Vec<FeatureId>,
}

impl Walk<'_> {
    fn visit(&mut self, owner: FeatureId) {
        if self.stack.contains(&owner) {
            tracing::warn!(
                "mixin cycle through '{}' while computing effective properties",
                self.graph.feature(owner).name
            );
            return;
        }
        if !self.visited.insert(owner) {
            return;
        }

        let feature = self.graph.feature(owner);
        for &property in &feature.properties {
            let name = self.graph.feature(property).name.clone();
            self.properties.entry(name).or_insert(property);
        }

        self.stack.push(owner);
        for behavior in &feature.mixes_in {
            match self.graph.behavior_id(behavior) {
                Some(id) => self.visit(id),
                None => tracing::debug!(
                    "'{}' mixes in unknown behavior '{}'",
                    feature.name,
                    behavior
                ),
            }
        }
        self.stack.pop();
    }
}

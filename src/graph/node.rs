//! Node implementation for the attributed multigraph
//!
//! A node carries:
//! - a unique id
//! - an ordered set of labels (multiple labels per node)
//! - a scalar property map

use super::property::{PropertyMap, PropertyValue};
use super::types::{IntoNodeId, Label, NodeId};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Attribute name under which labels travel when labels and properties are
/// joined into one map (the serialized node record). Never a property name.
pub const LABELS_KEY: &str = "key";

/// A node in the attributed multigraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Labels in insertion order, without duplicates
    pub labels: IndexSet<Label>,

    /// Properties associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node with a single label
    pub fn new(id: impl Into<NodeId>, label: impl Into<Label>) -> Self {
        let mut labels = IndexSet::new();
        labels.insert(label.into());

        Node {
            id: id.into(),
            labels,
            properties: PropertyMap::new(),
        }
    }

    /// Create a new node with multiple labels
    pub fn new_with_labels(id: impl Into<NodeId>, labels: Vec<Label>) -> Self {
        Node {
            id: id.into(),
            labels: labels.into_iter().collect(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new node with labels and properties
    pub fn new_with_properties(
        id: impl Into<NodeId>,
        labels: Vec<Label>,
        properties: PropertyMap,
    ) -> Self {
        Node {
            id: id.into(),
            labels: labels.into_iter().collect(),
            properties,
        }
    }

    /// Node with a freshly generated id
    pub fn generated(labels: Vec<Label>, properties: PropertyMap) -> Self {
        Self::new_with_properties(NodeId::generate(), labels, properties)
    }

    /// Node with no labels and no properties
    pub fn bare(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            labels: IndexSet::new(),
            properties: PropertyMap::new(),
        }
    }

    /// Add a label to this node
    pub fn add_label(&mut self, label: impl Into<Label>) -> bool {
        self.labels.insert(label.into())
    }

    /// Remove a label from this node
    pub fn remove_label(&mut self, label: &Label) -> bool {
        self.labels.shift_remove(label)
    }

    /// Check if node has a specific label
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Set a property value
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// True if any property holds exactly `value`
    pub fn has_value(&self, value: &PropertyValue) -> bool {
        self.properties.values().any(|v| v == value)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl IntoNodeId for Node {
    fn into_node_id(self) -> NodeId {
        self.id
    }
}

impl IntoNodeId for &Node {
    fn into_node_id(self) -> NodeId {
        self.id.clone()
    }
}

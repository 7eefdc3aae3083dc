//! Tree model backing the data sources panel.
//!
//! Node handles are opaque ids that stay valid until the node is removed.

use chrono::{DateTime, Utc};
use graphdeck_core::models::{DataSource, GraphMetadata, LabelMeta, RelTypeMeta};
use std::collections::HashMap;

/// Opaque handle to a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// Metadata section headers shown under a data source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataCategory {
    Labels,
    RelationshipTypes,
    PropertyKeys,
}

impl MetadataCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MetadataCategory::Labels => "Labels",
            MetadataCategory::RelationshipTypes => "Relationship Types",
            MetadataCategory::PropertyKeys => "Property Keys",
        }
    }
}

/// What a tree node displays.
#[derive(Debug, Clone)]
pub enum NodePayload {
    DataSource(DataSource),
    Category(MetadataCategory),
    Label(LabelMeta),
    RelationshipType(RelTypeMeta),
    PropertyKey(String),
}

impl NodePayload {
    /// Text shown for this node, with counts where known.
    pub fn display_label(&self) -> String {
        match self {
            NodePayload::DataSource(ds) => ds.name.clone(),
            NodePayload::Category(category) => category.label().to_string(),
            NodePayload::Label(label) => match label.count {
                Some(count) => format!("{} ({})", label.name, count),
                None => label.name.clone(),
            },
            NodePayload::RelationshipType(rel) => match rel.count {
                Some(count) => format!("{} ({})", rel.name, count),
                None => rel.name.clone(),
            },
            NodePayload::PropertyKey(name) => name.clone(),
        }
    }

    pub fn as_data_source(&self) -> Option<&DataSource> {
        match self {
            NodePayload::DataSource(ds) => Some(ds),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Node {
    payload: NodePayload,
    children: Vec<NodeId>,
    metadata: Option<GraphMetadata>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// The data sources tree.
#[derive(Debug, Default)]
pub struct DataSourceTree {
    nodes: HashMap<NodeId, Node>,
    top_level: Vec<NodeId>,
    next_id: u64,
}

impl DataSourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, payload: NodePayload) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                payload,
                children: Vec::new(),
                metadata: None,
                refreshed_at: None,
            },
        );
        id
    }

    // --- Structure ---

    /// Append a top-level node for a data source.
    pub fn insert_data_source(&mut self, data_source: DataSource) -> NodeId {
        let id = self.alloc(NodePayload::DataSource(data_source));
        self.top_level.push(id);
        id
    }

    /// Append a child under `parent`. Returns `None` if the parent is gone.
    pub fn add_child(&mut self, parent: NodeId, payload: NodePayload) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let id = self.alloc(payload);
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(id);
        }
        Some(id)
    }

    /// Detach a top-level node and drop its whole subtree.
    pub fn remove_top_level(&mut self, node: NodeId) -> bool {
        if let Some(pos) = self.top_level.iter().position(|&id| id == node) {
            self.top_level.remove(pos);
            self.drop_subtree(node);
            true
        } else {
            false
        }
    }

    /// Drop all children of a node, recursively.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = match self.nodes.get_mut(&node) {
            Some(n) => std::mem::take(&mut n.children),
            None => return,
        };
        for child in children {
            self.drop_subtree(child);
        }
    }

    fn drop_subtree(&mut self, node: NodeId) {
        if let Some(removed) = self.nodes.remove(&node) {
            for child in removed.children {
                self.drop_subtree(child);
            }
        }
    }

    // --- Access ---

    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    pub fn payload(&self, node: NodeId) -> Option<&NodePayload> {
        self.nodes.get(&node).map(|n| &n.payload)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn data_source(&self, node: NodeId) -> Option<&DataSource> {
        self.payload(node).and_then(|p| p.as_data_source())
    }

    /// Swap the record on a data source node, keeping its position and
    /// children. Returns `false` if the node is gone or not a data source.
    pub fn set_data_source(&mut self, node: NodeId, data_source: DataSource) -> bool {
        match self.nodes.get_mut(&node) {
            Some(n) if matches!(n.payload, NodePayload::DataSource(_)) => {
                n.payload = NodePayload::DataSource(data_source);
                true
            }
            _ => false,
        }
    }

    // --- Metadata cache ---

    pub fn metadata(&self, node: NodeId) -> Option<&GraphMetadata> {
        self.nodes.get(&node).and_then(|n| n.metadata.as_ref())
    }

    pub fn refreshed_at(&self, node: NodeId) -> Option<DateTime<Utc>> {
        self.nodes.get(&node).and_then(|n| n.refreshed_at)
    }

    pub fn set_metadata(&mut self, node: NodeId, metadata: GraphMetadata) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.metadata = Some(metadata);
            n.refreshed_at = Some(Utc::now());
        }
    }

    // --- Lookup ---

    /// Find a top-level node by its data source name. Linear scan; the
    /// panel holds at most a few dozen data sources.
    pub fn find_top_level_by_name(&self, name: &str) -> Option<NodeId> {
        self.top_level
            .iter()
            .copied()
            .find(|&id| self.data_source(id).is_some_and(|ds| ds.name == name))
    }

    pub fn top_level_names(&self) -> Vec<String> {
        self.top_level
            .iter()
            .filter_map(|&id| self.data_source(id))
            .map(|ds| ds.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.top_level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }
}

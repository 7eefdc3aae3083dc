use serde::{Deserialize, Serialize};

/// A node label reported by the server, with an optional entity count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMeta {
    pub name: String,
    pub count: Option<u64>,
}

/// A relationship type reported by the server, with an optional count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelTypeMeta {
    pub name: String,
    pub count: Option<u64>,
}

/// Schema-level metadata fetched from one data source.
///
/// Equality is over content only; fetch timestamps live on the tree nodes so
/// that comparing a fresh fetch against the cached copy stays meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub labels: Vec<LabelMeta>,
    pub relationship_types: Vec<RelTypeMeta>,
    pub property_keys: Vec<String>,
}

impl GraphMetadata {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
            && self.relationship_types.is_empty()
            && self.property_keys.is_empty()
    }
}

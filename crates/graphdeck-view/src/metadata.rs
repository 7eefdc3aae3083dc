use crate::tree::{DataSourceTree, MetadataCategory, NodeId, NodePayload};
use graphdeck_core::client::GraphClient;
use graphdeck_core::models::DataSource;
use graphdeck_core::Result;
use tracing::debug;

/// Fetches schema metadata and keeps data source subtrees in sync with it.
///
/// The last fetched snapshot is cached on the tree node, so a refresh that
/// returns identical metadata leaves the subtree alone.
pub struct MetadataRetriever {
    client: Box<dyn GraphClient>,
}

impl MetadataRetriever {
    pub fn new(client: Box<dyn GraphClient>) -> Self {
        Self { client }
    }

    /// Fetch fresh metadata for `data_source` and rebuild the subtree under
    /// `node` when it differs from the cached snapshot. Returns whether the
    /// tree changed.
    pub fn refresh(
        &mut self,
        tree: &mut DataSourceTree,
        node: NodeId,
        data_source: &DataSource,
    ) -> Result<bool> {
        let metadata = self.client.fetch_metadata(data_source)?;

        if tree.metadata(node) == Some(&metadata) {
            debug!("Metadata for '{}' unchanged", data_source.name);
            return Ok(false);
        }

        tree.clear_children(node);

        if !metadata.labels.is_empty() {
            if let Some(category) =
                tree.add_child(node, NodePayload::Category(MetadataCategory::Labels))
            {
                for label in &metadata.labels {
                    tree.add_child(category, NodePayload::Label(label.clone()));
                }
            }
        }

        if !metadata.relationship_types.is_empty() {
            if let Some(category) = tree.add_child(
                node,
                NodePayload::Category(MetadataCategory::RelationshipTypes),
            ) {
                for rel in &metadata.relationship_types {
                    tree.add_child(category, NodePayload::RelationshipType(rel.clone()));
                }
            }
        }

        if !metadata.property_keys.is_empty() {
            if let Some(category) =
                tree.add_child(node, NodePayload::Category(MetadataCategory::PropertyKeys))
            {
                for key in &metadata.property_keys {
                    tree.add_child(category, NodePayload::PropertyKey(key.clone()));
                }
            }
        }

        tree.set_metadata(node, metadata);
        debug!("Rebuilt metadata subtree for '{}'", data_source.name);
        Ok(true)
    }
}

//! The data sources view controller.
//!
//! Keeps the tree's top-level nodes mirroring the registry, one node per
//! record in registry order, and renders once per logical operation.

use crate::metadata::MetadataRetriever;
use crate::tree::{DataSourceTree, NodeId};
use graphdeck_core::analytics::AnalyticsSink;
use graphdeck_core::client::GraphClient;
use graphdeck_core::config::keychain::CredentialStore;
use graphdeck_core::config::scratch::ScratchFiles;
use graphdeck_core::models::DataSource;
use graphdeck_core::registry::SharedRegistry;
use graphdeck_core::{GraphDeckError, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Paints the tree to whatever surface hosts the panel.
pub trait Renderer {
    fn render(&mut self, tree: &DataSourceTree);
}

/// Controller for the data sources panel.
pub struct DataSourcesView {
    initialized: bool,
    tree: DataSourceTree,
    registry: SharedRegistry,
    retriever: MetadataRetriever,
    analytics: Arc<dyn AnalyticsSink>,
    scratch: ScratchFiles,
    credentials: Arc<dyn CredentialStore>,
    renderer: Box<dyn Renderer>,
}

impl DataSourcesView {
    pub fn new(
        registry: SharedRegistry,
        client: Box<dyn GraphClient>,
        analytics: Arc<dyn AnalyticsSink>,
        scratch: ScratchFiles,
        credentials: Arc<dyn CredentialStore>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self {
            initialized: false,
            tree: DataSourceTree::new(),
            registry,
            retriever: MetadataRetriever::new(client),
            analytics,
            scratch,
            credentials,
            renderer,
        }
    }

    pub fn tree(&self) -> &DataSourceTree {
        &self.tree
    }

    // --- Lifecycle ---

    /// Populate the tree from the registry and render it. Idempotent; only
    /// the first call does anything. Fails only if the registry itself is
    /// inaccessible.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            debug!("Data sources view already initialized");
            return Ok(());
        }

        let records = self.registry.read().list()?;
        for record in records {
            self.tree.insert_data_source(record);
        }

        // Initial refreshes are best effort: an unreachable database must
        // not keep the panel from showing up.
        for node in self.tree.top_level().to_vec() {
            if let Err(e) = self.refresh_one(node) {
                warn!("Initial metadata refresh failed: {}", e);
            }
        }

        self.renderer.render(&self.tree);
        self.initialized = true;
        Ok(())
    }

    // --- Refresh ---

    /// Refresh metadata for every data source, rendering once at the end if
    /// any subtree changed.
    pub fn refresh_all(&mut self) -> Result<()> {
        let mut changed = false;
        for node in self.tree.top_level().to_vec() {
            changed |= self.refresh_one(node)?;
        }
        if changed {
            self.renderer.render(&self.tree);
        }
        Ok(())
    }

    /// Refresh metadata for one data source node. Returns whether the tree
    /// changed. Never renders; callers decide when to paint.
    pub fn refresh_one(&mut self, node: NodeId) -> Result<bool> {
        let data_source = self
            .tree
            .data_source(node)
            .cloned()
            .ok_or_else(|| GraphDeckError::NotFound("stale tree node handle".to_string()))?;

        self.analytics.event(&data_source, "refreshMetadata");
        self.retriever.refresh(&mut self.tree, node, &data_source)
    }

    // --- Mutations ---

    /// Add a new data source: append it to the registry and the tree, fetch
    /// its metadata, render. Returns the new top-level node.
    pub fn create(&mut self, record: DataSource) -> Result<NodeId> {
        self.analytics.event(&record, "create");
        self.registry.write().add(record.clone())?;

        let node = self.tree.insert_data_source(record);
        self.refresh_one(node)?;
        self.renderer.render(&self.tree);
        Ok(node)
    }

    /// Replace the record behind `node` with `new`, keeping its tree
    /// position, then refresh against the updated record and render.
    pub fn update(&mut self, node: NodeId, old: &DataSource, new: DataSource) -> Result<()> {
        if self.tree.data_source(node).is_none() {
            return Err(GraphDeckError::NotFound(
                "stale tree node handle".to_string(),
            ));
        }

        self.analytics.event(&new, "update");
        self.registry.write().update(old, new.clone())?;

        self.tree.set_data_source(node, new);
        self.refresh_one(node)?;
        self.renderer.render(&self.tree);
        Ok(())
    }

    /// Remove a batch of data sources. Scratch files and stored passwords
    /// are released best effort per record, the registry removal happens in
    /// one batch, and the tree renders once at the end.
    pub fn remove_many(&mut self, records: &[DataSource]) -> Result<()> {
        for record in records {
            self.analytics.event(record, "remove");
            if let Err(e) = self.scratch.discard(record) {
                warn!("Failed to discard scratch file for '{}': {}", record.name, e);
            }
            if let Err(e) = self.credentials.delete_password(record) {
                warn!(
                    "Failed to release stored password for '{}': {}",
                    record.name, e
                );
            }
        }

        self.registry.write().remove_all(records)?;

        for record in records {
            if let Some(node) = self.tree.find_top_level_by_name(&record.name) {
                self.tree.remove_top_level(node);
            }
        }

        self.renderer.render(&self.tree);
        Ok(())
    }
}

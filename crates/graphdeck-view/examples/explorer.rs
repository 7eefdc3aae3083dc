//! Console walkthrough of the data sources view.
//!
//! Runs against an isolated temporary store and a canned metadata client,
//! so it leaves nothing behind on your machine:
//!
//! ```sh
//! cargo run -p graphdeck-view --example explorer
//! ```

use graphdeck_core::analytics::LogSink;
use graphdeck_core::client::GraphClient;
use graphdeck_core::config::keychain::Keychain;
use graphdeck_core::config::scratch::ScratchFiles;
use graphdeck_core::config::store::DataSourceStore;
use graphdeck_core::models::{DataSource, DataSourceKind, GraphMetadata, LabelMeta, RelTypeMeta};
use graphdeck_core::registry::shared;
use graphdeck_core::{GraphDeckError, Result};
use graphdeck_view::{DataSourceTree, DataSourcesView, NodeId, Renderer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Serves fixture metadata for the demo host and refuses everything else.
struct FixtureClient;

impl GraphClient for FixtureClient {
    fn fetch_metadata(&mut self, data_source: &DataSource) -> Result<GraphMetadata> {
        match data_source.host.as_str() {
            "demo.internal" => Ok(GraphMetadata {
                labels: vec![
                    LabelMeta {
                        name: "Person".to_string(),
                        count: Some(133),
                    },
                    LabelMeta {
                        name: "Movie".to_string(),
                        count: Some(38),
                    },
                ],
                relationship_types: vec![RelTypeMeta {
                    name: "ACTED_IN".to_string(),
                    count: Some(172),
                }],
                property_keys: vec![
                    "name".to_string(),
                    "title".to_string(),
                    "released".to_string(),
                ],
            }),
            other => Err(GraphDeckError::Metadata(format!("no route to {}", other))),
        }
    }
}

struct ConsoleRenderer;

impl ConsoleRenderer {
    fn print(&self, tree: &DataSourceTree, node: NodeId, depth: usize) {
        if let Some(payload) = tree.payload(node) {
            println!("{}{}", "  ".repeat(depth), payload.display_label());
        }
        for &child in tree.children(node) {
            self.print(tree, child, depth + 1);
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, tree: &DataSourceTree) {
        println!("-- data sources --");
        if tree.is_empty() {
            println!("(empty)");
        }
        for &node in tree.top_level() {
            self.print(tree, node, 0);
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("GraphDeck explorer v{}", graphdeck_core::VERSION);

    let dir = tempfile::TempDir::new()?;
    let store = DataSourceStore::load_from(dir.path().join("data_sources.json"))?;

    let mut view = DataSourcesView::new(
        shared(store),
        Box::new(FixtureClient),
        Arc::new(LogSink),
        ScratchFiles::in_dir(dir.path().join("scratch")),
        Arc::new(Keychain),
        Box::new(ConsoleRenderer),
    );

    view.initialize()?;

    let movies = view.create(DataSource::new(
        "movies",
        DataSourceKind::Neo4jBolt,
        "demo.internal",
    ))?;

    // An unreachable host fails the create; the record sticks around until
    // it is removed.
    let offline = DataSource::new("offline", DataSourceKind::GremlinServer, "nowhere.invalid");
    if let Err(e) = view.create(offline.clone()) {
        warn!("create failed: {}", e);
    }
    view.remove_many(&[offline])?;

    let record = view
        .tree()
        .data_source(movies)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("movies node vanished"))?;
    let mut renamed = record.clone();
    renamed.name = "movies-prod".to_string();
    view.update(movies, &record, renamed.clone())?;

    // Nothing changed upstream, so this paints nothing new.
    view.refresh_all()?;

    view.remove_many(&[renamed])?;

    Ok(())
}

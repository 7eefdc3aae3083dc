use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Graph database backends a data source can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSourceKind {
    Neo4jBolt,
    GremlinServer,
}

impl DataSourceKind {
    /// Short label for the backend.
    pub fn label(&self) -> &'static str {
        match self {
            DataSourceKind::Neo4jBolt => "Neo4j",
            DataSourceKind::GremlinServer => "Gremlin",
        }
    }

    /// Default port of the backend's wire protocol.
    pub fn default_port(&self) -> u16 {
        match self {
            DataSourceKind::Neo4jBolt => 7687,
            DataSourceKind::GremlinServer => 8182,
        }
    }
}

/// A named connection target managed by the registry.
///
/// `id` is the stable identity and survives renames; `name` is unique within
/// the registry and is what the tree keys its top-level nodes on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub id: Uuid,
    pub name: String,
    pub kind: DataSourceKind,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub database: Option<String>,
}

impl DataSource {
    /// Create a data source with the kind's default port.
    pub fn new(name: impl Into<String>, kind: DataSourceKind, host: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            host: host.into(),
            port: kind.default_port(),
            user: None,
            database: None,
        }
    }

    /// Display URI for the connection target.
    pub fn uri(&self) -> String {
        let auth = self
            .user
            .as_deref()
            .map(|user| format!("{}@", user))
            .unwrap_or_default();
        match self.kind {
            DataSourceKind::Neo4jBolt => format!("bolt://{}{}:{}", auth, self.host, self.port),
            DataSourceKind::GremlinServer => {
                format!("ws://{}{}:{}/gremlin", auth, self.host, self.port)
            }
        }
    }
}

use crate::error::Result;
use crate::models::{DataSource, GraphMetadata};

/// Client capable of fetching schema metadata from a graph database.
///
/// Wire protocol implementations (Bolt, Gremlin Server) live outside this
/// crate; the core only needs the metadata snapshot they produce.
pub trait GraphClient {
    /// Fetch the current schema metadata for a data source.
    fn fetch_metadata(&mut self, data_source: &DataSource) -> Result<GraphMetadata>;
}

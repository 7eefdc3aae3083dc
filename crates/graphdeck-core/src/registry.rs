use crate::error::Result;
use crate::models::DataSource;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered collection of data source records.
///
/// Implementations enforce name uniqueness across the collection. Order is
/// append order and is preserved by updates.
pub trait DataSourceRegistry: Send + Sync {
    /// All records, in registry order.
    fn list(&self) -> Result<Vec<DataSource>>;

    /// Append a record. Fails if the name is already taken.
    fn add(&mut self, data_source: DataSource) -> Result<()>;

    /// Replace the record matching `old` by identity with `new`, in place.
    /// Renames are permitted as long as the new name stays unique.
    fn update(&mut self, old: &DataSource, new: DataSource) -> Result<()>;

    /// Remove every given record in one batch. Records not present in the
    /// registry are skipped silently.
    fn remove_all(&mut self, data_sources: &[DataSource]) -> Result<()>;
}

/// A registry shared between the view and the rest of the application.
pub type SharedRegistry = Arc<RwLock<dyn DataSourceRegistry>>;

/// Wrap a registry for shared use.
pub fn shared(registry: impl DataSourceRegistry + 'static) -> SharedRegistry {
    Arc::new(RwLock::new(registry))
}

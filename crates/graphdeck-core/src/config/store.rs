use crate::error::{GraphDeckError, Result};
use crate::models::DataSource;
use crate::registry::DataSourceRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Persistent, ordered collection of data source records. Saves after every
/// mutation, so the file always reflects the registry's current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceStore {
    pub data_sources: Vec<DataSource>,
    #[serde(skip)]
    path: PathBuf,
}

impl DataSourceStore {
    /// Default store file path.
    pub fn default_path() -> PathBuf {
        super::config_dir().join("data_sources.json")
    }

    /// Load the store from the default location, creating it when missing.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load a store from a specific file, creating it when missing.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let mut store: Self = serde_json::from_str(&content).map_err(|e| {
                GraphDeckError::Serialization(format!(
                    "Failed to parse store at {}: {}",
                    path.display(),
                    e
                ))
            })?;
            store.path = path;
            info!(
                "Loaded {} data sources from {}",
                store.data_sources.len(),
                store.path.display()
            );
            Ok(store)
        } else {
            let store = Self {
                data_sources: Vec::new(),
                path,
            };
            store.save()?;
            info!("Created empty data source store at {}", store.path.display());
            Ok(store)
        }
    }

    /// Save the store to its file.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            GraphDeckError::Serialization(format!("Failed to serialize store: {}", e))
        })?;
        std::fs::write(&self.path, content)?;
        info!(
            "Saved {} data sources to {}",
            self.data_sources.len(),
            self.path.display()
        );

        Ok(())
    }

    /// Get a data source by id.
    pub fn get(&self, id: Uuid) -> Option<&DataSource> {
        self.data_sources.iter().find(|ds| ds.id == id)
    }

    /// Whether a name is already taken, excluding the record with `except`.
    fn name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.data_sources
            .iter()
            .any(|ds| ds.name == name && Some(ds.id) != except)
    }
}

impl DataSourceRegistry for DataSourceStore {
    fn list(&self) -> Result<Vec<DataSource>> {
        Ok(self.data_sources.clone())
    }

    fn add(&mut self, data_source: DataSource) -> Result<()> {
        if self.name_taken(&data_source.name, None) {
            return Err(GraphDeckError::DuplicateName(data_source.name));
        }
        self.data_sources.push(data_source);
        self.save()
    }

    fn update(&mut self, old: &DataSource, new: DataSource) -> Result<()> {
        if self.name_taken(&new.name, Some(old.id)) {
            return Err(GraphDeckError::DuplicateName(new.name));
        }
        if let Some(existing) = self.data_sources.iter_mut().find(|ds| ds.id == old.id) {
            *existing = new;
            self.save()
        } else {
            Err(GraphDeckError::NotFound(old.name.clone()))
        }
    }

    fn remove_all(&mut self, data_sources: &[DataSource]) -> Result<()> {
        if data_sources.is_empty() {
            return Ok(());
        }

        let ids: HashSet<Uuid> = data_sources.iter().map(|ds| ds.id).collect();
        self.data_sources.retain(|ds| !ids.contains(&ds.id));
        self.save()
    }
}

use crate::error::{GraphDeckError, Result};
use crate::models::DataSource;
use keyring::Entry;
use tracing::debug;

const SERVICE_NAME: &str = "graphdeck";

/// Keychain account key for a data source.
///
/// Keyed by id, not name, so stored credentials survive renames.
fn entry_key(data_source: &DataSource) -> String {
    data_source.id.to_string()
}

fn entry_for(data_source: &DataSource) -> Result<Entry> {
    Entry::new(SERVICE_NAME, &entry_key(data_source))
        .map_err(|e| GraphDeckError::Keychain(e.to_string()))
}

/// Per-data-source credential storage.
///
/// Absent entries are never errors: `get_password` answers `None` and
/// `delete_password` succeeds.
pub trait CredentialStore: Send + Sync {
    fn store_password(&self, data_source: &DataSource, password: &str) -> Result<()>;
    fn get_password(&self, data_source: &DataSource) -> Result<Option<String>>;
    fn delete_password(&self, data_source: &DataSource) -> Result<()>;
}

/// Credential store backed by the system keychain.
pub struct Keychain;

impl CredentialStore for Keychain {
    fn store_password(&self, data_source: &DataSource, password: &str) -> Result<()> {
        entry_for(data_source)?
            .set_password(password)
            .map_err(|e| GraphDeckError::Keychain(e.to_string()))?;

        debug!("Stored password for data source '{}'", data_source.name);
        Ok(())
    }

    fn get_password(&self, data_source: &DataSource) -> Result<Option<String>> {
        match entry_for(data_source)?.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(GraphDeckError::Keychain(e.to_string())),
        }
    }

    fn delete_password(&self, data_source: &DataSource) -> Result<()> {
        match entry_for(data_source)?.delete_credential() {
            Ok(()) => {
                debug!("Deleted password for data source '{}'", data_source.name);
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(GraphDeckError::Keychain(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataSourceKind;
    use std::sync::Once;

    static MOCK_KEYRING: Once = Once::new();

    fn use_mock_keyring() {
        MOCK_KEYRING.call_once(|| {
            keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
        });
    }

    #[test]
    fn test_absent_entries_are_not_errors() {
        use_mock_keyring();
        let ds = DataSource::new("movies", DataSourceKind::Neo4jBolt, "localhost");
        let keychain: &dyn CredentialStore = &Keychain;

        assert_eq!(keychain.get_password(&ds).unwrap(), None);
        keychain.delete_password(&ds).unwrap();
    }

    #[test]
    fn test_entry_key_survives_rename() {
        let mut ds = DataSource::new("movies", DataSourceKind::Neo4jBolt, "localhost");
        let key = entry_key(&ds);

        ds.name = "movies-prod".to_string();
        assert_eq!(entry_key(&ds), key);
    }
}

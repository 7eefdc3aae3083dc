pub mod keychain;
pub mod scratch;
pub mod store;

use directories::ProjectDirs;
use std::path::PathBuf;

/// Config directory holding GraphDeck state.
pub fn config_dir() -> PathBuf {
    match ProjectDirs::from("com", "graphdeck", "GraphDeck") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config").join("graphdeck")
        }
    }
}

//! Settings persisted as a JSON file.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use emptyarray_core::{Result, SettingsPersistence};

use crate::vault::write_atomic;

/// Stores the plugin's data record in a single JSON file, such as
/// `<vault>/.obsidian/plugins/<plugin-id>/data.json`.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsPersistence for JsonFilePersistence {
    async fn load(&self) -> Result<Option<JsonValue>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(component = "settings", path = %self.path.display(), "No saved settings");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn save(&self, data: JsonValue) -> Result<()> {
        let raw = serde_json::to_string_pretty(&data)?;
        debug!(component = "settings", path = %self.path.display(), "Saving settings");
        write_atomic(&self.path, raw.as_bytes()).await
    }
}

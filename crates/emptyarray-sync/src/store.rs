//! In-memory settings with write-through persistence.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use emptyarray_core::{Result, SettingField, SettingsPersistence, SyncSettings};

/// Holds the current [`SyncSettings`] and persists every change.
pub struct SettingsStore {
    persistence: Arc<dyn SettingsPersistence>,
    settings: RwLock<SyncSettings>,
}

impl SettingsStore {
    /// Load persisted settings merged over the defaults.
    pub async fn load(persistence: Arc<dyn SettingsPersistence>) -> Result<Self> {
        let persisted = persistence.load().await?;
        let had_record = persisted.is_some();
        let settings = SyncSettings::from_persisted(persisted);

        info!(
            component = "settings",
            had_record,
            inbox_file_path = %settings.inbox_file_path,
            objects_file_path = %settings.objects_file_path,
            daily_note_format = %settings.daily_note_format,
            "Settings loaded"
        );

        Ok(Self {
            persistence,
            settings: RwLock::new(settings),
        })
    }

    /// Copy of the current settings, for passing into a sync operation.
    pub async fn snapshot(&self) -> SyncSettings {
        self.settings.read().await.clone()
    }

    /// Persist the whole record, replacing whatever was stored.
    pub async fn save(&self) -> Result<()> {
        let settings = self.settings.read().await;
        self.persistence.save(settings.to_persisted()).await
    }

    /// Set one field and persist the whole record.
    ///
    /// The field reverts if the save fails.
    pub async fn update(&self, field: SettingField, value: String) -> Result<()> {
        let mut settings = self.settings.write().await;
        let previous = settings.get(field).to_string();
        settings.set(field, value);
        debug!(component = "settings", field = %field, "Setting changed");

        if let Err(e) = self.persistence.save(settings.to_persisted()).await {
            settings.set(field, previous);
            return Err(e);
        }
        Ok(())
    }

    /// Replace every field and persist. Nothing changes if the save fails.
    pub async fn replace(&self, new_settings: SyncSettings) -> Result<()> {
        let mut settings = self.settings.write().await;
        self.persistence.save(new_settings.to_persisted()).await?;
        *settings = new_settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emptyarray_core::mock::MemoryPersistence;
    use emptyarray_core::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_without_record_uses_defaults() {
        let store = SettingsStore::load(Arc::new(MemoryPersistence::new()))
            .await
            .unwrap();
        assert_eq!(store.snapshot().await, SyncSettings::default());
    }

    #[tokio::test]
    async fn test_load_merges_partial_record() {
        let persistence = MemoryPersistence::with_data(json!({"accessToken": "abc"}));
        let store = SettingsStore::load(Arc::new(persistence)).await.unwrap();

        let settings = store.snapshot().await;
        assert_eq!(settings.access_token, "abc");
        assert_eq!(settings.inbox_file_path, "inbox.md");
        assert_eq!(settings.objects_file_path, "objects.md");
        assert_eq!(settings.daily_note_format, "YYYY-MM-DD");
    }

    #[tokio::test]
    async fn test_load_does_not_save() {
        let persistence = MemoryPersistence::with_data(json!({"accessToken": "abc"}));
        SettingsStore::load(Arc::new(persistence.clone()))
            .await
            .unwrap();
        assert_eq!(persistence.save_count(), 0);
    }

    #[tokio::test]
    async fn test_update_persists_whole_record() {
        let persistence = MemoryPersistence::with_data(json!({"accessToken": "abc"}));
        let store = SettingsStore::load(Arc::new(persistence.clone()))
            .await
            .unwrap();

        store
            .update(SettingField::InboxFilePath, "Inbox/today.md".to_string())
            .await
            .unwrap();

        assert_eq!(persistence.save_count(), 1);
        assert_eq!(
            persistence.stored(),
            Some(json!({
                "accessToken": "abc",
                "inboxFilePath": "Inbox/today.md",
                "objectsFilePath": "objects.md",
                "dailyNoteFormat": "YYYY-MM-DD",
            }))
        );
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let persistence = MemoryPersistence::new();
        let store = SettingsStore::load(Arc::new(persistence.clone()))
            .await
            .unwrap();

        let custom = SyncSettings {
            access_token: "tok-123".to_string(),
            inbox_file_path: "a/inbox.md".to_string(),
            objects_file_path: "b/objects.md".to_string(),
            daily_note_format: "DD-MM-YYYY".to_string(),
        };
        store.replace(custom.clone()).await.unwrap();

        let reloaded = SettingsStore::load(Arc::new(persistence)).await.unwrap();
        assert_eq!(reloaded.snapshot().await, custom);
    }

    #[tokio::test]
    async fn test_save_overwrites_unknown_keys() {
        let persistence =
            MemoryPersistence::with_data(json!({"accessToken": "abc", "legacy": true}));
        let store = SettingsStore::load(Arc::new(persistence.clone()))
            .await
            .unwrap();

        store.save().await.unwrap();

        let stored = persistence.stored().unwrap();
        assert!(stored.get("legacy").is_none());
        assert_eq!(stored.as_object().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_memory_in_step_with_store() {
        let persistence = MemoryPersistence::with_data(json!({"accessToken": "abc"})).failing();
        let store = SettingsStore::load(Arc::new(persistence.clone()))
            .await
            .unwrap();

        let result = store
            .update(SettingField::AccessToken, "new".to_string())
            .await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(store.snapshot().await.access_token, "abc");
        assert_eq!(persistence.stored(), Some(json!({"accessToken": "abc"})));
    }

    #[tokio::test]
    async fn test_failed_replace_keeps_previous_settings() {
        let persistence = MemoryPersistence::new().failing();
        let store = SettingsStore::load(Arc::new(persistence)).await.unwrap();

        let custom = SyncSettings {
            access_token: "tok".to_string(),
            ..SyncSettings::default()
        };
        assert!(store.replace(custom).await.is_err());
        assert_eq!(store.snapshot().await, SyncSettings::default());
    }
}

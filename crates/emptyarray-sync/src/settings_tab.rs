//! Settings panel: four text inputs bound to the settings store.

use std::sync::Arc;
use tracing::error;

use emptyarray_core::{Result, SettingField};

use crate::store::SettingsStore;

/// One text-input row as the host's settings UI should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSettingRow {
    pub field: SettingField,
    pub name: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    /// Current value of the field.
    pub value: String,
}

/// The host's settings container.
pub trait SettingsPanel: Send {
    /// Remove every previously added row.
    fn clear(&mut self);

    fn add_text(&mut self, row: TextSettingRow);
}

/// Binds the settings panel to a [`SettingsStore`].
///
/// The host renders the rows from [`SettingsTab::display`] and reports edits
/// through [`SettingsTab::on_change`].
#[derive(Clone)]
pub struct SettingsTab {
    store: Arc<SettingsStore>,
}

impl SettingsTab {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }

    /// Rows for every field, in display order, with current values.
    pub async fn rows(&self) -> Vec<TextSettingRow> {
        let settings = self.store.snapshot().await;
        SettingField::ALL
            .into_iter()
            .map(|field| TextSettingRow {
                field,
                name: field.label(),
                description: field.description(),
                placeholder: field.placeholder(),
                value: settings.get(field).to_string(),
            })
            .collect()
    }

    /// Rebuild the panel from scratch.
    pub async fn display(&self, panel: &mut dyn SettingsPanel) {
        let rows = self.rows().await;
        panel.clear();
        for row in rows {
            panel.add_text(row);
        }
    }

    /// Apply an edit from the panel and persist all settings.
    pub async fn on_change(&self, field: SettingField, value: String) -> Result<()> {
        self.store.update(field, value).await.map_err(|e| {
            error!(component = "settings", field = %field, error = %e, "Failed to save settings");
            e
        })
    }
}

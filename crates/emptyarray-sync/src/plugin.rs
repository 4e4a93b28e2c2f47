//! Plugin lifecycle: load settings, register commands, dispatch them.

use std::sync::Arc;
use tracing::{error, info, instrument};

use emptyarray_core::{
    Clock, RemoteApi, Result, SettingsPersistence, SyncCategory, SystemClock, Vault,
};

use crate::service::SyncService;
use crate::settings_tab::SettingsTab;
use crate::store::SettingsStore;

/// A command the host exposes in its command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SyncCategory,
}

impl From<SyncCategory> for Command {
    fn from(category: SyncCategory) -> Self {
        Self {
            id: category.command_id(),
            name: category.command_name(),
            category,
        }
    }
}

/// The host's command palette.
pub trait CommandRegistry {
    fn add_command(&mut self, command: Command);
}

/// Capabilities the host hands to the plugin at load time.
#[derive(Clone)]
pub struct PluginHost {
    pub remote: Arc<dyn RemoteApi>,
    pub vault: Arc<dyn Vault>,
    pub persistence: Arc<dyn SettingsPersistence>,
    pub clock: Arc<dyn Clock>,
}

impl PluginHost {
    /// Host capabilities using the system clock.
    pub fn new(
        remote: Arc<dyn RemoteApi>,
        vault: Arc<dyn Vault>,
        persistence: Arc<dyn SettingsPersistence>,
    ) -> Self {
        Self {
            remote,
            vault,
            persistence,
            clock: Arc::new(SystemClock),
        }
    }
}

/// A loaded plugin instance.
///
/// Cheap to clone; clones share the settings store, so a host may run
/// several commands concurrently.
#[derive(Clone)]
pub struct SyncPlugin {
    store: Arc<SettingsStore>,
    service: SyncService,
}

impl SyncPlugin {
    /// Load persisted settings and wire up the sync service.
    pub async fn load(host: PluginHost) -> Result<Self> {
        let store = SettingsStore::load(host.persistence).await?;
        let service = SyncService::new(host.remote, host.vault).with_clock(host.clock);

        info!(component = "plugin", "EmptyArray sync plugin loaded");

        Ok(Self {
            store: Arc::new(store),
            service,
        })
    }

    /// Commands in registration order.
    pub fn commands() -> Vec<Command> {
        SyncCategory::ALL.into_iter().map(Command::from).collect()
    }

    pub fn register_commands(&self, registry: &mut dyn CommandRegistry) {
        for command in Self::commands() {
            registry.add_command(command);
        }
    }

    /// Run the command with `command_id`.
    ///
    /// Only an unknown id is an error; sync failures are logged by the
    /// service and never reach the caller.
    #[instrument(skip(self))]
    pub async fn execute(&self, command_id: &str) -> Result<()> {
        let category = command_id.parse::<SyncCategory>().map_err(|e| {
            error!(component = "plugin", command_id, "Unknown command");
            e
        })?;
        self.run(category).await;
        Ok(())
    }

    /// Run one category with the settings as they are right now.
    pub async fn run(&self, category: SyncCategory) {
        let settings = self.store.snapshot().await;
        self.service.sync(category, &settings).await;
    }

    pub async fn sync_daily_notes(&self) {
        self.run(SyncCategory::DailyNotes).await;
    }

    pub async fn sync_inbox(&self) {
        self.run(SyncCategory::Inbox).await;
    }

    pub async fn sync_objects(&self) {
        self.run(SyncCategory::Objects).await;
    }

    pub fn settings(&self) -> &Arc<SettingsStore> {
        &self.store
    }

    /// Settings panel bound to this plugin's store.
    pub fn settings_tab(&self) -> SettingsTab {
        SettingsTab::new(self.store.clone())
    }
}

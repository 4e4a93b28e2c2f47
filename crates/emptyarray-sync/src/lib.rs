//! # emptyarray-sync
//!
//! Syncs EmptyArray scheduled items, inbox and objects into Markdown files in
//! a note vault.
//!
//! This crate provides:
//! - [`SyncService`]: fetch → render → overwrite, one operation per category
//! - [`SettingsStore`]: settings merged over defaults, saved on every change
//! - [`SyncPlugin`]: host lifecycle (load, command registration, dispatch)
//! - [`SettingsTab`]: the four-field settings panel
//! - [`FilesystemVault`] and [`JsonFilePersistence`]: local-disk host
//!   capabilities
//! - [`init_logging`]: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use emptyarray_client::ApiClient;
//! use emptyarray_sync::{FilesystemVault, JsonFilePersistence, PluginHost, SyncPlugin};
//!
//! #[tokio::main]
//! async fn main() -> emptyarray_core::Result<()> {
//!     let host = PluginHost::new(
//!         Arc::new(ApiClient::with_defaults()?),
//!         Arc::new(FilesystemVault::new("/home/me/notes")),
//!         Arc::new(JsonFilePersistence::new("/home/me/notes/.obsidian/plugins/emptyarray-sync/data.json")),
//!     );
//!     let plugin = SyncPlugin::load(host).await?;
//!     plugin.execute("sync-inbox").await
//! }
//! ```

pub mod logging;
pub mod persistence;
pub mod plugin;
pub mod service;
pub mod settings_tab;
pub mod store;
pub mod vault;

pub use emptyarray_core::*;

pub use logging::{init_logging, LogConfig, LogFormat};
pub use persistence::JsonFilePersistence;
pub use plugin::{Command, CommandRegistry, PluginHost, SyncPlugin};
pub use service::{SyncReport, SyncService};
pub use settings_tab::{SettingsPanel, SettingsTab, TextSettingRow};
pub use store::SettingsStore;
pub use vault::{normalize_vault_path, FilesystemVault};

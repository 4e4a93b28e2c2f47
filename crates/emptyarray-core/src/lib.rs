//! # emptyarray-core
//!
//! Core types, traits, and rendering for emptyarray-sync.
//!
//! This crate provides the remote item models, the Markdown renderers, the
//! daily-note name formatter, the plugin settings record, and the capability
//! traits the sync engine consumes from its host.

pub mod date_format;
pub mod defaults;
pub mod error;
pub mod models;
pub mod render;
pub mod settings;
pub mod traits;

// In-memory capability fakes for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types at crate root
pub use date_format::{daily_note_path, format_moment};
pub use error::{Error, Result};
pub use models::{InboxItem, RemoteObject, ScheduledItem, SyncCategory};
pub use render::{render_inbox_items, render_objects, render_scheduled_items};
pub use settings::{SettingField, SyncSettings};
pub use traits::*;

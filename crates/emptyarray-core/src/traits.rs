//! Capabilities the sync engine consumes from its host.
//!
//! The note-taking host owns the network, the vault, and the plugin's
//! persisted data. These traits let the sync service and settings store run
//! against the real host or against in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde_json::Value as JsonValue;

use crate::error::Result;

// =============================================================================
// REMOTE API
// =============================================================================

/// Authenticated read access to the remote task API.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// GET `endpoint` with `Authorization: Bearer <access_token>` and return
    /// the response body.
    ///
    /// Transport failures and non-2xx statuses are errors; the body of an
    /// error response is not inspected.
    async fn get(&self, endpoint: &str, access_token: &str) -> Result<String>;
}

// =============================================================================
// HOST STORAGE
// =============================================================================

/// The host's virtual filesystem.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Replace the file at the vault-relative `path` with `content`,
    /// creating it if needed.
    async fn write(&self, path: &str, content: &str) -> Result<()>;
}

/// The host's per-plugin key-value store.
#[async_trait]
pub trait SettingsPersistence: Send + Sync {
    /// Return the stored record, or `None` if nothing was ever saved.
    async fn load(&self) -> Result<Option<JsonValue>>;

    /// Replace the stored record.
    async fn save(&self, data: JsonValue) -> Result<()>;
}

// =============================================================================
// TIME
// =============================================================================

/// Source of "now" for naming the daily note.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

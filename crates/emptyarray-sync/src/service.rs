//! Fetch, render, and write for each remote category.
//!
//! A sync operation is a straight line: GET the category's endpoint, parse
//! the JSON array, render one Markdown line per item, overwrite the
//! destination file. Any failure ends the operation before the write, so a
//! failed sync never touches the existing file.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

use emptyarray_core::{
    daily_note_path, render_inbox_items, render_objects, render_scheduled_items, Clock, InboxItem,
    RemoteApi, RemoteObject, Result, ScheduledItem, SyncCategory, SyncSettings, SystemClock, Vault,
};

/// Outcome of one successful sync operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub category: SyncCategory,
    /// Vault path that was overwritten.
    pub path: String,
    pub item_count: usize,
    /// Byte length of the written document.
    pub content_len: usize,
}

/// Runs sync operations against injected host capabilities.
///
/// Holds no settings of its own; every operation receives the settings
/// snapshot it should use.
#[derive(Clone)]
pub struct SyncService {
    remote: Arc<dyn RemoteApi>,
    vault: Arc<dyn Vault>,
    clock: Arc<dyn Clock>,
}

impl SyncService {
    /// Create a service using the system clock.
    pub fn new(remote: Arc<dyn RemoteApi>, vault: Arc<dyn Vault>) -> Self {
        Self {
            remote,
            vault,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to name the daily note.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Write today's scheduled items to the daily note.
    pub async fn sync_daily_notes(&self, settings: &SyncSettings) {
        self.sync(SyncCategory::DailyNotes, settings).await;
    }

    /// Write the inbox to the configured inbox file.
    pub async fn sync_inbox(&self, settings: &SyncSettings) {
        self.sync(SyncCategory::Inbox, settings).await;
    }

    /// Write generic objects to the configured objects file.
    pub async fn sync_objects(&self, settings: &SyncSettings) {
        self.sync(SyncCategory::Objects, settings).await;
    }

    /// Run one category, logging any failure instead of returning it.
    ///
    /// Returns the report on success so callers can surface it if they want.
    pub async fn sync(&self, category: SyncCategory, settings: &SyncSettings) -> Option<SyncReport> {
        match self.try_sync(category, settings).await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(
                    component = "sync",
                    op = category.operation(),
                    error = %e,
                    "Error syncing {}",
                    category.command_name()
                );
                None
            }
        }
    }

    /// Run one category and propagate the first failure.
    #[instrument(skip(self, settings), fields(op = category.operation()))]
    pub async fn try_sync(
        &self,
        category: SyncCategory,
        settings: &SyncSettings,
    ) -> Result<SyncReport> {
        let start = Instant::now();
        let endpoint = category.endpoint();

        debug!(component = "sync", endpoint, "Fetching");
        let body = self.remote.get(endpoint, &settings.access_token).await?;

        let (content, item_count) = render_body(category, &body)?;
        let path = self.destination(category, settings);

        self.vault.write(&path, &content).await?;

        info!(
            component = "sync",
            path = %path,
            item_count,
            content_len = content.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "{} complete",
            category.command_name()
        );

        Ok(SyncReport {
            category,
            path,
            item_count,
            content_len: content.len(),
        })
    }

    /// Vault path a category is written to.
    ///
    /// The daily note is named from the current time; the other categories
    /// use their configured path verbatim.
    pub fn destination(&self, category: SyncCategory, settings: &SyncSettings) -> String {
        match category {
            SyncCategory::DailyNotes => {
                daily_note_path(&self.clock.now(), &settings.daily_note_format)
            }
            SyncCategory::Inbox => settings.inbox_file_path.clone(),
            SyncCategory::Objects => settings.objects_file_path.clone(),
        }
    }
}

/// Parse a response body as the category's item array and render it.
fn render_body(category: SyncCategory, body: &str) -> Result<(String, usize)> {
    let rendered = match category {
        SyncCategory::DailyNotes => {
            let items: Vec<ScheduledItem> = serde_json::from_str(body)?;
            (render_scheduled_items(&items), items.len())
        }
        SyncCategory::Inbox => {
            let items: Vec<InboxItem> = serde_json::from_str(body)?;
            (render_inbox_items(&items), items.len())
        }
        SyncCategory::Objects => {
            let objects: Vec<RemoteObject> = serde_json::from_str(body)?;
            (render_objects(&objects), objects.len())
        }
    };
    Ok(rendered)
}

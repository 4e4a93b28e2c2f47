//! Remote item shapes returned by the EmptyArray API and the sync categories
//! that select them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::error::Error;

// =============================================================================
// REMOTE ITEMS
// =============================================================================

/// A task scheduled for a given day (`GET /v1/scheduled-items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledItem {
    pub title: String,
    /// Rendered verbatim, never reformatted.
    pub due_date: String,
}

/// An unprocessed inbox entry (`GET /v1/inbox`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxItem {
    pub title: String,
}

/// Wire shape of a generic object before dispatching on `type`.
#[derive(Debug, Clone, Deserialize)]
struct RawObject {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    title: String,
    #[serde(default)]
    url: Option<String>,
}

/// A generic object (`GET /v1/objects`), discriminated by its `type` field.
///
/// Unrecognized or missing types deserialize to [`RemoteObject::Other`]
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawObject")]
pub enum RemoteObject {
    Task { title: String },
    Bookmark { title: String, url: Option<String> },
    Other { kind: Option<String>, title: String },
}

impl From<RawObject> for RemoteObject {
    fn from(raw: RawObject) -> Self {
        match raw.kind.as_deref() {
            Some("task") => RemoteObject::Task { title: raw.title },
            Some("bookmark") => RemoteObject::Bookmark {
                title: raw.title,
                url: raw.url,
            },
            _ => RemoteObject::Other {
                kind: raw.kind,
                title: raw.title,
            },
        }
    }
}

impl RemoteObject {
    pub fn title(&self) -> &str {
        match self {
            RemoteObject::Task { title }
            | RemoteObject::Bookmark { title, .. }
            | RemoteObject::Other { title, .. } => title,
        }
    }
}

// =============================================================================
// SYNC CATEGORIES
// =============================================================================

/// One remote category, each with its own endpoint, destination and command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncCategory {
    /// Scheduled items, written to the daily note.
    DailyNotes,
    Inbox,
    Objects,
}

impl SyncCategory {
    pub const ALL: [SyncCategory; 3] = [
        SyncCategory::DailyNotes,
        SyncCategory::Inbox,
        SyncCategory::Objects,
    ];

    /// API path relative to the base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            SyncCategory::DailyNotes => defaults::SCHEDULED_ITEMS_ENDPOINT,
            SyncCategory::Inbox => defaults::INBOX_ENDPOINT,
            SyncCategory::Objects => defaults::OBJECTS_ENDPOINT,
        }
    }

    /// Command id registered with the host.
    pub fn command_id(self) -> &'static str {
        match self {
            SyncCategory::DailyNotes => "sync-daily-notes",
            SyncCategory::Inbox => "sync-inbox",
            SyncCategory::Objects => "sync-objects",
        }
    }

    /// Human-readable command name shown in the host's command palette.
    pub fn command_name(self) -> &'static str {
        match self {
            SyncCategory::DailyNotes => "Sync Daily Notes",
            SyncCategory::Inbox => "Sync Inbox",
            SyncCategory::Objects => "Sync Objects",
        }
    }

    /// Operation name used in log events.
    pub fn operation(self) -> &'static str {
        match self {
            SyncCategory::DailyNotes => "sync_daily_notes",
            SyncCategory::Inbox => "sync_inbox",
            SyncCategory::Objects => "sync_objects",
        }
    }
}

impl fmt::Display for SyncCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_id())
    }
}

impl FromStr for SyncCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SyncCategory::ALL
            .into_iter()
            .find(|category| category.command_id() == s)
            .ok_or_else(|| Error::NotFound(format!("command {}", s)))
    }
}

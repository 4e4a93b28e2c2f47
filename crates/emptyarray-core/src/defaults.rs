//! Centralized default constants for emptyarray-sync.
//!
//! All crates reference these constants instead of defining their own
//! literals for endpoints, settings defaults, or command metadata.

// =============================================================================
// REMOTE API
// =============================================================================

/// Production base URL of the EmptyArray API.
pub const API_BASE_URL: &str = "https://api.emptyarray.co";

/// Endpoint returning scheduled items (`[{title, due_date}]`).
pub const SCHEDULED_ITEMS_ENDPOINT: &str = "/v1/scheduled-items";

/// Endpoint returning inbox items (`[{title}]`).
pub const INBOX_ENDPOINT: &str = "/v1/inbox";

/// Endpoint returning generic objects (`[{type, title, url?}]`).
pub const OBJECTS_ENDPOINT: &str = "/v1/objects";

// =============================================================================
// SETTINGS
// =============================================================================

/// Access token used before the user configures one (sent as-is).
pub const ACCESS_TOKEN: &str = "";

/// Vault path the inbox is written to.
pub const INBOX_FILE_PATH: &str = "inbox.md";

/// Vault path the objects list is written to.
pub const OBJECTS_FILE_PATH: &str = "objects.md";

/// Moment-style format used to name the daily note.
pub const DAILY_NOTE_FORMAT: &str = "YYYY-MM-DD";

/// Extension appended to the formatted daily-note name.
pub const DAILY_NOTE_EXTENSION: &str = ".md";

// =============================================================================
// LOGGING
// =============================================================================

/// Default `tracing` filter directive.
pub const LOG_FILTER: &str = "emptyarray_sync=info,emptyarray_client=info,emptyarray_core=info";

/// File name used when file logging is enabled without an explicit name.
pub const LOG_FILE_NAME: &str = "emptyarray-sync.log";

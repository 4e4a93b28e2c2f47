//! Plugin configuration and its persisted representation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use tracing::warn;

use crate::defaults;

/// The four user-facing settings.
///
/// Persisted as one flat JSON object with camelCase keys
/// (`accessToken`, `inboxFilePath`, `objectsFilePath`, `dailyNoteFormat`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSettings {
    /// Bearer token for the remote API. Never validated locally.
    pub access_token: String,
    pub inbox_file_path: String,
    pub objects_file_path: String,
    /// Moment-style pattern naming the daily note.
    pub daily_note_format: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            access_token: defaults::ACCESS_TOKEN.to_string(),
            inbox_file_path: defaults::INBOX_FILE_PATH.to_string(),
            objects_file_path: defaults::OBJECTS_FILE_PATH.to_string(),
            daily_note_format: defaults::DAILY_NOTE_FORMAT.to_string(),
        }
    }
}

impl SyncSettings {
    /// Overlay a persisted record onto the defaults, field by field.
    ///
    /// Keys holding a string replace the default. Keys with any other value
    /// are ignored with a warning, as are unknown keys. A missing record or a
    /// payload that is not an object yields the defaults.
    pub fn from_persisted(persisted: Option<JsonValue>) -> Self {
        let mut settings = Self::default();

        let map = match persisted {
            None | Some(JsonValue::Null) => return settings,
            Some(JsonValue::Object(map)) => map,
            Some(other) => {
                warn!(
                    component = "settings",
                    kind = json_kind(&other),
                    "Persisted settings are not an object, using defaults"
                );
                return settings;
            }
        };

        for (key, value) in map {
            let Some(field) = SettingField::from_key(&key) else {
                continue;
            };
            match value {
                JsonValue::String(s) => settings.set(field, s),
                other => warn!(
                    component = "settings",
                    field = %field,
                    kind = json_kind(&other),
                    "Ignoring persisted setting with non-string value"
                ),
            }
        }

        settings
    }

    /// Serialize the whole record for the persistence layer.
    pub fn to_persisted(&self) -> JsonValue {
        let map = SettingField::ALL
            .into_iter()
            .map(|field| {
                (
                    field.key().to_string(),
                    JsonValue::String(self.get(field).to_string()),
                )
            })
            .collect::<serde_json::Map<_, _>>();
        JsonValue::Object(map)
    }

    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::AccessToken => &self.access_token,
            SettingField::InboxFilePath => &self.inbox_file_path,
            SettingField::ObjectsFilePath => &self.objects_file_path,
            SettingField::DailyNoteFormat => &self.daily_note_format,
        }
    }

    pub fn set(&mut self, field: SettingField, value: String) {
        match field {
            SettingField::AccessToken => self.access_token = value,
            SettingField::InboxFilePath => self.inbox_file_path = value,
            SettingField::ObjectsFilePath => self.objects_file_path = value,
            SettingField::DailyNoteFormat => self.daily_note_format = value,
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Identifies one editable field of [`SyncSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    AccessToken,
    InboxFilePath,
    ObjectsFilePath,
    DailyNoteFormat,
}

impl SettingField {
    /// Display order in the settings panel.
    pub const ALL: [SettingField; 4] = [
        SettingField::AccessToken,
        SettingField::InboxFilePath,
        SettingField::ObjectsFilePath,
        SettingField::DailyNoteFormat,
    ];

    /// Key used in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            SettingField::AccessToken => "accessToken",
            SettingField::InboxFilePath => "inboxFilePath",
            SettingField::ObjectsFilePath => "objectsFilePath",
            SettingField::DailyNoteFormat => "dailyNoteFormat",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingField::AccessToken => "Access Token",
            SettingField::InboxFilePath => "Inbox File Path",
            SettingField::ObjectsFilePath => "Objects File Path",
            SettingField::DailyNoteFormat => "Daily Note Format",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SettingField::AccessToken => "EmptyArray API access token",
            SettingField::InboxFilePath => "Path to the inbox file",
            SettingField::ObjectsFilePath => "Path to the objects file",
            SettingField::DailyNoteFormat => "Format for daily note filenames (moment.js format)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SettingField::AccessToken => "Enter your access token",
            SettingField::InboxFilePath => defaults::INBOX_FILE_PATH,
            SettingField::ObjectsFilePath => defaults::OBJECTS_FILE_PATH,
            SettingField::DailyNoteFormat => defaults::DAILY_NOTE_FORMAT,
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

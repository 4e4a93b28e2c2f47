//! In-memory capability fakes for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use emptyarray_core::mock::{MemoryVault, MockRemoteApi};
//!
//! let remote = MockRemoteApi::new().with_body("/v1/inbox", r#"[{"title":"Call Bob"}]"#);
//! let vault = MemoryVault::new();
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::traits::{Clock, RemoteApi, SettingsPersistence, Vault};

// =============================================================================
// REMOTE API
// =============================================================================

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
    TransportError(String),
}

/// A recorded `RemoteApi::get` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub endpoint: String,
    pub access_token: String,
}

/// Remote API returning canned responses per endpoint.
///
/// Endpoints without a canned response answer 404.
#[derive(Clone, Default)]
pub struct MockRemoteApi {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<MockRequest>>>,
}

impl MockRemoteApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with a 200 and `body`.
    pub fn with_body(self, endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        self.set(endpoint, MockResponse::Body(body.into()));
        self
    }

    /// Answer `endpoint` with a JSON body.
    pub fn with_json(self, endpoint: impl Into<String>, body: &JsonValue) -> Self {
        self.with_body(endpoint, body.to_string())
    }

    /// Answer `endpoint` with a non-2xx `status`.
    pub fn with_status(self, endpoint: impl Into<String>, status: u16) -> Self {
        self.set(endpoint, MockResponse::Status(status));
        self
    }

    /// Fail `endpoint` before any response arrives.
    pub fn with_transport_error(
        self,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.set(endpoint, MockResponse::TransportError(message.into()));
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn set(&self, endpoint: impl Into<String>, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.into(), response);
    }
}

#[async_trait]
impl RemoteApi for MockRemoteApi {
    async fn get(&self, endpoint: &str, access_token: &str) -> Result<String> {
        self.requests.lock().unwrap().push(MockRequest {
            endpoint: endpoint.to_string(),
            access_token: access_token.to_string(),
        });

        let response = self.responses.lock().unwrap().get(endpoint).cloned();
        match response {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(Error::HttpStatus {
                endpoint: endpoint.to_string(),
                status,
            }),
            Some(MockResponse::TransportError(message)) => Err(Error::Request(message)),
            None => Err(Error::HttpStatus {
                endpoint: endpoint.to_string(),
                status: 404,
            }),
        }
    }
}

// =============================================================================
// VAULT
// =============================================================================

/// Vault holding files in a map.
#[derive(Clone, Default)]
pub struct MemoryVault {
    files: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<String>>>,
    read_only: bool,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vault whose writes always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed a file without counting it as a write.
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Paths written so far, in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Vault for MemoryVault {
    async fn write(&self, path: &str, content: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("vault is read-only: {}", path),
            )));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        self.writes.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Persistence holding the record in memory.
#[derive(Clone, Default)]
pub struct MemoryPersistence {
    data: Arc<Mutex<Option<JsonValue>>>,
    saves: Arc<Mutex<usize>>,
    failing: bool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `data` already stored.
    pub fn with_data(data: JsonValue) -> Self {
        let persistence = Self::default();
        *persistence.data.lock().unwrap() = Some(data);
        persistence
    }

    /// Make every save fail, leaving the stored record as it is.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn stored(&self) -> Option<JsonValue> {
        self.data.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl SettingsPersistence for MemoryPersistence {
    async fn load(&self) -> Result<Option<JsonValue>> {
        Ok(self.data.lock().unwrap().clone())
    }

    async fn save(&self, data: JsonValue) -> Result<()> {
        if self.failing {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "settings store is read-only",
            )));
        }
        *self.data.lock().unwrap() = Some(data);
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

// =============================================================================
// CLOCK
// =============================================================================

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Noon local time on the given day.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .earliest()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

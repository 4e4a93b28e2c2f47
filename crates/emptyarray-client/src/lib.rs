//! # emptyarray-client
//!
//! HTTP client for the EmptyArray task API.
//!
//! Implements [`emptyarray_core::RemoteApi`] on top of `reqwest`: every call
//! is a bearer-authenticated GET against the configured base URL.
//!
//! # Example
//!
//! ```rust,no_run
//! use emptyarray_client::ApiClient;
//! use emptyarray_core::RemoteApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::with_defaults().unwrap();
//!     let body = client.get("/v1/inbox", "my-token").await.unwrap();
//!     println!("{}", body);
//! }
//! ```

pub mod client;

pub use client::{ApiClient, ApiClientConfig};

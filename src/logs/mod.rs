//! logs.tf API client and types.
//!
//! **Feature flag:** `logs` (enabled by default)
//!
//! This module provides a client for [logs.tf](https://logs.tf), which stores, parses and
//! serves Team Fortress 2 match logs.
//!
//! # Overview
//!
//! Reads are anonymous. Uploading requires an API key, set through [`Config`].
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/api/v1/log/{id}` | GET | Fetch a parsed log |
//! | `/api/v1/log` | GET | Search logs by map, players, title or uploader |
//! | `/upload` | POST | Upload a server log (multipart form) |
//! | `/logs/log_{id}.log.zip` | GET | Download the zipped raw server log |
//!
//! # Example
//!
//! ```no_run
//! use logstf_client_sdk::logs::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let log = client.get_by_id("3456789").await?;
//! println!("{} on {}", log.info.title, log.info.map);
//!
//! let archive = client.get_raw_log("3456789").await?;
//! println!("{} bytes zipped", archive.len());
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://logs.tf/api/v1`.

pub mod client;
pub mod types;

pub use client::{Client, Config};

//! A [`BlockStore`](blockpress_engine::BlockStore) backed by the Notion REST API.
//!
//! - **`wire`**: block, rich text and page property JSON
//! - **`client`**: blocking HTTP client issuing the create and append calls
//! - **`error`**: transport, API and decode failures

pub mod client;
pub mod error;
pub mod wire;

pub use client::NotionClient;
pub use error::NotionError;

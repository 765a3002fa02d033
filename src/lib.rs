//! couchlite Rust Client SDK
//!
//! A lightweight HTTP client for CouchDB-compatible document stores,
//! built for querying hosted Cloudant databases.
//!
//! # Example
//!
//! ```no_run
//! use couchlite::{view, DocStoreClient};
//!
//! #[tokio::main]
//! async fn main() -> couchlite::Result<()> {
//!     // Connect to a Cloudant account
//!     let client = DocStoreClient::new("username.cloudant.com", "apikey", "apipass");
//!
//!     // Server and software version info
//!     let info = client.account_info().await?;
//!     println!("Server: {info}");
//!
//!     // Databases visible to these credentials
//!     let dbs = client.databases().await?;
//!     println!("Databases: {dbs:?}");
//!
//!     // Run a view
//!     let result = client
//!         .query_view(&view("albums", "app", "by_artist").key("alice").limit(10))
//!         .await?;
//!     for row in &result.rows {
//!         println!("{} -> {}", row.key, row.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod query;
pub mod view;

pub use client::{ClientConfig, DocStoreClient, Scheme};
pub use error::{Error, Result};
pub use query::{view, ViewQuery};
pub use view::{ViewResult, ViewRow};

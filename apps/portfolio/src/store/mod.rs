//! Message store: the remote table the contact form writes into.
//!
//! `AppState` holds an `Arc<dyn MessageStore>`, chosen at startup from
//! `Config::store`. Handlers and the contact form only see the trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::message::NewMessage;

pub mod postgres;
pub mod rest;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A write-mostly view of the `messages` table.
///
/// There is no read path for stored messages: the site creates rows and
/// forgets them. `probe` exists only as a connectivity check.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Inserts one row. Exactly one attempt, no retry.
    async fn insert(&self, message: &NewMessage) -> Result<(), StoreError>;

    /// Cheap read against the table to confirm the store is reachable.
    async fn probe(&self) -> Result<(), StoreError>;

    /// Short backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

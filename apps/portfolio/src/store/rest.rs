//! PostgREST client for the `messages` table (the API a hosted Supabase
//! project exposes under `/rest/v1`).
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::models::message::NewMessage;
use crate::store::{MessageStore, StoreError};

const REST_PREFIX: &str = "rest/v1";

/// Inserts rows over HTTP.
///
/// No client timeout is configured: an insert runs until the store answers
/// or the connection fails.
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    table_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, table: &str, api_key: String) -> Self {
        Self {
            client: Client::new(),
            table_url: format!("{}/{REST_PREFIX}/{table}", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl MessageStore for RestStore {
    async fn insert(&self, message: &NewMessage) -> Result<(), StoreError> {
        // PostgREST takes an array for bulk inserts; one row here.
        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("prefer", "return=minimal")
            .json(&[message])
            .send()
            .await?;

        let response = ensure_success(response).await?;
        debug!("Store accepted insert (status {})", response.status());
        Ok(())
    }

    async fn probe(&self) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.get(&self.table_url))
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "rest"
    }
}

/// Turns a non-2xx response into `StoreError::Rejected`, preferring the
/// `message` field of a PostgREST error object over the raw text.
async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = postgrest_message(&body).unwrap_or(body);

    Err(StoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Only a JSON object with a string `message` counts as a PostgREST error.
fn postgrest_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

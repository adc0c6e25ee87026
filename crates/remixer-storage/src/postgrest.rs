//! PostgREST (Supabase REST) backend.
//!
//! Operations map onto the table endpoint `{base}/rest/v1/{table}`:
//!
//! ```text
//! insert        POST   ?            body [{content}]   Prefer: return=representation
//! select_all    GET    ?select=*&order=created_at.desc
//! delete        DELETE ?id=eq.{id}
//! select_by_id  GET    ?select=*&id=eq.{id}
//! ```
//!
//! Every request carries the key both as `apikey` and as a bearer token, the
//! way Supabase expects an anon key.

use std::time::Duration;

use remixer_core::credential::ApiKey;
use remixer_core::models::saved_item::{NewSavedItem, SavedItem};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::backend::{BoxFuture, RowBackend};
use crate::error::StoreError;

pub const DEFAULT_TABLE: &str = "tweets";

pub struct PostgrestBackend {
    http: reqwest::Client,
    table_url: String,
    api_key: ApiKey,
}

impl PostgrestBackend {
    pub fn new(
        base_url: &str,
        table: &str,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(Self {
            http,
            table_url: table_url(base_url, table)?,
            api_key,
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn authed(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.http
            .request(method, &self.table_url)
            .header("apikey", self.api_key.expose())
            .bearer_auth(self.api_key.expose())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, StoreError> {
        let body = self.send_text(req).await?;
        serde_json::from_str(&body)
            .map_err(|e| StoreError::UnexpectedResponse(format!("{e}: {body}")))
    }

    async fn send_text(&self, req: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let resp = req
            .send()
            .await
            .map_err(|e| StoreError::TransportFailure(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::TransportFailure(e.to_string()))?;
        check_status(status, &body)?;
        Ok(body)
    }

    async fn insert_row(&self, row: &NewSavedItem) -> Result<SavedItem, StoreError> {
        let req = self
            .authed(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(&[row]);
        let rows: Vec<SavedItem> = self.send_json(req).await?;
        rows.into_iter().next().ok_or_else(|| {
            StoreError::UnexpectedResponse("insert returned no row".to_string())
        })
    }

    async fn select_rows(&self) -> Result<Vec<SavedItem>, StoreError> {
        let req = self
            .authed(reqwest::Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        self.send_json(req).await
    }

    async fn delete_row(&self, id: &str) -> Result<(), StoreError> {
        let filter = eq_filter(id);
        let req = self
            .authed(reqwest::Method::DELETE)
            .query(&[("id", filter.as_str())]);
        self.send_text(req).await?;
        debug!(id, "delete request accepted");
        Ok(())
    }

    async fn select_row(&self, id: &str) -> Result<Option<SavedItem>, StoreError> {
        let filter = eq_filter(id);
        let req = self
            .authed(reqwest::Method::GET)
            .query(&[("select", "*"), ("id", filter.as_str())]);
        let rows: Vec<SavedItem> = self.send_json(req).await?;
        Ok(rows.into_iter().next())
    }
}

impl RowBackend for PostgrestBackend {
    fn insert<'a>(&'a self, row: &'a NewSavedItem) -> BoxFuture<'a, Result<SavedItem, StoreError>> {
        Box::pin(self.insert_row(row))
    }

    fn select_all(&self) -> BoxFuture<'_, Result<Vec<SavedItem>, StoreError>> {
        Box::pin(self.select_rows())
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(self.delete_row(id))
    }

    fn select_by_id<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Option<SavedItem>, StoreError>> {
        Box::pin(self.select_row(id))
    }
}

/// `{base}/rest/v1/{table}`. Table names are limited to identifier characters.
pub fn table_url(base_url: &str, table: &str) -> Result<String, StoreError> {
    let valid = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(StoreError::Config(format!("invalid table name: {table:?}")));
    }
    Ok(format!("{}/rest/v1/{table}", base_url.trim_end_matches('/')))
}

pub fn eq_filter(id: &str) -> String {
    format!("eq.{id}")
}

/// Map a non-success PostgREST status onto the store error taxonomy.
pub fn check_status(status: u16, body: &str) -> Result<(), StoreError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(StoreError::Unauthorized),
        other => Err(StoreError::Rejected {
            status: other,
            message: error_message(body),
        }),
    }
}

/// PostgREST errors are `{"message": ...}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

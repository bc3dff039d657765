//! Client for the Bitrise API's listing endpoints.
//!
//! One client per invocation, one request per command. The bearer token is
//! installed as a default header so every call is authenticated the same way.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::pagination::PaginationQuery;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("authentication token is not a valid header value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),
}

pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(token: &str, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(ApiError::InvalidToken)?;
        headers.insert(AUTHORIZATION, value);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(ApiClient {
            base_url: base_url.into(),
            client,
        })
    }

    /// List the applications of the authenticated account.
    pub async fn list_apps(&self, query: &PaginationQuery) -> Result<Page<App>, ApiError> {
        self.fetch_page(format!("{}/me/apps", self.base_url), query)
            .await
    }

    /// List the builds of one application.
    pub async fn list_builds(
        &self,
        app_slug: &str,
        query: &PaginationQuery,
    ) -> Result<Page<Build>, ApiError> {
        self.fetch_page(format!("{}/apps/{}/builds", self.base_url, app_slug), query)
            .await
    }

    async fn fetch_page<T>(&self, url: String, query: &PaginationQuery) -> Result<Page<T>, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let resp = self.client.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            // failure bodies carry a {"message": ...} envelope, fall back to
            // the raw text when they don't
            let body = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(ApiError::Status { status, body });
        }
        Ok(resp.json().await?)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// One page of a listing response.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    pub paging: Option<Paging>,
}

#[derive(Deserialize, Debug)]
pub struct Paging {
    pub total_item_count: Option<u64>,
    pub page_item_limit: Option<u64>,
    /// Cursor of the next page, absent on the last one.
    pub next: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct App {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub repo_owner: Option<String>,
    #[serde(default)]
    pub is_disabled: bool,
}

#[derive(Deserialize, Debug)]
pub struct Build {
    pub slug: String,
    #[serde(default)]
    pub build_number: Option<i64>,
    #[serde(default)]
    pub status_text: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub triggered_workflow: Option<String>,
    #[serde(default)]
    pub triggered_at: Option<String>,
}

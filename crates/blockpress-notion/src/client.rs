use std::time::Duration;

use blockpress_engine::{Block, BlockStore, ContainerId, ContainerRequest};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::error::NotionError;
use crate::wire;

pub const DEFAULT_API_BASE: &str = "https://api.notion.com";
pub const DEFAULT_API_VERSION: &str = "2022-06-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Blocking Notion API client.
///
/// Each [`BlockStore`] call is exactly one HTTP request; retries and
/// batching are left to the caller.
pub struct NotionClient {
    http: Client,
    api_base: String,
    api_version: String,
    token: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Result<Self, NotionError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| NotionError::Http {
                url: DEFAULT_API_BASE.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: token.into(),
        })
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn send(&self, method: reqwest::Method, path: &str, body: &Value) -> Result<Response, NotionError> {
        let url = format!("{}{path}", self.api_base);
        log::debug!("{method} {url}");
        let response = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
            .json(body)
            .send()
            .map_err(|source| NotionError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ApiError>(&text) {
            Ok(e) => (e.code, e.message),
            Err(_) => ("unknown".to_string(), text),
        };
        Err(NotionError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

impl BlockStore for NotionClient {
    type Error = NotionError;

    fn create_container(
        &mut self,
        request: &ContainerRequest,
        children: &[Block],
    ) -> Result<ContainerId, NotionError> {
        let body = wire::create_page_body(request, children);
        let response = self.send(reqwest::Method::POST, "/v1/pages", &body)?;
        let text = response.text().map_err(|source| NotionError::Http {
            url: format!("{}/v1/pages", self.api_base),
            source,
        })?;
        let created: Created =
            serde_json::from_str(&text).map_err(|source| NotionError::Decode { source })?;
        Ok(ContainerId::new(created.id))
    }

    fn append_children(
        &mut self,
        container: &ContainerId,
        children: &[Block],
    ) -> Result<(), NotionError> {
        let body = wire::append_children_body(children);
        let path = format!("/v1/blocks/{container}/children");
        self.send(reqwest::Method::PATCH, &path, &body)?;
        Ok(())
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("Notion API returned {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to decode Notion response: {source}")]
    Decode { source: serde_json::Error },
}

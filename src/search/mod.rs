// src/search/mod.rs
//
// Google Custom Search collaborator. Every failure mode here degrades to
// an empty result list; a chat request without context is better than a
// failed chat request.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SearchConfig;

/// Normalized unit of retrieved text context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub title: String,
    pub link: String,
}

impl Document {
    /// A context-only document with no provenance, used when the context
    /// is synthesized rather than retrieved.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: String::new(),
            link: String::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum SearchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("search API denied the request: {0}")]
    Denied(String),
}

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

pub struct SearchClient {
    client: Client,
    api_key: Option<String>,
    engine_id: Option<String>,
    num_results: usize,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            engine_id: config.engine_id.clone(),
            num_results: config.num_results,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Runs a web search and maps results into documents. Missing
    /// credentials or any upstream failure yield an empty list.
    pub async fn search(&self, query: &str) -> Vec<Document> {
        let (Some(api_key), Some(engine_id)) = (self.api_key.as_deref(), self.engine_id.as_deref())
        else {
            warn!("Custom Search credentials missing, returning empty results");
            return Vec::new();
        };

        match self.request(api_key, engine_id, query).await {
            Ok(docs) => {
                debug!("web search returned {} documents", docs.len());
                docs
            }
            Err(err) => {
                warn!("web search failed: {}", err);
                Vec::new()
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        engine_id: &str,
        query: &str,
    ) -> Result<Vec<Document>, SearchError> {
        let response = self
            .client
            .get(CUSTOM_SEARCH_URL)
            .query(&[
                ("key", api_key),
                ("cx", engine_id),
                ("q", query),
                ("num", &self.num_results.to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Denied(body));
        }

        let payload: SearchResponse = response.error_for_status()?.json().await?;

        Ok(payload
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| Document {
                content: item.snippet.unwrap_or_default(),
                title: item.title.unwrap_or_default(),
                link: item.link.unwrap_or_default(),
            })
            .collect())
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Deserialize)]
struct SearchItem {
    snippet: Option<String>,
    title: Option<String>,
    link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    #[tokio::test]
    async fn missing_credentials_return_empty() {
        let client = SearchClient::new(&SearchConfig {
            api_key: None,
            engine_id: None,
            num_results: 5,
            timeout_secs: 10,
        });
        assert!(client.search("composting").await.is_empty());
    }

    #[tokio::test]
    async fn partial_credentials_return_empty() {
        let client = SearchClient::new(&SearchConfig {
            api_key: Some("key".to_string()),
            engine_id: None,
            num_results: 5,
            timeout_secs: 10,
        });
        assert!(client.search("composting").await.is_empty());
    }

    #[test]
    fn items_map_to_documents() {
        let payload: SearchResponse = serde_json::from_str(
            r#"{"items": [{"snippet": "text", "title": "t", "link": "https://x"},
                          {"title": "no snippet"}]}"#,
        )
        .unwrap();

        let docs: Vec<Document> = payload
            .items
            .unwrap()
            .into_iter()
            .map(|item| Document {
                content: item.snippet.unwrap_or_default(),
                title: item.title.unwrap_or_default(),
                link: item.link.unwrap_or_default(),
            })
            .collect();

        assert_eq!(docs[0].content, "text");
        assert_eq!(docs[0].link, "https://x");
        assert_eq!(docs[1].content, "");
        assert_eq!(docs[1].title, "no snippet");
    }
}

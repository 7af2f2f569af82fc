//! Game Catalog Client
//!
//! Name search against the RAWG games API. Results carry the RAWG id,
//! the display name and the background image used as the cover.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::domain::{DomainError, DomainResult};

/// Results returned per search
const PAGE_SIZE: u32 = 10;

/// A search hit as sent to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogGame {
    pub id: u32,
    pub name: String,
    pub cover_url: String,
}

#[derive(Deserialize)]
struct RawgSearchResponse {
    #[serde(default)]
    results: Vec<RawgGame>,
}

#[derive(Deserialize)]
struct RawgGame {
    id: u32,
    name: String,
    background_image: Option<String>,
}

/// Decode a RAWG search body. Missing covers become an empty string.
pub fn parse_search_response(body: &str) -> DomainResult<Vec<CatalogGame>> {
    let response: RawgSearchResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Upstream(format!("unexpected catalog response: {}", e)))?;
    Ok(response
        .results
        .into_iter()
        .map(|g| CatalogGame {
            id: g.id,
            name: g.name,
            cover_url: g.background_image.unwrap_or_default(),
        })
        .collect())
}

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.rawg_base_url.clone(),
            api_key: config.rawg_api_key.clone(),
        }
    }

    pub async fn search_by_name(&self, query: &str) -> DomainResult<Vec<CatalogGame>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::Upstream("RAWG_API_KEY is not set".to_string()))?;

        let page_size = PAGE_SIZE.to_string();
        let response = self
            .http
            .get(format!("{}/games", self.base_url))
            .query(&[("search", query), ("key", api_key), ("page_size", page_size.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("catalog unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Upstream(format!("catalog returned {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Upstream(format!("reading catalog response: {}", e)))?;
        let games = parse_search_response(&body)?;
        log::debug!("[CATALOG] {:?} -> {} results", query, games.len());
        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "count": 2,
            "results": [
                {"id": 3498, "name": "Hades", "background_image": "https://media.rawg.io/hades.jpg", "rating": 4.4},
                {"id": 58175, "name": "Hades II", "background_image": null}
            ]
        }"#;

        let games = parse_search_response(body).unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0], CatalogGame {
            id: 3498,
            name: "Hades".to_string(),
            cover_url: "https://media.rawg.io/hades.jpg".to_string(),
        });
        assert_eq!(games[1].cover_url, "");
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(parse_search_response(r#"{"count": 0}"#).unwrap().is_empty());
        assert!(matches!(parse_search_response("<html>"), Err(DomainError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_upstream_error() {
        let config = AppConfig::from_lookup(|_| None);
        let client = CatalogClient::new(&config);

        let err = client.search_by_name("hades").await.unwrap_err();

        assert!(matches!(err, DomainError::Upstream(_)));
        assert!(client.search_by_name("   ").await.unwrap().is_empty());
    }
}

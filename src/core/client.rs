use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::sync::Arc;
use url::Url;

use crate::error::search::SearchError;
use crate::http::api_key::ApiKeyMiddleware;
use crate::model::search_response::SearchResponse;

/// The HTTP capability the controller is constructed over. Tests swap in
/// stub implementations; the binary uses [`HttpSearchClient`].
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search(&self, course_name: &str) -> Result<SearchResponse, SearchError>;
}

pub struct HttpSearchClient {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl HttpSearchClient {
    pub fn new(base_url: Url, api_key: Option<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, "application/json".parse().unwrap());
        headers.insert(
            USER_AGENT,
            concat!("course_search/", env!("CARGO_PKG_VERSION")).parse().unwrap(),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        let client = ClientBuilder::new(client)
            .with(ApiKeyMiddleware {
                key_fn: Arc::new(move || api_key.clone()),
            })
            .build();

        HttpSearchClient { client, base_url }
    }

    // The query value goes through the Url encoder, never string interpolation.
    fn search_url(&self, course_name: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/search");
        url.set_query(None);
        url.query_pairs_mut().append_pair("course_name", course_name);
        url
    }
}

#[async_trait]
impl SearchTransport for HttpSearchClient {
    async fn search(&self, course_name: &str) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(course_name);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::transport(format!(
                "{} returned {}",
                url, status
            )));
        }

        let body = response.text().await?;
        let data: SearchResponse =
            serde_json::from_str(&body).map_err(|err| SearchError::Transport {
                message: format!("search response did not decode: {}", err),
                source: Some(Box::new(err)),
            })?;
        Ok(data)
    }
}

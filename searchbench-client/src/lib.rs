use searchbench_common::{ErrorResponse, Result, SearchBenchError};
use serde::Deserialize;

/// SearchBench client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend address as bare `host:port`.
    pub addr: String,
}

/// Decoded body of a successful search request.
///
/// `hits` is optional on purpose: a backend can answer 200 with a body that
/// carries no hits object at all, and callers decide how to treat that.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// Server-side processing time in milliseconds, as reported by the backend.
    #[serde(rename = "took")]
    pub took_ms: u64,
    #[serde(default)]
    pub timed_out: bool,
    pub hits: Option<Hits>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Hits {
    #[serde(default)]
    pub total: u64,
    pub hits: Vec<Hit>,
}

/// A single matched document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Hit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: serde_json::Value,
}

/// SearchBench Client
pub struct Client {
    pub config: ClientConfig,
    http_client: reqwest::blocking::Client,
}

impl Client {
    /// Create a new client with the given configuration.
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| SearchBenchError::NetworkError(e.to_string()))?;
        Ok(Self { config, http_client })
    }

    /// Build the search URL for an index against the configured backend.
    pub fn build_search_url(&self, index: &str) -> String {
        format!("http://{}/{}/_search", self.config.addr, index)
    }

    /// Execute one search query against the named index, blocking until the
    /// backend answers. Returns the decoded response or the first error hit
    /// along the way.
    pub fn search(&self, index: &str, body: &serde_json::Value) -> Result<SearchResponse> {
        let url = self.build_search_url(index);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| SearchBenchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(parse_error_response(status, response));
        }

        response
            .json::<SearchResponse>()
            .map_err(|e| SearchBenchError::NetworkError(e.to_string()))
    }
}

fn parse_error_response(
    status: reqwest::StatusCode,
    response: reqwest::blocking::Response,
) -> SearchBenchError {
    let error_msg = response
        .json::<ErrorResponse>()
        .map(|r| r.error)
        .unwrap_or_else(|_| format!("Server returned status: {}", status));

    SearchBenchError::HttpError(status.as_u16(), error_msg)
}

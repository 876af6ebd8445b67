use crate::config::{ApiKey, Settings};
use crate::domain::models::Orientation;
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("service returned HTTP {status}")]
    Status { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub per_page: u8,
    pub orientation: Orientation,
}

/// Image search backend. `search` returns candidate image URLs, best first.
pub trait ImageSearch {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<String>, FetchError>;
    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    large: Option<String>,
    medium: Option<String>,
    original: Option<String>,
}

impl PhotoSources {
    fn preferred(self) -> Option<String> {
        self.large.or(self.medium).or(self.original)
    }
}

/// Pexels search API client.
pub struct PexelsClient {
    client: Client,
    api_base: String,
    api_key: ApiKey,
}

impl PexelsClient {
    pub fn new(api_key: ApiKey, settings: &Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("http-rabbits/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

fn check_status(resp: Response) -> Result<Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
        })
    }
}

impl ImageSearch for PexelsClient {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<String>, FetchError> {
        let per_page = request.per_page.to_string();
        let resp = self
            .client
            .get(format!("{}/search", self.api_base))
            .header(AUTHORIZATION, self.api_key.expose())
            .query(&[
                ("query", request.query),
                ("per_page", per_page.as_str()),
                ("orientation", request.orientation.as_str()),
            ])
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let body: SearchResponse = check_status(resp)?
            .json()
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(body
            .photos
            .into_iter()
            .filter_map(|p| p.src.preferred())
            .collect())
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let bytes = check_status(resp)?
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_source_falls_back_in_order() {
        let body = serde_json::json!({
            "photos": [
                {"src": {"large": "L1", "medium": "M1", "original": "O1"}},
                {"src": {"medium": "M2", "original": "O2"}},
                {"src": {"original": "O3"}},
                {"src": {}}
            ]
        });
        let parsed: SearchResponse = serde_json::from_value(body).expect("parse");
        let urls: Vec<String> = parsed
            .photos
            .into_iter()
            .filter_map(|p| p.src.preferred())
            .collect();
        assert_eq!(urls, vec!["L1", "M2", "O3"]);
    }

    #[test]
    fn missing_photo_list_is_empty() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"page": 1, "total_results": 0}"#).expect("parse");
        assert!(parsed.photos.is_empty());
    }

    #[test]
    fn fetch_error_messages() {
        assert_eq!(
            FetchError::Status { status: 401 }.to_string(),
            "service returned HTTP 401"
        );
        let io: FetchError = std::io::Error::other("disk full").into();
        assert!(io.to_string().contains("disk full"));
    }
}

use crate::services::photos::{FetchError, ImageSearch, SearchRequest};
use std::cell::RefCell;
use std::collections::HashSet;

/// Recording stand-in for the photo service.
#[derive(Default)]
pub struct FakeService {
    pub deny_searches: bool,
    pub empty_queries: HashSet<String>,
    pub broken_urls: HashSet<String>,
    pub queries: RefCell<Vec<String>>,
    pub downloads: RefCell<Vec<String>>,
}

impl FakeService {
    pub fn url_for(query: &str) -> String {
        format!("https://img.test/{}.jpg", query.replace(' ', "-"))
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl ImageSearch for FakeService {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<String>, FetchError> {
        self.queries.borrow_mut().push(request.query.to_string());
        if self.deny_searches {
            return Err(FetchError::Status { status: 401 });
        }
        if self.empty_queries.contains(request.query) {
            return Ok(vec![]);
        }
        Ok(vec![
            Self::url_for(request.query),
            format!("{}?alt", Self::url_for(request.query)),
        ])
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.downloads.borrow_mut().push(url.to_string());
        if self.broken_urls.contains(url) {
            return Err(FetchError::Status { status: 500 });
        }
        Ok(format!("jpeg:{url}").into_bytes())
    }
}

use crate::domain::models::{Orientation, PlannedQuery, QueryTier};
use crate::queries::contextual_query;
use crate::services::photos::{ImageSearch, SearchRequest};
use tracing::{debug, warn};

pub const GENERIC_QUERY: &str = "rabbit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        url: String,
        tier: QueryTier,
        query: String,
    },
    NoImage,
}

/// Ordered queries for one code: contextual phrase (if any), then the
/// lower-cased reason phrase, then the bare generic term.
pub fn search_plan(code: u16, message: &str) -> Vec<PlannedQuery> {
    let mut plan = Vec::with_capacity(3);
    if let Some(phrase) = contextual_query(code) {
        plan.push(PlannedQuery {
            tier: QueryTier::Contextual,
            query: phrase.to_string(),
        });
    }
    plan.push(PlannedQuery {
        tier: QueryTier::Message,
        query: format!("{} {}", GENERIC_QUERY, message).to_lowercase(),
    });
    plan.push(PlannedQuery {
        tier: QueryTier::Generic,
        query: GENERIC_QUERY.to_string(),
    });
    plan
}

pub struct ImageResolver<'a, S: ImageSearch> {
    service: &'a S,
    per_page: u8,
    orientation: Orientation,
}

impl<'a, S: ImageSearch> ImageResolver<'a, S> {
    pub fn new(service: &'a S, per_page: u8, orientation: Orientation) -> Self {
        Self {
            service,
            per_page: per_page.max(1),
            orientation,
        }
    }

    /// Walks the search plan and stops at the first non-empty result page.
    /// A failed search counts as an empty page.
    pub fn resolve(&self, code: u16, message: &str) -> Resolution {
        for step in search_plan(code, message) {
            debug!(code, tier = step.tier.as_str(), query = %step.query, "searching");
            let request = SearchRequest {
                query: &step.query,
                per_page: self.per_page,
                orientation: self.orientation,
            };
            match self.service.search(&request) {
                Ok(urls) => {
                    if let Some(url) = urls.into_iter().next() {
                        return Resolution::Found {
                            url,
                            tier: step.tier,
                            query: step.query,
                        };
                    }
                }
                Err(e) => {
                    warn!(
                        code,
                        tier = step.tier.as_str(),
                        query = %step.query,
                        error = %e,
                        "search failed"
                    );
                }
            }
        }
        Resolution::NoImage
    }
}

/// Recommendation data sources
///
/// The controller only needs "criteria in, payload out". The HTTP client is
/// the production implementation; tests substitute a mock.
use crate::{
    error::AppResult,
    models::{FilterCriteria, RecommendationResponse},
};

pub mod http;

pub use http::HttpRecommendationSource;

/// Trait for anything that can answer a recommendation search
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch recommendations for one set of filter criteria
    ///
    /// Any transport, status or decoding failure is returned as an error; no
    /// retry is attempted.
    async fn fetch(&self, criteria: &FilterCriteria) -> AppResult<RecommendationResponse>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Recommendation service client
///
/// Issues `GET /api/recommendations` with the filter criteria as query
/// parameters and decodes the JSON body.
use reqwest::{Client as HttpClient, Url};
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{FilterCriteria, RecommendationResponse},
    services::providers::RecommendationSource,
};

pub const RECOMMENDATIONS_PATH: &str = "/api/recommendations";

/// Error body the backend sends with a 500
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Clone)]
pub struct HttpRecommendationSource {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommendationSource {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.into(),
        }
    }

    /// Creates a client honouring the configured base URL and timeout
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            api_url: config.api_url.clone(),
        })
    }

    /// Full request URL for a search, with percent-encoded query values
    pub fn request_url(&self, criteria: &FilterCriteria) -> AppResult<Url> {
        let base = format!(
            "{}{}",
            self.api_url.trim_end_matches('/'),
            RECOMMENDATIONS_PATH
        );
        Url::parse_with_params(&base, criteria.query_pairs())
            .map_err(|e| AppError::InvalidInput(format!("Invalid API URL {}: {}", base, e)))
    }
}

/// Pulls the backend's `{"error": ...}` message out of a failure body when
/// there is one
fn describe_failure(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommendationSource {
    async fn fetch(&self, criteria: &FilterCriteria) -> AppResult<RecommendationResponse> {
        let url = self.request_url(criteria)?;

        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation API returned status {}: {}",
                status,
                describe_failure(&body)
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation response");

        let recommendations: RecommendationResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize recommendation response"
                );
                AppError::Parse(e)
            })?;

        tracing::info!(
            usage = %criteria.usage,
            main = recommendations.main.len(),
            additional = recommendations.additional.len(),
            bonus = recommendations.bonus.len(),
            source = self.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

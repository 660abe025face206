use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::client::form::{FormError, ProfileForm};
use crate::optimizer::models::{AnalyzeRequest, OptimizationResult};

pub const ANALYZE_PATH: &str = "/api/linkedin/analyze";

/// Shown when the server's error body carries no message.
pub const ANALYZE_FALLBACK: &str = "Failed to analyze profile";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Talks to the analysis endpoint on behalf of a `ProfileForm`.
#[derive(Clone)]
pub struct AnalyzeClient {
    client: Client,
    base_url: String,
}

impl AnalyzeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Sends one analysis request. Any failure is flattened to the message a
    /// user would see.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<OptimizationResult, String> {
        let response = self
            .client
            .post(format!("{}{ANALYZE_PATH}", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| ANALYZE_FALLBACK.to_string());
            warn!("Analysis failed ({status}): {message}");
            return Err(message);
        }

        response
            .json::<OptimizationResult>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Drives a form through one submission: `begin_submit`, the request,
    /// then `complete` with the outcome.
    pub async fn submit(&self, form: &mut ProfileForm) -> Result<(), FormError> {
        let request = form.begin_submit()?;
        let outcome = self.analyze(&request).await;
        if outcome.is_ok() {
            info!("Analysis received");
        }
        form.complete(outcome);
        Ok(())
    }
}

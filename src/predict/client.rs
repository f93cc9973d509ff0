//! HTTP client for the prediction service

use async_trait::async_trait;

use crate::survey::SurveyAnswers;

use super::error::PredictError;
use super::types::PredictionOutcome;

/// Seam between the submit flow and the network.
///
/// The TUI only ever talks to this trait; tests drive the flow with a
/// recording fake instead of a live server.
#[async_trait]
pub trait PredictClient: Send + Sync {
    /// Submit one set of answers and wait for the classification
    async fn predict(&self, answers: &SurveyAnswers) -> Result<PredictionOutcome, PredictError>;
}

/// reqwest-backed implementation
///
/// No timeout is configured: once a request is issued it runs to
/// completion or transport failure, and the UI waits.
pub struct HttpPredictClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictClient for HttpPredictClient {
    async fn predict(&self, answers: &SurveyAnswers) -> Result<PredictionOutcome, PredictError> {
        tracing::debug!("submitting answers to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(answers)
            .send()
            .await
            .map_err(PredictError::from_network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("prediction service answered {status}");
            return Err(PredictError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let outcome: PredictionOutcome = response
            .json()
            .await
            .map_err(|e| PredictError::Malformed(e.to_string()))?;

        tracing::info!(
            prediction = %outcome.ensemble_result.prediction,
            percentage = outcome.ensemble_result.addiction_percentage,
            "received ensemble verdict"
        );
        Ok(outcome)
    }
}

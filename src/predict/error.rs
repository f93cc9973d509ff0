//! Typed errors for prediction requests
//!
//! Lets the UI distinguish transport failures from service failures and
//! from a well-formed response carrying a classification we do not know.

use thiserror::Error;

/// Prediction request errors
#[derive(Debug, Error)]
pub enum PredictError {
    /// Connection refused, DNS failure, timeout and friends
    #[error("could not reach prediction service: {0}")]
    Network(String),

    /// The service answered with a non-success status code
    #[error("prediction service returned HTTP {status}: {body}")]
    Service { status: u16, body: String },

    /// The response body did not decode as a prediction result
    #[error("malformed prediction response: {0}")]
    Malformed(String),

    /// The ensemble verdict carried a label outside the known risk set
    #[error("unknown classification label: {0:?}")]
    UnknownClassification(String),
}

impl PredictError {
    /// Convert a reqwest transport error into a typed variant
    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PredictError::Network(format!("request timeout: {e}"))
        } else if e.is_connect() {
            PredictError::Network(format!("connection failed: {e}"))
        } else {
            PredictError::Network(e.to_string())
        }
    }

    /// One-line message shown to the user when a submission fails.
    ///
    /// Always points at the service's availability; the precise cause only
    /// goes to the log.
    pub fn user_message(&self) -> &'static str {
        "Error analyzing answers. Check that the prediction service is running."
    }
}

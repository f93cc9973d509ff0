//! Prediction service client
//!
//! One `POST` per submission against the service's `/predict` endpoint.
//! The [`PredictClient`] trait is the seam between the UI and the network,
//! so the submit flow can be driven against a fake in tests.

mod client;
mod error;
mod types;

pub use client::{HttpPredictClient, PredictClient};
pub use error::PredictError;
pub use types::{AlgorithmResult, EnsembleResult, PredictionOutcome, RiskLabel};

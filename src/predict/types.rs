//! Response schema for the prediction service
//!
//! The service runs five classifiers and aggregates them into an ensemble
//! verdict. Only the ensemble drives the UI; the per-algorithm breakdown
//! is received and shown as a count.

use std::fmt;

use serde::Deserialize;

use super::error::PredictError;

/// Classification labels the service can emit.
///
/// Closed set on purpose: the wire carries the label as a free string, and
/// [`RiskLabel::parse`] turns anything outside this set into
/// [`PredictError::UnknownClassification`] instead of silently rendering
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    /// Parse the service's label string
    pub fn parse(label: &str) -> Result<Self, PredictError> {
        match label {
            "Low Risk" => Ok(RiskLabel::Low),
            "Moderate Risk" => Ok(RiskLabel::Moderate),
            "High Risk" => Ok(RiskLabel::High),
            other => Err(PredictError::UnknownClassification(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::Low => "Low Risk",
            RiskLabel::Moderate => "Moderate Risk",
            RiskLabel::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated verdict across all classifiers
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnsembleResult {
    #[serde(default)]
    pub algorithm: String,
    pub prediction: String,
    #[serde(default)]
    pub confidence: f64,
    pub accuracy: f64,
    pub addiction_percentage: f64,
}

impl EnsembleResult {
    /// The verdict as a typed label
    pub fn risk(&self) -> Result<RiskLabel, PredictError> {
        RiskLabel::parse(&self.prediction)
    }
}

/// One underlying classifier's output
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    #[serde(default)]
    pub algorithm: String,
    pub prediction: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub addiction_percentage: f64,
}

/// Full response body from `/predict`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub ensemble_result: EnsembleResult,
    #[serde(default)]
    pub results: Vec<AlgorithmResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_known_labels() {
        assert_eq!(RiskLabel::parse("Low Risk").unwrap(), RiskLabel::Low);
        assert_eq!(
            RiskLabel::parse("Moderate Risk").unwrap(),
            RiskLabel::Moderate
        );
        assert_eq!(RiskLabel::parse("High Risk").unwrap(), RiskLabel::High);
    }

    #[test]
    fn unknown_label_is_an_explicit_error() {
        let err = RiskLabel::parse("Medium Risk").unwrap_err();
        assert!(matches!(err, PredictError::UnknownClassification(l) if l == "Medium Risk"));
    }

    #[test]
    fn deserializes_service_response() {
        let body = r#"{
            "ensembleResult": {
                "algorithm": "Ensemble (5 Models)",
                "prediction": "Moderate Risk",
                "confidence": 0.9,
                "accuracy": 0.888,
                "addictionPercentage": 47
            },
            "results": [
                {"algorithm": "Decision Tree", "prediction": "Moderate Risk",
                 "confidence": 0.8, "accuracy": 0.87, "addictionPercentage": 45}
            ]
        }"#;
        let outcome: PredictionOutcome = serde_json::from_str(body).unwrap();
        assert_eq!(outcome.ensemble_result.risk().unwrap(), RiskLabel::Moderate);
        assert_eq!(outcome.ensemble_result.addiction_percentage, 47.0);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].algorithm, "Decision Tree");
    }

    #[test]
    fn breakdown_is_optional() {
        let body = r#"{"ensembleResult": {"prediction": "Low Risk", "accuracy": 0.91, "addictionPercentage": 12}}"#;
        let outcome: PredictionOutcome = serde_json::from_str(body).unwrap();
        assert!(outcome.results.is_empty());
    }
}

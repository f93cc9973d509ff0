//! phonecheck: terminal client for the mobile phone addiction assessment service
//!
//! This library provides:
//! - The fixed survey catalog, form state, and completeness validation
//! - A typed client for the prediction service's `/predict` endpoint
//! - Static recommendation lists per risk classification
//! - A full-screen terminal UI for filling in and submitting the assessment

pub mod config;
pub mod predict;
pub mod recommend;
pub mod survey;
pub mod tui;

pub use config::Config;

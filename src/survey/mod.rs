//! Survey domain - question catalog, form state, and validation
//!
//! The assessment form is a fixed questionnaire: three profile fields,
//! sixteen yes/no questions, one frequency question, and one numeric
//! usage question. The catalog in [`questions`] carries the wire keys
//! the prediction service expects.

mod form;
mod questions;

pub use form::{SurveyAnswers, SurveyForm, ValidationError};
pub use questions::{Question, FREQUENCIES, GENDERS, QUESTIONS, YES_NO};

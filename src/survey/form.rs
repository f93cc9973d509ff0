//! Form state and completeness validation
//!
//! [`SurveyForm`] holds the raw, partially-filled state while the user is
//! editing. [`SurveyForm::answers`] re-checks completeness at submit time
//! and produces the typed [`SurveyAnswers`] payload; cosmetic field
//! highlighting in the UI never substitutes for this check.

use serde::Serialize;
use thiserror::Error;

use super::questions::{FREQUENCIES, GENDERS, QUESTIONS, YES_NO};

/// Validation failure for an incomplete or malformed form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field has no value yet
    #[error("'{0}' is not answered")]
    Unanswered(&'static str),
    /// A numeric field holds text that does not parse
    #[error("'{field}' is not a number: {value}")]
    NotANumber { field: &'static str, value: String },
}

/// Raw editable form state.
///
/// Choice fields store an index into their option set; numeric fields keep
/// the raw text so the user can edit freely and parsing happens at submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyForm {
    pub name: String,
    pub age: String,
    pub gender: Option<usize>,
    /// Selected option per catalog question, same order as [`QUESTIONS`]
    pub answers: [Option<usize>; 16],
    /// How often the phone is checked without a notification
    pub notification_checks: Option<usize>,
    pub games_hours: String,
}

impl SurveyForm {
    /// Validate completeness and build the request payload.
    ///
    /// Fails on the first missing or unparsable field, in form order.
    pub fn answers(&self) -> Result<SurveyAnswers, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Unanswered("name"));
        }
        let age = parse_number("age", &self.age)?;
        let gender = selected("gender", GENDERS, self.gender)?;
        let mut picked = [""; 16];
        for (slot, (question, answer)) in
            picked.iter_mut().zip(QUESTIONS.iter().zip(self.answers))
        {
            *slot = selected(question.key, YES_NO, answer)?;
        }
        let frequency = selected(
            "checkPhoneWithoutNotification",
            FREQUENCIES,
            self.notification_checks,
        )?;
        let games_hours = parse_number("phoneUseForPlayingGames", &self.games_hours)?;

        Ok(SurveyAnswers {
            name: self.name.trim().to_string(),
            age,
            gender: gender.to_string(),
            use_phone_for_class_notes: picked[0].to_string(),
            buy_books_from_phone: picked[1].to_string(),
            battery_lasts_day: picked[2].to_string(),
            run_for_charger: picked[3].to_string(),
            worry_about_losing_phone: picked[4].to_string(),
            take_phone_to_bathroom: picked[5].to_string(),
            use_phone_in_social_gatherings: picked[6].to_string(),
            check_phone_without_notification: frequency.to_string(),
            check_phone_before_sleep_after_waking: picked[7].to_string(),
            keep_phone_next_to_while_sleeping: picked[8].to_string(),
            check_emails_calls_texts_during_class: picked[9].to_string(),
            rely_on_phone_in_awkward_situations: picked[10].to_string(),
            on_phone_while_watching_tv_eating: picked[11].to_string(),
            panic_attack_if_phone_left_elsewhere: picked[12].to_string(),
            check_phone_with_someone: picked[13].to_string(),
            phone_use_for_playing_games: games_hours,
            live_a_day_without_phone: picked[14].to_string(),
            addicted_to_phone: picked[15].to_string(),
        })
    }

    /// Whether the form would pass validation as-is
    pub fn is_complete(&self) -> bool {
        self.answers().is_ok()
    }
}

fn selected(
    field: &'static str,
    options: &'static [&'static str],
    index: Option<usize>,
) -> Result<&'static str, ValidationError> {
    index
        .and_then(|i| options.get(i).copied())
        .ok_or(ValidationError::Unanswered(field))
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Unanswered(field));
    }
    raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Complete request payload for the prediction service.
///
/// Serializes with the exact camelCase keys the service reads; the two
/// numeric fields go out as JSON numbers, everything else as strings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub use_phone_for_class_notes: String,
    pub buy_books_from_phone: String,
    pub battery_lasts_day: String,
    pub run_for_charger: String,
    pub worry_about_losing_phone: String,
    pub take_phone_to_bathroom: String,
    pub use_phone_in_social_gatherings: String,
    pub check_phone_without_notification: String,
    pub check_phone_before_sleep_after_waking: String,
    pub keep_phone_next_to_while_sleeping: String,
    pub check_emails_calls_texts_during_class: String,
    pub rely_on_phone_in_awkward_situations: String,
    pub on_phone_while_watching_tv_eating: String,
    pub panic_attack_if_phone_left_elsewhere: String,
    pub check_phone_with_someone: String,
    pub phone_use_for_playing_games: u32,
    pub live_a_day_without_phone: String,
    pub addicted_to_phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn complete_form() -> SurveyForm {
        SurveyForm {
            name: "Asha".to_string(),
            age: "21".to_string(),
            gender: Some(1),
            answers: [Some(0); 16],
            notification_checks: Some(2),
            games_hours: "3".to_string(),
        }
    }

    #[test]
    fn empty_form_fails_on_name_first() {
        let err = SurveyForm::default().answers().unwrap_err();
        assert_eq!(err, ValidationError::Unanswered("name"));
    }

    #[test]
    fn one_missing_question_fails_validation() {
        let mut form = complete_form();
        form.answers[7] = None;
        let err = form.answers().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Unanswered("checkPhoneBeforeSleepAfterWaking")
        );
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let mut form = complete_form();
        form.age = "twenty".to_string();
        assert!(matches!(
            form.answers().unwrap_err(),
            ValidationError::NotANumber { field: "age", .. }
        ));
    }

    #[test]
    fn complete_form_builds_payload() {
        let answers = complete_form().answers().unwrap();
        assert_eq!(answers.age, 21);
        assert_eq!(answers.gender, "Female");
        assert_eq!(answers.check_phone_without_notification, "Sometimes");
        assert_eq!(answers.phone_use_for_playing_games, 3);
        assert_eq!(answers.addicted_to_phone, "Yes");
    }

    #[test]
    fn payload_key_set_matches_service_contract() {
        let value = serde_json::to_value(complete_form().answers().unwrap()).unwrap();
        let keys: BTreeSet<String> = value.as_object().unwrap().keys().cloned().collect();

        let mut expected: BTreeSet<String> = QUESTIONS.iter().map(|q| q.key.to_string()).collect();
        for extra in [
            "name",
            "age",
            "gender",
            "checkPhoneWithoutNotification",
            "phoneUseForPlayingGames",
        ] {
            expected.insert(extra.to_string());
        }
        assert_eq!(keys, expected);

        // Numeric fields must serialize as numbers, not strings
        assert!(value["age"].is_u64());
        assert!(value["phoneUseForPlayingGames"].is_u64());
        assert!(value["liveADayWithoutPhone"].is_string());
    }
}

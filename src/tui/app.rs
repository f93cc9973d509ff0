//! Application state and phase transitions
//!
//! All transitions are synchronous methods on [`AppState`] so the whole
//! submit/results cycle can be unit tested without a terminal or a live
//! service. The controller is only glue: it maps input events to these
//! methods and spawns the network request when [`AppState::start_submit`]
//! hands it a payload.

use std::time::{Duration, Instant};

use crate::predict::{PredictError, PredictionOutcome, RiskLabel};
use crate::survey::{SurveyAnswers, SurveyForm, FREQUENCIES, GENDERS, YES_NO};
use crate::tui::theme::Theme;

/// How long a validation notice stays on screen
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Number of focusable rows in the form, submit row included
pub const ROW_COUNT: usize = 22;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Form is editable
    #[default]
    Editing,
    /// One request is in flight; submit is a no-op
    Submitting,
    /// Results panel is shown
    ShowingResults,
}

/// What a form row holds, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Name,
    Age,
    Gender,
    /// Index into [`crate::survey::QUESTIONS`]
    Question(usize),
    Frequency,
    GamesHours,
    Submit,
}

/// Map a focus index to its row.
///
/// The frequency and games-hours rows sit between the yes/no questions to
/// match the order the assessment presents them.
pub fn form_row(index: usize) -> FormRow {
    match index {
        0 => FormRow::Name,
        1 => FormRow::Age,
        2 => FormRow::Gender,
        3..=9 => FormRow::Question(index - 3),
        10 => FormRow::Frequency,
        11..=17 => FormRow::Question(index - 4),
        18 => FormRow::GamesHours,
        19..=20 => FormRow::Question(index - 5),
        _ => FormRow::Submit,
    }
}

/// Flash message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// Transient validation notice, auto-dismisses
    Notice,
    /// Request failure, stays until the user presses a key
    Error,
}

/// A message in the flash bar
#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
    pub expires_at: Option<Instant>,
}

impl Flash {
    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Notice,
            expires_at: Some(Instant::now() + FLASH_DURATION),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Error,
            expires_at: None,
        }
    }

    fn expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// A validated prediction, ready to render
#[derive(Debug, Clone)]
pub struct Assessment {
    pub risk: RiskLabel,
    pub outcome: PredictionOutcome,
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Whether the application should exit
    pub should_quit: bool,
    /// Current session phase
    pub phase: Phase,
    /// Editable form state
    pub form: SurveyForm,
    /// Focused row index (0..ROW_COUNT)
    pub focus: usize,
    /// Rows the user has left at least once, for field-level feedback
    pub visited: [bool; ROW_COUNT],
    /// A rejected submit marks every incomplete field invalid
    pub submit_attempted: bool,
    /// Active flash message, if any
    pub flash: Option<Flash>,
    /// Last validated prediction (set while ShowingResults)
    pub assessment: Option<Assessment>,
    /// Animation frame for the busy pulse
    pub animation_frame: u8,
    /// Scroll offset in the results panel
    pub results_scroll: usize,
    /// Current theme
    pub theme: Theme,
    /// Endpoint shown in the status bar
    pub endpoint: String,
}

impl AppState {
    pub fn new(theme: Theme, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            phase: Phase::Editing,
            form: SurveyForm::default(),
            focus: 0,
            visited: [false; ROW_COUNT],
            submit_attempted: false,
            flash: None,
            assessment: None,
            animation_frame: 0,
            results_scroll: 0,
            theme,
            endpoint: endpoint.into(),
        }
    }

    /// Signal application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Row under the focus cursor
    pub fn current_row(&self) -> FormRow {
        form_row(self.focus)
    }

    /// Move focus down one row
    pub fn focus_next(&mut self) {
        self.visited[self.focus] = true;
        if self.focus + 1 < ROW_COUNT {
            self.focus += 1;
        }
    }

    /// Move focus up one row
    pub fn focus_prev(&mut self) {
        self.visited[self.focus] = true;
        self.focus = self.focus.saturating_sub(1);
    }

    /// Cycle the focused choice row forward or backward through its options
    pub fn cycle_option(&mut self, forward: bool) {
        let (slot, len) = match self.current_row() {
            FormRow::Gender => (&mut self.form.gender, GENDERS.len()),
            FormRow::Question(i) => (&mut self.form.answers[i], YES_NO.len()),
            FormRow::Frequency => (&mut self.form.notification_checks, FREQUENCIES.len()),
            _ => return,
        };
        let next = match (*slot, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        *slot = Some(next);
        self.visited[self.focus] = true;
    }

    /// Type into the focused text row
    pub fn insert_char(&mut self, c: char) {
        match self.current_row() {
            FormRow::Name => self.form.name.push(c),
            // Numeric fields only take digits, like a number input
            FormRow::Age if c.is_ascii_digit() => self.form.age.push(c),
            FormRow::GamesHours if c.is_ascii_digit() => self.form.games_hours.push(c),
            _ => {}
        }
    }

    /// Delete the last character of the focused text row
    pub fn backspace(&mut self) {
        match self.current_row() {
            FormRow::Name => {
                self.form.name.pop();
            }
            FormRow::Age => {
                self.form.age.pop();
            }
            FormRow::GamesHours => {
                self.form.games_hours.pop();
            }
            _ => {}
        }
    }

    /// Whether a row should render with the error color.
    ///
    /// Purely cosmetic: only rows the user has visited (or everything after
    /// a rejected submit) are marked, and validation re-checks the whole
    /// form at submit time regardless.
    pub fn row_invalid(&self, index: usize) -> bool {
        if !self.visited[index] && !self.submit_attempted {
            return false;
        }
        match form_row(index) {
            FormRow::Name => self.form.name.trim().is_empty(),
            FormRow::Age => self.form.age.trim().parse::<u32>().is_err(),
            FormRow::Gender => self.form.gender.is_none(),
            FormRow::Question(i) => self.form.answers[i].is_none(),
            FormRow::Frequency => self.form.notification_checks.is_none(),
            FormRow::GamesHours => self.form.games_hours.trim().parse::<u32>().is_err(),
            FormRow::Submit => false,
        }
    }

    /// Attempt to start a submission.
    ///
    /// Returns the payload to send when the form validates, `None`
    /// otherwise. A submit while a request is already in flight is an
    /// idempotent no-op; the phase check happens synchronously, before any
    /// suspension point, so a racing second submit cannot slip through.
    pub fn start_submit(&mut self) -> Option<SurveyAnswers> {
        if self.phase != Phase::Editing {
            return None;
        }
        match self.form.answers() {
            Ok(answers) => {
                self.flash = None;
                self.animation_frame = 0;
                self.phase = Phase::Submitting;
                Some(answers)
            }
            Err(err) => {
                tracing::debug!("submit rejected: {err}");
                self.submit_attempted = true;
                self.flash = Some(Flash::notice("Please answer all questions"));
                None
            }
        }
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Always leaves `Submitting`, success or failure: the busy indicator
    /// disappears and the submit control is usable again.
    pub fn finish_submit(&mut self, result: Result<PredictionOutcome, PredictError>) {
        let verdict = result.and_then(|outcome| {
            let risk = outcome.ensemble_result.risk()?;
            Ok(Assessment { risk, outcome })
        });
        match verdict {
            Ok(assessment) => {
                tracing::info!(risk = %assessment.risk, "showing results");
                self.assessment = Some(assessment);
                self.results_scroll = 0;
                self.phase = Phase::ShowingResults;
            }
            Err(err) => {
                tracing::warn!("prediction failed: {err}");
                self.flash = Some(Flash::error(err.user_message()));
                self.phase = Phase::Editing;
            }
        }
    }

    /// Return from the results panel without touching the answers
    pub fn back_to_form(&mut self) {
        if self.phase == Phase::ShowingResults {
            self.assessment = None;
            self.phase = Phase::Editing;
        }
    }

    /// Dismiss a sticky error flash (called on any keypress)
    pub fn acknowledge_error(&mut self) {
        if matches!(self.flash, Some(Flash { kind: FlashKind::Error, .. })) {
            self.flash = None;
        }
    }

    /// Advance animations and expire transient notices
    pub fn tick(&mut self) {
        if self.flash.as_ref().is_some_and(Flash::expired) {
            self.flash = None;
        }
        if self.phase == Phase::Submitting {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }
}

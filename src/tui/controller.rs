//! TUI Controller - the main event loop
//!
//! Maps input events to [`AppState`] transitions and spawns the prediction
//! request when a submit passes validation. The request outcome comes back
//! through an mpsc channel and is applied on the next loop iteration, so
//! the UI thread never blocks on the network.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use tokio::sync::mpsc;

use crate::predict::{PredictClient, PredictError, PredictionOutcome};
use crate::survey::SurveyAnswers;

use super::app::{AppState, FormRow, Phase};
use super::events::{Event, EventHandler};
use super::renderer::Renderer;

type Outcome = Result<PredictionOutcome, PredictError>;

/// Issue one prediction request in the background, delivering the outcome
/// through `tx`.
///
/// The single-flight guarantee lives in [`AppState::start_submit`]; by the
/// time this runs the phase is already `Submitting`.
pub fn spawn_predict(
    client: Arc<dyn PredictClient>,
    answers: SurveyAnswers,
    tx: mpsc::UnboundedSender<Outcome>,
) {
    tokio::spawn(async move {
        let outcome = client.predict(&answers).await;
        // Receiver gone means the UI already shut down
        let _ = tx.send(outcome);
    });
}

/// TUI controller
pub struct Controller<B: Backend> {
    state: AppState,
    renderer: Renderer<B>,
    events: EventHandler,
    client: Arc<dyn PredictClient>,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl<B: Backend> Controller<B> {
    pub fn new(state: AppState, renderer: Renderer<B>, client: Arc<dyn PredictClient>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            renderer,
            events: EventHandler::default(),
            client,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<B> {
        &mut self.renderer
    }

    /// Run the main event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.renderer.render(&self.state)?;

            if let Event::Key(key) = self.events.next()? {
                self.handle_key(key);
            }

            // Apply any finished request
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                self.state.finish_submit(outcome);
            }

            self.state.tick();

            if self.state.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // A sticky error flash is dismissed by the next keypress
        self.state.acknowledge_error();

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.state.quit();
                return;
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.try_submit();
                return;
            }
            _ => {}
        }

        match self.state.phase {
            Phase::Editing => self.handle_editing_key(key),
            // Everything except quit is ignored while a request is in flight
            Phase::Submitting => {}
            Phase::ShowingResults => self.handle_results_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.state.focus_next(),
            KeyCode::Left => self.state.cycle_option(false),
            KeyCode::Right => self.state.cycle_option(true),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Enter => {
                if self.state.current_row() == FormRow::Submit {
                    self.try_submit();
                } else {
                    self.state.focus_next();
                }
            }
            KeyCode::Char(c) => match self.state.current_row() {
                FormRow::Name | FormRow::Age | FormRow::GamesHours => {
                    self.state.insert_char(c);
                }
                _ if c == ' ' => self.state.cycle_option(true),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => self.state.back_to_form(),
            KeyCode::Up => {
                self.state.results_scroll = self.state.results_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.state.results_scroll += 1;
            }
            _ => {}
        }
    }

    fn try_submit(&mut self) {
        if let Some(answers) = self.state.start_submit() {
            spawn_predict(self.client.clone(), answers, self.outcome_tx.clone());
        }
    }
}

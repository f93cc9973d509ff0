//! TUI Renderer - draws the current state to the terminal
//!
//! Pure presentation: picks the view for the current phase and feeds the
//! widgets. All state changes happen in the controller.

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::{Frame, Terminal};

use super::app::{AppState, FlashKind, Phase};
use super::widgets::{FlashBar, FlashBarState, FormView, Header, ResultsPanel, StatusBar, TerminalFrame};

/// Renderer owning the terminal handle
pub struct Renderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> Renderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Get reference to terminal (for testing)
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Draw one frame
    pub fn render(&mut self, state: &AppState) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, state))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = frame.area();

    frame.render_widget(TerminalFrame::new(theme), area);

    // Inner area, inside the frame borders
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Form or results
            Constraint::Length(1), // Flash bar
            Constraint::Length(1), // Status bar
        ])
        .split(inner);

    frame.render_widget(Header::new(theme), chunks[0]);

    match (&state.phase, &state.assessment) {
        (Phase::ShowingResults, Some(assessment)) => {
            let panel = ResultsPanel::new(assessment, state.form.name.trim(), theme)
                .scroll(state.results_scroll);
            frame.render_widget(panel, chunks[1]);
        }
        _ => {
            frame.render_widget(FormView::new(state), chunks[1]);
        }
    }

    frame.render_widget(flash_bar(state), chunks[2]);

    let status = StatusBar::new(theme)
        .phase(state.phase)
        .endpoint(&state.endpoint);
    frame.render_widget(status, chunks[3]);
}

fn flash_bar(state: &AppState) -> FlashBar<'_> {
    let bar = FlashBar::new(&state.theme);
    if state.phase == Phase::Submitting {
        return bar
            .kind(FlashBarState::Working)
            .animation_frame(state.animation_frame);
    }
    match &state.flash {
        Some(flash) => {
            let kind = match flash.kind {
                FlashKind::Notice => FlashBarState::Notice,
                FlashKind::Error => FlashBarState::Error,
            };
            bar.kind(kind).message(&flash.text)
        }
        None => bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;
    use ratatui::backend::TestBackend;

    fn buffer_text(renderer: &Renderer<TestBackend>) -> String {
        let buffer = renderer.terminal().backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn editing_phase_draws_the_form() {
        let backend = TestBackend::new(100, 30);
        let mut renderer = Renderer::new(Terminal::new(backend).unwrap());
        let state = AppState::new(Theme::default(), "http://localhost:5001/predict");

        renderer.render(&state).unwrap();
        let out = buffer_text(&renderer);
        assert!(out.contains("Assessment"));
        assert!(out.contains("Phonecheck"));
        assert!(out.contains("Ctrl+S submit"));
    }

    #[test]
    fn submitting_phase_shows_the_busy_pulse() {
        let backend = TestBackend::new(100, 30);
        let mut renderer = Renderer::new(Terminal::new(backend).unwrap());
        let mut state = AppState::new(Theme::default(), "http://localhost:5001/predict");
        state.phase = Phase::Submitting;

        renderer.render(&state).unwrap();
        assert!(buffer_text(&renderer).contains("Analyzing"));
    }
}

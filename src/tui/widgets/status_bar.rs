//! Status Bar Widget
//!
//! One line of key hints for the current phase, with the prediction
//! endpoint on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::app::Phase;
use crate::tui::theme::Theme;

/// Status bar widget
pub struct StatusBar<'a> {
    phase: Phase,
    endpoint: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            phase: Phase::Editing,
            endpoint: "",
            theme,
        }
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    fn hints(&self) -> &'static str {
        match self.phase {
            Phase::Editing => "↑↓ move · ←→/Space select · Ctrl+S submit · Ctrl+C quit",
            Phase::Submitting => "waiting for the prediction service · Ctrl+C quit",
            Phase::ShowingResults => "Esc back · ↑↓ scroll · Ctrl+C quit",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let hints = self.hints();
        let mut spans = vec![Span::styled(
            hints,
            Style::default().fg(self.theme.text_secondary),
        )];

        // Right-align the endpoint when there is room
        let used = hints.chars().count();
        let endpoint_len = self.endpoint.chars().count();
        if used + endpoint_len + 2 <= area.width as usize {
            let gap = area.width as usize - used - endpoint_len;
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(
                self.endpoint,
                Style::default().fg(self.theme.text_muted),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

//! Status Message Strip Widget
//!
//! Thin, single-line status area between the form and the key hints.
//! Carries the busy pulse while a request is in flight, the transient
//! validation notice, and request failures.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::tui::theme::Theme;

const DOT_SMALL: char = '·';
const DOT_LARGE: char = '●';

/// State of the FlashBar widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashBarState {
    /// Single muted center dot - nothing to report
    #[default]
    Idle,
    /// Animated pulse - a request is in flight
    Working,
    /// Yellow notice - validation rejected the submit
    Notice,
    /// Red message - the request failed
    Error,
}

/// FlashBar widget for displaying status indicators
pub struct FlashBar<'a> {
    message: Option<&'a str>,
    kind: FlashBarState,
    /// Animation frame for the working state
    animation_frame: u8,
    theme: &'a Theme,
}

impl<'a> FlashBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            message: None,
            kind: FlashBarState::Idle,
            animation_frame: 0,
            theme,
        }
    }

    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn kind(mut self, kind: FlashBarState) -> Self {
        self.kind = kind;
        self
    }

    pub fn animation_frame(mut self, frame: u8) -> Self {
        self.animation_frame = frame;
        self
    }

    fn state_style(&self) -> Style {
        let fg = match self.kind {
            FlashBarState::Idle => self.theme.text_muted,
            FlashBarState::Working => self.theme.cyan,
            FlashBarState::Notice => self.theme.yellow,
            FlashBarState::Error => self.theme.red,
        };
        Style::default().fg(fg).bg(self.theme.bg_dark)
    }

    fn render_centered(&self, area: Rect, buf: &mut Buffer, text: &str) {
        let style = self.state_style();
        let trimmed: String = text.chars().take(area.width as usize).collect();
        let text_width = trimmed.chars().count() as u16;
        let start_x = area.left() + (area.width.saturating_sub(text_width)) / 2;
        let y = area.top();

        for (i, ch) in trimmed.chars().enumerate() {
            let x = start_x + i as u16;
            if x < area.right() {
                buf[(x, y)].set_char(ch).set_style(style);
            }
        }
    }
}

impl Widget for FlashBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Fill background
        let base_style = Style::default().bg(self.theme.bg_dark);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_style(base_style);
            }
        }

        match self.kind {
            FlashBarState::Idle => {
                let center_x = area.left() + area.width / 2;
                buf[(center_x, area.top())]
                    .set_char(DOT_SMALL)
                    .set_style(self.state_style());
            }
            FlashBarState::Working => {
                // Trailing dots cycle while the request is outstanding
                let dots = 1 + (self.animation_frame / 4) % 3;
                let label = format!(
                    "{DOT_LARGE} Analyzing{}",
                    ".".repeat(dots as usize)
                );
                self.render_centered(area, buf, &label);
            }
            FlashBarState::Notice | FlashBarState::Error => {
                let message = self.message.unwrap_or_default();
                let label = format!("{DOT_LARGE} {message}");
                self.render_centered(area, buf, &label);
            }
        }
    }
}

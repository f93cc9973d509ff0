//! Assessment form view
//!
//! Renders the full questionnaire as one focusable row per field: three
//! profile fields, the sixteen yes/no questions with the frequency and
//! games-hours rows interleaved in presentation order, and the submit row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::survey::{FREQUENCIES, GENDERS, QUESTIONS, YES_NO};
use crate::tui::app::{form_row, AppState, FormRow, Phase, ROW_COUNT};

/// Scrollable form widget
pub struct FormView<'a> {
    state: &'a AppState,
}

impl<'a> FormView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn text_row(&self, label: &str, value: &str, index: usize) -> Line<'a> {
        let theme = &self.state.theme;
        let focused = self.state.focus == index;
        let label_color = if self.state.row_invalid(index) {
            theme.red
        } else if focused {
            theme.blue
        } else {
            theme.text_secondary
        };

        let mut value = value.to_string();
        if focused && self.state.phase == Phase::Editing {
            value.push('_');
        }

        let pad = 14usize.saturating_sub(label.width());
        Line::from(vec![
            Span::styled(marker(focused), Style::default().fg(theme.blue)),
            Span::styled(
                format!("{label}{} ", " ".repeat(pad)),
                Style::default().fg(label_color),
            ),
            Span::styled(value, Style::default().fg(theme.text_primary)),
        ])
    }

    fn choice_row(
        &self,
        prompt: &str,
        options: &'static [&'static str],
        selected: Option<usize>,
        index: usize,
    ) -> Line<'a> {
        let theme = &self.state.theme;
        let focused = self.state.focus == index;
        let prompt_color = if self.state.row_invalid(index) {
            theme.red
        } else if focused {
            theme.blue
        } else {
            theme.text_primary
        };

        let mut spans = vec![
            Span::styled(marker(focused), Style::default().fg(theme.blue)),
            Span::styled(format!("{prompt}  "), Style::default().fg(prompt_color)),
        ];
        for (i, option) in options.iter().enumerate() {
            let radio = if selected == Some(i) { "(•)" } else { "( )" };
            let style = if selected == Some(i) {
                Style::default().fg(theme.green)
            } else {
                Style::default().fg(theme.text_muted)
            };
            spans.push(Span::styled(format!("{radio} {option}  "), style));
        }
        Line::from(spans)
    }

    fn submit_row(&self, index: usize) -> Line<'a> {
        let theme = &self.state.theme;
        let focused = self.state.focus == index;
        let label = match self.state.phase {
            Phase::Submitting => "🔄 Analyzing...",
            _ => "🧠 Analyze my addiction level",
        };
        let style = if focused {
            Style::default()
                .fg(theme.bg_main)
                .bg(theme.blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.blue)
        };
        Line::from(vec![
            Span::styled(marker(focused), Style::default().fg(theme.blue)),
            Span::styled(format!("[ {label} ]"), style),
        ])
    }

    fn row_line(&self, index: usize) -> Line<'a> {
        let form = &self.state.form;
        match form_row(index) {
            FormRow::Name => self.text_row("Name", &form.name, index),
            FormRow::Age => self.text_row("Age", &form.age, index),
            FormRow::Gender => self.choice_row("What is your gender?", GENDERS, form.gender, index),
            FormRow::Question(i) => {
                self.choice_row(QUESTIONS[i].prompt, YES_NO, form.answers[i], index)
            }
            FormRow::Frequency => self.choice_row(
                "How often do you check your phone without a notification?",
                FREQUENCIES,
                form.notification_checks,
                index,
            ),
            FormRow::GamesHours => {
                self.text_row("Gaming hours", &form.games_hours, index)
            }
            FormRow::Submit => self.submit_row(index),
        }
    }
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "→ "
    } else {
        "  "
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.state.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Assessment ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        // Keep the focused row inside the visible window
        let height = inner.height as usize;
        let offset = (self.state.focus + 1).saturating_sub(height);

        let lines: Vec<Line> = (offset..ROW_COUNT.min(offset + height))
            .map(|index| self.row_line(index))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

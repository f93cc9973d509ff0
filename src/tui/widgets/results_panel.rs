//! Results panel
//!
//! Shows the ensemble verdict: classification label, a proportional bar
//! filled to the addiction percentage, the accuracy figure, and the static
//! recommendation list for the label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::recommend::recommendations;
use crate::tui::app::Assessment;
use crate::tui::theme::Theme;

/// Results panel widget
pub struct ResultsPanel<'a> {
    assessment: &'a Assessment,
    /// Name entered in the form, for the panel title
    user_name: &'a str,
    scroll: usize,
    theme: &'a Theme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(assessment: &'a Assessment, user_name: &'a str, theme: &'a Theme) -> Self {
        Self {
            assessment,
            user_name,
            scroll: 0,
            theme,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Proportional bar, filled to `percentage` of `width` cells
    fn progress_bar(percentage: f64, width: usize) -> String {
        let clamped = percentage.clamp(0.0, 100.0);
        let filled = ((clamped / 100.0) * width as f64).round() as usize;
        let mut bar = "█".repeat(filled);
        bar.push_str(&"░".repeat(width.saturating_sub(filled)));
        bar
    }
}

/// Format a percentage value without trailing noise
fn fmt_pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let ensemble = &self.assessment.outcome.ensemble_result;
        let risk = self.assessment.risk;
        let risk_style = Style::default()
            .fg(theme.risk_color(risk))
            .add_modifier(Modifier::BOLD);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Results ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let bar_width = inner.width as usize;
        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                "← Back to assessment (Esc)",
                Style::default().fg(theme.blue),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Overall assessment for {}", self.user_name),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(risk.as_str(), risk_style)),
            Line::from(Span::styled(
                ResultsPanel::progress_bar(ensemble.addiction_percentage, bar_width),
                Style::default().fg(theme.risk_color(risk)),
            )),
            Line::from(vec![
                Span::styled("Addiction level: ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    fmt_pct(ensemble.addiction_percentage),
                    Style::default().fg(theme.text_primary),
                ),
            ]),
            Line::from(vec![
                Span::styled("Average accuracy: ", Style::default().fg(theme.text_secondary)),
                Span::styled(fmt_pct(ensemble.accuracy), Style::default().fg(theme.text_primary)),
            ]),
        ];

        if !self.assessment.outcome.results.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Models consulted: {}", self.assessment.outcome.results.len()),
                Style::default().fg(theme.text_muted),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Personalized recommendations",
            Style::default()
                .fg(theme.cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for item in recommendations(risk) {
            lines.push(Line::from(Span::styled(
                format!(" • {item}"),
                Style::default().fg(theme.text_primary),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll as u16, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_proportional() {
        assert_eq!(ResultsPanel::progress_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(ResultsPanel::progress_bar(50.0, 10), "█████░░░░░");
        assert_eq!(ResultsPanel::progress_bar(100.0, 10), "██████████");
    }

    #[test]
    fn bar_clamps_out_of_range_values() {
        assert_eq!(ResultsPanel::progress_bar(130.0, 4), "████");
        assert_eq!(ResultsPanel::progress_bar(-5.0, 4), "░░░░");
    }

    #[test]
    fn pct_formatting_drops_integral_fraction() {
        assert_eq!(fmt_pct(91.0), "91%");
        assert_eq!(fmt_pct(88.8), "88.8%");
    }
}

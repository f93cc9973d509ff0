//! Header Widget
//!
//! Application name, version, and a short tagline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Header widget
pub struct Header<'a> {
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let header_text = Line::from(vec![
            Span::styled("📱 ", Style::default().fg(self.theme.cyan)),
            Span::styled(
                format!("Phonecheck v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(self.theme.text_primary),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(
                "mobile addiction assessment",
                Style::default().fg(self.theme.text_muted),
            ),
        ]);

        Paragraph::new(header_text).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn header_renders_app_name() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| f.render_widget(Header::new(&theme), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = (0..60)
            .map(|x| buffer.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(content.contains("Phonecheck"));
    }
}

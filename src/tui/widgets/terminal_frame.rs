//! Terminal Frame Widget
//!
//! The outer container with rounded borders (╭─╮╰─╯).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Widget},
};

use crate::tui::theme::Theme;

/// Terminal frame with rounded borders
pub struct TerminalFrame<'a> {
    theme: &'a Theme,
}

impl<'a> TerminalFrame<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for TerminalFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.theme.border))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn frame_renders_rounded_corners() {
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| f.render_widget(TerminalFrame::new(&theme), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), "╭");
        assert_eq!(buffer.cell((9, 0)).unwrap().symbol(), "╮");
        assert_eq!(buffer.cell((0, 4)).unwrap().symbol(), "╰");
        assert_eq!(buffer.cell((9, 4)).unwrap().symbol(), "╯");
    }
}

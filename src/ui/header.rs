use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Address bar: history arrows and the current location.
pub struct Header<'a> {
    location: &'a str,
    can_go_back: bool,
    can_go_forward: bool,
}

impl<'a> Header<'a> {
    pub fn new(location: &'a str, can_go_back: bool, can_go_forward: bool) -> Self {
        Self {
            location,
            can_go_back,
            can_go_forward,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let arrow = |enabled: bool| {
            if enabled {
                Style::default().fg(HEADER_TEXT)
            } else {
                Style::default().fg(MUTED_TEXT)
            }
        };
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let line = Line::from(vec![
            Span::styled("  ", separator_style),
            Span::styled("◀", arrow(self.can_go_back)),
            Span::styled(" ", separator_style),
            Span::styled("▶", arrow(self.can_go_forward)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.location, Style::default().fg(BRAND_TEAL)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

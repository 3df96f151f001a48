use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::render::HandlerName;
use crate::ui::app::App;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, MUTED_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for what the current screen accepts, version on the right.
pub struct Footer {
    hints: Vec<(String, String)>,
}

impl Footer {
    pub fn for_app(app: &App) -> Self {
        let mut hints = Vec::new();
        if app.offers(HandlerName::OnContinue) {
            hints.push(("Enter".to_string(), "Pokračovat".to_string()));
        }
        if app.can_go_back() {
            hints.push(("[".to_string(), "Zpět".to_string()));
        }
        if app.can_go_forward() {
            hints.push(("]".to_string(), "Vpřed".to_string()));
        }
        for (key, action) in app.bindings() {
            hints.push((key.to_string(), action.kind().to_string()));
        }
        hints.push(("q".to_string(), "Konec".to_string()));
        Self { hints }
    }

    pub fn hints(&self) -> &[(String, String)] {
        &self.hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'_> {
        let key_style = Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, label)) in self.hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", text_style));
            }
            spans.push(Span::styled(key.as_str(), key_style));
            spans.push(Span::styled(format!(" {label}"), text_style));
        }

        let version = format!("v{VERSION} ");
        let used = Line::from(spans.clone()).width() + version.chars().count();
        let inner = usize::from(area.width.saturating_sub(2));
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

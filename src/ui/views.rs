//! Per-screen widgets. Each is a pure function of the view state.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::render::{HandlerName, HandlerSet};
use crate::selector::ViewState;
use crate::state::{Hotel, Notification};
use crate::ui::theme::{
    BRAND_TEAL, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, NOTIFICATION_BG, STATUS_ERROR,
};

pub fn view_widget<'a>(view: &'a ViewState, handlers: &HandlerSet) -> Paragraph<'a> {
    match view {
        ViewState::Loading => loading_view(),
        ViewState::Error { message } => error_view(message, handlers),
        ViewState::HotelList { hotels, .. } => hotel_list_view(hotels),
    }
}

pub fn loading_view() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Načítání…",
        Style::default().fg(MUTED_TEXT),
    )))
    .alignment(Alignment::Center)
    .block(body_block())
}

pub fn error_view<'a>(message: &'a str, handlers: &HandlerSet) -> Paragraph<'a> {
    let mut lines = vec![Line::from(Span::styled(
        message,
        Style::default()
            .fg(STATUS_ERROR)
            .add_modifier(Modifier::BOLD),
    ))];
    if handlers.get(HandlerName::OnContinue).is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: Pokračovat",
            Style::default().fg(HEADER_TEXT),
        )));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(body_block())
}

pub fn hotel_list_view(hotels: &[Hotel]) -> Paragraph<'_> {
    let mut lines = Vec::with_capacity(hotels.len() + 2);
    lines.push(Line::from(Span::styled(
        "Hotely",
        Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.extend(hotels.iter().map(hotel_line));

    Paragraph::new(lines).block(body_block())
}

pub fn hotel_line(hotel: &Hotel) -> Line<'_> {
    Line::from(vec![
        Span::raw("  • "),
        Span::styled(hotel.name.as_str(), Style::default().fg(HEADER_TEXT)),
        Span::raw(" – "),
        Span::styled(hotel.city.as_str(), Style::default().fg(MUTED_TEXT)),
    ])
}

pub fn notification_widget(notification: &Notification) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::raw(notification.message.as_str())))
        .style(Style::default().fg(HEADER_TEXT).bg(NOTIFICATION_BG))
}

fn body_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

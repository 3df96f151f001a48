use ratatui::layout::Rect;

/// Split the screen into header (address bar), body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Carve a one-line strip off the bottom of `area` for a notification.
pub fn split_notification(area: Rect) -> (Rect, Rect) {
    let strip_height = area.height.min(1);
    let content = Rect {
        height: area.height.saturating_sub(strip_height),
        ..area
    };
    let strip = Rect {
        y: area.y + content.height,
        height: strip_height,
        ..area
    };
    (content, strip)
}

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_notification};
use crate::ui::views::{loading_view, notification_widget, view_widget};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let location = app.location();
    let header_widget = Header::new(&location, app.can_go_back(), app.can_go_forward());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.frame() {
        Some(render_frame) => {
            let content = match &render_frame.notification {
                Some(notification) => {
                    let (content, strip) = split_notification(body);
                    frame.render_widget(notification_widget(notification), strip);
                    content
                }
                None => body,
            };
            frame.render_widget(
                view_widget(&render_frame.view, &render_frame.handlers),
                content,
            );
        }
        // Nothing rendered yet: the first frame arrives with APP_INIT.
        None => frame.render_widget(loading_view(), body),
    }

    let footer_widget = Footer::for_app(app);
    frame.render_widget(footer_widget.widget(footer), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::location::BrowserHistory;
    use crate::render::{build_frame, ActionSink};
    use crate::state::{AppState, Hotel, Notification, UiStatus};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(state: &AppState) -> App {
        let sink: ActionSink = Arc::new(|_: Action| {});
        let history = BrowserHistory::new(Vec::new(), "app://r/#/hotels");
        let mut app = App::new(history, Arc::clone(&sink));
        app.on_frame(build_frame(state, &sink));
        app
    }

    #[test]
    fn hotel_list_screen_shows_hotels_and_location() {
        let mut state = AppState::initial();
        state.ui.status = UiStatus::Ready;
        state.hotels = vec![Hotel::new("Hotel A", "Prague")];

        let text = screen_text(&app_with(&state));

        assert!(text.contains("Hotely"));
        assert!(text.contains("Hotel A – Prague"));
        assert!(text.contains("app://r/#/hotels"));
    }

    #[test]
    fn error_screen_offers_continue() {
        let mut state = AppState::initial();
        state.ui.status = UiStatus::Error;
        state.ui.error_message = Some("Nepodařilo se načíst data".to_string());

        let text = screen_text(&app_with(&state));

        assert!(text.contains("Nepodařilo se načíst data"));
        assert!(text.contains("Enter: Pokračovat"));
    }

    #[test]
    fn notification_is_drawn_under_the_view() {
        let mut state = AppState::initial();
        state.ui.notification = Some(Notification {
            message: "Rezervace uložena".to_string(),
        });

        let text = screen_text(&app_with(&state));

        assert!(text.contains("Načítání"));
        assert!(text.contains("Rezervace uložena"));
    }
}

//! Location → action routing.
//!
//! Only the fragment (the part after the first `#`) is routed. Unrecognized
//! locations fall back to the hotel list rather than erroring.

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteContext {
    HotelList,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub context: RouteContext,
}

/// Parse a full location string (`scheme://host/path#fragment`) into a route.
pub fn location_to_route(location: &str) -> Route {
    let fragment = location
        .find('#')
        .map(|index| &location[index + 1..])
        .unwrap_or("");
    parse_fragment(fragment)
}

/// Route a bare fragment path such as `/hotels`.
pub fn parse_fragment(path: &str) -> Route {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    let context = match (segments.next(), segments.next()) {
        (Some("hotels"), None) => RouteContext::HotelList,
        _ => RouteContext::Unknown,
    };
    Route { context }
}

pub fn route_to_action(route: Route) -> Action {
    match route.context {
        RouteContext::HotelList => Action::EnterHotelList,
        RouteContext::Unknown => Action::EnterHotelList,
    }
}

pub fn location_to_action(location: &str) -> Action {
    route_to_action(location_to_route(location))
}

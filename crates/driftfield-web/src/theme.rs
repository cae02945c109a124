use crate::constants::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE};
use driftfield_core::Theme;
use web_sys as web;

/// Read the page theme. Called every frame so a toggle shows up on the next
/// paint.
pub fn current_theme(window: &web::Window, document: &web::Document) -> Theme {
    let attribute = document
        .document_element()
        .and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
    let prefers_dark = window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    Theme::resolve(attribute.as_deref(), prefers_dark)
}

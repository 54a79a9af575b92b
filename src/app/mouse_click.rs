//! Mouse click handling
//!
//! A click on a suggestion row picks it; a click anywhere but the input and
//! the panel dismisses the rows.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::autocomplete::autocomplete_render::row_at;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::SuggestionPanel) => click_suggestion_panel(app, mouse),
        Some(Region::InputField) => {}
        None => app.autocomplete.on_outside_click(),
    }
}

fn click_suggestion_panel(app: &mut App, mouse: MouseEvent) {
    let Some(panel) = app.layout_regions.suggestion_panel else {
        return;
    };
    let row_count = app.autocomplete.suggestions().len();
    let offset = app.autocomplete.scroll_offset();

    // Borders count as part of the panel, not as outside
    if let Some(index) = row_at(panel, row_count, offset, mouse.row) {
        let effects = app.autocomplete.on_row_click(index);
        app.apply_effects(effects);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;

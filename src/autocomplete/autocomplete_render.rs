//! Suggestion panel rendering
//!
//! Draws the dropdown of suggestion rows directly under the search input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::AutocompleteController;
use crate::widgets::popup;

// Panel display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_PANEL_WIDTH: usize = 60;
const MIN_PANEL_WIDTH: usize = 24;
const PANEL_BORDER_HEIGHT: u16 = 2;
const PANEL_PADDING: u16 = 4;
const PANEL_OFFSET_X: u16 = 1;
const ROW_MARKER_WIDTH: usize = 2;

/// Render the suggestion panel under the input field
///
/// At most `MAX_VISIBLE_SUGGESTIONS` rows are drawn at once; longer lists
/// scroll with the highlight. Returns the panel area, or `None` when there is
/// nothing to show.
pub fn render_panel(
    controller: &mut AutocompleteController,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !controller.is_visible() {
        return None;
    }

    let rows = controller.rows();
    let visible_count = rows.len().min(MAX_VISIBLE_SUGGESTIONS);
    let panel_height = (visible_count as u16) + PANEL_BORDER_HEIGHT;

    // Measured over every row so the panel does not resize while scrolling
    let widest = rows
        .iter()
        .map(|row| row.width() + ROW_MARKER_WIDTH)
        .max()
        .unwrap_or(MIN_PANEL_WIDTH)
        .clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
    let panel_width = (widest as u16) + PANEL_PADDING;

    let panel_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        panel_width,
        panel_height,
        PANEL_OFFSET_X,
    );
    if panel_area.height <= PANEL_BORDER_HEIGHT {
        return None;
    }

    let viewport = panel_area.height.saturating_sub(PANEL_BORDER_HEIGHT) as usize;
    let window = controller.visible_window(viewport);
    let selected = controller.selected_index();

    let items: Vec<ListItem> = rows[window.clone()]
        .iter()
        .zip(window.clone())
        .map(|(row, i)| {
            let line = if selected == Some(i) {
                Line::from(Span::styled(
                    format!("► {}", row),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", row),
                    Style::default().fg(Color::White),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    let position = if window.len() < rows.len() {
        format!(" {}-{} of {}", window.start + 1, window.end, rows.len())
    } else {
        String::new()
    };
    let loading = if controller.is_loading() {
        " · searching…"
    } else {
        ""
    };
    let title = format!(" Suggestions{}{} ", position, loading);

    popup::clear_area(frame, panel_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, panel_area);
    Some(panel_area)
}

/// Map a screen row inside the panel to a suggestion index
///
/// `scroll_offset` is the index of the first row on screen.
pub fn row_at(
    panel_area: Rect,
    row_count: usize,
    scroll_offset: usize,
    screen_row: u16,
) -> Option<usize> {
    let first_row = panel_area.y.saturating_add(1);
    if screen_row < first_row {
        return None;
    }
    let line = (screen_row - first_row) as usize;
    let inner_height = panel_area.height.saturating_sub(PANEL_BORDER_HEIGHT) as usize;
    let index = scroll_offset + line;
    (line < inner_height && index < row_count).then_some(index)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::autocomplete::autocomplete_render::render_panel;

const HELP_TEXT: &str = " Enter: search │ ↑/↓: select │ Tab: accept │ Esc: close/quit ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Space for the dropdown
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        let title_area = layout[0];
        let input_area = layout[1];
        let status_area = layout[3];

        self.layout_regions.clear();

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Storefront search",
                Style::default().fg(Color::Cyan),
            ))),
            title_area,
        );

        self.render_input_field(frame, input_area);
        self.render_status_line(frame, status_area);

        // Drawn last so it sits on top
        self.layout_regions.suggestion_panel = render_panel(&mut self.autocomplete, frame, input_area);
    }

    /// Render the search input
    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(&self.textarea, area);
        self.layout_regions.input_field = Some(area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(status) = &self.status {
            Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(Color::Yellow),
            ))
        } else if self.autocomplete.is_loading() {
            Line::from(Span::styled(" searching…", Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

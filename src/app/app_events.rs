use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click::handle_click;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                // Single-line input
                let text = text.replace(['\r', '\n'], " ");
                if self.textarea.insert_str(text) {
                    self.input_changed(now);
                }
            }
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // First Esc hides the rows, second one leaves
                if self.autocomplete.is_visible() {
                    self.autocomplete.on_outside_click();
                } else {
                    self.quit();
                }
            }
            KeyCode::Enter => {
                let effects = self.autocomplete.on_submit();
                self.apply_effects(effects);
            }
            KeyCode::Down => self.autocomplete.select_next(),
            KeyCode::Up => self.autocomplete.select_previous(),
            KeyCode::Tab => {
                let effects = self.autocomplete.accept_selected();
                self.apply_effects(effects);
            }
            _ => {
                let before = self.query().to_string();
                self.textarea.input(key);
                // Ctrl+M inserts a newline; the search box is one line
                if self.textarea.lines().len() > 1 {
                    self.textarea.delete_newline();
                }
                if self.query() != before {
                    self.input_changed(now);
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            handle_click(self, region, mouse);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

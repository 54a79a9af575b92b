use std::time::Instant;

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::autocomplete::{AutocompleteController, Effect};
use crate::config::{Config, EndpointConfig};
use crate::layout::LayoutRegions;
use crate::lookup::{LookupHandle, build_query_url};

/// How the app ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The search form was submitted; `url` is where it navigates
    Submitted { query: String, url: String },
    /// Left without submitting
    Quit,
}

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub autocomplete: AutocompleteController,
    pub layout_regions: LayoutRegions,
    /// One-line message shown in the status bar (config warnings)
    pub status: Option<String>,
    lookup: LookupHandle,
    endpoint: EndpointConfig,
    outcome: Option<Outcome>,
}

impl App {
    /// Create a new App talking to an already spawned lookup worker
    pub fn new(config: &Config, lookup: LookupHandle) -> Self {
        Self {
            textarea: new_textarea(""),
            autocomplete: AutocompleteController::new(&config.autocomplete),
            layout_regions: LayoutRegions::new(),
            status: None,
            lookup,
            endpoint: config.endpoint.clone(),
            outcome: None,
        }
    }

    /// Get the current input text
    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Pre-fill the input as if the user had typed `query`
    pub fn set_initial_query(&mut self, query: &str, now: Instant) {
        self.textarea = new_textarea(query);
        self.input_changed(now);
    }

    /// Event-loop tick: apply finished lookups, then fire a settled debounce
    pub fn tick(&mut self, now: Instant) {
        while let Some(response) = self.lookup.try_recv() {
            self.autocomplete.on_response(response);
        }
        let effects = self.autocomplete.on_tick(now);
        self.apply_effects(effects);
    }

    pub(super) fn quit(&mut self) {
        self.outcome = Some(Outcome::Quit);
    }

    pub(super) fn input_changed(&mut self, now: Instant) {
        let value = self.query().to_string();
        let effects = self.autocomplete.on_input(&value, now);
        self.apply_effects(effects);
    }

    /// Carry out controller effects: lookups go to the worker, a submission
    /// ends the app
    pub(super) fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit { query } => {
                    // The controller may have rewritten the input (row click)
                    if self.query() != self.autocomplete.input() {
                        self.textarea = new_textarea(self.autocomplete.input());
                    }
                    let url =
                        build_query_url(&self.endpoint.base_url, &self.endpoint.search_path, &query);
                    log::debug!("Submitting search form: {}", url);
                    self.outcome = Some(Outcome::Submitted { query, url });
                }
                other => {
                    if let Some(request) = other.into_request()
                        && !self.lookup.send(request)
                    {
                        log::warn!("Lookup worker is gone; suggestions disabled");
                    }
                }
            }
        }
    }
}

/// Single-line input with the cursor at the end of `text`
fn new_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

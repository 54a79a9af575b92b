//! Autocomplete controller
//!
//! A pure state machine. Input changes, ticks, clicks and lookup responses go
//! in; effects for the shell to carry out come out. The controller never
//! touches the network or the screen itself, so several independent
//! controllers can be driven side by side.

use std::ops::Range;
use std::time::Instant;

use super::autocomplete_state::WidgetState;
use super::debouncer::Debouncer;
use super::query::{InputDecision, Query, decide};
use super::suggestion::Suggestion;
use crate::config::AutocompleteConfig;
use crate::lookup::{LookupRequest, LookupResponse};

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a lookup
    Fetch { query: String, request_id: u64 },
    /// Abort a lookup that is no longer wanted
    Cancel { request_id: u64 },
    /// Submit the search form with this value
    Submit { query: String },
}

impl Effect {
    /// The worker message for this effect, if it is a lookup effect
    pub fn into_request(self) -> Option<LookupRequest> {
        match self {
            Effect::Fetch { query, request_id } => Some(LookupRequest::Fetch { query, request_id }),
            Effect::Cancel { request_id } => Some(LookupRequest::Cancel { request_id }),
            Effect::Submit { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutocompleteController {
    input: String,
    state: WidgetState,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    /// First row shown when the list is taller than the panel
    scroll_offset: usize,
    debouncer: Debouncer,
    scheduled: Option<Query>,
    /// Sequence number of the most recently issued request
    last_request_id: u64,
    /// Request whose response will be accepted, if any
    in_flight: Option<u64>,
    min_query_len: usize,
}

impl AutocompleteController {
    pub fn new(config: &AutocompleteConfig) -> Self {
        Self {
            input: String::new(),
            state: WidgetState::Idle,
            suggestions: Vec::new(),
            selected: None,
            scroll_offset: 0,
            debouncer: Debouncer::new(config.debounce_ms),
            scheduled: None,
            last_request_id: 0,
            in_flight: None,
            min_query_len: config.min_query_len,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Rendered row texts, in display order
    pub fn rows(&self) -> Vec<String> {
        self.suggestions.iter().map(Suggestion::label).collect()
    }

    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// True while a request has been issued and not yet answered
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows that fit in a panel `viewport` rows tall
    ///
    /// Scrolls just far enough to keep the highlighted row on screen.
    pub fn visible_window(&mut self, viewport: usize) -> Range<usize> {
        let len = self.suggestions.len();
        if viewport == 0 || len == 0 {
            return 0..0;
        }

        let mut offset = self.scroll_offset;
        if let Some(selected) = self.selected {
            if selected < offset {
                offset = selected;
            } else if selected >= offset + viewport {
                offset = selected + 1 - viewport;
            }
        }
        offset = offset.min(len.saturating_sub(viewport));

        self.scroll_offset = offset;
        offset..(offset + viewport).min(len)
    }

    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    /// The input value changed
    ///
    /// Short input clears the rows at once and schedules nothing. Anything
    /// else restarts the debounce window. Either way the request in flight,
    /// if any, is now stale and gets cancelled.
    pub fn on_input(&mut self, value: &str, now: Instant) -> Vec<Effect> {
        self.input = value.to_string();
        let effects = self.cancel_in_flight();

        match decide(value, self.min_query_len) {
            InputDecision::Clear => {
                self.debouncer.cancel();
                self.scheduled = None;
                self.clear_rows();
                self.state = WidgetState::Idle;
            }
            InputDecision::Lookup(query) => {
                self.debouncer.schedule_execution(now);
                self.state = WidgetState::Pending(query.clone());
                self.scheduled = Some(query);
            }
        }

        effects
    }

    /// Event-loop tick: issue the scheduled lookup once the input has settled
    pub fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        if !self.debouncer.should_fire(now) {
            return Vec::new();
        }
        let Some(query) = self.scheduled.take() else {
            return Vec::new();
        };

        self.last_request_id = self.last_request_id.wrapping_add(1);
        self.in_flight = Some(self.last_request_id);

        vec![Effect::Fetch {
            query: query.into_string(),
            request_id: self.last_request_id,
        }]
    }

    /// Apply a worker response
    ///
    /// Only the response to the request in flight is applied. Returns true if
    /// the displayed rows were replaced.
    pub fn on_response(&mut self, response: LookupResponse) -> bool {
        let request_id = response.request_id();
        if self.in_flight != Some(request_id) {
            log::debug!(
                "Discarding stale response for request {} (latest: {})",
                request_id,
                self.last_request_id
            );
            return false;
        }
        self.in_flight = None;

        match response {
            LookupResponse::Suggestions { suggestions, .. } => {
                self.state = if suggestions.is_empty() {
                    WidgetState::Idle
                } else {
                    WidgetState::Showing
                };
                self.suggestions = suggestions;
                self.selected = None;
                self.scroll_offset = 0;
                true
            }
            LookupResponse::Failed { error, .. } => {
                // Keep whatever is on screen
                log::warn!("Error fetching suggestions: {}", error);
                false
            }
            LookupResponse::Cancelled { .. } => false,
        }
    }

    /// A suggestion row was clicked
    ///
    /// Copies the row's name into the input, hides the rows and submits.
    pub fn on_row_click(&mut self, index: usize) -> Vec<Effect> {
        let Some(suggestion) = self.suggestions.get(index) else {
            return Vec::new();
        };
        let name = suggestion.name.clone();
        self.input = name.clone();

        let mut effects = self.cancel_pending();
        self.clear_rows();
        self.state = WidgetState::Idle;
        effects.push(Effect::Submit { query: name });
        effects
    }

    /// A click landed outside both the input and the rows
    pub fn on_outside_click(&mut self) {
        self.clear_rows();
        if self.state == WidgetState::Showing {
            self.state = WidgetState::Dismissed;
        }
    }

    /// The form was submitted directly (Enter), with the raw input value
    pub fn on_submit(&mut self) -> Vec<Effect> {
        let mut effects = self.cancel_pending();
        self.clear_rows();
        self.state = WidgetState::Idle;
        effects.push(Effect::Submit {
            query: self.input.clone(),
        });
        effects
    }

    /// Move the highlight down, wrapping to the first row
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.suggestions.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move the highlight up, wrapping to the last row
    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Accept the highlighted row exactly as if it had been clicked
    pub fn accept_selected(&mut self) -> Vec<Effect> {
        match self.selected {
            Some(index) => self.on_row_click(index),
            None => Vec::new(),
        }
    }

    fn clear_rows(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.scroll_offset = 0;
    }

    fn cancel_in_flight(&mut self) -> Vec<Effect> {
        match self.in_flight.take() {
            Some(request_id) => vec![Effect::Cancel { request_id }],
            None => Vec::new(),
        }
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        self.debouncer.cancel();
        self.scheduled = None;
        self.cancel_in_flight()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;

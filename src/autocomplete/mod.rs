pub mod autocomplete_render;
mod autocomplete_state;
mod controller;
mod debouncer;
mod query;
mod suggestion;

pub use autocomplete_state::WidgetState;
pub use controller::{AutocompleteController, Effect};
pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use query::{DEFAULT_MIN_QUERY_LEN, InputDecision, Query, decide};
pub use suggestion::{Suggestion, parse_suggestions};

//! Widget state

use super::query::Query;

/// Lifecycle of the suggestion widget
///
/// The displayed rows live on the controller, not in this enum: a `Pending`
/// widget keeps showing its previous rows until a response replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Nothing to show, nothing scheduled
    #[default]
    Idle,
    /// A lookup for this query is scheduled or in flight
    Pending(Query),
    /// Rows are on screen
    Showing,
    /// Rows were hidden by a click elsewhere
    Dismissed,
}

impl WidgetState {
    pub fn is_pending(&self) -> bool {
        matches!(self, WidgetState::Pending(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            WidgetState::Idle => "idle",
            WidgetState::Pending(_) => "pending",
            WidgetState::Showing => "showing",
            WidgetState::Dismissed => "dismissed",
        }
    }
}

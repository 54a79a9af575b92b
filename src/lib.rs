//! Terminal search box with live product suggestions from a storefront's
//! autocomplete endpoint.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod widgets;

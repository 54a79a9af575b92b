//! Tests for App state and effect handling

use super::*;
use crate::autocomplete::Suggestion;
use crate::test_utils::test_helpers::{CannedSource, DEBOUNCE, test_app, wait_for_lookup};

#[test]
fn test_new_app_is_empty() {
    let app = test_app(CannedSource::new());

    assert_eq!(app.query(), "");
    assert!(!app.should_quit());
    assert!(app.outcome().is_none());
    assert!(!app.autocomplete.is_visible());
}

#[test]
fn test_initial_query_triggers_lookup() {
    let source = CannedSource::new().with("sh", Ok(vec![Suggestion::new("Shoe", "Acme")]));
    let calls = source.calls();
    let mut app = test_app(source);
    let now = Instant::now();

    app.set_initial_query("sh", now);
    assert_eq!(app.query(), "sh");

    assert!(wait_for_lookup(&mut app, now + DEBOUNCE, 2000));
    assert_eq!(*calls.lock().unwrap(), vec!["sh".to_string()]);
    assert_eq!(app.autocomplete.rows(), vec!["Shoe (Acme)".to_string()]);
}

#[test]
fn test_short_initial_query_never_reaches_worker() {
    let source = CannedSource::new();
    let calls = source.calls();
    let mut app = test_app(source);
    let now = Instant::now();

    app.set_initial_query("a", now);
    assert!(wait_for_lookup(&mut app, now + DEBOUNCE * 5, 200));

    assert!(calls.lock().unwrap().is_empty());
    assert!(app.autocomplete.rows().is_empty());
}

#[test]
fn test_submit_effect_builds_search_url() {
    let mut app = test_app(CannedSource::new());

    app.apply_effects(vec![Effect::Submit {
        query: "red shoes".to_string(),
    }]);

    assert_eq!(
        app.outcome(),
        Some(&Outcome::Submitted {
            query: "red shoes".to_string(),
            url: "http://127.0.0.1:8000/store/products/?q=red%20shoes".to_string(),
        })
    );
    assert!(app.should_quit());
}

#[test]
fn test_failed_lookup_is_silent() {
    let source = CannedSource::new().with("sh", Err(crate::lookup::LookupError::Status { code: 500 }));
    let mut app = test_app(source);
    let now = Instant::now();

    app.set_initial_query("sh", now);
    assert!(wait_for_lookup(&mut app, now + DEBOUNCE, 2000));

    assert!(app.autocomplete.rows().is_empty());
    assert!(app.status.is_none());
    assert!(!app.should_quit());
}

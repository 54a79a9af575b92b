//! Lookup worker thread
//!
//! Runs suggestion lookups on a background thread so the UI never blocks.
//! Requests arrive over an unbounded channel, each lookup runs as a task on
//! a current-thread tokio runtime, and results go back over a std channel
//! that the UI drains without blocking.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::{LookupError, LookupRequest, LookupResponse, SuggestionSource};
use crate::autocomplete::Suggestion;

/// UI-side ends of the worker channels
pub struct LookupHandle {
    request_tx: UnboundedSender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
}

impl LookupHandle {
    /// Queue a request for the worker
    ///
    /// Returns false if the worker has shut down.
    pub fn send(&self, request: LookupRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Take the next finished response, if any, without blocking
    pub fn try_recv(&self) -> Option<LookupResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for the next response
    pub fn recv_timeout(&self, timeout: Duration) -> Option<LookupResponse> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Spawn the lookup worker thread
///
/// The thread is detached, never joined: it exits once the returned handle
/// is dropped and its request channel closes.
pub fn spawn_worker<S>(source: S) -> LookupHandle
where
    S: SuggestionSource + 'static,
{
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let source: Arc<dyn SuggestionSource> = Arc::new(source);

    std::thread::spawn(move || {
        worker_loop(source, request_rx, response_tx);
    });

    LookupHandle {
        request_tx,
        response_rx,
    }
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    source: Arc<dyn SuggestionSource>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start lookup runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        // Only the latest request is ever live
        let mut in_flight: Option<(u64, CancellationToken)> = None;

        while let Some(request) = request_rx.recv().await {
            match request {
                LookupRequest::Fetch { query, request_id } => {
                    let token = CancellationToken::new();
                    if let Some((previous_id, previous)) =
                        in_flight.replace((request_id, token.clone()))
                    {
                        previous.cancel();
                        log::debug!(
                            "Request {} superseded by request {}",
                            previous_id,
                            request_id
                        );
                    }

                    log::debug!("Looking up {:?} (request {})", query, request_id);
                    let lookup = source.fetch(query);
                    tokio::spawn(run_lookup(lookup, request_id, token, response_tx.clone()));
                }
                LookupRequest::Cancel { request_id } => match &in_flight {
                    Some((current_id, token)) if *current_id == request_id => {
                        token.cancel();
                        in_flight = None;
                        log::debug!("Cancelled request {}", request_id);
                    }
                    _ => {
                        log::debug!("Ignoring cancel for request {} (not in flight)", request_id);
                    }
                },
            }
        }
    });

    log::debug!("Lookup worker thread shutting down");
}

/// Drive one lookup to completion or cancellation and report the outcome
async fn run_lookup(
    lookup: BoxFuture<'static, Result<Vec<Suggestion>, LookupError>>,
    request_id: u64,
    token: CancellationToken,
    response_tx: Sender<LookupResponse>,
) {
    let response = tokio::select! {
        biased;
        _ = token.cancelled() => LookupResponse::Cancelled { request_id },
        result = lookup => match result {
            Ok(suggestions) => LookupResponse::Suggestions { request_id, suggestions },
            Err(error) => LookupResponse::Failed { request_id, error },
        },
    };

    // UI gone means nobody is listening any more
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

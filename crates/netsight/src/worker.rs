//! Background worker for suggestion requests so the dashboard never blocks
//! on the external provider.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use netsight_core::SuggestionError;
use netsight_core::suggest::{
    RequestTicket, SuggestionProvider, SuggestionRequest, SuggestionResponse, request_suggestion,
};

/// Request sent to the background worker
#[derive(Debug)]
pub enum WorkerRequest {
    Suggest {
        ticket: RequestTicket,
        request: SuggestionRequest,
    },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker, tagged with the ticket it answers
#[derive(Debug)]
pub struct WorkerResponse {
    pub ticket: RequestTicket,
    pub result: Result<SuggestionResponse, SuggestionError>,
}

/// Runs suggestion requests one at a time on a separate thread
pub struct SuggestionWorker {
    request_tx: Sender<WorkerRequest>,
    response_rx: Receiver<WorkerResponse>,
    /// Requests sent but not yet answered
    in_flight: Arc<AtomicUsize>,
    thread: Option<JoinHandle<()>>,
}

impl SuggestionWorker {
    pub fn new(provider: Arc<dyn SuggestionProvider>) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let in_flight = Arc::new(AtomicUsize::new(0));

        let counter = in_flight.clone();
        let thread = thread::spawn(move || {
            run(provider.as_ref(), &counter, request_rx, response_tx)
        });

        Self {
            request_tx,
            response_rx,
            in_flight,
            thread: Some(thread),
        }
    }

    /// Queue a request; false if the worker thread has gone away
    pub fn send(&self, ticket: RequestTicket, request: SuggestionRequest) -> bool {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let sent = self
            .request_tx
            .send(WorkerRequest::Suggest { ticket, request })
            .is_ok();
        if !sent {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
        sent
    }

    /// Whether a request is queued or waiting on the provider
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn shutdown(&self) {
        let _ = self.request_tx.send(WorkerRequest::Shutdown);
    }
}

impl Drop for SuggestionWorker {
    fn drop(&mut self) {
        self.shutdown();
        let Some(thread) = self.thread.take() else {
            return;
        };
        // A provider call cannot be interrupted; leave the thread to finish
        // on its own so quitting never waits on it.
        if self.is_busy() {
            tracing::debug!("Detaching suggestion worker with a request in flight");
            return;
        }
        let _ = thread.join();
    }
}

fn run(
    provider: &dyn SuggestionProvider,
    in_flight: &AtomicUsize,
    request_rx: Receiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            WorkerRequest::Shutdown => break,
            WorkerRequest::Suggest { ticket, request } => {
                tracing::info!(ticket = ticket.0, goal = %request.goal, "Requesting suggestion");

                let result = request_suggestion(provider, &request);
                in_flight.fetch_sub(1, Ordering::SeqCst);
                if let Err(e) = &result {
                    match std::error::Error::source(e) {
                        Some(cause) => {
                            tracing::error!(ticket = ticket.0, "AI suggestion failed: {cause}")
                        }
                        None => tracing::error!(ticket = ticket.0, "AI suggestion failed: {e}"),
                    }
                }

                if response_tx.send(WorkerResponse { ticket, result }).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("Suggestion worker stopped");
}

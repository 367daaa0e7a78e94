//! Simulated category fetch with background delivery.
//!
//! The catalog is in-memory, but the UI treats loading a category like a
//! network round-trip: the filtered result set becomes visible only after a
//! fixed artificial delay. A background thread sleeps out the delay and
//! delivers the items over a channel that the main event loop polls.
//!
//! At most one request is in flight. Starting a new fetch replaces the
//! channel receiver, so the result of a superseded request is never
//! delivered and can never overwrite the current view.

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use crate::models::Item;

/// Artificial latency standing in for the future network round-trip.
const SIMULATED_LATENCY: Duration = Duration::from_millis(300);

/// Fetch status tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch started
    Idle,
    /// Waiting for the current request to complete
    Loading,
    /// Last request completed and was delivered
    Ready,
}

/// Message sent from the fetch thread to the main thread.
#[derive(Debug, Clone)]
struct FetchComplete {
    items: Vec<Item>,
}

/// State for the in-flight category fetch, polled from the event loop.
#[derive(Debug)]
pub struct FetchState {
    /// Current fetch status
    status: FetchStatus,
    /// Message channel receiver for the in-flight request
    receiver: Option<Receiver<FetchComplete>>,
}

impl FetchState {
    /// Creates a new idle fetch state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            receiver: None,
        }
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> FetchStatus {
        self.status
    }

    /// Checks whether a request is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    /// Starts a fetch for an already-filtered result set.
    ///
    /// Any prior in-flight request is abandoned: its channel is dropped
    /// here, so its result has nowhere to arrive.
    pub fn start(&mut self, items: Vec<Item>) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.status = FetchStatus::Loading;

        thread::spawn(move || {
            thread::sleep(SIMULATED_LATENCY);
            // Send fails only when the request was superseded; the result
            // is intentionally dropped in that case.
            let _ = sender.send(FetchComplete { items });
        });
    }

    /// Abandons the in-flight request, if any.
    pub fn abandon(&mut self) {
        self.receiver = None;
        self.status = FetchStatus::Idle;
    }

    /// Polls for a completed fetch.
    ///
    /// Returns the delivered items once per completed request, `None`
    /// otherwise. Call this every tick of the event loop.
    pub fn poll(&mut self) -> Option<Vec<Item>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(message) => {
                self.status = FetchStatus::Ready;
                self.receiver = None;
                Some(message.items)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                // Fetch thread died without sending
                self.receiver = None;
                self.status = FetchStatus::Idle;
                None
            }
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

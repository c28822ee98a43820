//! Global input listener lifecycle.
//!
//! Responsibilities:
//! - Forward terminal events from an event stream into the action channel.
//! - Attach at most once and detach idempotently.
//!
//! Does NOT handle:
//! - Interpreting keys (see `app::input`).
//!
//! Invariants:
//! - Only key presses are forwarded; releases and repeats are dropped.
//! - Key and resize events wait for channel capacity; mouse events are
//!   dropped when the channel is full.
//! - After `detach`, no further events are forwarded.

use std::io;

use crossterm::event::{Event, KeyEventKind};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc::{Sender, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::action::Action;

/// Translate a terminal event into an action, if it carries one.
pub fn event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Input(key)),
        Event::Mouse(mouse) => Some(Action::Mouse(mouse)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Owns the event-forwarding task.
#[derive(Debug)]
pub struct InputListener {
    tracker: TaskTracker,
    token: Option<CancellationToken>,
}

impl InputListener {
    pub fn new(tracker: TaskTracker) -> Self {
        Self {
            tracker,
            token: None,
        }
    }

    /// Start forwarding `events` to `tx`. Returns false if already attached.
    pub fn attach<S>(&mut self, events: S, tx: Sender<Action>) -> bool
    where
        S: Stream<Item = io::Result<Event>> + Send + 'static,
    {
        if self.token.is_some() {
            tracing::debug!("Input listener already attached");
            return false;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        self.tracker.spawn(async move {
            let mut events = Box::pin(events);
            loop {
                let event = tokio::select! {
                    _ = cancelled.cancelled() => break,
                    event = events.next() => event,
                };
                let event = match event {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Input stream error");
                        break;
                    }
                    None => break,
                };

                let droppable = matches!(event, Event::Mouse(_));
                let Some(action) = event_to_action(event) else {
                    continue;
                };

                if droppable {
                    match tx.try_send(action) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!("Input channel full, dropping mouse event");
                        }
                        Err(TrySendError::Closed(_)) => break,
                    }
                } else {
                    tokio::select! {
                        _ = cancelled.cancelled() => break,
                        sent = tx.send(action) => {
                            if sent.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
            tracing::debug!("Input listener stopped");
        });

        self.token = Some(token);
        tracing::debug!("Input listener attached");
        true
    }

    /// Stop forwarding. Returns false if nothing was attached.
    pub fn detach(&mut self) -> bool {
        match self.token.take() {
            Some(token) => {
                token.cancel();
                tracing::debug!("Input listener detached");
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.token.is_some()
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.detach();
    }
}

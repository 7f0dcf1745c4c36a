//! Application-ready trigger.
//!
//! The host fires [`ReadySignal`] once it is able to serve. The signal may be
//! fired repeatedly and from any task; every event is forwarded to the
//! registrar, whose latch turns all but the first into no-ops.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::register::{Registrar, Transport};

/// An "application fully initialized" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyEvent {
    /// Who fired the event, for logs.
    pub source: &'static str,
}

/// Broadcast handle for ready events.
#[derive(Clone)]
pub struct ReadySignal {
    tx: broadcast::Sender<ReadyEvent>,
}

impl ReadySignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReadyEvent> {
        self.tx.subscribe()
    }

    /// Announce readiness. Returns how many listeners were notified.
    pub fn fire(&self, source: &'static str) -> usize {
        self.tx.send(ReadyEvent { source }).unwrap_or(0)
    }
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward every ready event to `registrar.on_ready()` until the signal is dropped.
pub fn spawn_ready_listener<T>(
    registrar: Arc<Registrar<T>>,
    mut events: broadcast::Receiver<ReadyEvent>,
) -> JoinHandle<()>
where
    T: Transport + 'static,
{
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let outcome = registrar.on_ready().await;
                    tracing::debug!(source = event.source, outcome = %outcome, "Ready event handled");
                }
                Err(RecvError::Lagged(skipped)) => {
                    // Missed events still mean the application became ready.
                    tracing::debug!(skipped, "Ready listener lagged");
                    registrar.on_ready().await;
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

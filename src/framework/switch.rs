//! # Switch to Latest
//!
//! When a view's input changes while a fetch for the old input is still running,
//! only the newest fetch may touch the view's state.
//!
//! [`SwitchLatest`] hands out a [`Ticket`] per fetch. Issuing a ticket
//! invalidates every older one, and [`Ticket::commit`] only runs its closure
//! while the ticket is still current. Spawned fetches are additionally aborted
//! when superseded.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Default)]
struct SwitchState {
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

/// Generation counter plus the handle of the current spawned fetch.
#[derive(Debug, Clone, Default)]
pub struct SwitchLatest {
    state: Arc<Mutex<SwitchState>>,
}

/// Proof that a fetch was started at a given generation.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    state: Arc<Mutex<SwitchState>>,
}

fn lock(state: &Mutex<SwitchState>) -> MutexGuard<'_, SwitchState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SwitchLatest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation. Every previously issued ticket becomes stale.
    pub fn ticket(&self) -> Ticket {
        let mut state = lock(&self.state);
        state.generation += 1;
        Ticket {
            generation: state.generation,
            state: self.state.clone(),
        }
    }

    /// A ticket for the current generation, without invalidating anything.
    ///
    /// Work that follows up on what is already shown (a refresh after a
    /// write) uses this, so a route change in the meantime makes it stale.
    pub fn current(&self) -> Ticket {
        Ticket {
            generation: lock(&self.state).generation,
            state: self.state.clone(),
        }
    }

    /// Issues a ticket, aborts the previous spawned fetch and spawns `make(ticket)`.
    pub fn spawn<F, Fut>(&self, make: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let ticket = self.ticket();
        self.run(&ticket, make(ticket.clone()));
        ticket
    }

    /// Spawns `fetch` as the in-flight task of `ticket`, aborting the previous one.
    ///
    /// If `ticket` is already stale the task is aborted straight away.
    pub fn run<Fut>(&self, ticket: &Ticket, fetch: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(fetch);

        let mut state = lock(&self.state);
        if state.generation == ticket.generation {
            if let Some(previous) = state.in_flight.replace(handle) {
                previous.abort();
            }
        } else {
            // Superseded before it was even recorded.
            handle.abort();
        }
        debug!(generation = ticket.generation, "Switched to latest fetch");
    }

    /// Invalidates all tickets and aborts the spawned fetch, if any.
    pub fn cancel(&self) {
        let mut state = lock(&self.state);
        state.generation += 1;
        if let Some(handle) = state.in_flight.take() {
            handle.abort();
        }
    }

    pub fn generation(&self) -> u64 {
        lock(&self.state).generation
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        lock(&self.state).generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs `apply` only if no newer ticket has been issued.
    ///
    /// The generation lock is held while `apply` runs, so a new ticket cannot be
    /// issued half way through a state update. `apply` must not call back into
    /// the owner of the switch; notify collaborators after `commit` returns.
    pub fn commit<F: FnOnce()>(&self, apply: F) -> bool {
        let state = lock(&self.state);
        if state.generation != self.generation {
            debug!(
                stale = self.generation,
                current = state.generation,
                "Dropping stale result"
            );
            return false;
        }
        apply();
        drop(state);
        true
    }
}

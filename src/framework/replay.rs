//! # Replay Cell
//!
//! A [`Replay<T>`] holds the latest value a view has published. Observers that
//! arrive late get that value immediately instead of triggering new work, so a
//! view fetches at most once per activation no matter how many parts of the UI
//! read its result.
//!
//! Built on [`tokio::sync::watch`]: the sender is the cell, every observer is a
//! receiver.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// A cloneable, replaying result cell.
///
/// Clones share the same value. A fresh activation of a view creates a fresh cell.
#[derive(Debug)]
pub struct Replay<T> {
    sender: Arc<watch::Sender<Option<T>>>,
    published: Arc<AtomicUsize>,
}

impl<T> Clone for Replay<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            published: self.published.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Replay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Replay<T> {
    /// Creates an unresolved cell.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
            published: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replaces the current value and wakes every waiting observer.
    pub fn publish(&self, value: T) {
        self.published.fetch_add(1, Ordering::SeqCst);
        self.sender.send_replace(Some(value));
    }

    /// The current value, if any has been published.
    pub fn latest(&self) -> Option<T> {
        self.sender.borrow().clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// How many values have been published into this cell.
    pub fn publish_count(&self) -> usize {
        self.published.load(Ordering::SeqCst)
    }

    /// Waits for the first value (returns at once if already resolved).
    pub async fn resolved(&self) -> T {
        let mut receiver = self.sender.subscribe();
        loop {
            if let Some(value) = receiver.borrow_and_update().clone() {
                return value;
            }
            if receiver.changed().await.is_err() {
                unreachable!("Replay holds its own sender, the channel cannot close");
            }
        }
    }

    /// An observer that first replays the current value, then yields each new one.
    pub fn subscribe(&self) -> Subscriber<T> {
        Subscriber {
            receiver: self.sender.subscribe(),
            replayed: false,
        }
    }
}

/// A stream-like view over a [`Replay`] cell.
///
/// Values published faster than the subscriber polls are coalesced; it always
/// sees the newest one.
#[derive(Debug)]
pub struct Subscriber<T> {
    receiver: watch::Receiver<Option<T>>,
    replayed: bool,
}

impl<T: Clone> Subscriber<T> {
    /// The next value, or `None` once every handle to the cell has been dropped.
    pub async fn next(&mut self) -> Option<T> {
        if !self.replayed {
            self.replayed = true;
            if let Some(value) = self.receiver.borrow_and_update().clone() {
                return Some(value);
            }
        }
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(value) = self.receiver.borrow_and_update().clone() {
                return Some(value);
            }
        }
    }
}

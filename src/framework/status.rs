//! Loading and error flags owned by a single view.

use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot of a view's flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStatus {
    pub loading: bool,
    pub error: bool,
}

/// Where a view is in its `Idle → Loading → {Loaded | Failed}` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl ViewStatus {
    /// Derives the phase given whether the view has published a result yet.
    pub fn phase(&self, resolved: bool) -> Phase {
        match (self.loading, self.error, resolved) {
            (true, _, _) => Phase::Loading,
            (false, true, _) => Phase::Failed,
            (false, false, true) => Phase::Loaded,
            (false, false, false) => Phase::Idle,
        }
    }
}

/// Observable holder for a [`ViewStatus`].
#[derive(Debug, Clone)]
pub struct StatusCell {
    sender: Arc<watch::Sender<ViewStatus>>,
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCell {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ViewStatus::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn get(&self) -> ViewStatus {
        *self.sender.borrow()
    }

    /// loading = true, error = false.
    pub fn begin(&self) {
        self.sender.send_replace(ViewStatus {
            loading: true,
            error: false,
        });
    }

    /// loading = true, error untouched.
    pub fn mark_loading(&self) {
        self.sender.send_modify(|s| s.loading = true);
    }

    /// loading = false, error untouched.
    pub fn settle(&self) {
        self.sender.send_modify(|s| s.loading = false);
    }

    /// loading = false, error = true.
    pub fn fail(&self) {
        self.sender.send_replace(ViewStatus {
            loading: false,
            error: true,
        });
    }
}

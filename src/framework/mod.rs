//! Small reactive building blocks shared by the views.
//!
//! # Main Components
//!
//! - [`Replay`] - Result cell that replays its latest value to late observers
//! - [`SwitchLatest`] - Generation tickets so only the newest fetch wins
//! - [`StatusCell`] - Loading/error flags of one view
//!
//! # Testing
//!
//! See [`mock`] module for a mock backend and recording collaborators.

pub mod mock;
pub mod replay;
pub mod status;
pub mod switch;

// Re-export core types for convenience
pub use replay::{Replay, Subscriber};
pub use status::{Phase, StatusCell, ViewStatus};
pub use switch::{SwitchLatest, Ticket};

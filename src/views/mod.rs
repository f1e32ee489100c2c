//! The two screens of the storefront and their collaborators.
//!
//! Views own their loading/error flags and the [`Replay`](crate::framework::Replay)
//! cell their result is published into. Rendering, routing and toasts are
//! external; views talk to them through [`Navigator`] and [`Notifier`].

pub mod catalog_view;
pub mod detail_view;
pub mod format;
pub mod notify;
pub mod routing;

pub use catalog_view::*;
pub use detail_view::*;
pub use format::*;
pub use notify::*;
pub use routing::*;

//! Pure data structures (DTOs) exchanged with the catalog, inventory and purchase endpoints.
//!
//! Every type here is transient: it is created from an HTTP response, owned by the
//! view that asked for it and dropped on the next fetch.

pub mod inventory;
pub mod product;
pub mod purchase;

pub use inventory::*;
pub use product::*;
pub use purchase::*;

//! State Management Layer
//!
//! The fetch coordinator and the data it owns. Follows a unidirectional data
//! flow pattern:
//!
//! ```text
//! Trigger → Coordinator → FetchTicket → Service Call → Service Event → complete() → View
//! ```

mod coordinator;
mod pipeline;
mod store;

pub use coordinator::*;
pub use pipeline::*;
pub use store::*;

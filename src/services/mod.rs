//! Service Layer
//!
//! The service layer provides abstraction over the remote catalogue and
//! handles async operations and result delivery.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                              │
//! │  ┌───────────────┐  ┌───────────────┐  ┌────────────────┐   │
//! │  │ GraphqlSource │  │ FixtureSource │  │ tokio runtime  │   │
//! │  │   (remote)    │  │   (offline)   │  │   (spawning)   │   │
//! │  └───────────────┘  └───────────────┘  └────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ ServiceEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Browser                                 │
//! │                 (FetchCoordinator)                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod events;
mod fixture;
mod graphql;
mod hub;
mod runtime;
mod source;

pub use events::*;
pub use fixture::*;
pub use graphql::*;
pub use hub::*;
pub use runtime::*;
pub use source::*;

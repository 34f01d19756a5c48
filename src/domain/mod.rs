//! Domain Models
//!
//! Plain data types shared by the state, service, and view layers.

pub mod character;
pub mod config;
pub mod criteria;
pub mod mode;
pub mod page;

pub use character::{Character, Status};
pub use config::{AppConfig, SourceKind};
pub use criteria::{FilterCriteria, SortCriteria, SortKey};
pub use mode::LoadMode;
pub use page::PageResult;

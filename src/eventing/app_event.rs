//! AppEvent - Application Event Enum
//!
//! Change notifications sent from the browser to whoever renders it.

use crate::domain::LoadMode;
use crate::states::LoadStatus;

/// Browser state changes a view consumer re-renders on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Load mode switched (store and cursor were reset)
    ModeChanged { mode: LoadMode },

    /// Load status changed
    StatusChanged { status: LoadStatus },

    /// A page was applied to the record store
    StoreChanged { page: u32, len: usize },

    /// Filter or sort criteria changed
    ViewCriteriaChanged,
}

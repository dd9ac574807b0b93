//! State Management
//!
//! Global application state and per-widget section fetching.

pub mod global;
pub mod section;

pub use global::{provide_global_state, use_global_state, GlobalState, PendingTransfer};
pub use section::{use_section, SectionHandle};

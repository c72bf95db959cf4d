// Fri Oct 16 2026 - Alex

pub mod coordinator;

pub use coordinator::{Coordinator, CoordinatorState};

// Fri Oct 16 2026 - Alex

pub mod context;
pub mod group;

pub use context::Context;
pub use group::TaskGroup;

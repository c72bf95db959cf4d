// Fri Oct 16 2026 - Alex

pub mod config;
pub mod curator;
pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod source;
pub mod strategy;
pub mod structure;
pub mod utils;
pub mod walker;

pub use config::Config;
pub use curator::{CacheLevel, Curator, Platform};
pub use engine::{Context, TaskGroup};
pub use error::{Error, Result};
pub use orchestrator::Coordinator;
pub use strategy::{Builder, Registry, SharedStrategy, Strategy};
pub use structure::{Field, Layout, Structure};
pub use walker::{Walker, WalkerBuilder};

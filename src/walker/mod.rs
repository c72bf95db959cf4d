// Fri Oct 16 2026 - Alex

pub mod builder;
pub mod report;
pub mod sync;
pub mod visitor;

pub use builder::WalkerBuilder;
pub use report::ReportWalker;
pub use sync::SyncWalker;
pub use visitor::{Applied, Visited, Visitor};

use crate::engine::Context;
use crate::error::Result;
use crate::strategy::SharedStrategy;
use regex::Regex;

pub const JSON_STD: &str = "json_std";
pub const JSON_FILE: &str = "json_file";
pub const TEXT_STD: &str = "text_std";
pub const TEXT_FILE: &str = "text_file";
pub const SOURCE_STD: &str = "source_std";
pub const SOURCE_FILE: &str = "source_file";

/// Applies a strategy to every matching declaration and materializes the
/// results. `deep` also visits declarations nested inside other ones.
pub trait Walker: Send + Sync {
    fn visit(&self, ctx: &Context, pattern: &Regex, stg: SharedStrategy, deep: bool) -> Result<()>;
}

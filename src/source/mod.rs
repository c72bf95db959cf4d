// Fri Oct 16 2026 - Alex

pub mod decl;
pub mod locator;
pub mod manifest;

pub use decl::{Position, RawField, RecordDecl, SourceUnit, SyntaxTree};
pub use locator::{HashLocator, Locator};
pub use manifest::{Manifest, ManifestParser};

use crate::engine::Context;
use crate::error::Result;
use std::sync::Arc;

/// Source parsing and type resolution collaborator.
pub trait Parser: Send + Sync {
    /// Top-level struct declarations, each carrying its nested ones.
    fn parse_declarations(&self, ctx: &Context) -> Result<(Vec<RecordDecl>, Arc<dyn Locator>)>;

    fn parse_syntax_tree(&self, ctx: &Context) -> Result<(SyntaxTree, Arc<dyn Locator>)>;
}

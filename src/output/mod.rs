// Fri Oct 16 2026 - Alex

pub mod formatter;
pub mod printer;
pub mod rewriter;
pub mod writer;

pub use formatter::{Formatter, JsonFormatter, TextFormatter};
pub use printer::{Printer, SourcePrinter};
pub use rewriter::{DeclRewriter, FieldRewriter};
pub use writer::{FileWriter, Sink, StdoutWriter, WriterFactory};

use crate::structure::Structure;
use serde::Serialize;
use std::collections::BTreeMap;

/// Report mode input: every visited struct keyed by its identifier, in
/// identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Flat {
    entries: BTreeMap<String, Structure>,
}

impl Flat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Structure)> {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, Structure>> for Flat {
    fn from(entries: BTreeMap<String, Structure>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Structure)> for Flat {
    fn from_iter<I: IntoIterator<Item = (String, Structure)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

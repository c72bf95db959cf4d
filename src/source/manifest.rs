// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::{Error, Result};
use crate::source::{HashLocator, Locator, Parser, RecordDecl, SourceUnit, SyntaxTree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Declarations exported by an external type checker as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub units: Vec<SourceUnit>,
}

impl Manifest {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::collaborator("read manifest", e))?;
        Self::from_json(&contents)
    }
}

/// Parser backed by a manifest file, re-read on every parse call.
#[derive(Debug, Clone)]
pub struct ManifestParser {
    path: PathBuf,
}

impl ManifestParser {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn read(&self, ctx: &Context) -> Result<Manifest> {
        ctx.check()?;
        let manifest = Manifest::load(&self.path)?;
        log::debug!("Loaded {} source units from {}", manifest.units.len(), self.path.display());
        Ok(manifest)
    }
}

impl Parser for ManifestParser {
    fn parse_declarations(&self, ctx: &Context) -> Result<(Vec<RecordDecl>, Arc<dyn Locator>)> {
        let manifest = self.read(ctx)?;
        let records = manifest.units.into_iter().flat_map(|u| u.records).collect();
        Ok((records, Arc::new(HashLocator::new())))
    }

    fn parse_syntax_tree(&self, ctx: &Context) -> Result<(SyntaxTree, Arc<dyn Locator>)> {
        let manifest = self.read(ctx)?;
        Ok((SyntaxTree::new(manifest.units), Arc::new(HashLocator::new())))
    }
}

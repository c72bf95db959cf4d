// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub unit: String,
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

impl Position {
    pub fn new(unit: &str, line: usize, column: usize) -> Self {
        Self {
            unit: unit.to_string(),
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.unit, self.line, self.column)
    }
}

/// Field data as resolved by the parser's type checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub size: i64,
    #[serde(default)]
    pub align: i64,
    #[serde(default)]
    pub ptr: i64,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub exported: bool,
    #[serde(default)]
    pub embedded: bool,
}

/// A struct declaration together with the declarations nested inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDecl {
    pub name: String,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub nested: Vec<RecordDecl>,
    pub position: Position,
}

impl RecordDecl {
    pub fn new(name: &str, position: Position) -> Self {
        Self {
            name: name.to_string(),
            position,
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: RawField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_nested(mut self, decl: RecordDecl) -> Self {
        self.nested.push(decl);
        self
    }

    /// Depth-first walk over this declaration and everything nested in it.
    pub fn walk<'a>(&'a self, out: &mut Vec<&'a RecordDecl>) {
        out.push(self);
        for nested in &self.nested {
            nested.walk(out);
        }
    }

    pub fn walk_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut RecordDecl),
    {
        f(self);
        for nested in &mut self.nested {
            nested.walk_mut(f);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub path: String,
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub records: Vec<RecordDecl>,
}

/// Parsed source units keyed by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub units: BTreeMap<String, SourceUnit>,
}

impl SyntaxTree {
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self {
            units: units.into_iter().map(|u| (u.path.clone(), u)).collect(),
        }
    }
}

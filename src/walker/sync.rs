// Fri Oct 16 2026 - Alex

use crate::engine::{Context, TaskGroup};
use crate::error::{Error, Result};
use crate::output::{DeclRewriter, Printer, WriterFactory};
use crate::source::{Locator, SyntaxTree};
use crate::strategy::SharedStrategy;
use crate::structure::Structure;
use crate::walker::{Visitor, Walker};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::sync::Arc;

/// Visits, rewrites the originating declarations in place and prints every
/// touched source unit again.
#[derive(Clone)]
pub struct SyncWalker {
    visitor: Visitor,
    rewriter: Arc<dyn DeclRewriter>,
    printer: Arc<dyn Printer>,
    writer: Arc<dyn WriterFactory>,
}

impl SyncWalker {
    pub fn new(
        visitor: Visitor,
        rewriter: Arc<dyn DeclRewriter>,
        printer: Arc<dyn Printer>,
        writer: Arc<dyn WriterFactory>,
    ) -> Self {
        Self {
            visitor,
            rewriter,
            printer,
            writer,
        }
    }

    fn write(&self, ctx: &Context, structs: &BTreeMap<String, Structure>) -> Result<()> {
        let (mut tree, locator) = self.visitor.parser().parse_syntax_tree(ctx)?;
        let mut affected = BTreeSet::new();
        for (id, st) in structs {
            ctx.check()?;
            let unit = self.sync(&mut tree, locator.as_ref(), id, st)?;
            affected.insert(unit);
        }
        self.persist(ctx, &tree, &affected)
    }

    /// Rewrites the declaration behind `id` and returns the path of the unit
    /// holding it.
    fn sync(&self, tree: &mut SyntaxTree, locator: &dyn Locator, id: &str, st: &Structure) -> Result<String> {
        for unit in tree.units.values_mut() {
            let mut outcome: Option<Result<()>> = None;
            for record in unit.records.iter_mut() {
                record.walk_mut(&mut |decl| {
                    if outcome.is_none() && locator.id(&decl.position) == id {
                        outcome = Some(self.rewriter.apply(decl, st));
                    }
                });
                if outcome.is_some() {
                    break;
                }
            }
            if let Some(outcome) = outcome {
                outcome?;
                return Ok(unit.path.clone());
            }
        }
        Err(Error::DeclarationNotFound(id.to_string()))
    }

    fn persist(&self, ctx: &Context, tree: &SyntaxTree, affected: &BTreeSet<String>) -> Result<()> {
        log::info!("Persisting {} source unit(s)", affected.len());
        let group = TaskGroup::new(ctx);
        group.spawn_each(affected.iter().filter_map(|path| tree.units.get(path)), |_, unit| {
            let mut buf = Vec::new();
            self.printer.print(unit, &mut buf)?;
            let mut sink = self.writer.writer(&unit.path, &unit.path)?;
            sink.write_all(&buf).map_err(|e| Error::collaborator("write source", e))?;
            sink.close()
        });
        group.wait()
    }
}

impl Walker for SyncWalker {
    fn visit(&self, ctx: &Context, pattern: &Regex, stg: SharedStrategy, deep: bool) -> Result<()> {
        let visited = self.visitor.visit(ctx, pattern, &stg, deep)?;
        self.write(ctx, &visited.structs)
    }
}

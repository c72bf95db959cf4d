// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::{Error, Result};
use crate::output::{Flat, Formatter, WriterFactory};
use crate::strategy::SharedStrategy;
use crate::walker::{Visitor, Walker};
use regex::Regex;
use std::io::Write;
use std::sync::Arc;

/// Output name of the single report a visit produces.
pub const REPORT_NAME: &str = "layout";

/// Visits, then renders every result into one report.
#[derive(Clone)]
pub struct ReportWalker {
    visitor: Visitor,
    formatter: Arc<dyn Formatter>,
    writer: Arc<dyn WriterFactory>,
}

impl ReportWalker {
    pub fn new(visitor: Visitor, formatter: Arc<dyn Formatter>, writer: Arc<dyn WriterFactory>) -> Self {
        Self {
            visitor,
            formatter,
            writer,
        }
    }

    fn write(&self, ctx: &Context, location: &str, flat: &Flat) -> Result<()> {
        ctx.check()?;
        let buf = self.formatter.format(flat)?;
        let mut sink = self.writer.writer(REPORT_NAME, location)?;
        sink.write_all(&buf).map_err(|e| Error::collaborator("write report", e))?;
        sink.close()
    }
}

impl Walker for ReportWalker {
    fn visit(&self, ctx: &Context, pattern: &Regex, stg: SharedStrategy, deep: bool) -> Result<()> {
        let visited = self.visitor.visit(ctx, pattern, &stg, deep)?;
        let location = visited.first_location().unwrap_or_default().to_string();
        let flat = Flat::from(visited.structs);
        log::info!("Reporting {} struct(s)", flat.len());
        self.write(ctx, &location, &flat)
    }
}

// Fri Oct 16 2026 - Alex

use crate::error::{Error, Result};
use crate::output::{
    DeclRewriter, FieldRewriter, FileWriter, Formatter, JsonFormatter, Printer, SourcePrinter, StdoutWriter,
    TextFormatter, WriterFactory,
};
use crate::source::Parser;
use crate::walker::{
    ReportWalker, SyncWalker, Visitor, Walker, JSON_FILE, JSON_STD, SOURCE_FILE, SOURCE_STD, TEXT_FILE, TEXT_STD,
};
use std::sync::Arc;

pub const WALKER_NAMES: [&str; 6] = [JSON_STD, JSON_FILE, TEXT_STD, TEXT_FILE, SOURCE_STD, SOURCE_FILE];

/// Builds walkers by name around one shared parser.
#[derive(Clone)]
pub struct WalkerBuilder {
    parser: Arc<dyn Parser>,
    printer: Arc<dyn Printer>,
    rewriter: Arc<dyn DeclRewriter>,
    pretty: bool,
}

impl WalkerBuilder {
    pub fn new(parser: Arc<dyn Parser>) -> Self {
        Self {
            parser,
            printer: Arc::new(SourcePrinter::new()),
            rewriter: Arc::new(FieldRewriter),
            pretty: true,
        }
    }

    pub fn with_printer(mut self, printer: Arc<dyn Printer>) -> Self {
        self.printer = printer;
        self
    }

    pub fn with_rewriter(mut self, rewriter: Arc<dyn DeclRewriter>) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn report(&self, formatter: Arc<dyn Formatter>, writer: Arc<dyn WriterFactory>) -> Box<dyn Walker> {
        Box::new(ReportWalker::new(Visitor::new(Arc::clone(&self.parser)), formatter, writer))
    }

    fn sync(&self, writer: Arc<dyn WriterFactory>) -> Box<dyn Walker> {
        Box::new(SyncWalker::new(
            Visitor::new(Arc::clone(&self.parser)),
            Arc::clone(&self.rewriter),
            Arc::clone(&self.printer),
            writer,
        ))
    }

    pub fn build(&self, name: &str) -> Result<Box<dyn Walker>> {
        let json = Arc::new(JsonFormatter::new().with_pretty(self.pretty));
        let walker = match name {
            JSON_STD => self.report(json, Arc::new(StdoutWriter)),
            JSON_FILE => self.report(json, Arc::new(FileWriter::with_ext("json"))),
            TEXT_STD => self.report(Arc::new(TextFormatter::new()), Arc::new(StdoutWriter)),
            TEXT_FILE => self.report(Arc::new(TextFormatter::new()), Arc::new(FileWriter::with_ext("txt"))),
            SOURCE_STD => self.sync(Arc::new(StdoutWriter)),
            SOURCE_FILE => self.sync(Arc::new(FileWriter::new())),
            other => return Err(Error::UnknownWalker(other.to_string())),
        };
        log::debug!("Built walker {}", name);
        Ok(walker)
    }
}

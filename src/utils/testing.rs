// Fri Oct 16 2026 - Alex

//! In-memory collaborators shared by unit tests.

use crate::curator::Curator;
use crate::engine::Context;
use crate::error::{Error, Result};
use crate::output::{Sink, WriterFactory};
use crate::source::{HashLocator, Locator, Parser, RecordDecl, SourceUnit, SyntaxTree};
use crate::strategy::Strategy;
use crate::structure::{Field, Structure};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MockCurator {
    pub word_size: i64,
    pub sys_align: i64,
    pub caches: Vec<i64>,
}

impl MockCurator {
    pub fn with_sys_align(sys_align: i64) -> Self {
        Self {
            sys_align,
            ..Self::default()
        }
    }

    pub fn with_caches(caches: Vec<i64>) -> Self {
        Self {
            caches,
            ..Self::default()
        }
    }
}

impl Default for MockCurator {
    fn default() -> Self {
        Self {
            word_size: 8,
            sys_align: 8,
            caches: Vec::new(),
        }
    }
}

impl Curator for MockCurator {
    fn word_size(&self) -> i64 {
        self.word_size
    }

    fn sys_align(&self) -> i64 {
        self.sys_align
    }

    fn sys_cache(&self, level: usize) -> i64 {
        level
            .checked_sub(1)
            .and_then(|i| self.caches.get(i))
            .copied()
            .unwrap_or(0)
    }
}

/// Parser serving fixed source units.
#[derive(Debug, Clone, Default)]
pub struct MockParser {
    units: Vec<SourceUnit>,
    failure: Option<String>,
}

impl MockParser {
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units, failure: None }
    }

    pub fn from_decls(path: &str, records: Vec<RecordDecl>) -> Self {
        Self::new(vec![SourceUnit {
            path: path.to_string(),
            header: Vec::new(),
            records,
        }])
    }

    pub fn failing(message: &str) -> Self {
        Self {
            units: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    fn check(&self, ctx: &Context) -> Result<()> {
        ctx.check()?;
        match &self.failure {
            Some(message) => Err(Error::collaborator("parse", message.clone())),
            None => Ok(()),
        }
    }
}

impl Parser for MockParser {
    fn parse_declarations(&self, ctx: &Context) -> Result<(Vec<RecordDecl>, Arc<dyn Locator>)> {
        self.check(ctx)?;
        let records = self.units.iter().flat_map(|u| u.records.iter().cloned()).collect();
        Ok((records, Arc::new(HashLocator::new())))
    }

    fn parse_syntax_tree(&self, ctx: &Context) -> Result<(SyntaxTree, Arc<dyn Locator>)> {
        self.check(ctx)?;
        Ok((SyntaxTree::new(self.units.clone()), Arc::new(HashLocator::new())))
    }
}

/// Writer keeping every closed sink's bytes by output name.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    store: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    locations: Arc<Mutex<BTreeMap<String, String>>>,
    fail_on: Option<String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn contents(&self, name: &str) -> Option<String> {
        self.store
            .lock()
            .get(name)
            .map(|buf| String::from_utf8_lossy(buf).into_owned())
    }

    pub fn location(&self, name: &str) -> Option<String> {
        self.locations.lock().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.store.lock().keys().cloned().collect()
    }
}

struct MemorySink {
    name: String,
    buf: Vec<u8>,
    store: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for MemorySink {
    fn close(self: Box<Self>) -> Result<()> {
        let sink = *self;
        sink.store.lock().insert(sink.name, sink.buf);
        Ok(())
    }
}

impl WriterFactory for MemoryWriter {
    fn writer(&self, name: &str, location: &str) -> Result<Box<dyn Sink>> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(Error::collaborator("open writer", format!("{} is read only", name)));
        }
        self.locations.lock().insert(name.to_string(), location.to_string());
        Ok(Box::new(MemorySink {
            name: name.to_string(),
            buf: Vec::new(),
            store: Arc::clone(&self.store),
        }))
    }
}

/// Counts applications and optionally appends a field to its input.
#[derive(Debug, Default)]
pub struct CountingStrategy {
    calls: AtomicUsize,
    append: Option<Field>,
}

impl CountingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appending(field: Field) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            append: Some(field),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Strategy for CountingStrategy {
    fn apply(&self, _ctx: &Context, o: &Structure) -> Result<Structure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut r = o.clone();
        if let Some(field) = &self.append {
            r.fields.push(field.clone());
        }
        Ok(r)
    }
}

#[derive(Debug, Clone)]
pub struct FailingStrategy {
    name: String,
}

impl FailingStrategy {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl Strategy for FailingStrategy {
    fn apply(&self, _ctx: &Context, _o: &Structure) -> Result<Structure> {
        Err(Error::Strategy {
            name: self.name.clone(),
            message: "induced failure".to_string(),
        })
    }
}

/// Identity after a delay, giving up early once the context is done.
#[derive(Debug, Clone, Copy)]
pub struct SleepStrategy {
    delay: Duration,
}

impl SleepStrategy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Strategy for SleepStrategy {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure> {
        let step = Duration::from_millis(1);
        let mut slept = Duration::ZERO;
        while slept < self.delay {
            ctx.check()?;
            thread::sleep(step);
            slept += step;
        }
        ctx.check()?;
        Ok(o.clone())
    }
}

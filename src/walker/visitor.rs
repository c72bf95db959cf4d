// Fri Oct 16 2026 - Alex

use crate::engine::{Context, TaskGroup};
use crate::error::{Error, Result};
use crate::source::{Parser, RecordDecl};
use crate::strategy::{Enumerate, SharedStrategy};
use crate::structure::Structure;
use ahash::AHashSet;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::{mpsc, Arc};
use std::thread;

/// Outcome of one struct application, sent from a worker to the collector.
#[derive(Debug)]
pub struct Applied {
    pub id: String,
    pub location: String,
    pub result: Result<Structure>,
}

/// Everything a visit produced, keyed by declaration identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visited {
    pub structs: BTreeMap<String, Structure>,
    pub locations: BTreeMap<String, String>,
}

impl Visited {
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }

    /// Location of the lowest identifier, used as the report anchor.
    pub fn first_location(&self) -> Option<&str> {
        self.locations.values().next().map(String::as_str)
    }
}

struct Target<'a> {
    id: String,
    location: String,
    decl: &'a RecordDecl,
}

/// Fans strategy application out over every matching declaration and
/// collects the results on the calling thread.
#[derive(Clone)]
pub struct Visitor {
    parser: Arc<dyn Parser>,
}

impl Visitor {
    pub fn new(parser: Arc<dyn Parser>) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> Arc<dyn Parser> {
        Arc::clone(&self.parser)
    }

    pub fn visit(&self, ctx: &Context, pattern: &Regex, stg: &SharedStrategy, deep: bool) -> Result<Visited> {
        let (decls, locator) = self.parser.parse_declarations(ctx)?;

        let mut seen = AHashSet::new();
        let mut targets = Vec::new();
        for decl in &decls {
            let mut candidates = Vec::new();
            if deep {
                decl.walk(&mut candidates);
            } else {
                candidates.push(decl);
            }
            for candidate in candidates {
                if !pattern.is_match(&candidate.name) {
                    continue;
                }
                let id = locator.id(&candidate.position);
                if !seen.insert(id.clone()) {
                    log::trace!("Skipping duplicate declaration {} ({})", candidate.name, id);
                    continue;
                }
                targets.push(Target {
                    location: locator.location(&candidate.position),
                    decl: candidate,
                    id,
                });
            }
        }
        log::debug!("Visiting {} of {} top level declarations", targets.len(), decls.len());

        let vctx = ctx.child();
        let (tx, rx) = mpsc::channel::<Applied>();
        thread::scope(|scope| {
            let producer = {
                let vctx = vctx.clone();
                scope.spawn(move || {
                    let group = TaskGroup::new(&vctx);
                    group.spawn_each(targets, |gctx, target| {
                        let result = Enumerate
                            .extract(gctx, target.decl)
                            .and_then(|st| stg.apply(gctx, &st));
                        let failed = result.as_ref().err().map(|e| e.to_string());
                        // the receiver outlives every sender inside this scope
                        let _ = tx.send(Applied {
                            id: target.id,
                            location: target.location,
                            result,
                        });
                        match failed {
                            Some(message) => Err(Error::Strategy {
                                name: target.decl.name.clone(),
                                message,
                            }),
                            None => Ok(()),
                        }
                    });
                    group.wait()
                })
            };

            let mut visited = Visited::default();
            for applied in rx.iter() {
                match applied.result {
                    Ok(st) => {
                        visited.structs.insert(applied.id.clone(), st);
                        visited.locations.insert(applied.id, applied.location);
                    }
                    Err(err) => {
                        vctx.cancel();
                        return Err(err);
                    }
                }
            }

            match producer.join() {
                Ok(result) => result?,
                Err(_) => return Err(Error::collaborator("visit", "worker thread panicked")),
            }
            ctx.check()?;
            Ok(visited)
        })
    }
}

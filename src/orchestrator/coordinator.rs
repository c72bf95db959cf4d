// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::curator::{Curator, Platform};
use crate::engine::Context;
use crate::error::{Error, Result};
use crate::source::{ManifestParser, Parser};
use crate::strategy::{Builder, Registry, SharedStrategy};
use crate::utils::ScopedTimer;
use crate::walker::{Walker, WalkerBuilder};
use regex::Regex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Building,
    Visiting,
    Completed,
    Failed,
}

/// Runs one configured visit: strategy and walker building, timeout
/// scoping and the visit itself.
pub struct Coordinator {
    config: Config,
    builder: Builder,
    walkers: WalkerBuilder,
    state: CoordinatorState,
}

impl Coordinator {
    pub fn new(config: Config, parser: Arc<dyn Parser>, curator: Arc<dyn Curator>) -> Self {
        let builder = Builder::standard(curator);
        let walkers = WalkerBuilder::new(parser)
            .with_printer(Arc::new(config.printer.printer()))
            .with_pretty(config.pretty);
        Self {
            config,
            builder,
            walkers,
            state: CoordinatorState::Idle,
        }
    }

    /// Manifest parser and config platform, as used by the binary.
    pub fn from_config(config: Config) -> Self {
        let parser = Arc::new(ManifestParser::new(config.input.clone()));
        let curator: Arc<Platform> = Arc::new(config.platform.clone());
        Self::new(config, parser, curator)
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.builder = Builder::new(Arc::new(registry), self.builder.curator());
        self
    }

    pub fn with_walkers(mut self, walkers: WalkerBuilder) -> Self {
        self.walkers = walkers;
        self
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sizes the global rayon pool. The pool can only be built once per
    /// process, later calls keep the existing one.
    pub fn init_thread_pool(threads: usize) {
        if let Err(err) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            log::warn!("Keeping existing thread pool: {}", err);
        }
    }

    pub fn strategy(&self) -> Result<SharedStrategy> {
        self.builder.build(&self.config.strategies).map_err(|err| Error::Build {
            what: "strategy",
            target: self.config.strategies.join(","),
            source: Box::new(err),
        })
    }

    pub fn walker(&self) -> Result<Box<dyn Walker>> {
        self.walkers.build(&self.config.walker).map_err(|err| Error::Build {
            what: "walker",
            target: self.config.walker.clone(),
            source: Box::new(err),
        })
    }

    pub fn run(&mut self, ctx: &Context) -> Result<()> {
        let result = self.execute(ctx);
        self.state = match result {
            Ok(()) => CoordinatorState::Completed,
            Err(_) => CoordinatorState::Failed,
        };
        result
    }

    fn execute(&mut self, ctx: &Context) -> Result<()> {
        self.state = CoordinatorState::Building;
        let pattern = Regex::new(&self.config.pattern)?;
        let stg = self.strategy()?;
        let walker = self.walker()?;

        let ctx = match self.config.timeout() {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx.child(),
        };

        self.state = CoordinatorState::Visiting;
        log::info!(
            "Visiting with walker {} and strategies [{}]",
            self.config.walker,
            self.config.strategies.join(", ")
        );
        let _timer = ScopedTimer::new("visit");
        walker.visit(&ctx, &pattern, stg, self.config.deep)
    }
}

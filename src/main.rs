// Fri Oct 16 2026 - Alex

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use structlayout::{
    config::Config,
    engine::Context,
    orchestrator::Coordinator,
    strategy::Registry,
    utils::{format_duration, LoggingUtils},
    walker::builder::WALKER_NAMES,
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Struct layout analysis and rewriting", long_about = None)]
struct Args {
    /// JSON manifest of parsed source units
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    walker: Option<String>,

    /// Comma separated strategy names, applied in order
    #[arg(short, long, value_delimiter = ',')]
    strategies: Vec<String>,

    /// Regex matched against struct names
    #[arg(short, long)]
    pattern: Option<String>,

    /// Visit nested declarations too
    #[arg(short, long)]
    deep: bool,

    #[arg(long)]
    timeout: Option<u64>,

    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    compact: bool,

    #[arg(long)]
    log_level: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_color: bool,

    /// Print registered strategy and walker names and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(walker) = &self.walker {
            config.walker = walker.clone();
        }
        if !self.strategies.is_empty() {
            config.strategies = self.strategies.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config.deep |= self.deep;
        if self.compact {
            config.pretty = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn list() {
    println!("{}", "Strategies".cyan().bold());
    for name in Registry::standard().names() {
        println!("  {}", name);
    }
    println!("{}", "Walkers".cyan().bold());
    for name in WALKER_NAMES {
        println!("  {}", name);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.list {
        list();
        return Ok(());
    }

    let config = args.config()?;
    Coordinator::init_thread_pool(config.threads);

    eprintln!(
        "{} Visiting {} with {}",
        "[*]".blue(),
        config.input.display(),
        config.walker
    );
    let start = Instant::now();
    let mut coordinator = Coordinator::from_config(config);
    coordinator
        .run(&Context::background())
        .context("visiting error happened")?;
    eprintln!("{} Done in {}", "[+]".green(), format_duration(start.elapsed()));
    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    let level = match &args.log_level {
        Some(level) => LoggingUtils::level_from_str(level),
        None => LoggingUtils::level_from_verbosity(args.verbose),
    };
    LoggingUtils::init_logger(level, !args.no_color);

    if let Err(err) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), err);
        std::process::exit(1);
    }
}

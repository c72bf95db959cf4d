// Fri Oct 16 2026 - Alex

use colored::*;
use log::{Level, LevelFilter};
use std::io::Write;
use std::time::Instant;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs the process logger. `RUST_LOG` still narrows per target on
    /// top of `level`. Calling it twice keeps the first logger.
    pub fn init_logger(level: LevelFilter, color: bool) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level).parse_default_env();
        builder.format(move |buf, record| {
            let level = if color {
                Self::format_level(record.level()).to_string()
            } else {
                format!("{:5}", record.level())
            };
            writeln!(buf, "{} {} {}", level, format!("[{}]", record.target()).dimmed(), record.args())
        });
        builder.try_init().ok();
    }

    fn format_level(level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Logs the lifetime of a scope at debug level when dropped.
pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!("[TIMER] {} took {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

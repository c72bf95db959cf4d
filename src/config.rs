// Fri Oct 16 2026 - Alex

use crate::curator::Platform;
use crate::error::{Error, Result};
use crate::output::SourcePrinter;
use crate::walker::JSON_STD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub indent: usize,
    pub tab_width: usize,
    pub use_space: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent: 1,
            tab_width: 4,
            use_space: false,
        }
    }
}

impl PrinterConfig {
    pub fn printer(&self) -> SourcePrinter {
        SourcePrinter::new()
            .with_indent(self.indent)
            .with_tab_width(self.tab_width)
            .with_spaces(self.use_space)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub walker: String,
    pub strategies: Vec<String>,
    pub pattern: String,
    pub deep: bool,
    pub timeout_seconds: u64,
    pub threads: usize,
    pub pretty: bool,
    pub platform: Platform,
    pub printer: PrinterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            walker: JSON_STD.to_string(),
            strategies: Vec::new(),
            pattern: ".*".to_string(),
            deep: false,
            timeout_seconds: 0,
            threads: num_cpus::get(),
            pretty: true,
            platform: Platform::default(),
            printer: PrinterConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {}
            other => {
                return Err(Error::Config(format!(
                    "unsupported config format {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        }
        let contents = fs::read_to_string(path).map_err(|e| Error::collaborator("read config", e))?;
        let config: Config = serde_json::from_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = input;
        self
    }

    pub fn with_walker(mut self, walker: &str) -> Self {
        self.walker = walker.to_string();
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<String>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(Error::Config("input manifest must be set".to_string()));
        }
        if self.threads == 0 {
            return Err(Error::Config("threads must be greater than 0".to_string()));
        }
        if self.platform.word_size <= 0 {
            return Err(Error::Config("platform word_size must be positive".to_string()));
        }
        if self.platform.sys_align <= 0 {
            return Err(Error::Config("platform sys_align must be positive".to_string()));
        }
        if self.platform.caches.is_empty() {
            return Err(Error::Config("platform caches must list at least one level".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.walker, JSON_STD);
        assert_eq!(config.pattern, ".*");
        assert!(config.threads > 0);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"input": "manifest.json", "strategies": ["memory_pack"], "timeout_seconds": 3, "platform": {"word_size": 4, "sys_align": 4, "caches": [32]}}"#,
        )
        .unwrap();
        assert_eq!(config.strategies, vec!["memory_pack".to_string()]);
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(config.platform.caches, vec![32]);
        assert_eq!(config.printer, PrinterConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(matches!(Config::default().validate(), Err(Error::Config(_))));

        let mut config = Config::default().with_input(PathBuf::from("m.json"));
        assert!(config.validate().is_ok());
        config.threads = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default().with_input(PathBuf::from("m.json"));
        config.platform.caches.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        assert!(matches!(Config::load("config.yaml"), Err(Error::Config(_))));
    }
}

// Fri Oct 16 2026 - Alex

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for one rendered output. Bytes are only guaranteed to land
/// once `close` returns.
pub trait Sink: Write + Send {
    fn close(self: Box<Self>) -> Result<()>;
}

/// Opens a sink for output `name` next to the `location` hint.
pub trait WriterFactory: Send + Sync {
    fn writer(&self, name: &str, location: &str) -> Result<Box<dyn Sink>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

struct StdoutSink {
    out: io::Stdout,
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Sink for StdoutSink {
    fn close(mut self: Box<Self>) -> Result<()> {
        self.out.flush().map_err(|e| Error::collaborator("flush stdout", e))
    }
}

impl WriterFactory for StdoutWriter {
    fn writer(&self, _name: &str, _location: &str) -> Result<Box<dyn Sink>> {
        Ok(Box::new(StdoutSink { out: io::stdout() }))
    }
}

/// Writes each output into the directory of its location hint, optionally
/// swapping the file extension.
#[derive(Debug, Clone, Default)]
pub struct FileWriter {
    ext: Option<String>,
}

impl FileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ext(ext: &str) -> Self {
        Self {
            ext: Some(ext.trim_start_matches('.').to_string()),
        }
    }

    pub fn path(&self, name: &str, location: &str) -> PathBuf {
        let dir = Path::new(location).parent().unwrap_or_else(|| Path::new(""));
        let file = Path::new(name).file_name().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(name));
        let mut path = dir.join(file);
        if let Some(ext) = &self.ext {
            path.set_extension(ext);
        }
        path
    }
}

struct FileSink {
    path: PathBuf,
    out: BufWriter<File>,
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Sink for FileSink {
    fn close(mut self: Box<Self>) -> Result<()> {
        self.out.flush().map_err(|e| Error::collaborator("flush file", e))?;
        log::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

impl WriterFactory for FileWriter {
    fn writer(&self, name: &str, location: &str) -> Result<Box<dyn Sink>> {
        let path = self.path(name, location);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| Error::collaborator("create output directory", e))?;
        }
        let file = File::create(&path).map_err(|e| Error::collaborator("create file", e))?;
        Ok(Box::new(FileSink {
            path,
            out: BufWriter::new(file),
        }))
    }
}

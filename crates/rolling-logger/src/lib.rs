//! Rolling Logger
//!
//! File logger for desktop apps. Log lines go to `<dir>/<app>.log`, which is
//! rolled to `<app>.log.1` once it passes a size limit, and the most recent
//! lines are kept in a circular buffer so a UI can show them without reading
//! the file.
//!
//! `init_logger` installs a global `tracing` subscriber that also receives
//! records from the `log` facade.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

struct Sink {
    path: PathBuf,
    rolled_path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    lines: VecDeque<String>,
    capacity: usize,
    // Text after the last newline of the previous write
    partial: String,
}

impl Sink {
    fn open(dir: &Path, app_name: &str, max_bytes: u64, capacity: usize) -> io::Result<Self> {
        let path = dir.join(format!("{}.log", app_name));
        let rolled_path = dir.join(format!("{}.log.1", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            rolled_path,
            file,
            written,
            max_bytes,
            lines: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        })
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.roll()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;

        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            self.push_line(line.trim_end().to_string());
        }
        Ok(())
    }

    fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn roll(&mut self) -> io::Result<()> {
        self.file.flush()?;
        match fs::remove_file(&self.rolled_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::rename(&self.path, &self.rolled_path)?;
        self.file = OpenOptions::new().create(true).write(true).truncate(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

/// Handle to a rolling log file and its line buffer
#[derive(Clone)]
pub struct RollingLogger {
    sink: Arc<Mutex<Sink>>,
}

impl RollingLogger {
    pub fn open(dir: impl AsRef<Path>, app_name: &str) -> io::Result<Self> {
        Self::with_limits(dir, app_name, DEFAULT_MAX_FILE_BYTES, DEFAULT_BUFFER_LINES)
    }

    pub fn with_limits(
        dir: impl AsRef<Path>,
        app_name: &str,
        max_bytes: u64,
        buffer_lines: usize,
    ) -> io::Result<Self> {
        let sink = Sink::open(dir.as_ref(), app_name, max_bytes, buffer_lines)?;
        Ok(Self {
            sink: Arc::new(Mutex::new(sink)),
        })
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.sink.lock() {
            Ok(sink) => sink.lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.sink.lock().ok().map(|sink| sink.path.clone())
    }

    pub fn writer(&self) -> SinkWriter {
        SinkWriter {
            sink: self.sink.clone(),
        }
    }
}

/// `io::Write` end of a [`RollingLogger`]
pub struct SinkWriter {
    sink: Arc<Mutex<Sink>>,
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "log sink poisoned")
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self.sink.lock().map_err(|_| poisoned())?;
        sink.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut sink = self.sink.lock().map_err(|_| poisoned())?;
        sink.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingLogger {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer()
    }
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        use std::fmt::Write as _;
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber writing to `log_dir`.
///
/// Calling it again after a successful init does nothing.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    fs::create_dir_all(&log_dir).map_err(|e| format!("Failed to create log dir: {}", e))?;
    let logger = RollingLogger::open(&log_dir, app_name)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    tracing_subscriber::fmt()
        .with_writer(logger.clone())
        .with_ansi(false)
        .with_timer(LocalTimer)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    let _ = LOGGER.set(logger);
    tracing::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

fn initialized() -> Result<&'static RollingLogger, String> {
    LOGGER.get().ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Recent lines of the global logger, empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.recent_lines()).unwrap_or_default()
}

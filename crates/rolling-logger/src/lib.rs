//! Rolling Logger
//!
//! Size-rotated log files. `log` records are bridged into the same
//! `tracing` subscriber.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Rotate once the active file grows past this
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Rotated files kept besides the active one
pub const DEFAULT_MAX_FILES: usize = 3;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// A log file that rotates `name.log` -> `name.log.1` -> ... by size
pub struct RollingFile {
    dir: PathBuf,
    base_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, base_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", base_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            base_name: base_name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.base_name))
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.base_name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(self.active_path())?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for i in (1..self.max_files).rev() {
            let from = self.rotated_path(i);
            if from.exists() {
                fs::rename(&from, self.rotated_path(i + 1))?;
            }
        }
        fs::rename(self.active_path(), self.rotated_path(1))?;
        self.file = OpenOptions::new().create(true).append(true).open(self.active_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn to_tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Install the global logger writing to `dir/<app_name>.log`
pub fn init_logger(dir: PathBuf, app_name: &str, level: log::LevelFilter) -> Result<(), String> {
    let file = RollingFile::open(&dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
        .map_err(|e| format!("Failed to open log file in {}: {}", dir.display(), e))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(to_tracing_level(level))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    let _ = INSTALLED.set(());
    tracing::info!("{} logging to {}", app_name, dir.display());
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    if INSTALLED.get().is_some() {
        Ok(())
    } else {
        Err("logger not initialized".to_string())
    }
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 32, 2).unwrap();

        for i in 0..6 {
            writeln!(file, "line number {:02} padded", i).unwrap();
        }
        file.flush().unwrap();

        assert!(dir.path().join("app.log").exists());
        assert!(dir.path().join("app.log.1").exists());
        assert!(dir.path().join("app.log.2").exists());
        assert!(!dir.path().join("app.log.3").exists());

        let active = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(active.contains("line number 05"));
    }

    #[test]
    fn test_logging_helpers_need_init() {
        assert!(info("before init").is_err());
        assert!(error("before init").is_err());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.log"), "old\n").unwrap();

        let mut file = RollingFile::open(dir.path(), "app", DEFAULT_MAX_BYTES, 1).unwrap();
        writeln!(file, "new").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(file.active_path()).unwrap(), "old\nnew\n");
    }
}

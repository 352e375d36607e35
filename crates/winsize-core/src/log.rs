//! Per-run file log.
//!
//! Each invocation appends to `~/.config/winsize/logs/winsize.log`,
//! starting with a marker line so separate runs are easy to tell apart.
//! A run is short, so the size limit is checked once when the log is
//! opened: an oversized file is moved to `winsize.log.1` first.
//! Nothing is logged to the console; stdout belongs to the prompt.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static RUN_LOG: OnceLock<Mutex<RunLog>> = OnceLock::new();

const LOG_FILE: &str = "winsize.log";
const PREVIOUS_LOG_FILE: &str = "winsize.log.1";

/// `[logging]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Off unless explicitly enabled.
    pub enabled: bool,
    /// "debug", "info", "warn" or "error". Anything else means "info".
    pub level: String,
    /// Size in megabytes at which the log is moved aside on startup.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Resolves a configured level name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct RunLog {
    file: File,
    min_level: Level,
}

impl RunLog {
    /// Opens `dir/winsize.log` for this run and writes the run marker.
    ///
    /// `max_bytes == 0` disables the size check.
    fn open(dir: &Path, min_level: Level, max_bytes: u64) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE);

        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        if max_bytes > 0 && size >= max_bytes {
            fs::rename(&path, dir.join(PREVIOUS_LOG_FILE))?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(run_marker(unix_secs(), std::process::id()).as_bytes())?;
        Ok(Self { file, min_level })
    }
}

/// Starts the log for this run. Call once, before any `log_*!` use.
///
/// Silently stays disabled if logging is off or the file can't be opened.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let max_bytes = config.max_file_mb * 1024 * 1024;
    if let Ok(log) = RunLog::open(&dir.join("logs"), Level::from_name(&config.level), max_bytes) {
        let _ = RUN_LOG.set(Mutex::new(log));
    }
}

/// Appends one line at `level`. Used through the `log_*!` macros.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(log) = RUN_LOG.get() else {
        return;
    };
    let Ok(mut log) = log.lock() else {
        return;
    };
    if level >= log.min_level {
        let _ = log.file.write_all(line(unix_secs(), level, args).as_bytes());
    }
}

fn run_marker(secs: u64, pid: u32) -> String {
    format!("---- {} run started (pid {pid}) ----\n", timestamp(secs))
}

fn line(secs: u64, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{} [{level}] {args}\n", timestamp(secs))
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Formats seconds since the Unix epoch as `YYYY-MM-DD HH:MM:SS` (UTC).
fn timestamp(secs: u64) -> String {
    let (year, month, day) = civil_date(secs / 86_400);
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{year:04}-{month:02}-{day:02} {h:02}:{m:02}:{s:02}")
}

/// Converts days since 1970-01-01 into a proleptic Gregorian date.
fn civil_date(days: u64) -> (u64, u64, u64) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fresh directory under the system temp dir, unique per test.
    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("winsize-log-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn level_names_fall_back_to_info() {
        assert_eq!(Level::from_name("DEBUG"), Level::Debug);
        assert_eq!(Level::from_name("warn"), Level::Warn);
        assert_eq!(Level::from_name("Error"), Level::Error);
        assert_eq!(Level::from_name("verbose"), Level::Info);
    }

    #[test]
    fn timestamp_includes_the_date() {
        assert_eq!(timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(timestamp(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(timestamp(1_700_000_000), "2023-11-14 22:13:20");
    }

    #[test]
    fn line_has_timestamp_level_and_message() {
        // Act
        let text = line(0, Level::Warn, format_args!("window {} gone", 42));

        // Assert
        assert_eq!(text, "1970-01-01 00:00:00 [WARN] window 42 gone\n");
    }

    #[test]
    fn run_marker_names_the_process() {
        // Act
        let text = run_marker(1_700_000_000, 4321);

        // Assert
        assert_eq!(text, "---- 2023-11-14 22:13:20 run started (pid 4321) ----\n");
    }

    #[test]
    fn open_appends_a_marker_per_run() {
        // Arrange
        let dir = scratch_dir("append");

        // Act
        drop(RunLog::open(&dir, Level::Info, 0).unwrap());
        drop(RunLog::open(&dir, Level::Info, 0).unwrap());

        // Assert
        let content = fs::read_to_string(dir.join(LOG_FILE)).unwrap();
        assert_eq!(content.matches("run started").count(), 2);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn oversized_log_is_moved_aside_on_open() {
        // Arrange
        let dir = scratch_dir("rotate");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(LOG_FILE), "x".repeat(64)).unwrap();

        // Act
        drop(RunLog::open(&dir, Level::Info, 32).unwrap());

        // Assert
        let previous = fs::read_to_string(dir.join(PREVIOUS_LOG_FILE)).unwrap();
        let current = fs::read_to_string(dir.join(LOG_FILE)).unwrap();
        assert_eq!(previous.len(), 64);
        assert!(current.starts_with("---- "));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_before_init_is_ignored() {
        write(Level::Error, format_args!("dropped"));
    }
}

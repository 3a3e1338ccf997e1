//! Session log file for tool invocations
//!
//! Keeps a local trace of every reported status change, so an agent run can
//! be reconstructed even when the remote Task Manager was unreachable.

use crate::models::OperationResult;
use chrono::Local;
use lazy_static::lazy_static;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

/// Initialize the log file. Honors PULSE_LOG_DIR, falling back to the
/// platform data directory.
pub fn init_logger() -> anyhow::Result<()> {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let mut log_file = LOG_FILE.lock().unwrap();
    *log_file = Some(file);

    // Write session start marker
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    if let Some(ref mut f) = *log_file {
        let _ = writeln!(f, "\n=== Pulse Session Started at {} ===\n", timestamp);
    }

    Ok(())
}

/// Get the log file path
fn get_log_path() -> PathBuf {
    if let Ok(dir) = std::env::var("PULSE_LOG_DIR") {
        return PathBuf::from(dir).join("pulse.log");
    }
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("pulse").join("pulse.log")
    } else {
        PathBuf::from("pulse.log")
    }
}

/// Record a tool invocation outcome in the session log
pub fn log_operation(tool: &str, result: &OperationResult) {
    if result.success {
        log(
            "INFO",
            &format!(
                "{}: {}",
                tool,
                result.message.as_deref().unwrap_or("ok")
            ),
        );
    } else {
        log(
            "ERROR",
            &format!(
                "{}: {}",
                tool,
                result.error.as_deref().unwrap_or("unknown error")
            ),
        );
    }
}

/// Log a message to file
pub fn log(level: &str, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let formatted = format!("[{}] {}: {}", timestamp, level, message);

    let mut log_file = LOG_FILE.lock().unwrap();
    if let Some(ref mut f) = *log_file {
        let _ = writeln!(f, "{}", formatted);
        let _ = f.flush();
    }
}

/// Macros for easier logging
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log("INFO", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log("DEBUG", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log("WARN", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log("ERROR", &format!($($arg)*));
    };
}

use once_cell::sync::Lazy;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

// Set once the log file is open; lets hot paths skip the mutex entirely.
static ENABLED: AtomicBool = AtomicBool::new(false);

/// Initializes the global logger to write to the specified file path.
/// If the file exists, it is truncated so each run starts with a fresh log.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    match LOGGER.lock() {
        Ok(mut logger_guard) => *logger_guard = Some(writer),
        Err(poisoned) => *poisoned.into_inner() = Some(writer),
    }
    ENABLED.store(true, Ordering::Release);
    Ok(())
}

/// `true` once [`init_global_logger`] has succeeded.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Acquire)
}

/// Flushes buffered log lines to the log file.
pub fn flush_global_logger() -> Result<(), IoError> {
    if !is_enabled() {
        return Ok(());
    }
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: fmt::Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: fmt::Arguments<'_>) {
    write_line("ERROR: ", args);
}

/// Writes one search step, e.g. `[log] at (0, 1), exit at (1, 1)`.
pub fn log_step_args(args: fmt::Arguments<'_>) {
    write_line("[log] ", args);
}

fn write_line(prefix: &str, args: fmt::Arguments<'_>) {
    if !is_enabled() {
        // Logger not initialized, verbose output is suppressed.
        return;
    }
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed): {}{}", prefix, args);
            }
        }
    } else {
        // Mutex was poisoned, highly unlikely but good to acknowledge.
        eprintln!("Fallback (logger mutex error): {}{}", prefix, args);
    }
}

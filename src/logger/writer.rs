//! Log writer module
//!
//! Thread-safe line writing to the console, a file, or both. Every write
//! failure is swallowed: logging never interrupts request handling.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Which console stream a target mirrors to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    Stderr,
}

/// Log output target
enum LogTarget {
    /// Console only
    Console(Console),
    /// Console and file
    Tee(Console, Mutex<File>),
}

/// Thread-safe log writer with separate access and error targets
pub struct LogWriter {
    access: LogTarget,
    error: LogTarget,
}

impl LogWriter {
    /// Create a writer; access lines go to stdout, error lines to stderr, each
    /// additionally appended to its file when a path is given
    pub fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        Ok(Self {
            access: open_target(Console::Stdout, access_log_file)?,
            error: open_target(Console::Stderr, error_log_file)?,
        })
    }

    /// Write to access log
    pub fn write_access(&self, message: &str) {
        write_to_target(&self.access, message);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }

    /// Flush console streams and files
    pub fn flush(&self) {
        flush_target(&self.access);
        flush_target(&self.error);
    }
}

fn open_target(console: Console, path: Option<&str>) -> io::Result<LogTarget> {
    match path.filter(|p| !p.is_empty()) {
        Some(p) => Ok(LogTarget::Tee(console, Mutex::new(open_log_file(p)?))),
        None => Ok(LogTarget::Console(console)),
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

fn write_console(console: Console, message: &str) {
    // writeln! instead of println! so a closed stdout cannot panic
    let _ = match console {
        Console::Stdout => writeln!(io::stdout().lock(), "{message}"),
        Console::Stderr => writeln!(io::stderr().lock(), "{message}"),
    };
}

/// Write message to log target
fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Console(console) => write_console(*console, message),
        LogTarget::Tee(console, file) => {
            write_console(*console, message);
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
    }
}

fn flush_target(target: &LogTarget) {
    let console = match target {
        LogTarget::Console(console) => *console,
        LogTarget::Tee(console, file) => {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
            *console
        }
    };
    let _ = match console {
        Console::Stdout => io::stdout().flush(),
        Console::Stderr => io::stderr().flush(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_targets_append() {
        let dir = tempfile::tempdir().unwrap();
        let access = dir.path().join("logs/access.log");
        let error = dir.path().join("error.log");

        let writer = LogWriter::new(access.to_str(), error.to_str()).unwrap();
        writer.write_access("first");
        writer.write_access("second");
        writer.write_error("oops");
        writer.flush();

        let access_text = std::fs::read_to_string(&access).unwrap();
        assert_eq!(access_text, "first\nsecond\n");
        assert_eq!(std::fs::read_to_string(&error).unwrap(), "oops\n");

        // Reopening appends rather than truncating
        let writer = LogWriter::new(access.to_str(), None).unwrap();
        writer.write_access("third");
        let access_text = std::fs::read_to_string(&access).unwrap();
        assert_eq!(access_text.lines().count(), 3);
    }

    #[test]
    fn test_empty_path_means_console_only() {
        let writer = LogWriter::new(Some(""), None).unwrap();
        writer.write_access("console only");
        writer.flush();
    }
}

//! Append-only diagnostic log.
//!
//! A screensaver has no console, so records go to
//! `%TEMP%\Starfield\starfield.log`. The filter defaults to `info` and can be
//! changed with `STARFIELD_LOG` (env_logger syntax).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STARFIELD_LOG";

/// Directory holding the log file.
pub fn log_dir() -> PathBuf {
    std::env::temp_dir().join("Starfield")
}

pub fn log_path() -> PathBuf {
    log_dir().join("starfield.log")
}

/// Install the global logger. Falls back to stderr if the log file cannot be
/// opened. Calling it twice is harmless.
pub fn init() {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} pid={} {:<5} {}: {}",
            buf.timestamp_millis(),
            std::process::id(),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let file = fs::create_dir_all(log_dir()).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
    });
    match file {
        Ok(f) => {
            builder.target(Target::Pipe(Box::new(f)));
        }
        Err(_) => {
            builder.target(Target::Stderr);
        }
    }

    let _ = builder.try_init();
}

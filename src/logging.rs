//! File logging
//!
//! The terminal is in raw mode while the app runs, so log lines go to a file.
//! With no file configured, logging stays off.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Env, Target};

use crate::error::AppError;

/// Install the global logger writing to `path`
///
/// The filter comes from `RUST_LOG`, defaulting to `debug`. Returns false
/// when no path was given and nothing was installed.
pub fn init_logging(path: Option<&Path>) -> Result<bool, AppError> {
    let Some(path) = path else {
        return Ok(false);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(true)
}

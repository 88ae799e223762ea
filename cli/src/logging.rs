//! Process-wide logging: stdout plus a dated session log file.
//!
//! Libraries in this workspace log through the `log` facade only; this
//! module is the single place a logger gets installed, and the entry point
//! calls it exactly once before anything else runs.

use std::env;
use std::path::PathBuf;

use log::info;

/// Root of the session log tree. Optional.
pub const LOG_DIR_VAR: &str = "LOG_DIR";

const DEFAULT_LOG_DIR: &str = "logs";

/// Install the dispatcher. Each run gets its own log file under
/// `{LOG_DIR}/{year}/{month}/{day}/`, named by start minute, alongside the
/// stdout sink. Returns the session log path.
pub fn setup() -> Result<PathBuf, fern::InitError> {
    let root = env::var(LOG_DIR_VAR).unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    let now = chrono::Local::now();
    let dir = PathBuf::from(root).join(now.format("%Y/%m/%d").to_string());
    std::fs::create_dir_all(&dir)?;
    let session_log = dir.join(format!("{}.log", now.format("%Y-%m-%d-%H-%M")));

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(&session_log)?)
        .apply()?;

    info!("session log at {}", session_log.display());
    Ok(session_log)
}

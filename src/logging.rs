//! Tracing subscriber setup.
//!
//! The interactive UI owns stdout and the alternate screen, so it can only
//! log to a file. One-shot commands log to stderr. Filtering follows
//! `RUST_LOG`, defaulting to `info` for files and `warn` for stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::types::LogSink;

const FILE_FILTER: &str = "info";
const STDERR_FILTER: &str = "warn";

/// Failure to install logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Install the global subscriber for `sink`. `Disabled` installs nothing.
pub fn init(sink: &LogSink) -> Result<(), LoggingError> {
    match sink {
        LogSink::Disabled => Ok(()),
        LogSink::Stderr => install(io::stderr, STDERR_FILTER, true),
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            install(Mutex::new(file), FILE_FILTER, false)
        }
    }
}

/// Open `path` for appending, creating it if missing.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

fn install<W>(writer: W, default_filter: &str, ansi: bool) -> Result<(), LoggingError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

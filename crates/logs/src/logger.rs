use crate::Result;
use std::{
    fs,
    path::{Path, PathBuf},
};
use time::{macros::format_description, OffsetDateTime};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Default filter directives when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str =
    "passworkshop=info,pws_password=info,pws_preferences=info,pws_history=info,pws_clipboard=info";

const LOG_FILE_NAME: &str = "passworkshop.log";
const LOGS_DIR: &str = "logs";

/// State of the log files on disc.
#[derive(Debug)]
pub struct LogFileStatus {
    /// Path to the current log file.
    pub current: PathBuf,
    /// Size of the current log file.
    pub current_size: u64,
    /// All log files including the current one.
    pub log_files: Vec<PathBuf>,
    /// Total size of all log files.
    pub total_size: u64,
}

/// Writes tracing output to a daily rolling file and
/// warnings to stderr.
#[derive(Debug, Clone)]
pub struct Logger {
    logs_dir: PathBuf,
    name: String,
}

impl Logger {
    /// Create a logger that writes below the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::new_name(data_dir, LOG_FILE_NAME)
    }

    /// Create a logger with a custom log file name.
    pub fn new_name(data_dir: impl AsRef<Path>, name: &str) -> Self {
        Self {
            logs_dir: data_dir.as_ref().join(LOGS_DIR),
            name: name.to_owned(),
        }
    }

    /// Directory for log files.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Install the global subscriber.
    ///
    /// File output honours `RUST_LOG` or else the default level;
    /// the stderr layer only shows warnings and errors so it
    /// does not interleave with command output.
    pub fn init_file_subscriber(
        &self,
        default_log_level: Option<String>,
    ) -> Result<()> {
        fs::create_dir_all(&self.logs_dir)?;

        let logfile = RollingFileAppender::new(
            Rotation::DAILY,
            &self.logs_dir,
            &self.name,
        );

        let default_log_level =
            default_log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
        let env_layer = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(default_log_level)?,
        };

        let file_layer = tracing_subscriber::fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
            .json()
            .with_writer(logfile);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(LevelFilter::WARN);

        tracing_subscriber::registry()
            .with(env_layer)
            .with(file_layer)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }

    /// Path of the log file being written today.
    pub fn current_log_file(&self) -> Result<PathBuf> {
        let format = format_description!("[year]-[month]-[day]");
        let date = OffsetDateTime::now_utc().date().format(&format)?;
        Ok(self.logs_dir.join(format!("{}.{}", self.name, date)))
    }

    /// Collect the log files and their sizes.
    pub fn status(&self) -> Result<LogFileStatus> {
        let current = self.current_log_file()?;
        let mut log_files = self.log_files()?;
        log_files.sort();

        let mut current_size = 0;
        let mut total_size = 0;
        for path in &log_files {
            let size = fs::metadata(path)?.len();
            if path == &current {
                current_size = size;
            }
            total_size += size;
        }

        Ok(LogFileStatus {
            current,
            current_size,
            log_files,
            total_size,
        })
    }

    /// Delete every log file except the current one.
    ///
    /// Returns the number of files removed.
    pub fn delete_rotated(&self) -> Result<usize> {
        let current = self.current_log_file()?;
        let mut removed = 0;
        for path in self.log_files()? {
            if path != current {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        tracing::debug!(removed, "logs::delete_rotated");
        Ok(removed)
    }

    fn log_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if !self.logs_dir.exists() {
            return Ok(files);
        }
        for entry in fs::read_dir(&self.logs_dir)? {
            let path = entry?.path();
            let is_log = path
                .file_name()
                .map(|name| name.to_string_lossy().starts_with(&self.name))
                .unwrap_or(false);
            if path.is_file() && is_log {
                files.push(path);
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn logs_status_and_delete() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let logger = Logger::new(dir.path());
        fs::create_dir_all(logger.logs_dir())?;

        let current = logger.current_log_file()?;
        fs::write(&current, b"today")?;
        fs::write(
            logger.logs_dir().join(format!("{}.2001-01-01", LOG_FILE_NAME)),
            b"old",
        )?;
        fs::write(logger.logs_dir().join("unrelated.txt"), b"skip")?;

        let status = logger.status()?;
        assert_eq!(current, status.current);
        assert_eq!(2, status.log_files.len());
        assert_eq!(5, status.current_size);
        assert_eq!(8, status.total_size);

        assert_eq!(1, logger.delete_rotated()?);
        assert_eq!(1, logger.status()?.log_files.len());
        Ok(())
    }

    #[test]
    fn logs_status_missing_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let logger = Logger::new(dir.path().join("missing"));
        let status = logger.status()?;
        assert!(status.log_files.is_empty());
        assert_eq!(0, status.total_size);
        Ok(())
    }
}

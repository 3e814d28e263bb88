#![forbid(unsafe_code)]

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, WriteMode};

use crate::config::LogConfig;

const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts file-based logging under the configured directory. The TUI owns
/// the terminal, so nothing may log to stdout/stderr; all diagnostics go to
/// rotated files instead. The returned handle must stay alive for the
/// duration of the process.
pub fn init(cfg: &LogConfig) -> anyhow::Result<LoggerHandle> {
    let dir = crate::config::expand_path(&cfg.dir)?;
    std::fs::create_dir_all(&dir)?;

    let handle = Logger::try_with_str(cfg.level.trim())?
        .log_to_file(FileSpec::default().directory(&dir).basename("tasktui"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            flexi_logger::Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()?;

    log::debug!(
        "logging started (level={}, dir={})",
        cfg.level,
        dir.display()
    );
    Ok(handle)
}

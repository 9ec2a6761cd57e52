//! Logger bootstrap for the CLI

use flexi_logger::{Logger, LoggerHandle};

/// Start stderr logging. `--verbose` forces debug; otherwise RUST_LOG wins
/// over the configured level.
///
/// Returns `None` when the logger cannot start; calculations still run.
pub fn init_logging(verbose: bool, configured_level: &str) -> Option<LoggerHandle> {
    let logger = if verbose {
        Logger::try_with_str("debug")
    } else {
        Logger::try_with_env_or_str(configured_level)
    };

    match logger.and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled ({})", e);
            None
        }
    }
}

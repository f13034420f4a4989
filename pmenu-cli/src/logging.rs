use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PMENU_LOG";
pub const LOG_FILE_NAME: &str = "pmenu.log";

/// Install the global subscriber.
///
/// Logging is off unless asked for through `PMENU_LOG`, `RUST_LOG` or
/// `--verbose`. Output always goes to a file: stderr is the terminal the
/// menu draws on.
pub fn init(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(filter) = build_env_filter(verbose) else {
        return Ok(());
    };

    let path = log_destination(log_file);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}

/// `--log-file`, or `<temp dir>/pmenu.log`.
pub fn log_destination(log_file: Option<&Path>) -> PathBuf {
    log_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
}

/// `PMENU_LOG` > `RUST_LOG` > `--verbose`; `None` means logging stays off.
fn build_env_filter(verbose: bool) -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return Some(filter);
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Some(filter);
    }

    verbose.then(|| EnvFilter::new("debug"))
}

use std::path::{Path, PathBuf};

use anyhow::Context;

pub const TMP_FILE_NAME: &str = "pmenu";

/// `<temp dir>/pmenu`, where the selection lands unless `--output` is given.
pub fn default_output_path() -> PathBuf {
    std::env::temp_dir().join(TMP_FILE_NAME)
}

/// Write the selected line as-is, without a trailing newline.
pub fn write_selection(path: &Path, selection: &str) -> anyhow::Result<()> {
    std::fs::write(path, selection)
        .with_context(|| format!("failed to write selection to '{}'", path.display()))
}

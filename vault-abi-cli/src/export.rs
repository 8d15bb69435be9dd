use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::info_span;
use vault_abi::VaultVersion;

/// Write the canonical JSON of every version to `out_dir`, one `vault_v0_X_0.json` file each.
///
/// The directory is created if it does not exist. Existing files are overwritten.
pub fn export_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();
    for version in VaultVersion::all() {
        let span = info_span!("export", %version);
        let _enter = span.enter();

        let path = out_dir.join(version.artifact_file_name());
        let mut json = version.abi().to_json_pretty()?;
        json.push('\n');
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote ABI table");
        written.push(path);
    }
    Ok(written)
}

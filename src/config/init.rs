use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::schema::Config;

const HEADER: &str = "\
# lovecalc configuration
#
# colors: auto | always | never
# celebrate_at: score at or above which a result is celebrated (1-100)
# history.limit: number of recent results kept
# share.base_url: page that share links point at
";

/// Write a config file with every setting at its default.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .context("Failed to write config file")?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config file")?;
    file.commit().context("Failed to save config file")?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Default location of the user database, created on first use.
pub fn db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("unable to determine user data directory")?
        .join("userlist");
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;
    Ok(data_dir.join("users.db"))
}

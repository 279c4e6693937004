//! Persistence of the "disclaimer accepted" flag.
//!
//! One boolean, stored as JSON in the platform config directory. Read
//! once at startup; once accepted it is never un-set. A missing or
//! unreadable file simply reads as "not accepted".

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct DisclaimerFile {
    accepted: bool,
}

fn state_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.pharmkit.desktop"))
}

fn flag_path() -> eyre::Result<PathBuf> {
    Ok(state_dir()?.join("disclaimer.json"))
}

/// Load the flag. Any failure reads as `false`.
pub fn load_accepted() -> bool {
    let Ok(path) = flag_path() else {
        return false;
    };
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return false;
    };
    match serde_json::from_str::<DisclaimerFile>(&contents) {
        Ok(file) => file.accepted,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable disclaimer flag: {e}");
            false
        }
    }
}

/// Persist acceptance.
pub fn persist_accepted() -> eyre::Result<()> {
    let dir = state_dir()?;
    std::fs::create_dir_all(&dir)?;

    let json = serde_json::to_string_pretty(&DisclaimerFile { accepted: true })?;

    // Write to a temp file then rename for atomicity
    let path = dir.join("disclaimer.json");
    let tmp_path = dir.join("disclaimer.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "disclaimer acceptance saved");
    Ok(())
}

// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::error::{Error, Result};

/// Write `contents` to the file named by `user_path` (see `resolve_out_path`).
/// Returns the final path written to.
pub fn write_export(user_path: &Path, contents: &str) -> Result<PathBuf> {
    let path = resolve_out_path(user_path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

/// Empty → `data.csv`. A directory (existing, or hinted by a trailing
/// separator) → `<dir>/data.csv`. Anything else is used as the file path.
pub fn resolve_out_path(user_path: &Path) -> Result<PathBuf> {
    let raw = user_path.to_string_lossy();
    if raw.trim().is_empty() {
        return Ok(PathBuf::from(DEFAULT_OUT_FILE));
    }
    let p = PathBuf::from(normalize_separators(&raw));
    if looks_like_dir_hint(&raw) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(DEFAULT_OUT_FILE))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}

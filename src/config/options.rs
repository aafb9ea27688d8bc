// src/config/options.rs
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;
use crate::error::{ Error, Result };

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub sample: SampleOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Reject option combinations that can only fail later, after a fetch.
    pub fn validate(&self) -> Result<()> {
        match &self.fetch.source {
            Source::Url(u) if u.trim().is_empty() => {
                return Err(Error::InvalidOption(s!("source URL is empty")));
            }
            Source::File(p) if p.as_os_str().is_empty() => {
                return Err(Error::InvalidOption(s!("input file path is empty")));
            }
            _ => {}
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::InvalidOption(s!("timeout must be at least 1 second")));
        }
        Ok(())
    }
}

/* ---------------- Fetch ---------------- */

/// Where the record document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Human-readable origin for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Source::Url(u) => u.clone(),
            Source::File(p) => p.display().to_string(),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(s!(DEFAULT_SOURCE_URL))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: Source,
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/* ---------------- Sampling ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleOptions {
    pub count: usize,
    /// `None` → fresh thread RNG each run.
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self { count: DEFAULT_SAMPLE_COUNT, seed: None }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Fields joined as-is. A comma or newline inside a value shifts columns.
    #[default]
    None,
    /// Quote fields containing the separator, quotes or line breaks.
    Rfc4180,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub target: OutputTarget,
    pub escaping: Escaping,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            target: OutputTarget::File(PathBuf::from(DEFAULT_OUT_FILE)),
            escaping: Escaping::None,
        }
    }
}

impl ExportOptions {
    /// Parse GUI/CLI text into a file target. Empty text → default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.target = if s.is_empty() {
            OutputTarget::File(PathBuf::from(DEFAULT_OUT_FILE))
        } else {
            OutputTarget::File(PathBuf::from(s))
        };
    }

    pub fn out_path(&self) -> Option<&Path> {
        match &self.target {
            OutputTarget::File(p) => Some(p.as_path()),
            OutputTarget::Stdout => None,
        }
    }
}

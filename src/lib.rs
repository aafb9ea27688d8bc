// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod extract;
pub mod record;
pub mod sample;

pub mod file;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use crate::csv::{CsvDocument, to_csv};
pub use crate::error::{Error, Result};
pub use crate::extract::{ExtractedFields, extract};
pub use crate::record::{RawRecord, RecordSet};
pub use crate::sample::sample;

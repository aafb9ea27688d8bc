// src/record.rs
//! Input records: id → raw HTML content.
//!
//! Decoding is tolerant of the data's shape: only the top level
//! must be a JSON object. A record that is not an object, or whose
//! `raw_content` is missing or not a string, becomes an empty record and is
//! later extracted as three empty fields. Unknown fields are ignored.

use std::collections::BTreeMap;
use std::fs;

use serde::Deserialize;
use serde_json::Value;

use crate::config::options::{FetchOptions, Source};
use crate::core::net;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub raw_content: String,
}

impl RawRecord {
    pub fn new(raw_content: impl Into<String>) -> Self {
        Self { raw_content: raw_content.into() }
    }

    /// Objects go through the derive; a `raw_content` that is not a string
    /// makes the record empty. Anything else (arrays included) is empty too.
    fn from_value(id: &str, value: Value) -> Self {
        if !value.is_object() {
            logd!("Records: {id}: record is {}, treating as empty", kind_of(&value));
            return RawRecord::default();
        }
        serde_json::from_value(value).unwrap_or_else(|e| {
            logd!("Records: {id}: {e}, treating as empty");
            RawRecord::default()
        })
    }
}

/// Ordered by id so a seeded sampler sees the same key sequence every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: BTreeMap<String, RawRecord>,
}

impl RecordSet {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, id: impl Into<String>, record: RawRecord) -> Option<RawRecord> {
        self.records.insert(id.into(), record)
    }

    pub fn get(&self, id: &str) -> Option<&RawRecord> { self.records.get(id) }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn ids(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Decode a JSON object of records.
    pub fn from_json(text: &str) -> Result<Self> {
        let top: BTreeMap<String, Value> = serde_json::from_str(text)?;
        let records = top
            .into_iter()
            .map(|(id, value)| {
                let rec = RawRecord::from_value(&id, value);
                (id, rec)
            })
            .collect();
        Ok(Self { records })
    }

    /// Fetch or read the document named by `opts.source` and decode it.
    pub fn load(opts: &FetchOptions) -> Result<Self> {
        let text = match &opts.source {
            Source::Url(url) => net::http_get(url, opts.timeout())?,
            Source::File(path) => fs::read_to_string(path)
                .map_err(|e| Error::unavailable(path.display().to_string(), e))?,
        };
        let set = Self::from_json(&text)?;
        logf!("Records: loaded {} from {}", set.len(), opts.source.describe());
        Ok(set)
    }
}

impl<K: Into<String>> FromIterator<(K, RawRecord)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (K, RawRecord)>>(iter: I) -> Self {
        Self { records: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// src/core/net.rs

// Blocking HTTPS GET for the record document.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str, timeout: Duration) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| Error::unavailable(url, e))?;

    logd!("HTTP: GET {url} (timeout {}s)", timeout.as_secs());
    let resp = client.get(url).send().map_err(|e| Error::unavailable(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::unavailable(url, format!("HTTP status {status}")));
    }

    let body = resp.text().map_err(|e| Error::unavailable(url, e))?;
    logd!("HTTP: {status} {url} ({} bytes)", body.len());
    Ok(body)
}

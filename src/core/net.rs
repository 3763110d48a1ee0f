// src/core/net.rs
//
// Blocking HTTP GET for dataset URLs. Runs on the loader thread, never on
// the UI thread.

use std::time::Duration;

use reqwest::{blocking::Client, header::CACHE_CONTROL};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// Outcome of a GET that reached the server.
pub enum HttpBody {
    Ok(String),
    Status(u16),
}

pub fn http_get(url: &str) -> Result<HttpBody, reqwest::Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    // Always fetch fresh data
    let resp = client.get(url).header(CACHE_CONTROL, "no-cache").send()?;

    let status = resp.status();
    if !status.is_success() {
        return Ok(HttpBody::Status(status.as_u16()));
    }
    Ok(HttpBody::Ok(resp.text()?))
}

pub fn is_url(s: &str) -> bool {
    let lower = s.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

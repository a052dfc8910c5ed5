// src/core/net.rs

use std::time::Duration;

use crate::config::consts::{HOST, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

/// Where raw stats pages come from. The runner only talks to this trait;
/// tests substitute canned documents.
pub trait DocumentSource {
    fn fetch(&self, path: &str) -> Result<String, ScrapeError>;
}

/// The real thing: blocking GETs against pdga.com, one at a time.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<String, ScrapeError> {
        let url = format!("https://{}{}", HOST, path);
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                status: status.as_u16(),
                url,
            });
        }
        Ok(resp.text()?)
    }
}

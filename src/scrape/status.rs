// src/scrape/status.rs

use scraper::{Html, Selector};

use crate::config::consts::STATUS_SELECTOR;
use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

/// Membership status as printed on the page. Only the literal `Current`
/// counts as active; any other text (Expired, Revoked, …) is carried
/// verbatim and later substituted for every numeric cell in the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberStatus {
    Current,
    Other(String),
}

impl MemberStatus {
    pub fn is_current(&self) -> bool {
        matches!(self, MemberStatus::Current)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MemberStatus::Current => "Current",
            MemberStatus::Other(s) => s,
        }
    }
}

/// Read the designated status element. Its absence is fatal for the player:
/// without it we cannot tell a lapsed member from a changed page layout.
pub fn member_status(doc: &Html) -> Result<MemberStatus, ScrapeError> {
    let sel = Selector::parse(STATUS_SELECTOR).unwrap();
    let el = doc
        .select(&sel)
        .next()
        .ok_or_else(|| ScrapeError::MissingElement {
            selector: STATUS_SELECTOR.to_string(),
        })?;
    let text = normalize_ws(&el.text().collect::<String>());
    Ok(if text == "Current" {
        MemberStatus::Current
    } else {
        MemberStatus::Other(text)
    })
}

//! Contact validation — presence of a well-formed email and phone number.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{10}\b").unwrap());

/// Independent contact-data booleans. No cross-validation between the two,
/// no plausibility check on the phone's regional format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSignal {
    pub email_valid: bool,
    pub phone_valid: bool,
}

/// Scans the text for an email-shaped token and a 10-digit phone number.
pub fn validate_contact(text: &str) -> ContactSignal {
    ContactSignal {
        email_valid: EMAIL_RE.is_match(text),
        phone_valid: PHONE_RE.is_match(text),
    }
}

//! Profile verification signals — GitHub reputation lookup and the
//! LinkedIn presence check.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::github::ProfileLookup;

static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([A-Za-z0-9_-]+)").unwrap());

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+").unwrap());

const REPO_BONUS: u32 = 15;
const MIN_PUBLIC_REPOS: u32 = 3;
const FOLLOWER_BONUS: u32 = 10;
const MIN_FOLLOWERS: u32 = 5;
const AGE_BONUS: u32 = 10;
const MIN_ACCOUNT_AGE_DAYS: i64 = 90;

/// One verifier's worth of evidence.
///
/// Invariants held by construction: `valid` implies `found`, and `score`
/// is zero unless `valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSignal {
    pub found: bool,
    pub valid: bool,
    pub score: u32,
}

impl EvidenceSignal {
    /// No profile reference located in the text.
    pub fn not_found() -> Self {
        Self {
            found: false,
            valid: false,
            score: 0,
        }
    }

    /// A reference was located but could not be verified.
    pub fn unverified() -> Self {
        Self {
            found: true,
            valid: false,
            score: 0,
        }
    }

    /// A reference was located and the external lookup succeeded.
    pub fn verified(score: u32) -> Self {
        Self {
            found: true,
            valid: true,
            score,
        }
    }
}

/// Extracts the first `github.com/<username>` reference from the text.
pub fn extract_github_username(text: &str) -> Option<&str> {
    GITHUB_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Verifies a GitHub reference in the text against the reputation lookup.
///
/// Fail-soft: any lookup failure (non-success status, network error,
/// timeout, malformed payload) degrades to `unverified`, never an error.
/// Makes exactly one outbound call, or zero when no reference is found.
pub async fn verify_github(text: &str, lookup: &dyn ProfileLookup) -> EvidenceSignal {
    let username = match extract_github_username(text) {
        Some(u) => u,
        None => return EvidenceSignal::not_found(),
    };

    let stats = match lookup.lookup(username).await {
        Ok(s) => s,
        Err(e) => {
            debug!("GitHub lookup for {username} failed: {e}");
            return EvidenceSignal::unverified();
        }
    };

    let mut score = 0;
    if stats.public_repos >= MIN_PUBLIC_REPOS {
        score += REPO_BONUS;
    }
    if stats.followers >= MIN_FOLLOWERS {
        score += FOLLOWER_BONUS;
    }
    let account_age = Utc::now() - stats.created_at;
    if account_age.num_days() > MIN_ACCOUNT_AGE_DAYS {
        score += AGE_BONUS;
    }

    EvidenceSignal::verified(score)
}

/// Checks for a LinkedIn profile URL.
///
/// Pattern presence is the whole check; the boolean doubles as `found` and
/// `valid` in the report. A real existence probe would change the signal's
/// precision, so this stays a pure regex match until that is asked for.
pub fn verify_linkedin(text: &str) -> bool {
    LINKEDIN_RE.is_match(text)
}

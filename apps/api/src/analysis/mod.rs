//! Resume risk analysis engine.
//!
//! Three independent signal extractors feed one aggregation step. Each call
//! is a pure function of the input text plus at most one idempotent outbound
//! lookup; the engine holds no state across calls and is safe to invoke
//! concurrently for unrelated requests.

pub mod aggregate;
pub mod ai_detect;
pub mod contact;
pub mod handlers;
pub mod profile;

use crate::github::ProfileLookup;

use aggregate::AnalysisReport;

/// Runs the full analysis pipeline over extracted resume text.
///
/// The contact and synthetic-text extractors are pure and run inline; the
/// profile verifier is the only signal with an outbound call, so there is
/// nothing to fan out over. A failed or timed-out lookup degrades inside
/// the verifier and never surfaces here.
pub async fn analyze_resume_text(text: &str, lookup: &dyn ProfileLookup) -> AnalysisReport {
    let contact_signal = contact::validate_contact(text);
    let ai_score = ai_detect::detect_synthetic_text(text);
    let linkedin_found = profile::verify_linkedin(text);
    let github_signal = profile::verify_github(text, lookup).await;

    aggregate::aggregate(github_signal, linkedin_found, contact_signal, ai_score)
}

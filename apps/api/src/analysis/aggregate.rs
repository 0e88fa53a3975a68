//! Risk aggregation — combines the independent evidence signals into a
//! verdict with a fraud score, risk tier, decision, confidence, and flags.
//!
//! Pure function of its inputs; cannot fail given well-typed signals.

use serde::{Deserialize, Serialize};

use crate::analysis::contact::ContactSignal;
use crate::analysis::profile::EvidenceSignal;

const PROFILE_PENALTY: u32 = 40;
const LINKEDIN_PENALTY: u32 = 15;
const CONTACT_PENALTY: u32 = 15;
const AI_PENALTY: u32 = 40;

/// Synthetic-text scores above this contribute the AI penalty.
const AI_SCORE_THRESHOLD: u32 = 40;

const HIGH_THRESHOLD: u32 = 70;
const MEDIUM_THRESHOLD: u32 = 40;

pub const FLAG_INVALID_GITHUB: &str = "Invalid GitHub account";
pub const FLAG_MISSING_LINKEDIN: &str = "LinkedIn profile missing or invalid";
pub const FLAG_MISSING_CONTACT: &str = "Missing valid contact information";
pub const FLAG_AI_CONTENT: &str = "AI-generated content suspected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Accept,
    ManualReview,
    Reject,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::ManualReview => "MANUAL_REVIEW",
            Decision::Reject => "REJECT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub fraud_score: u32,
    pub risk_level: RiskLevel,
    pub decision: Decision,
    /// Fixed constant per tier, not calibrated from score magnitude.
    pub confidence: f64,
}

/// The LinkedIn check is pattern-presence only, so one boolean serves as
/// both fields. Kept binary on purpose; see the profile module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryProfile {
    pub found: bool,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub profile: EvidenceSignal,
    pub secondary_profile: SecondaryProfile,
    pub contact_info: ContactSignal,
}

/// Full verdict for one analysis call. Constructed fresh per call,
/// immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: Analysis,
    pub verification: Verification,
    pub flags: Vec<String>,
}

/// Maps a total fraud score to its tier. Checked high to low, inclusive
/// lower bounds, first match wins.
pub fn risk_tier(fraud_score: u32) -> (RiskLevel, Decision, f64) {
    if fraud_score >= HIGH_THRESHOLD {
        (RiskLevel::High, Decision::Reject, 0.90)
    } else if fraud_score >= MEDIUM_THRESHOLD {
        (RiskLevel::Medium, Decision::ManualReview, 0.75)
    } else {
        (RiskLevel::Low, Decision::Accept, 0.85)
    }
}

/// Combines the four signals into a verdict.
pub fn aggregate(
    github: EvidenceSignal,
    linkedin_found: bool,
    contact: ContactSignal,
    ai_score: u32,
) -> AnalysisReport {
    let mut fraud_score = 0;
    let mut flags = Vec::new();

    if !github.valid {
        fraud_score += PROFILE_PENALTY;
        flags.push(FLAG_INVALID_GITHUB.to_string());
    }

    if !linkedin_found {
        fraud_score += LINKEDIN_PENALTY;
        flags.push(FLAG_MISSING_LINKEDIN.to_string());
    }

    // One combined flag even when both contact fields fail.
    if !contact.email_valid || !contact.phone_valid {
        fraud_score += CONTACT_PENALTY;
        flags.push(FLAG_MISSING_CONTACT.to_string());
    }

    if ai_score > AI_SCORE_THRESHOLD {
        fraud_score += AI_PENALTY;
        flags.push(FLAG_AI_CONTENT.to_string());
    }

    let (risk_level, decision, confidence) = risk_tier(fraud_score);

    AnalysisReport {
        analysis: Analysis {
            fraud_score,
            risk_level,
            decision,
            confidence,
        },
        verification: Verification {
            profile: github,
            secondary_profile: SecondaryProfile {
                found: linkedin_found,
                valid: linkedin_found,
            },
            contact_info: contact,
        },
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email_valid: bool, phone_valid: bool) -> ContactSignal {
        ContactSignal {
            email_valid,
            phone_valid,
        }
    }

    #[test]
    fn test_tier_boundary_39_is_low() {
        assert_eq!(risk_tier(39), (RiskLevel::Low, Decision::Accept, 0.85));
    }

    #[test]
    fn test_tier_boundary_40_is_medium() {
        assert_eq!(
            risk_tier(40),
            (RiskLevel::Medium, Decision::ManualReview, 0.75)
        );
    }

    #[test]
    fn test_tier_boundary_69_is_medium() {
        assert_eq!(
            risk_tier(69),
            (RiskLevel::Medium, Decision::ManualReview, 0.75)
        );
    }

    #[test]
    fn test_tier_boundary_70_is_high() {
        assert_eq!(risk_tier(70), (RiskLevel::High, Decision::Reject, 0.90));
    }

    #[test]
    fn test_all_signals_clean_scores_zero() {
        let report = aggregate(
            EvidenceSignal::verified(35),
            true,
            contact(true, true),
            0,
        );
        assert_eq!(report.analysis.fraud_score, 0);
        assert_eq!(report.analysis.risk_level, RiskLevel::Low);
        assert_eq!(report.analysis.decision, Decision::Accept);
        assert!(report.flags.is_empty());
    }

    #[test]
    fn test_worst_case_scenario_flags_in_order() {
        // No profile links, contact valid, synthetic score 50:
        // 40 (github) + 15 (linkedin) + 0 + 40 (ai) = 95.
        let report = aggregate(EvidenceSignal::not_found(), false, contact(true, true), 50);
        assert_eq!(report.analysis.fraud_score, 95);
        assert_eq!(report.analysis.risk_level, RiskLevel::High);
        assert_eq!(report.analysis.decision, Decision::Reject);
        assert_eq!(report.analysis.confidence, 0.90);
        assert_eq!(
            report.flags,
            vec![
                FLAG_INVALID_GITHUB.to_string(),
                FLAG_MISSING_LINKEDIN.to_string(),
                FLAG_AI_CONTENT.to_string(),
            ]
        );
    }

    #[test]
    fn test_contact_failures_share_one_flag() {
        let both = aggregate(EvidenceSignal::verified(35), true, contact(false, false), 0);
        let one = aggregate(EvidenceSignal::verified(35), true, contact(true, false), 0);
        assert_eq!(both.analysis.fraud_score, 15);
        assert_eq!(both.flags, vec![FLAG_MISSING_CONTACT.to_string()]);
        assert_eq!(both.flags, one.flags);
    }

    #[test]
    fn test_ai_threshold_is_strictly_above_40() {
        let at = aggregate(EvidenceSignal::verified(35), true, contact(true, true), 40);
        assert_eq!(at.analysis.fraud_score, 0);

        let above = aggregate(EvidenceSignal::verified(35), true, contact(true, true), 41);
        assert_eq!(above.analysis.fraud_score, 40);
        assert_eq!(above.flags, vec![FLAG_AI_CONTENT.to_string()]);
    }

    #[test]
    fn test_unverified_profile_penalized_like_missing() {
        let missing = aggregate(EvidenceSignal::not_found(), true, contact(true, true), 0);
        let unverified = aggregate(EvidenceSignal::unverified(), true, contact(true, true), 0);
        assert_eq!(missing.analysis.fraud_score, 40);
        assert_eq!(
            missing.analysis.fraud_score,
            unverified.analysis.fraud_score
        );
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let a = aggregate(EvidenceSignal::unverified(), false, contact(true, false), 45);
        let b = aggregate(EvidenceSignal::unverified(), false, contact(true, false), 45);
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serialization_shape() {
        let report = aggregate(EvidenceSignal::not_found(), false, contact(false, false), 0);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["analysis"]["fraud_score"], 70);
        assert_eq!(value["analysis"]["risk_level"], "HIGH");
        assert_eq!(value["analysis"]["decision"], "REJECT");
        assert_eq!(value["verification"]["profile"]["found"], false);
        assert_eq!(value["verification"]["profile"]["score"], 0);
        assert_eq!(value["verification"]["secondary_profile"]["valid"], false);
        assert_eq!(value["verification"]["contact_info"]["email_valid"], false);
        assert_eq!(value["flags"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_medium_tier_report() {
        let report = aggregate(EvidenceSignal::unverified(), true, contact(true, true), 0);
        assert_eq!(report.analysis.risk_level, RiskLevel::Medium);
        assert_eq!(report.analysis.decision, Decision::ManualReview);
        assert_eq!(report.analysis.confidence, 0.75);
    }
}

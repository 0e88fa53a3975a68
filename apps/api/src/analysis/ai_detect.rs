//! Synthetic-text detection — weighted heuristic estimate of whether a
//! resume is template-generated rather than authored.
//!
//! Three independent indicators accumulate into one unclamped score:
//! cliché phrase occurrences, total absence of digits, and high
//! inter-sentence repetitiveness. Callers apply their own threshold.

use std::collections::HashMap;

/// Generic resume clichés. Matched case-insensitively, every
/// non-overlapping occurrence counted.
const GENERIC_PHRASES: [&str; 5] = [
    "highly motivated",
    "detail oriented",
    "passionate individual",
    "results driven",
    "team player",
];

const PHRASE_POINTS: u32 = 10;
const NO_DIGIT_POINTS: u32 = 20;
const SIMILARITY_POINTS: u32 = 20;

const SIMILARITY_THRESHOLD: f64 = 0.7;
/// Sentences shorter than this (trimmed) are noise, not candidates.
const MIN_SENTENCE_CHARS: usize = 10;
/// Similarity only kicks in once the text has enough sentences to repeat.
const MIN_SENTENCES_FOR_SIMILARITY: usize = 5;
/// Hard cap on sentences fed to the O(s²) similarity step. Tunable; keeps
/// pathological documents from dominating analysis latency.
const MAX_SIMILARITY_SENTENCES: usize = 64;

/// Scores the likelihood that `text` is templated. Monotonically
/// non-decreasing in phrase occurrences and in detected repetitiveness.
pub fn detect_synthetic_text(text: &str) -> u32 {
    let mut score = 0;
    let text_lower = text.to_lowercase();

    for phrase in GENERIC_PHRASES {
        score += PHRASE_POINTS * text_lower.matches(phrase).count() as u32;
    }

    // A resume with no concrete figures at all reads as generated.
    if !text.chars().any(|c| c.is_ascii_digit()) {
        score += NO_DIGIT_POINTS;
    }

    // Splitting the lowercased text keeps the similarity comparison
    // case-insensitive without re-normalizing every token.
    let sentences: Vec<&str> = text_lower
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .take(MAX_SIMILARITY_SENTENCES)
        .collect();

    if sentences.len() > MIN_SENTENCES_FOR_SIMILARITY
        && mean_pairwise_similarity(&sentences) > SIMILARITY_THRESHOLD
    {
        score += SIMILARITY_POINTS;
    }

    score
}

/// Mean cosine similarity of term-frequency vectors over all sentence
/// pairs, self-pairs included (each contributes 1.0), so the figure tracks
/// a full similarity-matrix mean.
fn mean_pairwise_similarity(sentences: &[&str]) -> f64 {
    let vectors: Vec<HashMap<&str, f64>> = sentences.iter().map(|s| term_frequencies(s)).collect();

    let n = vectors.len();
    let mut total = 0.0;
    for i in 0..n {
        total += 1.0; // self-pair
        for j in (i + 1)..n {
            total += 2.0 * cosine(&vectors[i], &vectors[j]);
        }
    }
    total / (n * n) as f64
}

fn term_frequencies(sentence: &str) -> HashMap<&str, f64> {
    let mut counts = HashMap::new();
    for token in sentence.split(|c: char| !c.is_alphanumeric()) {
        if !token.is_empty() {
            *counts.entry(token).or_insert(0.0) += 1.0;
        }
    }
    counts
}

fn cosine(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, &wa)| b.get(term).map(|&wb| wa * wb))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_with_digits_scores_zero() {
        let score = detect_synthetic_text("Shipped 3 services in 2 years. Led a squad of 4.");
        assert_eq!(score, 0);
    }

    #[test]
    fn test_no_digits_adds_twenty() {
        let score = detect_synthetic_text("Worked on backend services for several years.");
        assert_eq!(score, 20);
    }

    #[test]
    fn test_every_phrase_occurrence_counts() {
        let text = "Team player since 2019. A team player mindset. Team player always.";
        assert_eq!(detect_synthetic_text(text), 30);
    }

    #[test]
    fn test_phrase_match_is_case_insensitive() {
        assert_eq!(detect_synthetic_text("Highly Motivated since 2020"), 10);
    }

    #[test]
    fn test_distinct_phrases_accumulate() {
        let text = "Detail oriented and results driven engineer, hired in 2018.";
        assert_eq!(detect_synthetic_text(text), 20);
    }

    #[test]
    fn test_no_digit_floor_holds_regardless_of_content() {
        // Any digit-free text scores at least the no-digit bonus.
        for text in ["", "short", "a long passage about nothing in particular"] {
            assert!(detect_synthetic_text(text) >= 20, "failed for {text:?}");
        }
    }

    #[test]
    fn test_repetitive_sentences_add_twenty() {
        let sentence = "Delivered robust scalable solutions in 2021";
        let text = format!("{sentence}. ").repeat(6);
        assert_eq!(detect_synthetic_text(&text), 20);
    }

    #[test]
    fn test_five_or_fewer_sentences_skip_similarity() {
        let sentence = "Delivered robust scalable solutions in 2021";
        let text = format!("{sentence}. ").repeat(5);
        assert_eq!(detect_synthetic_text(&text), 0);
    }

    #[test]
    fn test_dissimilar_sentences_get_no_bonus() {
        let text = "Built the payment ledger in 2019. \
                    Migrated search onto new infrastructure. \
                    Mentored four junior engineers weekly. \
                    Reduced cloud spend by a third. \
                    Wrote the oncall runbook from scratch. \
                    Spoke at two internal conferences.";
        assert_eq!(detect_synthetic_text(text), 0);
    }

    #[test]
    fn test_short_fragments_are_not_sentences() {
        // Each fragment trims to 10 chars or fewer, so similarity never runs.
        let text = "Yes. No. Maybe. Ok. Fine. Sure. Done. 1.";
        assert_eq!(detect_synthetic_text(text), 0);
    }

    #[test]
    fn test_identical_sentences_have_similarity_one() {
        let sentences = vec!["alpha beta gamma"; 6];
        let mean = mean_pairwise_similarity(&sentences);
        assert!((mean - 1.0).abs() < 1e-9, "mean was {mean}");
    }

    #[test]
    fn test_disjoint_sentences_mean_is_diagonal_only() {
        let sentences = vec!["alpha beta", "gamma delta", "epsilon zeta", "eta theta"];
        // Off-diagonal pairs share no terms, so only the 4 self-pairs count.
        let mean = mean_pairwise_similarity(&sentences);
        assert!((mean - 0.25).abs() < 1e-9, "mean was {mean}");
    }
}

//! Keyword scorer: maps extracted résumé text to a point total.
//!
//! Matching is plain substring containment on lowercased text. No word
//! boundaries, no stemming; a keyword inside a longer unrelated word will
//! match. That is accepted behavior, pinned by tests below.

use crate::screening::rubric::{
    Category, RubricMatch, ScoreBreakdown, EDUCATION_DEGREES, EXPERIENCE_BRACKETS,
};

/// Scores extracted text against both rubric tables. Never fails; text
/// matching nothing yields an empty breakdown with total 0.
///
/// Experience pass: first bracket found wins, the rest are skipped.
/// Education pass: every degree found counts.
pub fn score(text: &str) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for bracket in EXPERIENCE_BRACKETS {
        if text.contains(bracket.keyword) {
            record(&mut breakdown, Category::Experience, bracket.label, bracket.points);
            break; // one bracket per résumé
        }
    }

    for degree in EDUCATION_DEGREES {
        if text.contains(degree.keyword) {
            record(&mut breakdown, Category::Education, degree.label, degree.points);
        }
    }

    breakdown
}

fn record(breakdown: &mut ScoreBreakdown, category: Category, label: &str, points: u32) {
    breakdown.total += points;
    breakdown.entries.push(RubricMatch {
        category,
        label: label.to_string(),
        points,
    });
}

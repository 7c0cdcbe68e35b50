//! The fixed scoring rubric: experience brackets and academic degrees.
//!
//! Both tables are process-wide constants. Experience brackets are
//! iterated in declaration order and only the first match counts, so the
//! order below is load-bearing. Education degrees are cumulative and the
//! order only fixes the listing order in breakdowns.

use serde::{Deserialize, Serialize};

/// Rubric category a match belongs to. Serialized with the labels the
/// screening UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Experiência")]
    Experience,
    #[serde(rename = "Formação")]
    Education,
}

/// One rubric table row: the lowercase keyword searched for in extracted
/// text, the label reported in breakdowns, and the points awarded.
#[derive(Debug, Clone, Copy)]
pub struct RubricEntry {
    pub keyword: &'static str,
    pub label: &'static str,
    pub points: u32,
}

/// Years-of-experience brackets. First match wins; a résumé mentioning
/// several brackets is credited only for the first one in this order.
pub const EXPERIENCE_BRACKETS: &[RubricEntry] = &[
    RubricEntry { keyword: "0 a 1 ano", label: "0 a 1 ano", points: 2 },
    RubricEntry { keyword: "2 a 3 anos", label: "2 a 3 anos", points: 5 },
    RubricEntry { keyword: "3 a 6 anos", label: "3 a 6 anos", points: 8 },
    RubricEntry { keyword: "6 a 10 anos", label: "6 a 10 anos", points: 10 },
    RubricEntry { keyword: "+10 anos", label: "+10 anos", points: 12 },
];

/// Academic degrees. Every match counts, so a résumé holding both earns both.
pub const EDUCATION_DEGREES: &[RubricEntry] = &[
    RubricEntry { keyword: "mestrado", label: "Mestrado", points: 8 },
    RubricEntry { keyword: "doutorado", label: "Doutorado", points: 12 },
];

/// A single rubric entry that matched a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricMatch {
    pub category: Category,
    pub label: String,
    pub points: u32,
}

/// The scoring result for one document: every rubric match in the order
/// they were recorded, plus the summed total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub entries: Vec<RubricMatch>,
}

impl ScoreBreakdown {
    /// Approval test: the threshold is inclusive, a total exactly at the
    /// threshold passes.
    pub fn meets(&self, threshold: u32) -> bool {
        self.total >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_brackets_declaration_order() {
        let labels: Vec<&str> = EXPERIENCE_BRACKETS.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["0 a 1 ano", "2 a 3 anos", "3 a 6 anos", "6 a 10 anos", "+10 anos"]
        );
    }

    #[test]
    fn test_experience_points_values() {
        let points: Vec<u32> = EXPERIENCE_BRACKETS.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![2, 5, 8, 10, 12]);
    }

    #[test]
    fn test_education_degrees_and_points() {
        assert_eq!(EDUCATION_DEGREES[0].keyword, "mestrado");
        assert_eq!(EDUCATION_DEGREES[0].points, 8);
        assert_eq!(EDUCATION_DEGREES[1].keyword, "doutorado");
        assert_eq!(EDUCATION_DEGREES[1].points, 12);
    }

    #[test]
    fn test_keywords_are_already_lowercase() {
        for entry in EXPERIENCE_BRACKETS.iter().chain(EDUCATION_DEGREES) {
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
        }
    }

    #[test]
    fn test_total_exactly_at_threshold_meets_it() {
        let b = ScoreBreakdown {
            total: 15,
            entries: vec![],
        };
        assert!(b.meets(15));
        assert!(b.meets(14));
        assert!(!b.meets(16));
    }

    #[test]
    fn test_category_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&Category::Experience).unwrap(),
            "\"Experiência\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Education).unwrap(),
            "\"Formação\""
        );
    }
}

//! Batch evaluation: extract → score each uploaded résumé, keep the ones
//! meeting the threshold.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::screening::document::Document;
use crate::screening::extract::extract;
use crate::screening::rubric::ScoreBreakdown;
use crate::screening::scorer::score;

/// A résumé that met the threshold, with its full scoring breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovedResume {
    pub filename: String,
    pub total: u32,
    pub breakdown: ScoreBreakdown,
}

/// A résumé that could not be extracted and was excluded from scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: String,
}

/// Outcome of one batch run. Approved résumés preserve upload order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub threshold: u32,
    pub evaluated: usize,
    pub approved: Vec<ApprovedResume>,
    pub skipped: Vec<SkippedDocument>,
}

/// Runs the pipeline over a batch. Each document is processed
/// independently; an extraction failure excludes that document and the
/// batch continues.
pub fn evaluate_batch(documents: &[Document], threshold: u32) -> BatchReport {
    let mut approved = Vec::new();
    let mut skipped = Vec::new();

    for document in documents {
        let text = match extract(document) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping '{}': {e}", document.filename);
                skipped.push(SkippedDocument {
                    filename: document.filename.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let breakdown = score(&text);
        if breakdown.meets(threshold) {
            approved.push(ApprovedResume {
                filename: document.filename.clone(),
                total: breakdown.total,
                breakdown,
            });
        }
    }

    info!(
        "Batch evaluated: {} document(s), {} approved, {} skipped (threshold {})",
        documents.len(),
        approved.len(),
        skipped.len(),
        threshold
    );

    BatchReport {
        threshold,
        evaluated: documents.len(),
        approved,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn txt(name: &str, content: &str) -> Document {
        Document::new(name, Bytes::copy_from_slice(content.as_bytes()))
    }

    #[test]
    fn test_document_meeting_threshold_is_approved() {
        let docs = vec![txt("a.txt", "Mestrado e doutorado")];
        let report = evaluate_batch(&docs, 15);
        assert_eq!(report.approved.len(), 1);
        assert_eq!(report.approved[0].filename, "a.txt");
        assert_eq!(report.approved[0].total, 20);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let docs = vec![txt("a.txt", "3 a 6 anos, mestrado")]; // 8 + 8 = 16
        let report = evaluate_batch(&docs, 16);
        assert_eq!(report.approved.len(), 1, ">= comparison, not >");
        let report = evaluate_batch(&docs, 17);
        assert!(report.approved.is_empty());
    }

    #[test]
    fn test_below_threshold_is_omitted() {
        let docs = vec![txt("a.txt", "mestrado")]; // 8
        let report = evaluate_batch(&docs, 15);
        assert!(report.approved.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(report.evaluated, 1);
    }

    #[test]
    fn test_no_match_excluded_for_any_positive_threshold() {
        let docs = vec![txt("a.txt", "nada relevante")];
        for threshold in [1, 5, 15, 30] {
            assert!(evaluate_batch(&docs, threshold).approved.is_empty());
        }
    }

    #[test]
    fn test_one_bad_document_does_not_affect_the_rest() {
        let docs = vec![
            txt("good1.txt", "doutorado e 3 a 6 anos"), // 20
            Document::new("bad.xyz", Bytes::from_static(b"unsupported")),
            txt("good2.txt", "mestrado e doutorado"), // 20
        ];
        let report = evaluate_batch(&docs, 15);
        assert_eq!(report.approved.len(), 2);
        assert_eq!(report.approved[0].filename, "good1.txt");
        assert_eq!(report.approved[1].filename, "good2.txt");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].filename, "bad.xyz");
    }

    #[test]
    fn test_corrupt_file_is_skipped_not_fatal() {
        let docs = vec![
            Document::new("broken.pdf", Bytes::from_static(b"not a pdf")),
            txt("ok.txt", "doutorado, 6 a 10 anos"), // 22
        ];
        let report = evaluate_batch(&docs, 15);
        assert_eq!(report.approved.len(), 1);
        assert_eq!(report.approved[0].filename, "ok.txt");
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_approved_preserves_upload_order() {
        let docs = vec![
            txt("z.txt", "mestrado e doutorado"),
            txt("a.txt", "doutorado e +10 anos"),
        ];
        let report = evaluate_batch(&docs, 15);
        let names: Vec<&str> = report.approved.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(names, vec!["z.txt", "a.txt"]);
    }

    #[test]
    fn test_empty_batch_yields_empty_report() {
        let report = evaluate_batch(&[], 15);
        assert_eq!(report.evaluated, 0);
        assert!(report.approved.is_empty());
        assert!(report.skipped.is_empty());
    }
}

//! Text extraction for uploaded résumés.
//!
//! Supported formats: `pdf`, `docx`, `txt`, dispatched on the filename
//! extension. Output is the full document text, lowercased, so every
//! downstream rubric match is case-insensitive by construction.

use std::io::Write;

use thiserror::Error;

use crate::screening::document::Document;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported format '.{0}' (expected pdf, docx or txt)")]
    UnsupportedFormat(String),

    #[error("i/o error while staging document: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("docx extraction failed: {0}")]
    Docx(String),

    #[error("txt is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Extracts the text of an uploaded document and lowercases it.
///
/// A failure here means this document only; callers skip it and continue
/// with the rest of the batch.
pub fn extract(document: &Document) -> Result<String, ExtractError> {
    let text = match document.extension().as_str() {
        "pdf" => extract_pdf(&document.bytes)?,
        "docx" => extract_docx(&document.bytes)?,
        "txt" => String::from_utf8(document.bytes.to_vec())?,
        other => return Err(ExtractError::UnsupportedFormat(other.to_string())),
    };
    Ok(text.to_lowercase())
}

/// Stages the bytes in a named temp file for `pdf-extract`, which reads
/// from a path. The temp file is removed on drop, on every exit path.
///
/// Pages with no extractable text (scanned images) contribute nothing;
/// that is not an error.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut tmp = tempfile::Builder::new().suffix(".pdf").tempfile()?;
    tmp.write_all(bytes)?;
    let text = pdf_extract::extract_text(tmp.path())?;
    Ok(text)
}

/// Walks the docx tree (Paragraph → Run → Text) collecting all text runs.
/// Every paragraph contributes a line, empty ones included, so the output
/// mirrors the document's paragraph order.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let mut parts: Vec<&str> = Vec::new();
            for pc in &para.children {
                if let docx_rs::ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let docx_rs::RunChild::Text(t) = rc {
                            parts.push(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(parts.concat());
        }
    }

    Ok(paragraphs.join("\n"))
}

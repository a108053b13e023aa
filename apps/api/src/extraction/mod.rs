//! Document text extraction — converts an uploaded PDF, DOCX, or plain-text
//! buffer into UTF-8 text. Decoding is delegated to format-specific libraries;
//! their internal errors are re-wrapped with a stage-identifying message.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Supported upload formats, derived from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    /// Classifies a filename by the case-insensitive substring after its last
    /// `.`. Returns `None` for unsupported or missing extensions.
    pub fn from_filename(name: &str) -> Option<FileKind> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            "txt" => Some(FileKind::Txt),
            _ => None,
        }
    }
}

/// Extracts plain text from a document buffer.
///
/// A scanned image-only PDF can legitimately yield empty text; the caller's
/// non-empty check rejects it, not this function.
pub fn extract_text(bytes: &[u8], kind: FileKind) -> Result<String, AppError> {
    match kind {
        FileKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}"))),
        FileKind::Docx => extract_docx_text(bytes),
        FileKind::Txt => String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Extraction(format!("Failed to decode text file as UTF-8: {e}"))),
    }
}

/// A .docx file is a ZIP of XML; docx-rs exposes it as a typed tree.
/// We walk Document → Paragraph → Run → Text, joining paragraphs with newlines
/// and discarding all formatting.
fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from DOCX: {e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let mut parts: Vec<&str> = Vec::new();
            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            parts.push(&t.text);
                        }
                    }
                }
            }
            let para_text = parts.concat();
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn sample_docx(lines: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for line in lines {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("failed to build sample docx");
        buf.into_inner()
    }

    #[test]
    fn classifies_supported_extensions_case_insensitively() {
        assert_eq!(FileKind::from_filename("resume.pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_filename("Resume.PDF"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_filename("cv.DocX"), Some(FileKind::Docx));
        assert_eq!(FileKind::from_filename("notes.txt"), Some(FileKind::Txt));
    }

    #[test]
    fn uses_the_substring_after_the_last_dot() {
        assert_eq!(FileKind::from_filename("jane.doe.txt"), Some(FileKind::Txt));
        assert_eq!(FileKind::from_filename("resume.pdf.xlsx"), None);
    }

    #[test]
    fn rejects_unsupported_and_missing_extensions() {
        assert_eq!(FileKind::from_filename("resume.xlsx"), None);
        assert_eq!(FileKind::from_filename("resume"), None);
        assert_eq!(FileKind::from_filename(""), None);
    }

    #[test]
    fn txt_decodes_utf8() {
        let text = extract_text("Jane Doe\nSoftware Engineer".as_bytes(), FileKind::Txt).unwrap();
        assert_eq!(text, "Jane Doe\nSoftware Engineer");
    }

    #[test]
    fn txt_rejects_malformed_utf8() {
        let err = extract_text(&[0xff, 0xfe, 0x00], FileKind::Txt).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn corrupted_pdf_is_an_extraction_error_not_a_panic() {
        let err = extract_text(b"not a pdf at all", FileKind::Pdf).unwrap_err();
        assert!(err.to_string().contains("PDF"));
    }

    #[test]
    fn corrupted_docx_is_an_extraction_error_not_a_panic() {
        let err = extract_text(b"not a zip archive", FileKind::Docx).unwrap_err();
        assert!(err.to_string().contains("DOCX"));
    }

    #[test]
    fn docx_paragraphs_are_joined_with_newlines() {
        let bytes = sample_docx(&["Jane Doe", "Software Engineer, 5 years React"]);
        let text = extract_text(&bytes, FileKind::Docx).unwrap();
        assert_eq!(text, "Jane Doe\nSoftware Engineer, 5 years React");
    }

    #[test]
    fn docx_blank_paragraphs_are_dropped() {
        let bytes = sample_docx(&["Jane Doe", "   ", "Engineer"]);
        let text = extract_text(&bytes, FileKind::Docx).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }
}

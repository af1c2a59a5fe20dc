use std::io::Cursor;

use crate::prelude::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Unsupported extensions are rejected before the pipeline runs.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            other => Err(AppError::UnsupportedFormat(format!(
                "'.{}', only pdf, docx and txt are supported",
                other
            ))),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentFormat::Txt => "text/plain",
        }
    }
}

/// Raw uploaded bytes plus their declared format. Immutable once loaded.
#[derive(Debug)]
pub struct ResumeDocument {
    pub data: Vec<u8>,
    pub format: DocumentFormat,
}

pub fn extract_document(document: &ResumeDocument) -> Result<String> {
    match document.format {
        DocumentFormat::Pdf => extract_text_from_pdf(&document.data),
        DocumentFormat::Docx => extract_text_from_docx(&document.data),
        DocumentFormat::Txt => Ok(String::from_utf8(document.data.clone())
            .map_err(|e| AppError::Extraction(e.to_string()))?
            .trim()
            .to_string()),
    }
}

fn extract_text_from_pdf(data: &[u8]) -> Result<String> {
    use lopdf::Document;
    let cursor = Cursor::new(data);
    let doc = Document::load_from(cursor).map_err(|e| AppError::Extraction(e.to_string()))?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push(' ');
            }
            Err(e) => {
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }

    if text.trim().is_empty() {
        return Err(AppError::Extraction("no text extracted from pdf".to_string()));
    }
    Ok(text.trim().to_string())
}

fn extract_text_from_docx(data: &[u8]) -> Result<String> {
    use docx_rs::read_docx;
    let docx = read_docx(data).map_err(|e| AppError::Extraction(e.to_string()))?;
    let mut text = String::new();
    for paragraph in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = paragraph {
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text.trim().to_string())
}

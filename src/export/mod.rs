//! Document export
//!
//! The default mode parses the draft once and encodes the same paragraphs the
//! previews show. [`ExportMode::Legacy`] uses the raw-line segmentation instead.

pub mod docx;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::document::cleanup::sanitize_file_stem;
use crate::document::legacy::{extract_title, generate_docx_content};
use crate::document::parse_document;
use crate::render::render_document;

pub use docx::encode_docx;

/// File name used when no title can be found
pub const FALLBACK_FILE_NAME: &str = "公文草稿.docx";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Parse into a document structure, then render
    #[default]
    Structured,
    /// Segment the raw lines with the older export heuristic
    Legacy,
}

#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn export_document(text: &str, mode: ExportMode) -> Result<ExportedDocument> {
    let (title, paragraphs) = match mode {
        ExportMode::Structured => {
            let structure = parse_document(text);
            (Some(structure.title.clone()), render_document(&structure))
        }
        ExportMode::Legacy => (extract_title(text), generate_docx_content(text)),
    };

    let bytes = encode_docx(&paragraphs).context("failed to encode .docx document")?;
    let file_name = export_file_name(title.as_deref().unwrap_or_default());
    info!(
        ?mode,
        paragraphs = paragraphs.len(),
        size = bytes.len(),
        file_name = %file_name,
        "exported document"
    );

    Ok(ExportedDocument { file_name, bytes })
}

/// File name derived from a document title, or [`FALLBACK_FILE_NAME`]
pub fn export_file_name(title: &str) -> String {
    let stem = sanitize_file_stem(title);
    if stem.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{stem}.docx")
    }
}

/// Write an exported document into `dir` (or to `path` if it names a file)
pub fn write_exported(document: &ExportedDocument, target: &Path) -> Result<std::path::PathBuf> {
    let path = if target.is_dir() {
        target.join(&document.file_name)
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, &document.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_falls_back_without_title() {
        assert_eq!(export_file_name(""), FALLBACK_FILE_NAME);
        assert_eq!(export_file_name("关于开展检查的通知"), "关于开展检查的通知.docx");
    }

    #[test]
    fn test_structured_export_uses_parsed_title() {
        let exported =
            export_document("关于开展检查的通知\n各单位：\n请做好准备。", ExportMode::Structured)
                .unwrap();
        assert_eq!(exported.file_name, "关于开展检查的通知.docx");
        assert!(!exported.bytes.is_empty());
    }

    #[test]
    fn test_legacy_export_without_title_uses_fallback() {
        let exported = export_document("", ExportMode::Legacy).unwrap();
        assert_eq!(exported.file_name, FALLBACK_FILE_NAME);
    }
}

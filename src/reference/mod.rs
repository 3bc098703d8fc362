//! Reference material extraction
//!
//! Reference files supplied with a generation request are reduced to plain
//! text that is quoted in the prompt. Extraction never fails: unsupported or
//! broken files produce a placeholder text and an [`ExtractionMethod`] that
//! says what happened.

mod docx;

use anyhow::{Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Maximum number of characters kept from one reference file
pub const MAX_REFERENCE_CHARS: usize = 10_000;

/// Suffix appended to truncated reference text
pub const TRUNCATION_SUFFIX: &str = "...(内容已截断)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Pdf,
    Docx,
    Spreadsheet,
    Text,
    Unsupported,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceText {
    pub file_name: String,
    pub method: ExtractionMethod,
    pub text: String,
    pub truncated: bool,
}

/// Extract the text of a reference file, keeping at most `max_chars` characters
pub fn extract_reference(path: &Path, max_chars: usize) -> ReferenceText {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let (method, result) = match extension.as_str() {
        "pdf" => (ExtractionMethod::Pdf, extract_pdf(path)),
        // Old binary .doc files are attempted through the .docx reader
        "docx" | "doc" => (ExtractionMethod::Docx, docx::extract_docx_text(path)),
        "xlsx" | "xls" => (ExtractionMethod::Spreadsheet, extract_spreadsheet(path)),
        "txt" => (ExtractionMethod::Text, extract_plain_text(path)),
        _ => {
            debug!(file = %file_name, "unsupported reference file type");
            return ReferenceText {
                file_name,
                method: ExtractionMethod::Unsupported,
                text: format!("未支持的文件类型: .{extension}"),
                truncated: false,
            };
        }
    };

    match result {
        Ok(text) => {
            let (text, truncated) = truncate_chars(&text, max_chars);
            debug!(file = %file_name, ?method, chars = text.chars().count(), truncated, "extracted reference");
            ReferenceText {
                file_name,
                method,
                text,
                truncated,
            }
        }
        Err(err) => {
            warn!(file = %file_name, error = %err, "reference extraction failed");
            ReferenceText {
                file_name,
                method: ExtractionMethod::Error,
                text: format!("提取失败: {err}"),
                truncated: false,
            }
        }
    }
}

/// Cut `text` to `max_chars` characters, appending [`TRUNCATION_SUFFIX`] when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (format!("{}{TRUNCATION_SUFFIX}", &text[..byte_index]), true),
        None => (text.to_string(), false),
    }
}

fn extract_pdf(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path).map_err(|err| anyhow!("PDF 解析失败: {err}"))
}

fn extract_plain_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn extract_spreadsheet(path: &Path) -> Result<String> {
    let mut workbook = open_workbook_auto(path).map_err(|err| anyhow!("无法打开工作簿: {err}"))?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut blocks = Vec::new();
    for name in sheet_names {
        match workbook.worksheet_range(&name) {
            Ok(range) => {
                let csv: Vec<String> = range
                    .rows()
                    .map(|row| row.iter().map(cell_to_csv).collect::<Vec<_>>().join(","))
                    .collect();
                blocks.push(format!("--- 工作表: {name} ---\n{}", csv.join("\n")));
            }
            Err(err) => warn!(sheet = %name, error = %err, "skipping unreadable sheet"),
        }
    }

    Ok(blocks.join("\n\n"))
}

fn cell_to_csv(cell: &Data) -> String {
    let text = match cell {
        Data::Empty => return String::new(),
        Data::String(text) => text.clone(),
        _ => cell.to_string(),
    };
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        let (text, truncated) = truncate_chars("一二三四五", 3);
        assert_eq!(text, format!("一二三{TRUNCATION_SUFFIX}"));
        assert!(truncated);

        let (text, truncated) = truncate_chars("一二三", 3);
        assert_eq!(text, "一二三");
        assert!(!truncated);
    }

    #[test]
    fn test_csv_cell_quoting() {
        assert_eq!(cell_to_csv(&Data::String("a,b".into())), "\"a,b\"");
        assert_eq!(cell_to_csv(&Data::String("say \"hi\"".into())), "\"say \"\"hi\"\"\"");
        assert_eq!(cell_to_csv(&Data::Empty), "");
        assert_eq!(cell_to_csv(&Data::Int(42)), "42");
    }

    #[test]
    fn test_text_file_is_read_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"\xe5\x8f\x82\xe8\x80\x83 \xff").unwrap();

        let reference = extract_reference(&path, MAX_REFERENCE_CHARS);
        assert_eq!(reference.method, ExtractionMethod::Text);
        assert!(reference.text.starts_with("参考"));
        assert!(!reference.truncated);
    }

    #[test]
    fn test_unsupported_extension() {
        let reference = extract_reference(Path::new("slides.pptx"), MAX_REFERENCE_CHARS);
        assert_eq!(reference.method, ExtractionMethod::Unsupported);
        assert_eq!(reference.text, "未支持的文件类型: .pptx");
        assert_eq!(reference.file_name, "slides.pptx");
    }

    #[test]
    fn test_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let reference = extract_reference(&dir.path().join("missing.txt"), MAX_REFERENCE_CHARS);
        assert_eq!(reference.method, ExtractionMethod::Error);
        assert!(reference.text.starts_with("提取失败: "));
    }
}

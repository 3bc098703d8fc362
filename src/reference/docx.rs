//! Text extraction from Word reference files

use anyhow::{Result, bail};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Check that the file is a zip package with a Word body part
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            bail!("此文件似乎是 Excel 工作簿，而不是 Word 文档");
        }
        bail!("无效的 .docx 文件：缺少 word/document.xml");
    }

    Ok(())
}

/// Plain text of a .docx file, one paragraph per line, table cells tab-separated
pub(crate) fn extract_docx_text(file_path: &Path) -> Result<String> {
    validate_docx_file(file_path)?;

    let file_data = std::fs::read(file_path)?;
    let docx = docx_rs::read_docx(&file_data)?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                let text = extract_paragraph_text(para);
                if !text.is_empty() {
                    lines.push(text);
                }
            }
            docx_rs::DocumentChild::Table(table) => {
                lines.extend(extract_table_rows(table));
            }
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => text.push_str(&extract_run_text(run)),
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            // Tracked deletions are not part of the text
            _ => {}
        }
    }

    text.trim().to_string()
}

fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => text.push_str(&text_elem.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            docx_rs::RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }

    text
}

fn extract_table_rows(table: &docx_rs::Table) -> Vec<String> {
    let mut rows = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let cell_text: Vec<String> = cell
                .children
                .iter()
                .filter_map(|content| match content {
                    docx_rs::TableCellContent::Paragraph(para) => Some(extract_paragraph_text(para)),
                    _ => None,
                })
                .filter(|text| !text.is_empty())
                .collect();
            cells.push(cell_text.join(" "));
        }

        if cells.iter().any(|cell| !cell.is_empty()) {
            rows.push(cells.join("\t"));
        }
    }

    rows
}

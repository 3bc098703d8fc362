//! Document parsing orchestration
//!
//! This module contains [`parse_document`], which runs the parsing stages in
//! their fixed order over a single forward cursor:
//!
//! 1. Title: leading lines until a recipient or section line
//! 2. Recipients: consecutive recipient lines
//! 3. Preface: lines before the first section or closing line
//! 4. Sections, each with its own content and "（一）" subsections
//! 5. Ending: closing formula, attachments, sender, date and contacts
//!
//! Parsing never fails. Text that does not follow the conventions simply
//! leaves buckets empty.

use tracing::debug;

use super::models::*;
use super::parsing::body::{parse_preface, parse_recipients, parse_section, parse_title};
use super::parsing::cursor::LineCursor;
use super::parsing::ending::parse_ending;

pub fn parse_document(text: &str) -> DocumentStructure {
    let mut cursor = LineCursor::new(text);

    let title = parse_title(&mut cursor);
    let recipients = parse_recipients(&mut cursor);
    let preface = parse_preface(&mut cursor);

    let mut sections = Vec::new();
    while let Some(section) = parse_section(&mut cursor) {
        sections.push(section);
    }

    let ending_start = cursor.position();
    let (ending, dropped_lines) = parse_ending(&mut cursor);
    debug_assert!(cursor.is_exhausted());

    debug!(
        sections = sections.len(),
        ending_start,
        dropped = dropped_lines.len(),
        "parsed document"
    );

    DocumentStructure {
        title,
        recipients,
        main_body: MainBody { preface, sections },
        ending,
        dropped_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_yields_empty_structure() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("  \n\t\n \r\n").is_empty());
    }

    #[test]
    fn test_sections_and_subsections() {
        let doc = parse_document("一、总则\n内容A\n（一）子项\n内容B\n二、附则\n内容C");
        assert_eq!(doc.title, "");
        let sections = &doc.main_body.sections;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "一、总则");
        assert_eq!(sections[0].content, vec!["内容A"]);
        assert_eq!(
            sections[0].subsections,
            vec![Subsection {
                title: "（一）子项".to_string(),
                content: vec!["内容B".to_string()],
            }]
        );
        assert_eq!(sections[1].title, "二、附则");
        assert_eq!(sections[1].content, vec!["内容C"]);
        assert!(sections[1].subsections.is_empty());
    }

    #[test]
    fn test_preface_without_sections_runs_until_ending() {
        let doc = parse_document("关于召开会议的通知\n各单位：\n定于下周召开会议。\n请准时参加。\n特此通知");
        assert_eq!(doc.title, "关于召开会议的通知");
        assert_eq!(doc.recipients, vec!["各单位："]);
        assert_eq!(doc.main_body.preface, vec!["定于下周召开会议。", "请准时参加。"]);
        assert!(doc.main_body.sections.is_empty());
        assert_eq!(doc.ending.content, vec!["特此通知"]);
    }

    #[test]
    fn test_lines_after_ending_starts_never_return_to_sections() {
        let doc = parse_document("一、总则\n特此通知\n二、附则");
        assert_eq!(doc.main_body.sections.len(), 1);
        assert_eq!(doc.dropped_lines, vec!["二、附则"]);
    }
}

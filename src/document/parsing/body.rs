//! Title, recipients, preface and numbered body sections
//!
//! Each stage consumes lines from the shared [`LineCursor`] and leaves it on
//! the first line the next stage is responsible for.

use tracing::debug;

use super::super::models::*;
use super::cursor::LineCursor;
use super::recognizers::{is_ending_start, is_recipient, is_section_title, is_subsection_title};

/// Leading lines up to the first recipient or section line, joined without separator
pub(crate) fn parse_title(cursor: &mut LineCursor) -> String {
    let mut title = String::new();
    while let Some(line) = cursor.next_if(|line| !is_recipient(line) && !is_section_title(line)) {
        title.push_str(line);
    }
    title
}

pub(crate) fn parse_recipients(cursor: &mut LineCursor) -> Vec<String> {
    let mut recipients = Vec::new();
    while let Some(line) = cursor.next_if(is_recipient) {
        recipients.push(line.to_string());
    }
    recipients
}

pub(crate) fn parse_preface(cursor: &mut LineCursor) -> Vec<String> {
    let mut preface = Vec::new();
    while let Some(line) = cursor.next_if(is_body_line) {
        preface.push(line.to_string());
    }
    preface
}

/// Parse one numbered section, or return `None` when the cursor is not on a section title
pub(crate) fn parse_section(cursor: &mut LineCursor) -> Option<Section> {
    let title = cursor.next_if(is_section_title)?;
    debug!(line = cursor.position(), title, "section");

    let mut section = Section {
        title: title.to_string(),
        ..Section::default()
    };

    while let Some(line) = cursor.peek() {
        if is_section_title(line) || is_ending_start(line) {
            break;
        }
        if let Some(subsection) = parse_subsection(cursor) {
            section.subsections.push(subsection);
            continue;
        }
        section.content.push(line.to_string());
        cursor.advance();
    }

    Some(section)
}

/// Parse one "（一）" subsection, or return `None` when the cursor is not on one
pub(crate) fn parse_subsection(cursor: &mut LineCursor) -> Option<Subsection> {
    let title = cursor.next_if(is_subsection_title)?;
    debug!(line = cursor.position(), title, "subsection");

    let mut subsection = Subsection {
        title: title.to_string(),
        content: Vec::new(),
    };
    while let Some(line) = cursor.next_if(|line| is_body_line(line) && !is_subsection_title(line)) {
        subsection.content.push(line.to_string());
    }

    Some(subsection)
}

/// A line that neither opens a section nor starts the closing block
fn is_body_line(line: &str) -> bool {
    !is_section_title(line) && !is_ending_start(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_spanning_lines_is_concatenated() {
        let mut cursor = LineCursor::new("关于加强\n安全生产工作的通知\n各区人民政府：");
        assert_eq!(parse_title(&mut cursor), "关于加强安全生产工作的通知");
        assert_eq!(cursor.peek(), Some("各区人民政府："));
    }

    #[test]
    fn test_recipients_are_consecutive() {
        let mut cursor = LineCursor::new("各区人民政府：\n市政府各部门：\n为进一步加强管理");
        assert_eq!(
            parse_recipients(&mut cursor),
            vec!["各区人民政府：", "市政府各部门："]
        );
        assert_eq!(cursor.peek(), Some("为进一步加强管理"));
    }

    #[test]
    fn test_section_content_before_first_subsection_stays_on_section() {
        let mut cursor = LineCursor::new("一、总则\n内容A\n（一）子项\n内容B\n（二）子项二\n二、附则");
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.title, "一、总则");
        assert_eq!(section.content, vec!["内容A"]);
        assert_eq!(section.subsections.len(), 2);
        assert_eq!(section.subsections[0].content, vec!["内容B"]);
        assert!(section.subsections[1].content.is_empty());
        assert_eq!(cursor.peek(), Some("二、附则"));
    }

    #[test]
    fn test_parse_section_returns_none_off_title() {
        let mut cursor = LineCursor::new("内容");
        assert!(parse_section(&mut cursor).is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_section_stops_at_closing_formula() {
        let mut cursor = LineCursor::new("一、总则\n内容A\n特此通知");
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.content, vec!["内容A"]);
        assert_eq!(cursor.peek(), Some("特此通知"));
    }
}

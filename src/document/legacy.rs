//! Raw-line export segmentation
//!
//! This is the older export heuristic. It works directly on the text and not
//! on a parsed [`DocumentStructure`](super::models::DocumentStructure), so it
//! can segment the same draft differently from the parser:
//!
//! - the title is everything before the first line containing a colon
//! - the recipient is that colon line
//! - the trailing block (date, sender, contact lines, attachments) is found by
//!   scanning backwards from the last line
//!
//! It is kept as an opt-in export mode for drafts that export better this way.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::cleanup::clean_lines;
use super::models::*;
use super::parsing::recognizers::{
    is_closing_formula, is_date, is_section_title, is_subsection_title, strip_attachment_label,
};
use crate::render::{attachment_paragraphs, paragraph, signature_paragraphs};

static CONTACT_INFO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"联系人|电话|联系方式|[0-9]{5,}").unwrap());

static ITEM_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.、．]\s*").unwrap());

/// Segments found by the raw-line heuristic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacySegments {
    pub title: String,
    pub recipient: Option<String>,
    pub body: Vec<String>,
    pub attachments: Vec<String>,
    pub sender: Option<String>,
    pub date: Option<String>,
    pub contacts: Vec<String>,
}

pub fn segment_raw_text(text: &str) -> LegacySegments {
    let lines = clean_lines(text);
    let mut segments = LegacySegments::default();
    if lines.is_empty() {
        return segments;
    }

    let body_start = match lines.iter().position(|line| has_colon(line)) {
        Some(colon) => {
            segments.title = lines[..colon].concat();
            segments.recipient = Some(lines[colon].clone());
            colon + 1
        }
        None => {
            segments.title = lines[0].clone();
            1
        }
    };

    let boundary = scan_trailing_block(&lines, body_start, &mut segments);
    segments.body = lines[body_start..boundary].to_vec();

    debug!(
        body = segments.body.len(),
        attachments = segments.attachments.len(),
        has_date = segments.date.is_some(),
        "segmented raw text"
    );
    segments
}

/// Walk backwards from the end collecting trailing lines.
/// Returns the index of the first trailing line.
fn scan_trailing_block(lines: &[String], body_start: usize, segments: &mut LegacySegments) -> usize {
    let mut boundary = lines.len();
    let mut index = lines.len();

    while index > body_start {
        index -= 1;
        let line = &lines[index];

        if segments.date.is_none() && is_date(line) {
            segments.date = Some(line.clone());
            boundary = index;
            // The issuing unit sits directly above the date
            if index > body_start && is_sender_candidate(&lines[index - 1]) {
                index -= 1;
                segments.sender = Some(lines[index].clone());
                boundary = index;
            }
            continue;
        }

        if CONTACT_INFO.is_match(line) {
            segments.contacts.insert(0, line.clone());
            boundary = index;
            continue;
        }

        if let Some(first) = strip_attachment_label(line) {
            segments.attachments = std::iter::once(first)
                .chain(lines[index + 1..boundary].iter().map(String::as_str))
                .map(|item| ITEM_NUMBER.replace(item.trim(), "").into_owned())
                .filter(|item| !item.is_empty())
                .collect();
            boundary = index;
            break;
        }

        // Item lines below an attachment label: keep walking until the label
        let label_above = lines[body_start..index]
            .iter()
            .any(|line| strip_attachment_label(line).is_some());
        if !label_above {
            break;
        }
    }

    boundary
}

fn has_colon(line: &str) -> bool {
    line.contains('：') || line.contains(':')
}

fn is_sender_candidate(line: &str) -> bool {
    !is_date(line) && !CONTACT_INFO.is_match(line) && strip_attachment_label(line).is_none()
}

/// Title as found by the raw-line heuristic, used for export file names
pub fn extract_title(text: &str) -> Option<String> {
    let title = segment_raw_text(text).title;
    (!title.is_empty()).then_some(title)
}

/// Styled paragraphs for export, built from the raw-line segmentation
pub fn generate_docx_content(text: &str) -> Vec<StyledParagraph> {
    let segments = segment_raw_text(text);
    let mut paragraphs = Vec::new();

    if !segments.title.is_empty() {
        paragraphs.push(paragraph(ParagraphRole::Title, &segments.title));
    }
    if let Some(recipient) = &segments.recipient {
        paragraphs.push(paragraph(ParagraphRole::Recipient, recipient));
    }

    let mut content_role = ParagraphRole::Preface;
    for line in &segments.body {
        let role = if is_section_title(line) {
            content_role = ParagraphRole::SectionContent;
            ParagraphRole::SectionTitle
        } else if is_subsection_title(line) {
            content_role = ParagraphRole::SubsectionContent;
            ParagraphRole::SubsectionTitle
        } else if is_closing_formula(line) {
            ParagraphRole::EndingContent
        } else {
            content_role
        };
        paragraphs.push(paragraph(role, line));
    }

    paragraphs.extend(attachment_paragraphs(&segments.attachments));
    paragraphs.extend(signature_paragraphs(
        segments.sender.as_deref().unwrap_or_default(),
        segments.date.as_deref().unwrap_or_default(),
    ));
    paragraphs.extend(
        segments
            .contacts
            .iter()
            .map(|line| paragraph(ParagraphRole::Contact, line)),
    );

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE: &str = "# 关于开展安全检查的\n通知\n各区人民政府：\n为加强安全管理，现通知如下。\n一、检查范围\n全市各类企业。\n特此通知。\n附件：1. 检查表\n2. 联络名单\n某某市应急管理局\n2025年3月15日\n联系人：张三 13800000000";

    #[test]
    fn test_title_is_everything_before_colon_line() {
        let segments = segment_raw_text(NOTICE);
        assert_eq!(segments.title, "关于开展安全检查的通知");
        assert_eq!(segments.recipient.as_deref(), Some("各区人民政府："));
        assert_eq!(extract_title(NOTICE).as_deref(), Some("关于开展安全检查的通知"));
    }

    #[test]
    fn test_trailing_block() {
        let segments = segment_raw_text(NOTICE);
        assert_eq!(segments.contacts, vec!["联系人：张三 13800000000"]);
        assert_eq!(segments.date.as_deref(), Some("2025年3月15日"));
        assert_eq!(segments.sender.as_deref(), Some("某某市应急管理局"));
        assert_eq!(segments.attachments, vec!["检查表", "联络名单"]);
        assert_eq!(
            segments.body,
            vec!["为加强安全管理，现通知如下。", "一、检查范围", "全市各类企业。", "特此通知。"]
        );
    }

    #[test]
    fn test_without_colon_first_line_is_title() {
        let segments = segment_raw_text("标题\n正文");
        assert_eq!(segments.title, "标题");
        assert_eq!(segments.recipient, None);
        assert_eq!(segments.body, vec!["正文"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(segment_raw_text(" \n "), LegacySegments::default());
        assert_eq!(extract_title(""), None);
        assert!(generate_docx_content("").is_empty());
    }

    #[test]
    fn test_docx_content_roles() {
        let roles: Vec<ParagraphRole> = generate_docx_content(NOTICE).iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                ParagraphRole::Title,
                ParagraphRole::Recipient,
                ParagraphRole::Preface,
                ParagraphRole::SectionTitle,
                ParagraphRole::SectionContent,
                ParagraphRole::EndingContent,
                ParagraphRole::AttachmentLabel,
                ParagraphRole::AttachmentItem,
                ParagraphRole::AttachmentItem,
                ParagraphRole::Sender,
                ParagraphRole::Date,
                ParagraphRole::Contact,
            ]
        );
    }
}

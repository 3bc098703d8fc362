//! Rendering of parsed documents
//!
//! [`render_document`] flattens a [`DocumentStructure`] into styled paragraph
//! descriptors in reading order. Backends in the submodules turn those
//! descriptors into terminal text or HTML; the docx encoder lives in
//! [`crate::export`].

pub mod ansi;
pub mod html;
pub mod style;

pub use style::style_for;

use crate::document::*;

pub fn render_document(document: &DocumentStructure) -> Vec<StyledParagraph> {
    let mut paragraphs = Vec::new();

    if !document.title.is_empty() {
        paragraphs.push(paragraph(ParagraphRole::Title, &document.title));
    }
    push_all(&mut paragraphs, ParagraphRole::Recipient, &document.recipients);
    push_all(&mut paragraphs, ParagraphRole::Preface, &document.main_body.preface);

    for section in &document.main_body.sections {
        paragraphs.push(paragraph(ParagraphRole::SectionTitle, &section.title));
        push_all(&mut paragraphs, ParagraphRole::SectionContent, &section.content);
        for subsection in &section.subsections {
            paragraphs.push(paragraph(ParagraphRole::SubsectionTitle, &subsection.title));
            push_all(
                &mut paragraphs,
                ParagraphRole::SubsectionContent,
                &subsection.content,
            );
        }
    }

    let ending = &document.ending;
    push_all(&mut paragraphs, ParagraphRole::EndingContent, &ending.content);
    paragraphs.extend(attachment_paragraphs(&ending.attachments));
    paragraphs.extend(signature_paragraphs(&ending.sender, &ending.date));
    for (role, field) in [
        (ParagraphRole::Contact, &ending.contact),
        (ParagraphRole::Phone, &ending.phone),
        (ParagraphRole::Email, &ending.email),
    ] {
        if let Some(text) = field {
            paragraphs.push(paragraph(role, text));
        }
    }

    paragraphs
}

pub(crate) fn paragraph(role: ParagraphRole, text: &str) -> StyledParagraph {
    StyledParagraph {
        role,
        text: text.to_string(),
        style: style_for(role),
    }
}

fn push_all(paragraphs: &mut Vec<StyledParagraph>, role: ParagraphRole, lines: &[String]) {
    paragraphs.extend(lines.iter().map(|line| paragraph(role, line)));
}

/// "附件：" label followed by numbered items; nothing for an empty list
pub(crate) fn attachment_paragraphs(attachments: &[String]) -> Vec<StyledParagraph> {
    if attachments.is_empty() {
        return Vec::new();
    }

    let mut paragraphs = vec![paragraph(ParagraphRole::AttachmentLabel, "附件：")];
    paragraphs.extend(
        attachments
            .iter()
            .enumerate()
            .map(|(i, item)| paragraph(ParagraphRole::AttachmentItem, &format!("{}. {item}", i + 1))),
    );
    paragraphs
}

/// Right-aligned sender and date; an empty field produces no paragraph
pub(crate) fn signature_paragraphs(sender: &str, date: &str) -> Vec<StyledParagraph> {
    [(ParagraphRole::Sender, sender), (ParagraphRole::Date, date)]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(role, text)| paragraph(role, text))
        .collect()
}

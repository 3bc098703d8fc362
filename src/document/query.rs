//! Read-only operations on parsed documents
//!
//! Outline generation for navigation and a line reconstruction that maps a
//! structure back to text in bucket order.

use super::models::*;

pub fn generate_outline(document: &DocumentStructure) -> Vec<OutlineItem> {
    let mut outline = Vec::new();

    for section in &document.main_body.sections {
        outline.push(OutlineItem {
            title: section.title.clone(),
            level: 1,
        });
        for subsection in &section.subsections {
            outline.push(OutlineItem {
                title: subsection.title.clone(),
                level: 2,
            });
        }
    }

    outline
}

/// Rebuild the document's lines in the order the parser fills its buckets.
///
/// A section's own content is emitted before its subsections. For text that
/// follows the conventions, parsing the joined lines gives back an equal
/// structure.
pub fn reconstruct_lines(document: &DocumentStructure) -> Vec<String> {
    let mut lines = Vec::new();

    if !document.title.is_empty() {
        lines.push(document.title.clone());
    }
    lines.extend(document.recipients.iter().cloned());
    lines.extend(document.main_body.preface.iter().cloned());

    for section in &document.main_body.sections {
        lines.push(section.title.clone());
        lines.extend(section.content.iter().cloned());
        for subsection in &section.subsections {
            lines.push(subsection.title.clone());
            lines.extend(subsection.content.iter().cloned());
        }
    }

    let ending = &document.ending;
    lines.extend(ending.content.iter().cloned());
    lines.extend(
        ending
            .attachments
            .iter()
            .map(|attachment| format!("附件：{attachment}")),
    );
    for field in [&ending.sender, &ending.date] {
        if !field.is_empty() {
            lines.push(field.clone());
        }
    }
    for field in [&ending.contact, &ending.phone, &ending.email]
        .into_iter()
        .flatten()
    {
        lines.push(field.clone());
    }

    lines
}

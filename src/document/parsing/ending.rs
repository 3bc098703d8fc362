//! Closing block classification
//!
//! The scan is a single pass with one piece of state: whether a closing
//! formula ("特此", "此致") has been seen. Attachment lines only count as
//! attachments after that point.

use tracing::debug;

use super::super::models::EndingBlock;
use super::cursor::LineCursor;
use super::recognizers::*;

/// Consume every remaining line into the ending block.
///
/// Returns the block together with the lines that matched no bucket after the
/// closing formula was found. Those lines are not part of the ending.
pub(crate) fn parse_ending(cursor: &mut LineCursor) -> (EndingBlock, Vec<String>) {
    let mut ending = EndingBlock::default();
    let mut dropped = Vec::new();
    let mut has_found_special_ending = false;

    while let Some(line) = cursor.advance() {
        if is_closing_formula(line) {
            has_found_special_ending = true;
            ending.content.push(line.to_string());
        } else if let Some(attachment) = strip_attachment_label(line).filter(|_| has_found_special_ending) {
            let attachment = attachment.trim();
            if !attachment.is_empty() {
                ending.attachments.push(attachment.to_string());
            }
        } else if is_sender(line) {
            ending.sender = line.to_string();
        } else if is_date(line) {
            ending.date = line.to_string();
        } else if is_contact(line) {
            ending.contact = Some(line.to_string());
        } else if is_phone(line) {
            ending.phone = Some(line.to_string());
        } else if is_email(line) {
            ending.email = Some(line.to_string());
        } else if !has_found_special_ending {
            ending.content.push(line.to_string());
        } else {
            debug!(line, "unclassified line after closing formula dropped");
            dropped.push(line.to_string());
        }
    }

    (ending, dropped)
}

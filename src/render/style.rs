//! Typographic conventions per paragraph role
//!
//! Sizes are in half-points and spacing in twips so the docx encoder can use
//! them directly; the previews convert as needed.

use crate::document::{FontFamily, FontWeight, ParagraphRole, ParagraphStyle, TextAlignment};

pub const TITLE_SIZE: usize = 32; // 16pt
pub const SECTION_TITLE_SIZE: usize = 30; // 15pt
pub const BODY_SIZE: usize = 28; // 14pt

pub const TITLE_LINE_SPACING: u32 = 720; // 36pt exact
pub const BODY_LINE_SPACING: u32 = 560; // 28pt exact

pub const PARAGRAPH_INDENT_CHARS: u8 = 2;

/// One CJK character of indentation in terminal output
pub const FULL_WIDTH_SPACE: &str = "\u{3000}";

const BODY: ParagraphStyle = ParagraphStyle {
    font: FontFamily::FangSong,
    size_half_points: BODY_SIZE,
    weight: FontWeight::Normal,
    alignment: TextAlignment::Left,
    first_line_indent_chars: 0,
    left_indent_chars: 0,
    line_spacing_twips: BODY_LINE_SPACING,
};

pub fn style_for(role: ParagraphRole) -> ParagraphStyle {
    match role {
        ParagraphRole::Title => ParagraphStyle {
            font: FontFamily::SimSun,
            size_half_points: TITLE_SIZE,
            weight: FontWeight::Bold,
            alignment: TextAlignment::Center,
            line_spacing_twips: TITLE_LINE_SPACING,
            ..BODY
        },
        ParagraphRole::Recipient | ParagraphRole::AttachmentLabel => BODY,
        ParagraphRole::Preface
        | ParagraphRole::SectionContent
        | ParagraphRole::SubsectionContent
        | ParagraphRole::EndingContent => ParagraphStyle {
            first_line_indent_chars: PARAGRAPH_INDENT_CHARS,
            ..BODY
        },
        ParagraphRole::SectionTitle => ParagraphStyle {
            font: FontFamily::SimHei,
            size_half_points: SECTION_TITLE_SIZE,
            weight: FontWeight::Bold,
            first_line_indent_chars: PARAGRAPH_INDENT_CHARS,
            ..BODY
        },
        ParagraphRole::SubsectionTitle => ParagraphStyle {
            font: FontFamily::KaiTi,
            weight: FontWeight::Medium,
            first_line_indent_chars: PARAGRAPH_INDENT_CHARS,
            ..BODY
        },
        ParagraphRole::AttachmentItem => ParagraphStyle {
            left_indent_chars: PARAGRAPH_INDENT_CHARS,
            ..BODY
        },
        ParagraphRole::Sender
        | ParagraphRole::Date
        | ParagraphRole::Contact
        | ParagraphRole::Phone
        | ParagraphRole::Email => ParagraphStyle {
            alignment: TextAlignment::Right,
            ..BODY
        },
    }
}

/// Preview color of a role, as a hex string
pub fn role_color(role: ParagraphRole) -> Option<&'static str> {
    match role {
        ParagraphRole::Title => Some("#C00000"), // Official red
        ParagraphRole::SectionTitle => Some("#FFD700"),
        ParagraphRole::SubsectionTitle => Some("#00AAFF"),
        ParagraphRole::AttachmentLabel | ParagraphRole::AttachmentItem => Some("#90EE90"),
        ParagraphRole::Contact | ParagraphRole::Phone | ParagraphRole::Email => Some("#A0A0A0"),
        _ => None,
    }
}

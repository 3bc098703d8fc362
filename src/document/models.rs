//! Core data structures for document representation
//!
//! This module defines the parsed document tree produced from generated text
//! and the styled paragraph descriptors every renderer consumes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub title: String,
    pub recipients: Vec<String>,
    pub main_body: MainBody,
    pub ending: EndingBlock,
    /// Lines the ending scan matched to no bucket after the closing formula.
    /// They are never rendered; kept so callers can report them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainBody {
    pub preface: Vec<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Paragraphs that belong to the section itself. Stored apart from
    /// `subsections`, so their interleaving with subsections is not kept.
    pub content: Vec<String>,
    pub subsections: Vec<Subsection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    pub title: String,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndingBlock {
    pub content: Vec<String>,
    pub sender: String,
    pub date: String,
    pub attachments: Vec<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Vec<String>,
}

impl DocumentStructure {
    /// True when parsing found nothing at all
    pub fn is_empty(&self) -> bool {
        *self == DocumentStructure::default()
    }
}

/// Semantic role of a rendered paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParagraphRole {
    Title,
    Recipient,
    Preface,
    SectionTitle,
    SectionContent,
    SubsectionTitle,
    SubsectionContent,
    EndingContent,
    AttachmentLabel,
    AttachmentItem,
    Sender,
    Date,
    Contact,
    Phone,
    Email,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

/// Typeface classes used by official documents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Serif title face (宋体)
    SimSun,
    /// Serif body face (仿宋)
    #[default]
    FangSong,
    /// Sans face for first-level headers (黑体)
    SimHei,
    /// Brush face for second-level headers (楷体)
    KaiTi,
}

impl FontFamily {
    /// East-Asian font name written into exported documents
    pub fn east_asia_name(self) -> &'static str {
        match self {
            FontFamily::SimSun => "宋体",
            FontFamily::FangSong => "仿宋",
            FontFamily::SimHei => "黑体",
            FontFamily::KaiTi => "楷体",
        }
    }

    /// CSS font stack for markup previews
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::SimSun => "'SimSun', '宋体', serif",
            FontFamily::FangSong => "'FangSong', '仿宋', serif",
            FontFamily::SimHei => "'SimHei', '黑体', sans-serif",
            FontFamily::KaiTi => "'KaiTi', '楷体', serif",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    pub font: FontFamily,
    /// Font size in half-points, the unit Word uses for run sizes
    pub size_half_points: usize,
    pub weight: FontWeight,
    pub alignment: TextAlignment,
    pub first_line_indent_chars: u8,
    pub left_indent_chars: u8,
    /// Exact line spacing in twentieths of a point
    pub line_spacing_twips: u32,
}

impl ParagraphStyle {
    pub fn size_points(&self) -> f32 {
        self.size_half_points as f32 / 2.0
    }

    /// One character width in twips, used to turn character indents into lengths
    pub fn char_width_twips(&self) -> i32 {
        (self.size_half_points * 10) as i32
    }
}

/// A paragraph ready for any renderer: text, role and style hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledParagraph {
    pub role: ParagraphRole,
    pub text: String,
    pub style: ParagraphStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub title: String,
    pub level: u8,
}

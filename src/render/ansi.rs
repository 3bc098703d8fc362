//! Terminal preview with ANSI styling
//!
//! Fonts cannot be shown in a terminal, so each face maps to an attribute and
//! a color: bold for 黑体 and the title, italic for 楷体. Indents use
//! full-width spaces so they line up with CJK text.

use anyhow::Result;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

use super::style::{FULL_WIDTH_SPACE, role_color};
use crate::ColorDepth;
use crate::document::*;

pub struct AnsiOptions {
    pub terminal_width: usize,
    pub color_depth: ColorDepth,
}

impl Default for AnsiOptions {
    fn default() -> Self {
        Self {
            terminal_width: std::env::var("COLUMNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(80),
            color_depth: ColorDepth::Auto,
        }
    }
}

pub fn render_to_ansi(paragraphs: &[StyledParagraph], options: &AnsiOptions) -> Result<String> {
    let mut output = String::new();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        // Blank line between the heading block and the body, and before the signature
        let starts_block = matches!(
            paragraph.role,
            ParagraphRole::Recipient | ParagraphRole::AttachmentLabel | ParagraphRole::Sender
        ) && index > 0
            && paragraphs[index - 1].role != paragraph.role;
        if starts_block {
            output.push('\n');
        }

        let line = indent(paragraph);
        let padding = alignment_padding(&line, paragraph.style.alignment, options.terminal_width);
        let styled = format_ansi_text(
            &line,
            paragraph.style.weight == FontWeight::Bold,
            paragraph.style.weight == FontWeight::Medium,
            role_color(paragraph.role),
            options,
        );
        writeln!(output, "{padding}{styled}")?;

        if paragraph.role == ParagraphRole::Title {
            output.push('\n');
        }
    }

    Ok(output)
}

fn indent(paragraph: &StyledParagraph) -> String {
    let style = &paragraph.style;
    let chars = (style.first_line_indent_chars + style.left_indent_chars) as usize;
    format!("{}{}", FULL_WIDTH_SPACE.repeat(chars), paragraph.text)
}

fn alignment_padding(line: &str, alignment: TextAlignment, width: usize) -> String {
    let free = width.saturating_sub(line.width());
    let pad = match alignment {
        TextAlignment::Center => free / 2,
        TextAlignment::Right => free,
        TextAlignment::Left => 0,
    };
    " ".repeat(pad)
}

fn format_ansi_text(
    text: &str,
    bold: bool,
    italic: bool,
    color: Option<&str>,
    options: &AnsiOptions,
) -> String {
    let mut result = String::new();

    if bold {
        result.push_str(&format!("{}", SetAttribute(Attribute::Bold)));
    }
    if italic {
        result.push_str(&format!("{}", SetAttribute(Attribute::Italic)));
    }
    if let Some(color) = color.and_then(|hex| hex_to_color(hex, &options.color_depth)) {
        result.push_str(&format!("{}", SetForegroundColor(color)));
    }

    result.push_str(text);
    result.push_str(&format!("{}{}", SetAttribute(Attribute::Reset), ResetColor));
    result
}

fn hex_to_color(hex: &str, color_depth: &ColorDepth) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);

    match color_depth {
        ColorDepth::Monochrome => None,
        ColorDepth::Standard => Some(Color::AnsiValue(ansi_16(r, g, b))),
        ColorDepth::Extended => Some(Color::AnsiValue(ansi_256(r, g, b))),
        ColorDepth::TrueColor | ColorDepth::Auto => Some(Color::Rgb { r, g, b }),
    }
}

fn ansi_16(r: u8, g: u8, b: u8) -> u8 {
    let base = (r > 64) as u8 | ((g > 64) as u8) << 1 | ((b > 64) as u8) << 2;
    if r.max(g).max(b) > 127 { base + 8 } else { base }
}

fn ansi_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            248..=255 => 231,
            _ => 232 + (r - 8) / 10,
        };
    }
    let level = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

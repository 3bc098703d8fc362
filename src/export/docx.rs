//! Word-processor encoding of styled paragraphs
//!
//! Page geometry follows the national layout standard for official
//! documents: A4 with 37/35/28/26 mm margins.

use anyhow::Result;
use docx_rs::{
    AlignmentType, Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run, RunFonts,
    SpecialIndentType,
};
use std::io::Cursor;

use crate::document::*;

const A4_WIDTH: u32 = 11906;
const A4_HEIGHT: u32 = 16838;

// Margins in twips
const MARGIN_TOP: i32 = 2098;
const MARGIN_BOTTOM: i32 = 1984;
const MARGIN_LEFT: i32 = 1587;
const MARGIN_RIGHT: i32 = 1474;

const LATIN_FONT: &str = "Times New Roman";

/// Encode paragraphs into the bytes of a .docx file
pub fn encode_docx(paragraphs: &[StyledParagraph]) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .page_size(A4_WIDTH, A4_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TOP)
                .bottom(MARGIN_BOTTOM)
                .left(MARGIN_LEFT)
                .right(MARGIN_RIGHT),
        );

    for paragraph in paragraphs {
        docx = docx.add_paragraph(build_paragraph(paragraph));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer)?;
    Ok(buffer.into_inner())
}

fn build_paragraph(paragraph: &StyledParagraph) -> Paragraph {
    let style = &paragraph.style;

    let fonts = RunFonts::new()
        .east_asia(style.font.east_asia_name())
        .ascii(LATIN_FONT)
        .hi_ansi(LATIN_FONT);
    let mut run = Run::new()
        .add_text(&paragraph.text)
        .size(style.size_half_points)
        .fonts(fonts);
    if is_bold_run(style.weight) {
        run = run.bold();
    }

    let mut para = Paragraph::new()
        .add_run(run)
        .align(alignment_type(style.alignment))
        .line_spacing(
            LineSpacing::new()
                .line(style.line_spacing_twips as _)
                .line_rule(LineSpacingType::Exact),
        );

    let char_width = style.char_width_twips();
    let left = (style.left_indent_chars > 0).then(|| char_width * style.left_indent_chars as i32);
    let first_line = (style.first_line_indent_chars > 0)
        .then(|| SpecialIndentType::FirstLine(char_width * style.first_line_indent_chars as i32));
    if left.is_some() || first_line.is_some() {
        para = para.indent(left, first_line, None, None);
    }

    para
}

/// WordprocessingML runs are either bold or not. Medium (subsection titles)
/// stays regular here; the 楷体 face already sets those titles apart.
fn is_bold_run(weight: FontWeight) -> bool {
    match weight {
        FontWeight::Bold => true,
        FontWeight::Medium | FontWeight::Normal => false,
    }
}

fn alignment_type(alignment: TextAlignment) -> AlignmentType {
    match alignment {
        TextAlignment::Left => AlignmentType::Left,
        TextAlignment::Center => AlignmentType::Center,
        TextAlignment::Right => AlignmentType::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::paragraph;
    use crate::render::style::style_for;
    use std::io::Read;

    fn document_xml(bytes: Vec<u8>) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[test]
    fn test_encoded_document_carries_styles() {
        let bytes = encode_docx(&[
            paragraph(ParagraphRole::Title, "关于加强安全生产工作的通知"),
            paragraph(ParagraphRole::Preface, "为进一步加强安全生产工作。"),
            paragraph(ParagraphRole::Date, "2025年3月15日"),
        ])
        .unwrap();
        let xml = document_xml(bytes);

        assert!(xml.contains("关于加强安全生产工作的通知"));
        assert!(xml.contains("宋体"));
        assert!(xml.contains("仿宋"));
        assert!(xml.contains("w:val=\"center\""));
        assert!(xml.contains("w:val=\"right\""));
        assert!(xml.contains("w:val=\"32\""));
        assert!(xml.contains("w:firstLine=\"560\""));
    }

    #[test]
    fn test_only_bold_weight_sets_bold_runs() {
        assert!(is_bold_run(style_for(ParagraphRole::Title).weight));
        assert!(is_bold_run(style_for(ParagraphRole::SectionTitle).weight));
        assert!(!is_bold_run(style_for(ParagraphRole::SubsectionTitle).weight));
        assert!(!is_bold_run(style_for(ParagraphRole::Preface).weight));
    }

    #[test]
    fn test_empty_document_still_encodes() {
        let bytes = encode_docx(&[]).unwrap();
        assert!(document_xml(bytes).contains("w:body"));
    }
}

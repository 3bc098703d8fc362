//! Markup preview with inline typographic styles

use build_html::{Html, HtmlContainer, HtmlElement, HtmlPage, HtmlTag, escape_html};

use crate::document::*;

const PAGE_CSS: &str = "body { background: #f5f5f5; } \
    .gongwen { width: 156mm; margin: 24px auto; padding: 37mm 26mm 35mm 28mm; background: #fff; color: #000; } \
    .gongwen p { margin: 0; }";

#[derive(Debug)]
pub struct HtmlRenderer {
    root_element: HtmlElement,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            root_element: HtmlElement::new(HtmlTag::Div).with_attribute("class", "gongwen"),
        }
    }
}

impl HtmlRenderer {
    pub fn render_paragraph(&mut self, paragraph: &StyledParagraph) {
        let text = escape_html(&paragraph.text);
        let el = HtmlElement::new(HtmlTag::ParagraphText)
            .with_attribute("style", inline_style(&paragraph.style))
            .with_attribute("data-role", role_name(paragraph.role))
            .with_child(text.as_str().into());
        self.root_element.add_child(el.into());
    }

    pub fn finalize(self, page_title: &str) -> String {
        HtmlPage::new()
            .with_title(escape_html(page_title))
            .with_style(PAGE_CSS)
            .with_html(self.root_element)
            .to_html_string()
    }
}

/// Render paragraphs to a standalone HTML page
pub fn render_to_html(paragraphs: &[StyledParagraph], page_title: &str) -> String {
    let mut renderer = HtmlRenderer::default();
    for paragraph in paragraphs {
        renderer.render_paragraph(paragraph);
    }
    renderer.finalize(page_title)
}

fn inline_style(style: &ParagraphStyle) -> String {
    let weight = match style.weight {
        FontWeight::Normal => 400,
        FontWeight::Medium => 500,
        FontWeight::Bold => 700,
    };
    let align = match style.alignment {
        TextAlignment::Left => "left",
        TextAlignment::Center => "center",
        TextAlignment::Right => "right",
    };
    format!(
        "font-family: {}; font-size: {}pt; font-weight: {weight}; text-align: {align}; \
         text-indent: {}em; padding-left: {}em; line-height: {}pt;",
        style.font.css_stack(),
        style.size_points(),
        style.first_line_indent_chars,
        style.left_indent_chars,
        style.line_spacing_twips / 20,
    )
}

fn role_name(role: ParagraphRole) -> &'static str {
    match role {
        ParagraphRole::Title => "title",
        ParagraphRole::Recipient => "recipient",
        ParagraphRole::Preface => "preface",
        ParagraphRole::SectionTitle => "section-title",
        ParagraphRole::SectionContent => "section-content",
        ParagraphRole::SubsectionTitle => "subsection-title",
        ParagraphRole::SubsectionContent => "subsection-content",
        ParagraphRole::EndingContent => "ending",
        ParagraphRole::AttachmentLabel => "attachment-label",
        ParagraphRole::AttachmentItem => "attachment",
        ParagraphRole::Sender => "sender",
        ParagraphRole::Date => "date",
        ParagraphRole::Contact => "contact",
        ParagraphRole::Phone => "phone",
        ParagraphRole::Email => "email",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::paragraph;

    #[test]
    fn test_inline_style_for_section_title() {
        let css = inline_style(&paragraph(ParagraphRole::SectionTitle, "一、总则").style);
        assert!(css.contains("SimHei"));
        assert!(css.contains("font-size: 15pt"));
        assert!(css.contains("font-weight: 700"));
        assert!(css.contains("text-indent: 2em"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_to_html(&[paragraph(ParagraphRole::Preface, "<b>正文</b>")], "预览");
        assert!(html.contains("&lt;b&gt;正文&lt;/b&gt;"));
        assert!(html.contains("data-role=\"preface\""));
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::LayoutCache;
use crate::config::hex_to_color;
use crate::document::*;
use crate::render::style::{FULL_WIDTH_SPACE, role_color};

/// Renders styled paragraphs with CJK-aware wrapping, indentation and alignment.
///
/// Scrolling is by paragraph: `scroll_offset` paragraphs are skipped from the top.
pub struct PreviewWidget<'a> {
    paragraphs: &'a [StyledParagraph],
    scroll_offset: usize,
    color_enabled: bool,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(paragraphs: &'a [StyledParagraph]) -> Self {
        Self {
            paragraphs,
            scroll_offset: 0,
            color_enabled: false,
        }
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn color_enabled(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    fn text_style(paragraph: &StyledParagraph, color_enabled: bool) -> Style {
        let mut style = Style::default();
        match paragraph.style.weight {
            FontWeight::Bold => style = style.add_modifier(Modifier::BOLD),
            FontWeight::Medium => style = style.add_modifier(Modifier::ITALIC),
            FontWeight::Normal => {}
        }
        if color_enabled {
            if let Some(color) = role_color(paragraph.role).and_then(hex_to_color) {
                style = style.fg(color);
            }
        }
        style
    }

    /// Wrap one paragraph into lines that fit within `max_width` columns.
    ///
    /// The first line carries the first-line indent, continuation lines the
    /// left indent; centered and right-aligned lines get leading padding.
    pub(crate) fn wrap_paragraph(
        paragraph: &StyledParagraph,
        max_width: usize,
        color_enabled: bool,
    ) -> Vec<Line<'static>> {
        if max_width == 0 {
            return vec![];
        }

        let layout = &paragraph.style;
        let first_indent = (layout.first_line_indent_chars + layout.left_indent_chars) as usize;
        let mut hanging = FULL_WIDTH_SPACE.repeat(layout.left_indent_chars as usize);
        if hanging.width() >= max_width {
            hanging.clear();
        }

        let text = format!("{}{}", FULL_WIDTH_SPACE.repeat(first_indent), paragraph.text);
        let mut rows = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for grapheme in text.graphemes(true) {
            let g_width = grapheme.width();
            if current_width + g_width > max_width && current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current.push_str(&hanging);
                current_width = hanging.width();
            }
            current.push_str(grapheme);
            current_width += g_width;
        }
        if !current.is_empty() || rows.is_empty() {
            rows.push(current);
        }

        let style = Self::text_style(paragraph, color_enabled);
        rows.into_iter()
            .map(|row| {
                let free = max_width.saturating_sub(row.width());
                let pad = match layout.alignment {
                    TextAlignment::Center => free / 2,
                    TextAlignment::Right => free,
                    TextAlignment::Left => 0,
                };
                Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(row, style)])
            })
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, layout_cache: &mut LayoutCache) {
        layout_cache.prepare(area.width, self.color_enabled);

        let bottom = area.y + area.height;
        let mut current_y = area.y;

        for (index, paragraph) in self.paragraphs.iter().enumerate().skip(self.scroll_offset) {
            if current_y >= bottom {
                break;
            }

            let lines = match layout_cache.get(index) {
                Some(cached) => cached.clone(),
                None => {
                    let lines = Self::wrap_paragraph(paragraph, area.width as usize, self.color_enabled);
                    layout_cache.insert(index, lines.clone());
                    lines
                }
            };

            for line in &lines {
                if current_y >= bottom {
                    break;
                }
                buf.set_line(area.x, current_y, line, area.width);
                current_y += 1;
            }

            // Blank line under the title
            if paragraph.role == ParagraphRole::Title {
                current_y += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::paragraph;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_body_paragraph_wraps_with_indent() {
        let body = paragraph(ParagraphRole::Preface, "一二三四五六七八");
        let lines = PreviewWidget::wrap_paragraph(&body, 10, false);
        assert_eq!(
            texts(&lines),
            vec!["\u{3000}\u{3000}一二三", "四五六七八"]
        );
        assert!(lines.iter().all(|line| line.width() <= 10));
    }

    #[test]
    fn test_title_is_centered() {
        let title = paragraph(ParagraphRole::Title, "通知");
        let lines = PreviewWidget::wrap_paragraph(&title, 10, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "   ");
        assert_eq!(lines[0].width(), 7);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_date_is_right_aligned() {
        let date = paragraph(ParagraphRole::Date, "2025年3月15日");
        let lines = PreviewWidget::wrap_paragraph(&date, 20, false);
        assert_eq!(lines[0].width(), 20);
    }

    #[test]
    fn test_zero_width_yields_nothing() {
        let body = paragraph(ParagraphRole::Preface, "正文");
        assert!(PreviewWidget::wrap_paragraph(&body, 0, false).is_empty());
    }

    #[test]
    fn test_render_fills_cache_and_buffer() {
        let paragraphs = vec![
            paragraph(ParagraphRole::Title, "通知"),
            paragraph(ParagraphRole::Recipient, "各单位："),
        ];
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        let mut cache = LayoutCache::new();

        PreviewWidget::new(&paragraphs).render(area, &mut buf, &mut cache);

        assert_eq!(cache.len(), 2);
        assert_eq!(buf[(4, 0)].symbol(), "通");
        assert_eq!(buf[(0, 2)].symbol(), "各");
    }

    #[test]
    fn test_color_toggle_rewraps_with_new_styles() {
        let paragraphs = vec![paragraph(ParagraphRole::Title, "通知")];
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        let mut cache = LayoutCache::new();

        PreviewWidget::new(&paragraphs)
            .color_enabled(true)
            .render(area, &mut buf, &mut cache);
        let colored = buf[(4, 0)].fg;

        let mut plain = Buffer::empty(area);
        PreviewWidget::new(&paragraphs)
            .color_enabled(false)
            .render(area, &mut plain, &mut cache);
        assert_ne!(plain[(4, 0)].fg, colored);
        assert_eq!(cache.len(), 1);
    }
}

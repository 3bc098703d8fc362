mod preview;

use ratatui::text::Line;
use std::collections::HashMap;

pub use preview::PreviewWidget;

/// What a cached paragraph layout depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LayoutKey {
    paragraph: usize,
    width: u16,
    color_enabled: bool,
}

/// Wrapped paragraph lines, reused across frames.
///
/// Styles are baked into the cached lines, so a change of width or of the
/// color toggle drops every entry.
#[derive(Debug, Default)]
pub struct LayoutCache {
    lines: HashMap<LayoutKey, Vec<Line<'static>>>,
    width: u16,
    color_enabled: bool,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate when the viewport width or color mode changed since the last frame
    pub fn prepare(&mut self, width: u16, color_enabled: bool) {
        if width != self.width || color_enabled != self.color_enabled {
            self.lines.clear();
            self.width = width;
            self.color_enabled = color_enabled;
        }
    }

    pub fn get(&self, paragraph: usize) -> Option<&Vec<Line<'static>>> {
        self.lines.get(&self.key(paragraph))
    }

    pub fn insert(&mut self, paragraph: usize, lines: Vec<Line<'static>>) {
        self.lines.insert(self.key(paragraph), lines);
    }

    fn key(&self, paragraph: usize) -> LayoutKey {
        LayoutKey {
            paragraph,
            width: self.width,
            color_enabled: self.color_enabled,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

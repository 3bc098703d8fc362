//! Interactive terminal preview

use anyhow::Result;
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::debug;

use crate::config::ViewerTheme;
use crate::document::*;
use crate::render::render_document;
use crate::widgets::{LayoutCache, PreviewWidget};

const PAGE_STEP: usize = 10;

pub struct PreviewApp {
    title: String,
    paragraphs: Vec<StyledParagraph>,
    outline: Vec<OutlineItem>,
    /// Paragraph index each outline entry jumps to
    outline_targets: Vec<usize>,
    scroll: usize,
    show_outline: bool,
    outline_state: ListState,
    layout_cache: LayoutCache,
    theme: ViewerTheme,
    color_enabled: bool,
    should_quit: bool,
}

impl PreviewApp {
    pub fn new(document: &DocumentStructure, theme: ViewerTheme, color_enabled: bool) -> Self {
        let paragraphs = render_document(document);
        let outline = generate_outline(document);
        let outline_targets = outline_targets(&paragraphs, &outline);
        let mut outline_state = ListState::default();
        if !outline.is_empty() {
            outline_state.select(Some(0));
        }

        Self {
            title: document.title.clone(),
            paragraphs,
            outline,
            outline_targets,
            scroll: 0,
            show_outline: false,
            outline_state,
            layout_cache: LayoutCache::new(),
            theme,
            color_enabled,
            should_quit: false,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn max_scroll(&self) -> usize {
        self.paragraphs.len().saturating_sub(1)
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_outline {
            match code {
                KeyCode::Up | KeyCode::Char('k') => self.outline_state.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.outline_state.select_next(),
                KeyCode::Enter => {
                    if let Some(target) = self
                        .outline_state
                        .selected()
                        .and_then(|index| self.outline_targets.get(index))
                    {
                        self.scroll = *target;
                    }
                    self.show_outline = false;
                }
                KeyCode::Char('o') | KeyCode::Esc => self.show_outline = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll = (self.scroll + PAGE_STEP).min(self.max_scroll())
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll = self.max_scroll(),
            KeyCode::Char('o') if !self.outline.is_empty() => self.show_outline = true,
            KeyCode::Char('c') => self.color_enabled = !self.color_enabled,
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let document_area = if self.show_outline {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
                .split(chunks[0]);
            self.draw_outline(frame, columns[0]);
            columns[1]
        } else {
            chunks[0]
        };

        let title = if self.title.is_empty() { "公文预览" } else { self.title.as_str() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.color(&self.theme.border)))
            .title(Line::styled(
                format!(" {title} "),
                Style::default().fg(self.theme.color(&self.theme.title)),
            ));
        let inner = block.inner(document_area);
        frame.render_widget(block, document_area);

        PreviewWidget::new(&self.paragraphs)
            .scroll_offset(self.scroll)
            .color_enabled(self.color_enabled)
            .render(inner, frame.buffer_mut(), &mut self.layout_cache);

        let status = format!(
            " 段落 {}/{}  ↑↓ 滚动  o 大纲  c 颜色  q 退出",
            (self.scroll + 1).min(self.paragraphs.len()),
            self.paragraphs.len()
        );
        frame.render_widget(
            Paragraph::new(status).style(
                Style::default()
                    .fg(self.theme.color(&self.theme.status_fg))
                    .bg(self.theme.color(&self.theme.footer_bg)),
            ),
            chunks[1],
        );
    }

    fn draw_outline(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .outline
            .iter()
            .map(|item| {
                let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
                ListItem::new(format!("{indent}{}", item.title))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.color(&self.theme.border)))
                    .title(" 大纲 "),
            )
            .highlight_style(
                Style::default()
                    .bg(self.theme.color(&self.theme.outline_selected_bg))
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_stateful_widget(list, area, &mut self.outline_state);
    }
}

/// Map each outline entry to the paragraph carrying its heading
fn outline_targets(paragraphs: &[StyledParagraph], outline: &[OutlineItem]) -> Vec<usize> {
    let mut headings = paragraphs.iter().enumerate().filter(|(_, paragraph)| {
        matches!(
            paragraph.role,
            ParagraphRole::SectionTitle | ParagraphRole::SubsectionTitle
        )
    });

    outline
        .iter()
        .map(|item| {
            headings
                .find(|(_, paragraph)| paragraph.text == item.title)
                .map(|(index, _)| index)
                .unwrap_or(0)
        })
        .collect()
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut PreviewApp) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

/// Show a parsed document in a full-screen terminal viewer
pub fn run_viewer(document: &DocumentStructure, theme: ViewerTheme, color_enabled: bool) -> Result<()> {
    let mut app = PreviewApp::new(document, theme, color_enabled);
    debug!(paragraphs = app.paragraphs.len(), "starting viewer");

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

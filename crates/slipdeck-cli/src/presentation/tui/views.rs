//! Ratatui view widgets for the presenter screen.
//!
//! Each view wraps a borrowed model and implements `Widget`; the
//! presenter owns layout and decides which views to draw where.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use slipdeck_engine::{Block as ContentBlock, DeckFrame, DensityTier, PanelView, Topbar};

/// Persistent top chrome: brand, progress pips, key hint.
pub struct TopbarView<'a> {
    model: &'a Topbar,
}

impl<'a> TopbarView<'a> {
    pub fn new(model: &'a Topbar) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TopbarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                self.model.brand.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for i in 0..self.model.progress.total {
            let pip = if i == self.model.progress.current {
                Span::styled("●", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○", Style::default().add_modifier(Modifier::DIM))
            };
            spans.push(pip);
            spans.push(Span::raw(" "));
        }
        let left = Line::from(spans);
        Paragraph::new(left).render(area, buf);

        let hint = Paragraph::new(Line::from(Span::styled(
            self.model.hint.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Right);
        hint.render(area, buf);
    }
}

/// The slide stage: renders the frame's block list top to bottom,
/// with a comparison (always the final block) split side by side.
pub struct BodyView<'a> {
    frame: &'a DeckFrame,
}

impl<'a> BodyView<'a> {
    pub fn new(frame: &'a DeckFrame) -> Self {
        Self { frame }
    }

    /// Blank lines between blocks shrink with the density tier.
    fn gap(&self) -> usize {
        match self.frame.density {
            DensityTier::Normal => 1,
            DensityTier::Compact | DensityTier::Ultra => 0,
        }
    }
}

impl<'a> Widget for BodyView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();
        let mut columns: Option<(&PanelView, &PanelView)> = None;

        for block in &self.frame.slide.blocks {
            if !lines.is_empty() {
                for _ in 0..self.gap() {
                    lines.push(Line::raw(""));
                }
            }
            match block {
                ContentBlock::Kicker { text } => {
                    lines.push(Line::from(Span::styled(
                        text.to_uppercase(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
                    )));
                }
                ContentBlock::Headline { text, ruled } => {
                    lines.push(Line::from(Span::styled(
                        text.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    if *ruled {
                        let width = text.chars().count().clamp(4, area.width as usize);
                        lines.push(Line::from(Span::styled(
                            "─".repeat(width),
                            Style::default().add_modifier(Modifier::DIM),
                        )));
                    }
                }
                ContentBlock::Subheadline { text } => {
                    lines.push(Line::raw(text.clone()));
                }
                ContentBlock::Bullets { items } => {
                    for item in items {
                        lines.push(Line::from(vec![
                            Span::styled("  • ", Style::default().fg(Color::Cyan)),
                            Span::raw(item.clone()),
                        ]));
                    }
                }
                ContentBlock::Chips { items } => {
                    let mut spans = vec![Span::raw("  ")];
                    for chip in items {
                        spans.push(Span::styled(
                            format!(" {} ", chip),
                            Style::default().bg(Color::DarkGray),
                        ));
                        spans.push(Span::raw(" "));
                    }
                    lines.push(Line::from(spans));
                }
                ContentBlock::CallToAction { text } => {
                    lines.push(Line::from(Span::styled(
                        format!("→ {}", text),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                ContentBlock::NoteAside { text } => {
                    lines.push(Line::from(Span::styled(
                        text.clone(),
                        Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
                    )));
                }
                ContentBlock::Columns { left, right } => {
                    columns = Some((left, right));
                }
            }
        }

        let text_height = lines.len() as u16;
        match columns {
            None => {
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(area, buf);
            }
            Some((left, right)) => {
                let chunks = Layout::vertical([
                    Constraint::Length(text_height),
                    Constraint::Min(4),
                ])
                .split(area);
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(chunks[0], buf);

                let halves =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(chunks[1]);
                PanelColumnView::new(left).render(halves[0], buf);
                PanelColumnView::new(right).render(halves[1], buf);
            }
        }
    }
}

/// One side of a before/after comparison, boxed with its title.
struct PanelColumnView<'a> {
    panel: &'a PanelView,
}

impl<'a> PanelColumnView<'a> {
    fn new(panel: &'a PanelView) -> Self {
        Self { panel }
    }
}

impl<'a> Widget for PanelColumnView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.panel.title.clone())
            .borders(Borders::ALL)
            .style(Style::default());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .panel
            .bullets
            .iter()
            .map(|bullet| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Cyan)),
                    Span::raw(bullet.clone()),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Bottom control region data, composed by the presenter each frame.
pub struct StatusModel {
    pub locator: usize,
    pub total: usize,
    pub notice: Option<String>,
    pub jump_entry: Option<String>,
    pub has_note: bool,
}

pub struct StatusBarView<'a> {
    model: &'a StatusModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!("Slide {} / {}", self.model.locator, self.model.total),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.model.has_note {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "[note]",
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(entry) = &self.model.jump_entry {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("Go to: {}_", entry),
                Style::default().fg(Color::Cyan),
            ));
        }
        if let Some(notice) = &self.model.notice {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        let help = Paragraph::new(Line::from(Span::styled(
            "q quit · g go to · n note",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Right);
        help.render(area, buf);
    }
}

/// Speaker note overlay, toggled from the status bar controls. Drawn
/// over the lower stage; never part of the slide body.
pub struct NoteOverlayView<'a> {
    note: &'a str,
}

impl<'a> NoteOverlayView<'a> {
    pub fn new(note: &'a str) -> Self {
        Self { note }
    }
}

impl<'a> Widget for NoteOverlayView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Speaker note")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.note)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

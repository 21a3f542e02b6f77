//! Overflow self-correction.
//!
//! Deck content length is unbounded; after rendering, the frame's
//! estimated height is checked against the viewport and the density
//! escalates one tier at a time until the slide fits or the densest
//! tier is reached. At most two re-renders, never a loop.

use serde::Serialize;
use slipdeck_types::{Deck, Result};

use crate::density::DensityTier;
use crate::render::slides::render_frame;
use crate::render::tree::{Block, DeckFrame};

/// Available display region in CSS-pixel scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Per-tier line-box heights used by the height estimate.
struct BlockMetrics {
    kicker: f64,
    headline: f64,
    rule: f64,
    subheadline: f64,
    bullet_row: f64,
    chip_row: f64,
    call_to_action: f64,
    note_aside: f64,
    panel_title: f64,
    block_gap: f64,
    topbar: f64,
    stage_padding: f64,
}

fn metrics(density: DensityTier) -> BlockMetrics {
    match density {
        DensityTier::Normal => BlockMetrics {
            kicker: 28.0,
            headline: 96.0,
            rule: 18.0,
            subheadline: 40.0,
            bullet_row: 44.0,
            chip_row: 48.0,
            call_to_action: 40.0,
            note_aside: 56.0,
            panel_title: 40.0,
            block_gap: 20.0,
            topbar: 64.0,
            stage_padding: 48.0,
        },
        DensityTier::Compact => BlockMetrics {
            kicker: 24.0,
            headline: 72.0,
            rule: 14.0,
            subheadline: 32.0,
            bullet_row: 36.0,
            chip_row: 40.0,
            call_to_action: 32.0,
            note_aside: 44.0,
            panel_title: 32.0,
            block_gap: 14.0,
            topbar: 56.0,
            stage_padding: 32.0,
        },
        DensityTier::Ultra => BlockMetrics {
            kicker: 20.0,
            headline: 56.0,
            rule: 10.0,
            subheadline: 26.0,
            bullet_row: 28.0,
            chip_row: 32.0,
            call_to_action: 26.0,
            note_aside: 36.0,
            panel_title: 26.0,
            block_gap: 8.0,
            topbar: 48.0,
            stage_padding: 20.0,
        },
    }
}

/// Render the slide at `index`, escalating density while the estimated
/// frame height overflows the viewport. Escalation is computed per
/// slide; navigating away discards it.
pub fn render_fitted(
    deck: &Deck,
    index: usize,
    base: DensityTier,
    viewport: &Viewport,
) -> Result<DeckFrame> {
    let mut density = base;
    let mut frame = render_frame(deck, index, density)?;

    // One attempt per remaining tier: normal→compact→ultra is the
    // longest possible chain.
    for _ in 0..2 {
        if estimated_height(&frame) <= viewport.height_px {
            break;
        }
        match density.escalated() {
            Some(next) => {
                density = next;
                frame = render_frame(deck, index, density)?;
            }
            None => break,
        }
    }

    Ok(frame)
}

/// Deterministic height estimate for a frame, topbar and stage padding
/// included. Deliberately coarse: it only has to order frames against
/// viewport heights consistently.
pub fn estimated_height(frame: &DeckFrame) -> f64 {
    let m = metrics(frame.density);
    let mut height = m.topbar + m.stage_padding;

    for block in &frame.slide.blocks {
        height += match block {
            Block::Kicker { .. } => m.kicker,
            Block::Headline { ruled, .. } => m.headline + if *ruled { m.rule } else { 0.0 },
            Block::Subheadline { .. } => m.subheadline,
            Block::Bullets { items } => items.len() as f64 * m.bullet_row,
            Block::Chips { items } => {
                // Chips wrap three to a row.
                let rows = items.len().div_ceil(3);
                rows as f64 * m.chip_row
            }
            Block::CallToAction { .. } => m.call_to_action,
            Block::NoteAside { .. } => m.note_aside,
            Block::Columns { left, right } => {
                let rows = left.bullets.len().max(right.bullets.len());
                m.panel_title + rows as f64 * m.bullet_row
            }
        };
        height += m.block_gap;
    }

    height
}

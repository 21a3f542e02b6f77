use serde::Serialize;

use crate::density::DensityTier;

/// Complete visual description of one rendered screen.
///
/// All text is carried literally; nothing in a frame is ever
/// interpreted as markup. Sinks that target a markup language escape
/// on insertion (see `render::html`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckFrame {
    /// Window/terminal title: deck title, or a fixed fallback.
    pub window_title: String,
    pub topbar: Topbar,
    pub slide: SlideView,
    /// Speaker channel. Surfaced as a badge, overlay, or console echo,
    /// never as slide body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_note: Option<String>,
    /// Tier the frame was rendered at, after any overflow escalation.
    pub density: DensityTier,
}

/// Persistent chrome above the stage: brand, progress, key hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topbar {
    pub brand: String,
    pub progress: ProgressModel,
    pub hint: String,
}

/// Progress indicator data: one pip per slide, current highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressModel {
    pub current: usize,
    pub total: usize,
}

/// A labeled slide group and its ordered content blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideView {
    /// Group label in "n of total" form (1-based).
    pub label: String,
    pub blocks: Vec<Block>,
}

/// One structural element of a slide body.
///
/// A comparison (`Columns`) only ever appears as the final block of a
/// frame; bullets and note asides never share a frame with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Small label above the headline ("Presentation", "Compare", ...).
    Kicker { text: String },
    /// Slide heading; `ruled` draws a separator under it.
    Headline { text: String, ruled: bool },
    Subheadline { text: String },
    /// Full bullet list, one row per item.
    Bullets { items: Vec<String> },
    /// Short chip fragments for the hero layout, not a full list.
    Chips { items: Vec<String> },
    /// Hero prompt line.
    CallToAction { text: String },
    /// Supplementary annotation below the bullets.
    NoteAside { text: String },
    /// Two-column before/after comparison.
    Columns { left: PanelView, right: PanelView },
}

/// One side of a comparison. Always rendered, even for an absent side
/// (fallback title, zero bullet rows).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub title: String,
    pub bullets: Vec<String>,
}

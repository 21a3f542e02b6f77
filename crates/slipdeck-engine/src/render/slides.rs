use slipdeck_types::{
    BeforeAfterSlide, ClosingSlide, ComparePanel, ContentSlide, Deck, Result, SectionSlide, Slide,
    TitleSlide,
};

use crate::density::DensityTier;
use crate::render::tree::{Block, DeckFrame, PanelView, ProgressModel, SlideView, Topbar};

/// Bullet rows and chips are display-capped; decks may carry more.
pub const MAX_VISIBLE_BULLETS: usize = 6;

/// Hero prompt when the title slide has no note to source it from.
pub const DEFAULT_CALL_TO_ACTION: &str = "Press Space to begin";

/// Key hint shown in the topbar chrome.
pub const KEY_HINT: &str = "Space / ← →";

/// Window title when the deck has no title of its own.
pub const FALLBACK_WINDOW_TITLE: &str = "Deck";

pub const FALLBACK_LEFT_TITLE: &str = "Before";
pub const FALLBACK_RIGHT_TITLE: &str = "After";

/// Render the slide at `index` into a full frame (topbar + labeled
/// slide group + speaker channel). Fails only on an out-of-range
/// index, which clamped navigation never produces.
pub fn render_frame(deck: &Deck, index: usize, density: DensityTier) -> Result<DeckFrame> {
    let slide = deck.slide_at(index)?;
    let total = deck.slide_count();

    let brand = deck.title().unwrap_or_default().to_string();
    let window_title = deck
        .title()
        .unwrap_or(FALLBACK_WINDOW_TITLE)
        .to_string();

    Ok(DeckFrame {
        window_title,
        topbar: Topbar {
            brand,
            progress: ProgressModel {
                current: index,
                total,
            },
            hint: KEY_HINT.to_string(),
        },
        slide: SlideView {
            label: format!("{} of {}", index + 1, total),
            blocks: render_slide(slide),
        },
        speaker_note: slide.note().map(str::to_string),
        density,
    })
}

/// Map one slide to its ordered content blocks. Missing optional
/// fields render nothing for that element.
pub fn render_slide(slide: &Slide) -> Vec<Block> {
    match slide {
        Slide::Title(s) => title_blocks(s),
        Slide::Section(s) => section_blocks(s),
        Slide::Content(s) => content_blocks(s),
        Slide::BeforeAfter(s) => before_after_blocks(s),
        Slide::Closing(s) => closing_blocks(s),
    }
}

/// Hero layout: chips instead of a bullet list, always a prompt line.
fn title_blocks(s: &TitleSlide) -> Vec<Block> {
    let mut blocks = vec![kicker("Presentation")];
    push_headline(&mut blocks, &s.headline, false);
    push_subheadline(&mut blocks, &s.subheadline);
    if !s.bullets.is_empty() {
        blocks.push(Block::Chips {
            items: capped(&s.bullets),
        });
    }
    blocks.push(Block::CallToAction {
        text: s
            .note
            .clone()
            .unwrap_or_else(|| DEFAULT_CALL_TO_ACTION.to_string()),
    });
    blocks
}

/// Minimal divider layout: kicker, headline, optional subheadline.
fn section_blocks(s: &SectionSlide) -> Vec<Block> {
    let mut blocks = vec![kicker("Section")];
    push_headline(&mut blocks, &s.headline, false);
    push_subheadline(&mut blocks, &s.subheadline);
    blocks
}

fn content_blocks(s: &ContentSlide) -> Vec<Block> {
    // Kicker wording tracks whether the slide carries a subheadline.
    let mut blocks = vec![kicker(if s.subheadline.is_some() {
        "Concept"
    } else {
        "Slide"
    })];
    push_headline(&mut blocks, &s.headline, true);
    push_subheadline(&mut blocks, &s.subheadline);
    if !s.bullets.is_empty() {
        blocks.push(Block::Bullets {
            items: capped(&s.bullets),
        });
    }
    // Annotation sits below the bullets, never in place of them.
    if let Some(note) = &s.note {
        blocks.push(Block::NoteAside { text: note.clone() });
    }
    blocks
}

fn before_after_blocks(s: &BeforeAfterSlide) -> Vec<Block> {
    let mut blocks = vec![kicker("Compare")];
    push_headline(&mut blocks, &s.headline, true);
    push_subheadline(&mut blocks, &s.subheadline);
    // Both panels always render; an absent side keeps its fallback
    // title and an empty list rather than collapsing to one column.
    blocks.push(Block::Columns {
        left: panel(s.left.as_ref(), FALLBACK_LEFT_TITLE),
        right: panel(s.right.as_ref(), FALLBACK_RIGHT_TITLE),
    });
    blocks
}

fn closing_blocks(s: &ClosingSlide) -> Vec<Block> {
    let mut blocks = vec![kicker("Closing")];
    push_headline(&mut blocks, &s.headline, false);
    push_subheadline(&mut blocks, &s.subheadline);
    if !s.bullets.is_empty() {
        blocks.push(Block::Bullets {
            items: capped(&s.bullets),
        });
    }
    blocks
}

fn panel(side: Option<&ComparePanel>, fallback_title: &str) -> PanelView {
    PanelView {
        title: side
            .and_then(|p| p.title.clone())
            .unwrap_or_else(|| fallback_title.to_string()),
        bullets: side.map(|p| capped(&p.bullets)).unwrap_or_default(),
    }
}

fn kicker(text: &str) -> Block {
    Block::Kicker {
        text: text.to_string(),
    }
}

fn push_headline(blocks: &mut Vec<Block>, headline: &Option<String>, ruled: bool) {
    if let Some(text) = headline {
        blocks.push(Block::Headline {
            text: text.clone(),
            ruled,
        });
    }
}

fn push_subheadline(blocks: &mut Vec<Block>, subheadline: &Option<String>) {
    if let Some(text) = subheadline {
        blocks.push(Block::Subheadline { text: text.clone() });
    }
}

fn capped(items: &[String]) -> Vec<String> {
    items.iter().take(MAX_VISIBLE_BULLETS).cloned().collect()
}

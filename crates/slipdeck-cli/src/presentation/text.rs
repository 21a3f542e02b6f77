//! Plain-text views: one-shot slide rendering and the deck outline.

use owo_colors::OwoColorize;
use slipdeck_engine::{Block, DeckFrame, PanelView};
use slipdeck_types::Deck;

/// Render a frame as readable text, one block per group of lines.
/// Block text is emitted literally; this sink has no markup to escape.
pub fn render_plain(frame: &DeckFrame) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  [{} / {}]  ({})\n\n",
        frame.topbar.brand,
        frame.topbar.progress.current + 1,
        frame.topbar.progress.total,
        frame.density.as_str(),
    ));

    for block in &frame.slide.blocks {
        match block {
            Block::Kicker { text } => {
                out.push_str(&format!("· {}\n", text));
            }
            Block::Headline { text, ruled } => {
                out.push_str(&format!("{}\n", text));
                if *ruled {
                    out.push_str(&format!("{}\n", "-".repeat(text.chars().count().max(4))));
                }
            }
            Block::Subheadline { text } => {
                out.push_str(&format!("{}\n", text));
            }
            Block::Bullets { items } => {
                for item in items {
                    out.push_str(&format!("  • {}\n", item));
                }
            }
            Block::Chips { items } => {
                let chips: Vec<String> = items.iter().map(|c| format!("[{}]", c)).collect();
                out.push_str(&format!("  {}\n", chips.join(" ")));
            }
            Block::CallToAction { text } => {
                out.push_str(&format!("→ {}\n", text));
            }
            Block::NoteAside { text } => {
                out.push_str(&format!("  ({})\n", text));
            }
            Block::Columns { left, right } => {
                push_panel(&mut out, left);
                push_panel(&mut out, right);
            }
        }
        out.push('\n');
    }

    out
}

fn push_panel(out: &mut String, panel: &PanelView) {
    out.push_str(&format!("  {}:\n", panel.title));
    for bullet in &panel.bullets {
        out.push_str(&format!("    • {}\n", bullet));
    }
}

/// One line per slide: number, kind, headline. Colors only when the
/// output is a terminal.
pub fn render_outline(deck: &Deck, colored: bool) -> String {
    let mut out = String::new();

    let title = deck.title().unwrap_or("Deck");
    if colored {
        out.push_str(&format!("{}\n", title.bold()));
    } else {
        out.push_str(&format!("{}\n", title));
    }
    if let Some(author) = &deck.meta().author {
        out.push_str(&format!("by {}\n", author));
    }
    out.push_str(&format!("{} slides\n\n", deck.slide_count()));

    for (i, slide) in deck.slides().iter().enumerate() {
        let kind = slide.kind().as_str();
        let headline = slide.headline().unwrap_or("(untitled)");
        if colored {
            out.push_str(&format!(
                "{:>3}. {:<12} {}\n",
                i + 1,
                kind.cyan(),
                headline
            ));
        } else {
            out.push_str(&format!("{:>3}. {:<12} {}\n", i + 1, kind, headline));
        }
    }

    out
}

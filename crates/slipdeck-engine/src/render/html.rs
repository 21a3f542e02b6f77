//! HTML sink for a rendered frame.
//!
//! Frame text is literal by contract; this writer neutralizes markup
//! metacharacters on every insertion, so slide text can never become
//! structure.

use std::fmt::Write;

use crate::render::tree::{Block, DeckFrame, PanelView};

/// Escape `& < > " '` for safe insertion into HTML text or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize a frame as a standalone HTML fragment. The speaker note
/// is intentionally absent: it is not part of the visible body.
pub fn write_html(frame: &DeckFrame) -> String {
    let mut html = String::new();

    let _ = writeln!(html, "<div class=\"deck\" data-density=\"{}\">", frame.density.as_str());

    // Topbar: brand, one pip per slide, key hint.
    let _ = writeln!(html, "  <header class=\"topbar\">");
    let _ = writeln!(
        html,
        "    <div class=\"brand\">{}</div>",
        escape_html(&frame.topbar.brand)
    );
    let _ = write!(html, "    <div class=\"progress\" aria-hidden=\"true\">");
    for i in 0..frame.topbar.progress.total {
        if i == frame.topbar.progress.current {
            let _ = write!(html, "<span class=\"active\"></span>");
        } else {
            let _ = write!(html, "<span></span>");
        }
    }
    let _ = writeln!(html, "</div>");
    let _ = writeln!(
        html,
        "    <div class=\"hint\">{}</div>",
        escape_html(&frame.topbar.hint)
    );
    let _ = writeln!(html, "  </header>");

    let _ = writeln!(
        html,
        "  <article class=\"slide\" role=\"group\" aria-roledescription=\"slide\" aria-label=\"{}\">",
        escape_html(&frame.slide.label)
    );
    for block in &frame.slide.blocks {
        write_block(&mut html, block);
    }
    let _ = writeln!(html, "  </article>");
    let _ = writeln!(html, "</div>");

    html
}

fn write_block(html: &mut String, block: &Block) {
    match block {
        Block::Kicker { text } => {
            let _ = writeln!(html, "    <div class=\"kicker\">{}</div>", escape_html(text));
        }
        Block::Headline { text, ruled } => {
            let class = if *ruled { "rule" } else { "headline" };
            let _ = writeln!(html, "    <h1 class=\"{}\">{}</h1>", class, escape_html(text));
        }
        Block::Subheadline { text } => {
            let _ = writeln!(
                html,
                "    <p class=\"subheadline\">{}</p>",
                escape_html(text)
            );
        }
        Block::Bullets { items } => {
            write_bullets(html, items, "    ");
        }
        Block::Chips { items } => {
            let _ = write!(html, "    <div class=\"chips\">");
            for item in items {
                let _ = write!(html, "<span class=\"chip\">{}</span>", escape_html(item));
            }
            let _ = writeln!(html, "</div>");
        }
        Block::CallToAction { text } => {
            let _ = writeln!(html, "    <p class=\"cta\">{}</p>", escape_html(text));
        }
        Block::NoteAside { text } => {
            let _ = writeln!(html, "    <aside class=\"note\">{}</aside>", escape_html(text));
        }
        Block::Columns { left, right } => {
            let _ = writeln!(html, "    <div class=\"twocol\">");
            write_panel(html, left);
            write_panel(html, right);
            let _ = writeln!(html, "    </div>");
        }
    }
}

fn write_panel(html: &mut String, panel: &PanelView) {
    let _ = writeln!(html, "      <section class=\"card\">");
    let _ = writeln!(
        html,
        "        <h3 class=\"cardTitle\">{}</h3>",
        escape_html(&panel.title)
    );
    write_bullets(html, &panel.bullets, "        ");
    let _ = writeln!(html, "      </section>");
}

fn write_bullets(html: &mut String, items: &[String], indent: &str) {
    let _ = writeln!(html, "{}<ul class=\"bullets\">", indent);
    for item in items {
        let _ = writeln!(html, "{}  <li>{}</li>", indent, escape_html(item));
    }
    let _ = writeln!(html, "{}</ul>", indent);
}

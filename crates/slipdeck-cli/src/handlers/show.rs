use std::path::Path;

use anyhow::{Result, bail};
use slipdeck_engine::{Viewport, classify, render_fitted, write_html};

use crate::args::ShowFormat;
use crate::config::ViewerConfig;
use crate::loader;
use crate::presentation::text::render_plain;

pub fn run(
    deck_path: &Path,
    slide: usize,
    format: ShowFormat,
    height: Option<f64>,
    config: &ViewerConfig,
) -> Result<()> {
    let deck = loader::load_or_fallback(deck_path)?;

    let total = deck.slide_count();
    if slide == 0 || slide > total {
        bail!("no slide {} (deck has {} slides)", slide, total);
    }
    let index = slide - 1;

    let viewport = viewport(height, config);
    let frame = render_fitted(&deck, index, classify(viewport.height_px), &viewport)?;

    match format {
        ShowFormat::Plain => {
            print!("{}", render_plain(&frame));
            // Speaker channel goes to the console, never into the body.
            if let Some(note) = &frame.speaker_note {
                eprintln!("Speaker note (slide {}/{}): {}", slide, total, note);
            }
        }
        ShowFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        ShowFormat::Html => {
            print!("{}", write_html(&frame));
        }
    }

    Ok(())
}

/// Viewport for one-shot rendering: explicit height wins, then the
/// real terminal scaled by the configured cell size, then a desktop
/// default (piped output has no terminal to measure).
fn viewport(height: Option<f64>, config: &ViewerConfig) -> Viewport {
    if let Some(height_px) = height {
        return Viewport::new(1280.0, height_px);
    }
    match terminal_size::terminal_size() {
        Some((width, rows)) => Viewport::new(
            width.0 as f64 * config.cell_width_px,
            rows.0 as f64 * config.cell_height_px,
        ),
        None => Viewport::new(1280.0, 900.0),
    }
}

//! Slide renderer: (slide, density, deck) → visual tree.
//!
//! Pure mapping with no hidden state: the same inputs always produce a
//! structurally identical `DeckFrame`. Sinks (terminal widgets, the
//! HTML writer, plain text) map the tree 1:1 to output and make no
//! layout decisions of their own.

mod fit;
mod html;
mod slides;
mod tree;

pub use fit::{Viewport, estimated_height, render_fitted};
pub use html::{escape_html, write_html};
pub use slides::{
    DEFAULT_CALL_TO_ACTION, FALLBACK_LEFT_TITLE, FALLBACK_RIGHT_TITLE, FALLBACK_WINDOW_TITLE,
    KEY_HINT, MAX_VISIBLE_BULLETS, render_frame, render_slide,
};
pub use tree::{Block, DeckFrame, PanelView, ProgressModel, SlideView, Topbar};

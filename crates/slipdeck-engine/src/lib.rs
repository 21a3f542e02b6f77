// Engine module - Core runtime logic (density, navigation, input, rendering)
// This layer sits between the parsed document (types) and CLI presentation

pub mod density;
pub mod input;
pub mod nav;
pub mod render;
pub mod session;

pub use density::{DensityTier, classify};
pub use input::{InputContext, Key, NavIntent, RawInput, map_input};
pub use nav::{DEBOUNCE_WINDOW_MS, Edge, NavOutcome, NavigationState};
pub use render::{
    Block, DeckFrame, PanelView, ProgressModel, SlideView, Topbar, Viewport, escape_html,
    render_fitted, render_frame, write_html,
};
pub use session::{DeckSession, RenderDecision};

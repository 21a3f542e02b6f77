// NOTE: slipdeck Architecture Rationale
//
// Why a session object (not module-level state)?
// - Handlers receive an explicitly owned DeckSession instead of
//   closing over globals, so several viewers can coexist in-process
//   and the state machine is testable without a terminal
// - The deck itself is immutable after load; only the navigation
//   index and density tier ever change
//
// Why pixel-scale geometry in a terminal program?
// - Density thresholds and gesture distances are specified in
//   CSS-pixel scale; the presenter converts cell geometry through a
//   configurable cell size instead of re-deriving tier cutoffs in rows
// - Keeps the engine's classifier and input thresholds backend-free

mod args;
mod commands;
pub mod config;
mod handlers;
mod loader;
mod presentation;

pub use args::{Cli, Commands, ShowFormat};
pub use commands::run;

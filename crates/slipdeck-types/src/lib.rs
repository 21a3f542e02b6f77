pub mod deck;
pub mod error;
pub mod slide;

pub use deck::*;
pub use error::{Error, Result};
pub use slide::*;

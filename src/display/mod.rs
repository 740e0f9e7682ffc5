//! Console presentation.
//!
//! Renders an engine's query surface as text. Nothing here mutates the
//! engine; the binary owns the input loop.

pub mod text;

pub use text::{Styling, TextRenderer};

//! Parser for recipes written in the Cooklang markup.
//!
//! Recipe text is split into metadata lines and steps; each step's
//! narration is rendered with annotation syntax removed, and every
//! ingredient, cookware, and timer annotation records the byte offset of
//! its name within that rendered text.

#[macro_use]
mod regex;

pub mod conformance;
pub mod language;
pub mod parsing;

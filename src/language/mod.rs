// Types representing a Cooklang recipe

mod error;
mod quantity;
mod types;

// Re-export all public symbols
pub use error::*;
pub use quantity::*;
pub use types::*;

pub mod highlight;
pub mod io;
pub mod preview;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use highlight::{Category, SOLIDITY_LANGUAGE, highlight};
pub use io::*;
pub use preview::*;
pub use render::{
    fence::{CodeBlocks, ExtractedBlock},
    render,
};

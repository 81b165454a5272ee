//! Block kinds that own their syntax delimiters.
//!
//! - **`CodeFence`**: ```` ``` ```` / `~~~` openers and closers
//! - **`Heading`**: ATX `#`..`######` markers and optional closing sequence
//!
//! Paragraphs have no delimiters: they are whatever is left over.

pub mod code_fence;
pub mod heading;

pub use code_fence::{CodeFence, FenceKind};
pub use heading::{Heading, HeadingOpen};

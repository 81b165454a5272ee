//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank, fence, heading, indent).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine emits
//!    `BlockNode`s as paragraphs, headings and fences open and close.
//!
//! Fenced code blocks are raw zones: nothing inside them is parsed, so a
//! `#comment` in a code sample never becomes a hashtag.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};

//! # Inline Kinds
//!
//! Inline-specific types that own their syntax knowledge.
//!
//! - **`CodeSpan`**: `TICK = b'\`'`, a raw zone that suppresses other parsing
//! - **`Hashtag`**: `TRIGGER = b'#'` plus the per-variant tag body matcher
//! - **`Variant`**: which hashtag syntax is in effect
//!
//! The parser calls into these types; it never hardcodes `` ` `` or `#`.

pub mod code_span;
pub mod hashtag;
pub mod variant;

pub use code_span::CodeSpan;
pub use hashtag::Hashtag;
pub use variant::{Variant, VariantParseError};

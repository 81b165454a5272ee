//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing is separate from block parsing and operates over the
//! content span of inline-eligible blocks (paragraphs and headings).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Hashtag)
//! - **`kinds`**: Inline-specific syntax knowledge (CodeSpan, Hashtag, Variant)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `#tag` `` parses as a single CodeSpan,
//! not as text containing a Hashtag.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::Variant;
pub use parser::{parse_inline, try_parse_hashtag};
pub use types::InlineNode;

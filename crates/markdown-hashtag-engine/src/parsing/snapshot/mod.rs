//! # Snapshot Support
//!
//! Stable, serializable views of a parsed document.
//!
//! - **`normalize`**: converts blocks and their inline nodes into a `Snap`
//!   (kinds, spans, previews and named sub-spans such as a hashtag's `tag`)
//! - **`invariants`**: checks that spans are in bounds and nested, and that
//!   every hashtag's raw text is `#` followed by its tag

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};

//! # Rendering
//!
//! HTML output for parsed documents, with hashtags rendered as styled and
//! optionally linked spans.
//!
//! - **`hashtag`**: `HashtagRenderer`, the enter/exit pair for one hashtag node
//! - **`html`**: `HtmlRenderer`, walks a whole `Document`
//! - **`resolver`**: the `Resolver` capability and `PrefixResolver`
//! - **`escape`**: text, attribute and URL escaping
//! - **`error`**: `RenderError`

pub mod error;
pub mod escape;
pub mod hashtag;
pub mod html;
pub mod resolver;

pub use error::RenderError;
pub use hashtag::{Attribute, HashtagRenderer, Opened};
pub use html::HtmlRenderer;
pub use resolver::{BoxError, PrefixResolver, Resolver};

//! Hashtag recognition and rendering for Markdown notes.
//!
//! `#tag` spans are recognized during inline parsing under one of two
//! [`Variant`]s and rendered as `<span class="hashtag">` elements, optionally
//! linked through a [`Resolver`].

pub mod document;
pub mod markdown;
pub mod parsing;
pub mod render;

pub use document::{DocBlock, Document};
pub use markdown::{HashtagOptions, Markdown};
pub use parsing::inline::{
    InlineNode, Variant,
    kinds::{Hashtag, VariantParseError},
};
pub use parsing::rope::Span;
pub use render::{
    Attribute, BoxError, HashtagRenderer, HtmlRenderer, Opened, PrefixResolver, RenderError,
    Resolver,
};

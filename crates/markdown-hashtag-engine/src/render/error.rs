use thiserror::Error;

use super::resolver::BoxError;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The resolver failed for a tag. Rendering stops at that tag.
    #[error("resolve hashtag {tag:?}: {source}")]
    Resolve {
        tag: String,
        #[source]
        source: BoxError,
    },

    /// The hashtag renderer was handed some other kind of node.
    #[error("unexpected node {found}: only Hashtag nodes can be rendered as hashtags")]
    UnexpectedNode { found: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

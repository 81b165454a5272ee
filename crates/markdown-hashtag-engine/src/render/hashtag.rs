//! Rendering of hashtag nodes.
//!
//! ```text
//! #foo
//! ```
//!
//! renders as `<span class="hashtag">#foo</span>` by default. With a
//! [`Resolver`] that returns a non-empty destination it renders as
//! `<span class="hashtag"><a href="...">#foo</a></span>`.
//!
//! Rendering is split into [`HashtagRenderer::enter`] and
//! [`HashtagRenderer::exit`] so a tree walker can emit the children in
//! between. `enter` hands back a [`Opened`] token recording whether a link was
//! opened, and `exit` consumes it; the renderer itself keeps no state and can
//! be shared across threads and documents.

use std::{io::Write, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineNode;

use super::{error::RenderError, escape, resolver::Resolver};

const OPEN_SPAN: &str = r#"<span class="hashtag">"#;
const CLOSE_SPAN: &str = "</span>";
const CLOSE_LINK: &str = "</a>";

/// An extra attribute written on every generated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// What [`HashtagRenderer::enter`] opened, to be closed by
/// [`HashtagRenderer::exit`].
#[must_use = "pass the token to `exit` to close the hashtag"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opened {
    link: bool,
}

impl Opened {
    /// Whether the hashtag was wrapped in a link.
    pub fn is_link(self) -> bool {
        self.link
    }
}

#[derive(Clone, Default)]
pub struct HashtagRenderer {
    resolver: Option<Arc<dyn Resolver>>,
    attributes: Vec<Attribute>,
}

impl HashtagRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Writes the opening markup for `node`.
    ///
    /// `src` is the document text the node's spans point into. Fails with
    /// [`RenderError::UnexpectedNode`] for anything but a hashtag, and with
    /// [`RenderError::Resolve`] if the resolver fails; the opening `<span>`
    /// has already been written in that case.
    pub fn enter<W: Write>(
        &self,
        w: &mut W,
        src: &str,
        node: &InlineNode,
    ) -> Result<Opened, RenderError> {
        let InlineNode::Hashtag { tag, .. } = node else {
            return Err(RenderError::UnexpectedNode {
                found: node.kind_name(),
            });
        };

        w.write_all(OPEN_SPAN.as_bytes())?;

        let Some(resolver) = &self.resolver else {
            return Ok(Opened { link: false });
        };

        let tag = tag.text(src);
        let dest = resolver.resolve(tag).map_err(|source| {
            log::debug!("resolver failed for #{tag}: {source}");
            RenderError::Resolve {
                tag: tag.to_string(),
                source,
            }
        })?;
        if dest.is_empty() {
            log::trace!("#{tag} left unlinked");
            return Ok(Opened { link: false });
        }

        w.write_all(b"<a ")?;
        for attr in &self.attributes {
            write!(w, "{}=\"{}\" ", attr.name, escape::attribute(&attr.value))?;
        }
        write!(w, "href=\"{}\">", escape::attribute(&escape::url(&dest)))?;

        Ok(Opened { link: true })
    }

    /// Writes the closing markup matching an earlier `enter`.
    pub fn exit<W: Write>(&self, w: &mut W, opened: Opened) -> Result<(), RenderError> {
        if opened.link {
            w.write_all(CLOSE_LINK.as_bytes())?;
        }
        w.write_all(CLOSE_SPAN.as_bytes())?;
        Ok(())
    }

    /// Renders a whole hashtag node: opening markup, the escaped raw text
    /// (`#` included) and closing markup.
    pub fn render<W: Write>(
        &self,
        w: &mut W,
        src: &str,
        node: &InlineNode,
    ) -> Result<(), RenderError> {
        let opened = self.enter(w, src, node)?;
        w.write_all(escape::text(node.span().text(src)).as_bytes())?;
        self.exit(w, opened)
    }
}

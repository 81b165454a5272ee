use std::io::Write;

use crate::{
    document::{DocBlock, Document},
    parsing::{blocks::BlockKind, inline::InlineNode},
};

use super::{error::RenderError, escape, hashtag::HashtagRenderer};

/// Renders a parsed [`Document`] as HTML.
///
/// Paragraphs become `<p>`, headings `<h1>`..`<h6>`, fenced code
/// `<pre><code>`. Code spans become `<code>` and hashtags are delegated to
/// the [`HashtagRenderer`].
#[derive(Clone, Default)]
pub struct HtmlRenderer {
    hashtags: HashtagRenderer,
}

impl HtmlRenderer {
    pub fn new(hashtags: HashtagRenderer) -> Self {
        Self { hashtags }
    }

    /// Renders `doc` into `w`.
    ///
    /// Stops at the first error. Whatever was written before it stays
    /// written.
    pub fn render<W: Write>(&self, doc: &Document, w: &mut W) -> Result<(), RenderError> {
        for block in doc.blocks() {
            self.render_block(doc.source(), block, w)?;
        }
        Ok(())
    }

    fn render_block<W: Write>(
        &self,
        src: &str,
        block: &DocBlock,
        w: &mut W,
    ) -> Result<(), RenderError> {
        match block.node.kind {
            BlockKind::Paragraph => {
                w.write_all(b"<p>")?;
                self.render_inlines(src, &block.inlines, w)?;
                w.write_all(b"</p>\n")?;
            }
            BlockKind::Heading { level } => {
                write!(w, "<h{level}>")?;
                self.render_inlines(src, &block.inlines, w)?;
                writeln!(w, "</h{level}>")?;
            }
            BlockKind::FencedCode { .. } => {
                let code = block.node.content_span.text(src);
                writeln!(w, "<pre><code>{}</code></pre>", escape::text(code))?;
            }
        }
        Ok(())
    }

    fn render_inlines<W: Write>(
        &self,
        src: &str,
        inlines: &[InlineNode],
        w: &mut W,
    ) -> Result<(), RenderError> {
        for node in inlines {
            match node {
                InlineNode::Text(sp) => {
                    w.write_all(escape::text(sp.text(src)).as_bytes())?;
                }
                InlineNode::CodeSpan { inner, .. } => {
                    write!(w, "<code>{}</code>", escape::text(inner.text(src)))?;
                }
                InlineNode::Hashtag { .. } => self.hashtags.render(w, src, node)?,
            }
        }
        Ok(())
    }
}

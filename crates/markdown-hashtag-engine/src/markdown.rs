use std::sync::Arc;

use crate::{
    document::Document,
    parsing::inline::Variant,
    render::{Attribute, HashtagRenderer, HtmlRenderer, RenderError, Resolver},
};

/// How hashtags are recognized and rendered.
#[derive(Clone, Default)]
pub struct HashtagOptions {
    /// Which hashtag syntax to recognize.
    pub variant: Variant,
    /// Extra attributes for generated links.
    pub attributes: Vec<Attribute>,
    /// Supplies link destinations. Without one, tags render as plain spans.
    pub resolver: Option<Arc<dyn Resolver>>,
}

impl HashtagOptions {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }
}

/// Markdown with hashtag support: parse, render, or both at once.
///
/// ```
/// use markdown_hashtag_engine::{HashtagOptions, Markdown, PrefixResolver};
///
/// let md = Markdown::new(HashtagOptions::default().with_resolver(PrefixResolver::new("/tag/")));
/// assert_eq!(
///     md.convert("#foo").unwrap(),
///     "<p><span class=\"hashtag\"><a href=\"/tag/foo\">#foo</a></span></p>\n",
/// );
/// ```
#[derive(Clone, Default)]
pub struct Markdown {
    variant: Variant,
    html: HtmlRenderer,
}

impl Markdown {
    pub fn new(options: HashtagOptions) -> Self {
        let mut hashtags = HashtagRenderer::new().with_attributes(options.attributes);
        if let Some(resolver) = options.resolver {
            hashtags = hashtags.with_resolver(resolver);
        }
        Self {
            variant: options.variant,
            html: HtmlRenderer::new(hashtags),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn parse(&self, src: &str) -> Document {
        Document::parse(src, self.variant)
    }

    pub fn render<W: std::io::Write>(&self, doc: &Document, w: &mut W) -> Result<(), RenderError> {
        self.html.render(doc, w)
    }

    /// Parses and renders `src` to an HTML string.
    pub fn convert(&self, src: &str) -> Result<String, RenderError> {
        let doc = self.parse(src);
        let mut buf = Vec::with_capacity(src.len() * 2);
        self.render(&doc, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

use xi_rope::Rope;

use crate::parsing::{
    blocks::BlockNode,
    inline::{InlineNode, Variant},
    parse_document, parse_inline_for_block,
    snapshot::{self, Snap},
};

/// A block together with its inline nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub node: BlockNode,
    /// Empty for raw blocks such as fenced code.
    pub inlines: Vec<InlineNode>,
}

/// A fully parsed Markdown document: the source text plus block and inline
/// nodes whose spans point into it.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    variant: Variant,
    blocks: Vec<DocBlock>,
}

impl Document {
    /// Parses `src`, recognizing hashtags of the given variant.
    pub fn parse(src: &str, variant: Variant) -> Self {
        let rope = Rope::from(src);
        let blocks: Vec<_> = parse_document(&rope)
            .blocks
            .into_iter()
            .map(|node| {
                let inlines = parse_inline_for_block(&rope, &node, variant);
                DocBlock { node, inlines }
            })
            .collect();
        log::trace!("parsed {} blocks ({variant} hashtags)", blocks.len());

        Self {
            source: src.to_owned(),
            variant,
            blocks,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn blocks(&self) -> &[DocBlock] {
        &self.blocks
    }

    /// All hashtag nodes in document order.
    pub fn hashtags(&self) -> impl Iterator<Item = &InlineNode> {
        self.blocks
            .iter()
            .flat_map(|b| &b.inlines)
            .filter(|n| matches!(n, InlineNode::Hashtag { .. }))
    }

    /// A serializable dump of the document structure.
    pub fn snapshot(&self) -> Snap {
        let rope = Rope::from(self.source.as_str());
        let parsed = parse_document(&rope);
        snapshot::normalize(&rope, &parsed.blocks, self.variant)
    }

    /// Every hashtag as written, `#` included, in document order.
    pub fn tags(&self) -> Vec<&str> {
        self.hashtags()
            .map(|n| n.span().text(&self.source))
            .collect()
    }
}

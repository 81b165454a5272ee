use std::collections::BTreeMap;

use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::{InlineNode, Variant},
    parse_inline_for_block,
    rope::slice::preview,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BlockSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InlineSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub parts: BTreeMap<String, (usize, usize)>,
}

pub fn normalize(rope: &Rope, blocks: &[BlockNode], variant: Variant) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let kind = match &b.kind {
                BlockKind::Paragraph => "Paragraph".to_string(),
                BlockKind::Heading { level } => format!("Heading({level})"),
                BlockKind::FencedCode { kind } => format!("FencedCode({kind:?})"),
            };

            let inline = parse_inline_for_block(rope, b, variant)
                .into_iter()
                .map(|n| {
                    let mut parts = BTreeMap::new();
                    match &n {
                        InlineNode::Text(_) => {}
                        InlineNode::CodeSpan { inner, .. } => {
                            parts.insert("inner".into(), (inner.start, inner.end));
                        }
                        InlineNode::Hashtag { tag, .. } => {
                            parts.insert("tag".into(), (tag.start, tag.end));
                        }
                    }
                    let sp = n.span();
                    InlineSnap {
                        kind: n.kind_name().into(),
                        span: (sp.start, sp.end),
                        text: preview(rope, sp, 60),
                        parts,
                    }
                })
                .collect();

            BlockSnap {
                kind,
                span: (b.span.start, b.span.end),
                text: preview(rope, b.span, 80),
                inline,
            }
        })
        .collect();

    Snap { blocks }
}

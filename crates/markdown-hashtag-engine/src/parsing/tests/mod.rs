//! Document-level tests for the parsing module.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, kinds::FenceKind},
    inline::{InlineNode, Variant},
    parse_document, parse_inline_for_block,
    rope::{slice::slice_to_string, span::Span},
    snapshot,
};

fn tags(md: &str, variant: Variant) -> Vec<String> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc.blocks, variant);

    doc.blocks
        .iter()
        .flat_map(|b| parse_inline_for_block(&rope, b, variant))
        .filter_map(|n| match n {
            InlineNode::Hashtag { tag, .. } => Some(slice_to_string(&rope, tag)),
            _ => None,
        })
        .collect()
}

#[rstest]
#[case::paragraph("Plan #work today", Variant::Default, &["work"])]
#[case::line_start("#todo buy milk", Variant::Default, &["todo"])]
#[case::heading("# Notes #journal", Variant::Default, &["journal"])]
#[case::heading_marker_is_not_a_tag("## 2024", Variant::Obsidian, &[])]
#[case::fence_is_raw("```sh\n#comment\n```\n#after", Variant::Default, &["after"])]
#[case::code_span_is_raw("`#x` and #y", Variant::Default, &["y"])]
#[case::second_line("first\n#second line", Variant::Default, &["second"])]
#[case::obsidian_numbers("#2024 #2024-q1", Variant::Obsidian, &["2024-q1"])]
#[case::default_numbers("#2024 #q1", Variant::Default, &["q1"])]
fn document_tags(#[case] md: &str, #[case] variant: Variant, #[case] want: &[&str]) {
    assert_eq!(tags(md, variant), want);
}

/// Slicing the rope with a hashtag's full span gives back the source text.
#[test]
fn hashtag_raw_text_round_trips() {
    let md = "Ideas: #café/menu, #✅/🚧 and #plain.\n";
    let rope = Rope::from(md);
    let doc = parse_document(&rope);

    let raws: Vec<_> = doc
        .blocks
        .iter()
        .flat_map(|b| parse_inline_for_block(&rope, b, Variant::Obsidian))
        .filter_map(|n| match n {
            InlineNode::Hashtag { full, .. } => Some(full),
            _ => None,
        })
        .map(|full| &md[full.range()])
        .collect();

    assert_eq!(raws, vec!["#café/menu", "#✅/🚧", "#plain"]);
}

#[test]
fn paragraph_lines_are_joined_and_ending_dropped() {
    let rope = Rope::from("one #a\ntwo #b\n\nthree\n");
    let doc = parse_document(&rope);

    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0].kind, BlockKind::Paragraph);
    assert_eq!(doc.blocks[0].span, Span::new(0, 14));
    assert_eq!(doc.blocks[0].content_span, Span::new(0, 13));
    assert_eq!(slice_to_string(&rope, doc.blocks[1].content_span), "three");
}

#[test]
fn heading_interrupts_paragraph() {
    let rope = Rope::from("text\n# Head\nmore");
    let doc = parse_document(&rope);
    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Paragraph,
            BlockKind::Heading { level: 1 },
            BlockKind::Paragraph,
        ]
    );
}

#[test]
fn fence_content_excludes_fence_lines() {
    let rope = Rope::from("~~~\ncode #x\n~~~\n");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::FencedCode {
            kind: FenceKind::Tildes
        }
    );
    assert_eq!(
        slice_to_string(&rope, doc.blocks[0].content_span),
        "code #x\n"
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    let rope = Rope::from("```\n#a\n#b");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(slice_to_string(&rope, doc.blocks[0].content_span), "#a\n#b");
    assert!(parse_inline_for_block(&rope, &doc.blocks[0], Variant::Default).is_empty());
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let rope = Rope::from("");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let rope = Rope::from("\n\n\n");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
}

//! Editor operation tests
//!
//! These exercise the four pure operations: add from the catalog, shallow
//! merge update, delete, and single-step move, including their error and
//! boundary behavior.

use serde_json::{json, Map, Value};

use crate::core::registry::TemplateRegistry;
use crate::core::schema::{validate_content, ALL_KINDS};
use crate::core::{BlockKind, PageContent};
use crate::editor::{add_block, delete_block, move_block, update_block, Direction, EditError};

fn partial(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Build content with one block of each given kind
fn content_of(kinds: &[BlockKind], registry: &TemplateRegistry) -> PageContent {
    let mut content = PageContent::new();
    for kind in kinds {
        let (next, _) = add_block(&content, *kind, registry).unwrap();
        content = next;
    }
    content
}

#[test]
fn test_add_block_uses_template_defaults() {
    let registry = TemplateRegistry::builtin();

    // For every kind in the catalog, the new last block carries the
    // template's default payload and the requested kind.
    for kind in ALL_KINDS {
        let (content, index) = add_block(&PageContent::new(), kind, &registry).unwrap();
        assert_eq!(index, 0);
        let block = &content.blocks[index];
        assert_eq!(block.kind, kind.as_str());
        assert_eq!(block.data, registry.get(kind).unwrap().defaults);
    }
}

#[test]
fn test_add_block_appends_at_end() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading, BlockKind::Paragraph], &registry);

    let (content, index) = add_block(&content, BlockKind::Quote, &registry).unwrap();
    assert_eq!(index, 2);
    assert_eq!(content.blocks[2].kind, "quote");
}

#[test]
fn test_add_block_unknown_type() {
    let registry = TemplateRegistry::empty();
    let result = add_block(&PageContent::new(), BlockKind::Heading, &registry);
    assert!(matches!(
        result.unwrap_err(),
        EditError::UnknownBlockType(_)
    ));
}

#[test]
fn test_add_block_defaults_are_not_shared() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::List, BlockKind::List], &registry);

    // Mutating one block's items must not affect the sibling instantiated
    // from the same template.
    let updated = update_block(&content, 0, partial(&[("items", json!(["a", "b"]))])).unwrap();
    assert_eq!(updated.blocks[1].data.get("items"), Some(&json!([""])));
}

#[test]
fn test_add_block_defaults_validate() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&ALL_KINDS, &registry);
    let result = validate_content(&content, &registry);
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(!result.has_warnings());
}

#[test]
fn test_update_block_merges_shallowly() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading], &registry);

    let updated = update_block(
        &content,
        0,
        partial(&[("text", json!("Hello")), ("level", json!(3))]),
    )
    .unwrap();

    let data = &updated.blocks[0].data;
    assert_eq!(data.get("text"), Some(&json!("Hello")));
    assert_eq!(data.get("level"), Some(&json!(3)));
    // Untouched keys survive the merge
    assert_eq!(data.get("align"), Some(&json!("left")));
}

#[test]
fn test_update_block_replaces_nested_values_wholesale() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Columns], &registry);

    let updated = update_block(
        &content,
        0,
        partial(&[("columns", json!([{ "width": 100, "blocks": [] }]))]),
    )
    .unwrap();

    let columns = updated.blocks[0].data.get("columns").unwrap();
    assert_eq!(columns.as_array().unwrap().len(), 1);
}

#[test]
fn test_update_block_keeps_id_and_kind() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Paragraph], &registry);
    let id = content.blocks[0].id;

    let updated = update_block(&content, 0, partial(&[("text", json!("new"))])).unwrap();
    assert_eq!(updated.blocks[0].id, id);
    assert_eq!(updated.blocks[0].kind, "paragraph");
}

#[test]
fn test_update_block_does_not_mutate_input() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Paragraph], &registry);
    let before = content.clone();

    update_block(&content, 0, partial(&[("text", json!("changed"))])).unwrap();
    assert_eq!(content, before);
}

#[test]
fn test_update_block_index_out_of_range() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Paragraph], &registry);

    let result = update_block(&content, 1, partial(&[("text", json!("x"))]));
    assert!(matches!(
        result.unwrap_err(),
        EditError::IndexOutOfRange { index: 1, len: 1 }
    ));
}

#[test]
fn test_delete_block_shifts_later_blocks() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(
        &[BlockKind::Heading, BlockKind::Paragraph, BlockKind::Quote],
        &registry,
    );
    let last_id = content.blocks[2].id;

    let deleted = delete_block(&content, 1).unwrap();
    assert_eq!(deleted.len(), 2);
    assert_eq!(deleted.blocks[0].kind, "heading");
    assert_eq!(deleted.blocks[1].id, last_id);
}

#[test]
fn test_delete_block_index_out_of_range() {
    let result = delete_block(&PageContent::new(), 0);
    assert!(matches!(
        result.unwrap_err(),
        EditError::IndexOutOfRange { index: 0, len: 0 }
    ));
}

#[test]
fn test_delete_then_add_does_not_reuse_id() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Spacer], &registry);
    let deleted_id = content.blocks[0].id;

    let content = delete_block(&content, 0).unwrap();
    let (content, index) = add_block(&content, BlockKind::Spacer, &registry).unwrap();
    assert_ne!(content.blocks[index].id, deleted_id);
}

#[test]
fn test_move_block_swaps_neighbors() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading, BlockKind::Paragraph], &registry);

    let moved = move_block(&content, 1, Direction::Up).unwrap();
    assert_eq!(moved.blocks[0].kind, "paragraph");
    assert_eq!(moved.blocks[1].kind, "heading");
}

#[test]
fn test_move_first_up_is_noop() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading, BlockKind::Paragraph], &registry);

    let moved = move_block(&content, 0, Direction::Up).unwrap();
    assert_eq!(moved, content);
}

#[test]
fn test_move_last_down_is_noop() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading, BlockKind::Paragraph], &registry);

    let moved = move_block(&content, 1, Direction::Down).unwrap();
    assert_eq!(moved, content);
}

#[test]
fn test_move_block_index_out_of_range() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading], &registry);

    let result = move_block(&content, 5, Direction::Up);
    assert!(matches!(
        result.unwrap_err(),
        EditError::IndexOutOfRange { index: 5, len: 1 }
    ));
}

#[test]
fn test_validate_flags_out_of_schema_attribute() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Spacer], &registry);

    // update_block itself is permissive; schema enforcement is validation's job
    let content = update_block(&content, 0, partial(&[("bogus", json!(1))])).unwrap();
    let result = validate_content(&content, &registry);
    assert!(!result.valid);
    assert!(result.errors[0].contains("bogus"));
}

#[test]
fn test_validate_flags_wrong_value_kind() {
    let registry = TemplateRegistry::builtin();
    let content = content_of(&[BlockKind::Heading], &registry);

    let content = update_block(&content, 0, partial(&[("level", json!("two"))])).unwrap();
    let result = validate_content(&content, &registry);
    assert!(!result.valid);
}

#[test]
fn test_validate_warns_on_unknown_kind() {
    let registry = TemplateRegistry::builtin();
    let mut content = PageContent::new();
    content.blocks.push(crate::core::Block::new(
        "carousel",
        Map::new(),
    ));

    let result = validate_content(&content, &registry);
    assert!(result.valid);
    assert!(result.has_warnings());
}

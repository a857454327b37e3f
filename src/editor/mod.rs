//! Editor operations over page content
//!
//! All operations are pure: they take a `&PageContent`, never mutate it, and
//! return a fresh value. Errors are usage errors reported immediately to the
//! caller; no partial mutation can occur.

pub mod session;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::registry::TemplateRegistry;
use crate::core::{Block, BlockKind, PageContent};

pub use session::EditorSession;

/// Direction for single-step block reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Editor operation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum EditError {
    /// The requested kind has no template in the catalog
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    /// The index does not name a block in the sequence
    #[error("Block index {index} out of range (page has {len} blocks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Append a new block instantiated from the catalog template for `kind`
///
/// The new block gets a freshly generated id and a deep copy of the
/// template's default payload. Returns the new content together with the
/// index of the inserted block (the editor UI focuses it).
pub fn add_block(
    content: &PageContent,
    kind: BlockKind,
    registry: &TemplateRegistry,
) -> Result<(PageContent, usize), EditError> {
    let template = registry
        .get(kind)
        .map_err(|_| EditError::UnknownBlockType(kind.as_str().to_string()))?;

    // Map is cloned by value; no default payload is ever shared across blocks.
    let block = Block::new(kind.as_str(), template.defaults.clone());
    debug!(kind = kind.as_str(), id = %block.id, "add block");

    let mut next = content.clone();
    next.blocks.push(block);
    let index = next.blocks.len() - 1;
    Ok((next, index))
}

/// Merge attribute values into the block at `index`
///
/// The merge is shallow at the top level: nested objects and arrays are
/// replaced wholesale, matching form-field update semantics. The block's id
/// and kind are untouched.
pub fn update_block(
    content: &PageContent,
    index: usize,
    partial: Map<String, Value>,
) -> Result<PageContent, EditError> {
    check_index(content, index)?;

    let mut next = content.clone();
    let block = &mut next.blocks[index];
    debug!(index, id = %block.id, keys = partial.len(), "update block");
    for (key, value) in partial {
        block.data.insert(key, value);
    }
    Ok(next)
}

/// Remove the block at `index`; later blocks shift down one position
pub fn delete_block(content: &PageContent, index: usize) -> Result<PageContent, EditError> {
    check_index(content, index)?;

    let mut next = content.clone();
    let removed = next.blocks.remove(index);
    debug!(index, id = %removed.id, "delete block");
    Ok(next)
}

/// Swap the block at `index` with its neighbor in the given direction
///
/// Moving the first block up or the last block down is a silent no-op, not
/// an error; the returned content equals the input.
pub fn move_block(
    content: &PageContent,
    index: usize,
    direction: Direction,
) -> Result<PageContent, EditError> {
    check_index(content, index)?;

    let target = match direction {
        Direction::Up => {
            if index == 0 {
                return Ok(content.clone());
            }
            index - 1
        }
        Direction::Down => {
            if index + 1 == content.blocks.len() {
                return Ok(content.clone());
            }
            index + 1
        }
    };

    let mut next = content.clone();
    next.blocks.swap(index, target);
    debug!(from = index, to = target, "move block");
    Ok(next)
}

fn check_index(content: &PageContent, index: usize) -> Result<(), EditError> {
    if index >= content.blocks.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: content.blocks.len(),
        });
    }
    Ok(())
}

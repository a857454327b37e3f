//! Content Blocks - block-based page content engine
//!
//! This crate provides the content model for block-based pages: a static
//! catalog of block templates, pure editor operations over an ordered block
//! sequence, and an HTML renderer with page-level layout wrappers.

pub mod core;
pub mod editor;
pub mod render;
pub mod store;
mod tests;

// Re-export commonly used types
pub use crate::core::registry::TemplateRegistry;
pub use crate::core::template::{BlockTemplate, TemplateCategory};
pub use crate::core::{Block, BlockId, BlockKind, ContentError, PageContent};
pub use crate::editor::{
    add_block, delete_block, move_block, update_block, Direction, EditError, EditorSession,
};
pub use crate::render::{render, PageTemplate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

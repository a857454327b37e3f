//! Editing session state
//!
//! Wraps a working [`PageContent`] value together with the transient "active
//! block" focus index the editor UI tracks. The focus index is view state
//! only and is never part of the persisted content. The session is also where
//! the raw-JSON escape hatch lives: structured edits and raw-text edits are
//! two projections of the one content value held here, so the two views can
//! never diverge.

use serde_json::{Map, Value};
use tracing::warn;

use crate::core::registry::TemplateRegistry;
use crate::core::{BlockKind, ContentError, PageContent};

use super::{add_block, delete_block, move_block, update_block, Direction, EditError};

/// One editing session over a page's content
#[derive(Debug, Clone)]
pub struct EditorSession {
    content: PageContent,
    /// Index of the focused block, if any. Transient view state.
    active: Option<usize>,
}

impl EditorSession {
    /// Start a session over existing content with nothing focused
    pub fn new(content: PageContent) -> Self {
        Self {
            content,
            active: None,
        }
    }

    /// The current content value
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// Consume the session, yielding the content for persistence
    pub fn into_content(self) -> PageContent {
        self.content
    }

    /// The focused block index, if any
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Focus the block at `index`, or clear focus with `None`
    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = match index {
            Some(i) if i < self.content.len() => Some(i),
            _ => None,
        };
    }

    /// Append a block from the catalog and focus it
    pub fn add_block(
        &mut self,
        kind: BlockKind,
        registry: &TemplateRegistry,
    ) -> Result<usize, EditError> {
        let (next, index) = add_block(&self.content, kind, registry)?;
        self.content = next;
        self.active = Some(index);
        Ok(index)
    }

    /// Merge attribute values into the block at `index`
    pub fn update_block(
        &mut self,
        index: usize,
        partial: Map<String, Value>,
    ) -> Result<(), EditError> {
        self.content = update_block(&self.content, index, partial)?;
        Ok(())
    }

    /// Delete the block at `index`, dropping or shifting focus to match
    pub fn delete_block(&mut self, index: usize) -> Result<(), EditError> {
        self.content = delete_block(&self.content, index)?;
        self.active = match self.active {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Ok(())
    }

    /// Move the block at `index` one step; focus follows the moved block
    pub fn move_block(&mut self, index: usize, direction: Direction) -> Result<(), EditError> {
        let before = self.content.clone();
        self.content = move_block(&self.content, index, direction)?;
        // Boundary moves are no-ops; only track focus when something moved.
        if self.content != before {
            let target = match direction {
                Direction::Up => index - 1,
                Direction::Down => index + 1,
            };
            if self.active == Some(index) {
                self.active = Some(target);
            } else if self.active == Some(target) {
                self.active = Some(index);
            }
        }
        Ok(())
    }

    /// The raw-JSON projection of the current content
    pub fn to_raw_json(&self) -> String {
        self.content.to_json_string()
    }

    /// Replace the content from raw JSON text
    ///
    /// On malformed input the session keeps its last known-good content
    /// untouched: corruption at the boundary never enters the live session.
    pub fn apply_raw_json(&mut self, text: &str) -> Result<(), ContentError> {
        match PageContent::from_json_str(text) {
            Ok(content) => {
                self.content = content;
                // The old focus index may no longer name the same block.
                self.active = None;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "rejecting raw content edit");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::TemplateRegistry;

    fn session_with(n: usize) -> (EditorSession, TemplateRegistry) {
        let registry = TemplateRegistry::builtin();
        let mut session = EditorSession::new(PageContent::new());
        for _ in 0..n {
            session.add_block(BlockKind::Paragraph, &registry).unwrap();
        }
        (session, registry)
    }

    #[test]
    fn test_add_focuses_new_block() {
        let (mut session, registry) = session_with(2);
        let index = session.add_block(BlockKind::Heading, &registry).unwrap();
        assert_eq!(index, 2);
        assert_eq!(session.active(), Some(2));
    }

    #[test]
    fn test_delete_clears_focus_on_focused_block() {
        let (mut session, _) = session_with(3);
        session.set_active(Some(1));
        session.delete_block(1).unwrap();
        assert_eq!(session.active(), None);
        assert_eq!(session.content().len(), 2);
    }

    #[test]
    fn test_delete_shifts_focus_above() {
        let (mut session, _) = session_with(3);
        session.set_active(Some(2));
        session.delete_block(0).unwrap();
        assert_eq!(session.active(), Some(1));
    }

    #[test]
    fn test_move_carries_focus() {
        let (mut session, _) = session_with(3);
        session.set_active(Some(1));
        session.move_block(1, Direction::Down).unwrap();
        assert_eq!(session.active(), Some(2));
    }

    #[test]
    fn test_boundary_move_keeps_focus() {
        let (mut session, _) = session_with(3);
        session.set_active(Some(0));
        session.move_block(0, Direction::Up).unwrap();
        assert_eq!(session.active(), Some(0));
    }

    #[test]
    fn test_raw_json_round_trip() {
        let (mut session, _) = session_with(2);
        let raw = session.to_raw_json();
        let before = session.content().clone();
        session.apply_raw_json(&raw).unwrap();
        assert_eq!(session.content(), &before);
    }

    #[test]
    fn test_malformed_raw_json_keeps_last_known_good() {
        let (mut session, _) = session_with(2);
        let before = session.content().clone();

        assert!(session.apply_raw_json("{not json").is_err());
        assert_eq!(session.content(), &before);

        // Parsable JSON with the wrong top-level shape is rejected too.
        assert!(session.apply_raw_json("{\"pages\": []}").is_err());
        assert_eq!(session.content(), &before);
    }
}

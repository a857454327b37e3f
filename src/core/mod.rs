//! Core content model
//!
//! This module defines the fundamental content types: block identifiers, the
//! block unit itself, and the ordered page content a page owns. The attribute
//! payload of a block is a free-form JSON map whose permitted shape is
//! determined by the block's kind (see [`schema`]).

pub mod registry;
pub mod schema;
pub mod template;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub use schema::BlockKind;

/// Unique identifier for a block within a page
///
/// Assigned once at creation time and stable across edits. Identity is what
/// reorder and delete operate on; rendering order is positional. Ids are
/// random UUIDs and are never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Generate a new random block ID
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One atomic unit of page content
///
/// The `kind` tag stays a plain string at this layer so that content written
/// by a newer editor (carrying tags this build does not know) deserializes,
/// re-serializes, and renders (as nothing) without loss. The typed view over
/// the tag is [`BlockKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique within the owning page's block sequence
    pub id: BlockId,
    /// Block type tag (e.g. "heading", "image")
    #[serde(rename = "type")]
    pub kind: String,
    /// Attribute payload; permitted keys and value kinds follow from `kind`
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Block {
    /// Construct a block with a fresh id and the given payload
    pub fn new(kind: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: BlockId::new(),
            kind: kind.into(),
            data,
        }
    }

    /// The typed view of this block's tag, if it is a known kind
    pub fn known_kind(&self) -> Option<BlockKind> {
        self.kind.parse().ok()
    }
}

/// The ordered block sequence belonging to one page
///
/// Order is rendering order. The structure round-trips through JSON exactly;
/// it is what the persistence collaborator stores and returns verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub blocks: Vec<Block>,
}

impl PageContent {
    /// Create empty page content
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Number of blocks in the sequence
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Parse page content from its JSON serialization
    ///
    /// The top-level shape must be `{"blocks": [...]}`. Anything else is
    /// [`ContentError::MalformedContent`]; callers at an editing boundary
    /// keep their last known-good value when this fails.
    pub fn from_json_str(text: &str) -> Result<Self, ContentError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ContentError::MalformedContent {
                reason: format!("invalid JSON: {}", e),
            })?;
        if !value.is_object() || value.get("blocks").map_or(true, |b| !b.is_array()) {
            return Err(ContentError::MalformedContent {
                reason: "top-level shape must be {\"blocks\": [...]}".into(),
            });
        }
        serde_json::from_value(value).map_err(|e| ContentError::MalformedContent {
            reason: format!("invalid block entry: {}", e),
        })
    }

    /// Serialize to the canonical pretty-printed JSON form
    pub fn to_json_string(&self) -> String {
        // Serialization of this shape cannot fail: every value is already JSON.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{\"blocks\":[]}".into())
    }
}

/// Content deserialization errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    /// Persisted blob or raw-text edit whose shape is not `{blocks: [...]}`
    #[error("Malformed page content: {reason}")]
    MalformedContent { reason: String },
}

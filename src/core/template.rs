//! Block template catalog entries
//!
//! A template is a static catalog entry associating a block kind with a human
//! label, a display icon, a coarse category, and the default payload used
//! when a new block of that kind is instantiated. Templates are configuration
//! loaded once per process, not persisted and not user-editable.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::schema::{BlockKind, ALL_KINDS};

/// Coarse template category used to group the editor's palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    /// Text content (headings, paragraphs, quotes, lists)
    Content,
    /// Embedded media (images, video, code)
    Media,
    /// Structural chrome (dividers, spacers, columns, hero)
    Layout,
    /// Blocks backed by external collaborators or raw markup
    Special,
}

impl TemplateCategory {
    /// Get a human-readable name for the category
    pub fn display_name(&self) -> &str {
        match self {
            TemplateCategory::Content => "Content",
            TemplateCategory::Media => "Media",
            TemplateCategory::Layout => "Layout",
            TemplateCategory::Special => "Special",
        }
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Static catalog entry for one block kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTemplate {
    /// The kind this template instantiates
    pub kind: BlockKind,
    /// Human-readable palette label
    pub label: String,
    /// Icon identifier for UI representation
    pub icon: String,
    /// Palette grouping
    pub category: TemplateCategory,
    /// Default payload for new blocks; deep-copied per instantiation
    pub defaults: Map<String, Value>,
}

impl BlockTemplate {
    /// Construct a template entry
    pub fn new(
        kind: BlockKind,
        label: impl Into<String>,
        icon: impl Into<String>,
        category: TemplateCategory,
        defaults: Value,
    ) -> Self {
        let defaults = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            kind,
            label: label.into(),
            icon: icon.into(),
            category,
            defaults,
        }
    }
}

/// The builtin template for a kind
pub fn builtin_template(kind: BlockKind) -> BlockTemplate {
    use TemplateCategory::*;
    match kind {
        BlockKind::Heading => BlockTemplate::new(
            kind,
            "Heading",
            "heading",
            Content,
            json!({ "text": "", "level": 2, "align": "left" }),
        ),
        BlockKind::Paragraph => BlockTemplate::new(
            kind,
            "Paragraph",
            "text",
            Content,
            json!({ "text": "", "align": "left" }),
        ),
        BlockKind::Image => BlockTemplate::new(
            kind,
            "Image",
            "image",
            Media,
            json!({ "url": "", "alt": "", "width": "full", "align": "center" }),
        ),
        BlockKind::Video => BlockTemplate::new(
            kind,
            "Video",
            "video",
            Media,
            json!({ "url": "", "provider": "youtube" }),
        ),
        BlockKind::Code => BlockTemplate::new(
            kind,
            "Code",
            "code",
            Media,
            json!({ "code": "", "language": "text", "showLineNumbers": false }),
        ),
        BlockKind::Quote => BlockTemplate::new(
            kind,
            "Quote",
            "quote",
            Content,
            json!({ "text": "", "align": "left" }),
        ),
        BlockKind::List => BlockTemplate::new(
            kind,
            "List",
            "list",
            Content,
            json!({ "style": "unordered", "items": [""] }),
        ),
        BlockKind::Divider => BlockTemplate::new(
            kind,
            "Divider",
            "minus",
            Layout,
            json!({ "style": "solid", "color": "#e2e8f0", "width": "100%" }),
        ),
        BlockKind::Spacer => BlockTemplate::new(
            kind,
            "Spacer",
            "arrows-vertical",
            Layout,
            json!({ "height": "2rem" }),
        ),
        BlockKind::Button => BlockTemplate::new(
            kind,
            "Button",
            "cursor-click",
            Content,
            json!({ "text": "Learn more", "url": "", "style": "primary", "size": "md", "align": "left" }),
        ),
        BlockKind::Columns => BlockTemplate::new(
            kind,
            "Columns",
            "columns",
            Layout,
            json!({
                "columns": [
                    { "width": 50, "blocks": [] },
                    { "width": 50, "blocks": [] }
                ],
                "gap": "1rem"
            }),
        ),
        BlockKind::Hero => BlockTemplate::new(
            kind,
            "Hero",
            "sparkles",
            Layout,
            json!({
                "title": "",
                "backgroundImage": "",
                "height": "medium",
                "overlay": true,
                "overlayOpacity": 0.5
            }),
        ),
        BlockKind::HomeSections => BlockTemplate::new(
            kind,
            "Homepage Sections",
            "home",
            Special,
            json!({}),
        ),
        BlockKind::ContactForm => BlockTemplate::new(
            kind,
            "Contact Form",
            "mail",
            Special,
            json!({ "fields": ["name", "email", "message"], "submitText": "Send" }),
        ),
        BlockKind::ContactInfo => BlockTemplate::new(
            kind,
            "Contact Info",
            "phone",
            Special,
            json!({ "socialLinks": [] }),
        ),
        BlockKind::RecipesGrid => BlockTemplate::new(
            kind,
            "Recipes Grid",
            "grid",
            Special,
            json!({ "limit": 6, "sortBy": "newest" }),
        ),
        BlockKind::RegionsGrid => BlockTemplate::new(
            kind,
            "Regions Grid",
            "map",
            Special,
            json!({ "limit": 8 }),
        ),
        BlockKind::CustomHtml => BlockTemplate::new(
            kind,
            "Custom HTML",
            "code-brackets",
            Special,
            json!({ "html": "" }),
        ),
    }
}

/// All builtin templates in stable catalog order
pub fn builtin_templates() -> Vec<BlockTemplate> {
    ALL_KINDS.iter().copied().map(builtin_template).collect()
}

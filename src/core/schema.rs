//! Block kinds and attribute schemas
//!
//! The closed set of block type tags, plus the per-kind attribute schema the
//! editor surfaces and content validation checks against. The schema table is
//! colocated with the kind so adding a block type is a single-site change
//! here plus a catalog default, an editor form, and a renderer arm.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::registry::TemplateRegistry;
use super::PageContent;

/// The closed set of block type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Heading,
    Paragraph,
    Image,
    Video,
    Code,
    Quote,
    List,
    Divider,
    Spacer,
    Button,
    Columns,
    Hero,
    HomeSections,
    ContactForm,
    ContactInfo,
    RecipesGrid,
    RegionsGrid,
    CustomHtml,
}

/// All known kinds in stable catalog order
pub const ALL_KINDS: [BlockKind; 18] = [
    BlockKind::Heading,
    BlockKind::Paragraph,
    BlockKind::Image,
    BlockKind::Video,
    BlockKind::Code,
    BlockKind::Quote,
    BlockKind::List,
    BlockKind::Divider,
    BlockKind::Spacer,
    BlockKind::Button,
    BlockKind::Columns,
    BlockKind::Hero,
    BlockKind::HomeSections,
    BlockKind::ContactForm,
    BlockKind::ContactInfo,
    BlockKind::RecipesGrid,
    BlockKind::RegionsGrid,
    BlockKind::CustomHtml,
];

impl BlockKind {
    /// The wire tag for this kind (the `type` field value)
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::List => "list",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::Button => "button",
            BlockKind::Columns => "columns",
            BlockKind::Hero => "hero",
            BlockKind::HomeSections => "home-sections",
            BlockKind::ContactForm => "contact-form",
            BlockKind::ContactInfo => "contact-info",
            BlockKind::RecipesGrid => "recipes-grid",
            BlockKind::RegionsGrid => "regions-grid",
            BlockKind::CustomHtml => "custom-html",
        }
    }

    /// Attribute schema for this kind
    pub fn schema(&self) -> &'static [AttrSchema] {
        match self {
            BlockKind::Heading => &HEADING_SCHEMA,
            BlockKind::Paragraph => &PARAGRAPH_SCHEMA,
            BlockKind::Image => &IMAGE_SCHEMA,
            BlockKind::Video => &VIDEO_SCHEMA,
            BlockKind::Code => &CODE_SCHEMA,
            BlockKind::Quote => &QUOTE_SCHEMA,
            BlockKind::List => &LIST_SCHEMA,
            BlockKind::Divider => &DIVIDER_SCHEMA,
            BlockKind::Spacer => &SPACER_SCHEMA,
            BlockKind::Button => &BUTTON_SCHEMA,
            BlockKind::Columns => &COLUMNS_SCHEMA,
            BlockKind::Hero => &HERO_SCHEMA,
            BlockKind::HomeSections => &HOME_SECTIONS_SCHEMA,
            BlockKind::ContactForm => &CONTACT_FORM_SCHEMA,
            BlockKind::ContactInfo => &CONTACT_INFO_SCHEMA,
            BlockKind::RecipesGrid => &RECIPES_GRID_SCHEMA,
            BlockKind::RegionsGrid => &REGIONS_GRID_SCHEMA,
            BlockKind::CustomHtml => &CUSTOM_HTML_SCHEMA,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BlockKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Error for a tag outside the closed kind set
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown block kind: {0}")]
pub struct UnknownKind(pub String);

/// Value kinds an attribute may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// UTF-8 text
    Text,
    /// Integral number
    Integer,
    /// Floating point number (integers accepted)
    Float,
    /// Boolean flag
    Bool,
    /// One of a fixed set of string values
    Enum(&'static [&'static str]),
    /// Ordered sequence
    List,
    /// Nested map
    Object,
}

impl AttrKind {
    /// Whether a JSON value matches this attribute kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            AttrKind::Text => value.is_string(),
            AttrKind::Integer => value.is_i64() || value.is_u64(),
            AttrKind::Float => value.is_number(),
            AttrKind::Bool => value.is_boolean(),
            AttrKind::Enum(allowed) => value
                .as_str()
                .map_or(false, |s| allowed.iter().any(|a| *a == s)),
            AttrKind::List => value.is_array(),
            AttrKind::Object => value.is_object(),
        }
    }
}

/// Schema entry for one attribute of a block kind
#[derive(Debug, Clone, Copy)]
pub struct AttrSchema {
    /// Attribute name as it appears in `Block.data`
    pub name: &'static str,
    /// Expected value kind
    pub kind: AttrKind,
    /// Whether the attribute must be present
    pub required: bool,
}

impl AttrSchema {
    const fn required(name: &'static str, kind: AttrKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: AttrKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

static HEADING_SCHEMA: [AttrSchema; 4] = [
    AttrSchema::required("text", AttrKind::Text),
    AttrSchema::required("level", AttrKind::Integer),
    AttrSchema::required("align", AttrKind::Enum(&["left", "center", "right"])),
    AttrSchema::optional("color", AttrKind::Text),
];

static PARAGRAPH_SCHEMA: [AttrSchema; 3] = [
    AttrSchema::required("text", AttrKind::Text),
    AttrSchema::required("align", AttrKind::Enum(&["left", "center", "right", "justify"])),
    AttrSchema::optional("color", AttrKind::Text),
];

static IMAGE_SCHEMA: [AttrSchema; 6] = [
    AttrSchema::required("url", AttrKind::Text),
    AttrSchema::required("alt", AttrKind::Text),
    AttrSchema::optional("caption", AttrKind::Text),
    AttrSchema::required("width", AttrKind::Enum(&["full", "medium", "small"])),
    AttrSchema::required("align", AttrKind::Enum(&["left", "center", "right"])),
    AttrSchema::optional("link", AttrKind::Text),
];

static VIDEO_SCHEMA: [AttrSchema; 3] = [
    AttrSchema::required("url", AttrKind::Text),
    AttrSchema::required("provider", AttrKind::Enum(&["youtube", "vimeo", "direct"])),
    AttrSchema::optional("caption", AttrKind::Text),
];

static CODE_SCHEMA: [AttrSchema; 3] = [
    AttrSchema::required("code", AttrKind::Text),
    AttrSchema::required("language", AttrKind::Text),
    AttrSchema::required("showLineNumbers", AttrKind::Bool),
];

static QUOTE_SCHEMA: [AttrSchema; 3] = [
    AttrSchema::required("text", AttrKind::Text),
    AttrSchema::optional("author", AttrKind::Text),
    AttrSchema::required("align", AttrKind::Enum(&["left", "center", "right"])),
];

static LIST_SCHEMA: [AttrSchema; 2] = [
    AttrSchema::required("style", AttrKind::Enum(&["ordered", "unordered"])),
    AttrSchema::required("items", AttrKind::List),
];

static DIVIDER_SCHEMA: [AttrSchema; 3] = [
    AttrSchema::required("style", AttrKind::Enum(&["solid", "dashed", "dotted"])),
    AttrSchema::required("color", AttrKind::Text),
    AttrSchema::required("width", AttrKind::Text),
];

static SPACER_SCHEMA: [AttrSchema; 1] = [AttrSchema::required("height", AttrKind::Text)];

static BUTTON_SCHEMA: [AttrSchema; 5] = [
    AttrSchema::required("text", AttrKind::Text),
    AttrSchema::required("url", AttrKind::Text),
    AttrSchema::required("style", AttrKind::Enum(&["primary", "secondary", "outline"])),
    AttrSchema::required("size", AttrKind::Enum(&["sm", "md", "lg"])),
    AttrSchema::required("align", AttrKind::Enum(&["left", "center", "right"])),
];

static COLUMNS_SCHEMA: [AttrSchema; 2] = [
    AttrSchema::required("columns", AttrKind::List),
    AttrSchema::required("gap", AttrKind::Text),
];

static HERO_SCHEMA: [AttrSchema; 8] = [
    AttrSchema::required("title", AttrKind::Text),
    AttrSchema::optional("subtitle", AttrKind::Text),
    AttrSchema::optional("buttonText", AttrKind::Text),
    AttrSchema::optional("buttonLink", AttrKind::Text),
    AttrSchema::required("backgroundImage", AttrKind::Text),
    AttrSchema::required("height", AttrKind::Enum(&["small", "medium", "large", "full"])),
    AttrSchema::required("overlay", AttrKind::Bool),
    AttrSchema::required("overlayOpacity", AttrKind::Float),
];

static HOME_SECTIONS_SCHEMA: [AttrSchema; 1] = [AttrSchema::optional("message", AttrKind::Text)];

static CONTACT_FORM_SCHEMA: [AttrSchema; 3] = [
    AttrSchema::optional("title", AttrKind::Text),
    AttrSchema::required("fields", AttrKind::List),
    AttrSchema::optional("submitText", AttrKind::Text),
];

static CONTACT_INFO_SCHEMA: [AttrSchema; 4] = [
    AttrSchema::optional("email", AttrKind::Text),
    AttrSchema::optional("phone", AttrKind::Text),
    AttrSchema::optional("address", AttrKind::Text),
    AttrSchema::required("socialLinks", AttrKind::List),
];

static RECIPES_GRID_SCHEMA: [AttrSchema; 6] = [
    AttrSchema::optional("title", AttrKind::Text),
    AttrSchema::required("limit", AttrKind::Integer),
    AttrSchema::optional("category", AttrKind::Text),
    AttrSchema::optional("difficulty", AttrKind::Text),
    AttrSchema::optional("region", AttrKind::Text),
    AttrSchema::required("sortBy", AttrKind::Text),
];

static REGIONS_GRID_SCHEMA: [AttrSchema; 2] = [
    AttrSchema::optional("title", AttrKind::Text),
    AttrSchema::required("limit", AttrKind::Integer),
];

static CUSTOM_HTML_SCHEMA: [AttrSchema; 1] = [AttrSchema::required("html", AttrKind::Text)];

/// Result of validating page content against the block schemas
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (warnings do not fail validation)
    pub valid: bool,
    /// Error messages
    pub errors: Vec<String>,
    /// Warning messages
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error, marking the result invalid
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.valid = false;
        self.errors.push(msg.into());
    }

    /// Add a non-fatal warning
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Check if the validation has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the validation has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Merge another validation result into this one
    pub fn merge(mut self, other: ValidationResult) -> Self {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }
}

/// Validate page content against the registered block schemas
///
/// Unknown kinds are warnings, not errors: the renderer tolerates them (they
/// may come from content written by a newer editor). On a known kind, a
/// missing required attribute, an out-of-schema attribute, or a value of the
/// wrong kind is an error.
pub fn validate_content(content: &PageContent, registry: &TemplateRegistry) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (index, block) in content.blocks.iter().enumerate() {
        let kind = match block.known_kind() {
            Some(kind) => kind,
            None => {
                result.add_warning(format!(
                    "block {}: unknown kind '{}' (will render as nothing)",
                    index, block.kind
                ));
                continue;
            }
        };
        if !registry.contains(kind) {
            result.add_warning(format!(
                "block {}: kind '{}' is not in the template catalog",
                index, block.kind
            ));
        }

        let schema = kind.schema();
        for attr in schema {
            match block.data.get(attr.name) {
                Some(value) if value.is_null() && !attr.required => {}
                Some(value) if !attr.kind.accepts(value) => {
                    result.add_error(format!(
                        "block {} ({}): attribute '{}' has the wrong value kind",
                        index, block.kind, attr.name
                    ));
                }
                Some(_) => {}
                None if attr.required => {
                    result.add_error(format!(
                        "block {} ({}): missing required attribute '{}'",
                        index, block.kind, attr.name
                    ));
                }
                None => {}
            }
        }
        for key in block.data.keys() {
            if !schema.iter().any(|attr| attr.name == key) {
                result.add_error(format!(
                    "block {} ({}): attribute '{}' is not in the schema",
                    index, block.kind, key
                ));
            }
        }
    }

    result
}

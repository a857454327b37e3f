//! Page rendering
//!
//! Maps persisted page content to an output node tree: per-block dispatch in
//! sequence order, wrapped in one of four page-level layout templates. The
//! renderer never mutates blocks and never fails for data-shape reasons; bad
//! blocks degrade to nothing, block by block.

pub mod blocks;
pub mod media;
pub mod node;

use crate::core::PageContent;

pub use blocks::render_block;
pub use media::{scaled_height, Tier, VideoProvider};
pub use node::Node;

/// Page-level layout wrapper selection
///
/// Wrapper choice never alters block order or content, only the surrounding
/// chrome. Unknown template strings fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTemplate {
    /// Content constrained to a centered column
    #[default]
    Default,
    /// No width constraint
    FullWidth,
    /// Content alongside a fixed auxiliary panel on the left
    SidebarLeft,
    /// Content alongside a fixed auxiliary panel on the right
    SidebarRight,
}

impl PageTemplate {
    /// The template's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTemplate::Default => "default",
            PageTemplate::FullWidth => "full-width",
            PageTemplate::SidebarLeft => "sidebar-left",
            PageTemplate::SidebarRight => "sidebar-right",
        }
    }

    /// Parse a template name; anything unrecognized is `Default`
    pub fn parse(name: &str) -> Self {
        match name {
            "full-width" => PageTemplate::FullWidth,
            "sidebar-left" => PageTemplate::SidebarLeft,
            "sidebar-right" => PageTemplate::SidebarRight,
            _ => PageTemplate::Default,
        }
    }
}

impl std::str::FromStr for PageTemplate {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PageTemplate::parse(s))
    }
}

/// Render page content inside the layout wrapper for `template`
///
/// Blocks render in sequence order; unknown kinds yield no output node and
/// never fail the page.
pub fn render(content: &PageContent, template: PageTemplate) -> Node {
    let rendered = content.blocks.iter().filter_map(render_block);
    let body = Node::element("div")
        .attr("class", "page-blocks")
        .children(rendered);
    wrap(body, template)
}

/// The sidebar panel is host-provided chrome; a static placeholder stands in.
fn sidebar() -> Node {
    Node::element("aside").attr("class", "page-sidebar")
}

fn wrap(body: Node, template: PageTemplate) -> Node {
    match template {
        PageTemplate::Default => Node::element("div")
            .attr("class", "layout layout-default")
            .attr("style", "max-width: 64rem; margin: 0 auto")
            .child(body),
        PageTemplate::FullWidth => Node::element("div")
            .attr("class", "layout layout-full-width")
            .child(body),
        PageTemplate::SidebarLeft => Node::element("div")
            .attr("class", "layout layout-sidebar-left")
            .attr("style", "display: flex")
            .child(sidebar())
            .child(body),
        PageTemplate::SidebarRight => Node::element("div")
            .attr("class", "layout layout-sidebar-right")
            .attr("style", "display: flex")
            .child(body)
            .child(sidebar()),
    }
}

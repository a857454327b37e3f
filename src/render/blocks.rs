//! Per-kind block rendering
//!
//! One arm per known block kind, each a pure mapping from the block's data to
//! an output node. A block whose kind is unknown, or whose data is missing
//! what the arm minimally needs, yields `None`: one bad block never blocks
//! the rest of the page.

use serde_json::{Map, Value};
use tracing::warn;

use crate::core::{Block, BlockKind};

use super::media::{scaled_height, Tier, VideoProvider};
use super::node::Node;

/// Render one block, or `None` for unknown kinds and unusable data
pub fn render_block(block: &Block) -> Option<Node> {
    let kind = match block.known_kind() {
        Some(kind) => kind,
        None => {
            warn!(kind = %block.kind, id = %block.id, "skipping unknown block kind");
            return None;
        }
    };
    let data = &block.data;

    match kind {
        BlockKind::Heading => render_heading(data),
        BlockKind::Paragraph => render_paragraph(data),
        BlockKind::Image => render_image(data),
        BlockKind::Video => render_video(data),
        BlockKind::Code => render_code(data),
        BlockKind::Quote => render_quote(data),
        BlockKind::List => render_list(data),
        BlockKind::Divider => render_divider(data),
        BlockKind::Spacer => render_spacer(data),
        BlockKind::Button => render_button(data),
        BlockKind::Columns => render_columns(data),
        BlockKind::Hero => render_hero(data),
        BlockKind::HomeSections => render_home_sections(data),
        BlockKind::ContactForm => render_contact_form(data),
        BlockKind::ContactInfo => render_contact_info(data),
        BlockKind::RecipesGrid => render_recipes_grid(data),
        BlockKind::RegionsGrid => render_regions_grid(data),
        BlockKind::CustomHtml => render_custom_html(data),
    }
}

// ── Data access helpers ─────────────────────────────────────────────────────

fn str_attr<'a>(data: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    data.get(name).and_then(Value::as_str)
}

/// Like `str_attr`, but empty strings count as absent
fn nonempty_attr<'a>(data: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    str_attr(data, name).filter(|s| !s.is_empty())
}

fn int_attr(data: &Map<String, Value>, name: &str) -> Option<i64> {
    data.get(name).and_then(Value::as_i64)
}

fn bool_attr(data: &Map<String, Value>, name: &str) -> Option<bool> {
    data.get(name).and_then(Value::as_bool)
}

fn style(parts: &[(&str, Option<&str>)]) -> Option<String> {
    let rendered: Vec<String> = parts
        .iter()
        .filter_map(|(prop, value)| value.map(|v| format!("{}: {}", prop, v)))
        .collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join("; "))
    }
}

// ── Content blocks ──────────────────────────────────────────────────────────

fn render_heading(data: &Map<String, Value>) -> Option<Node> {
    let text = str_attr(data, "text")?;
    let level = int_attr(data, "level").unwrap_or(2).clamp(1, 6);
    let node = Node::element(format!("h{}", level))
        .attr_opt(
            "style",
            style(&[
                ("text-align", str_attr(data, "align")),
                ("color", nonempty_attr(data, "color")),
            ])
            .as_deref(),
        )
        .child(Node::text(text));
    Some(node)
}

fn render_paragraph(data: &Map<String, Value>) -> Option<Node> {
    let text = str_attr(data, "text")?;
    let node = Node::element("p")
        .attr_opt(
            "style",
            style(&[
                ("text-align", str_attr(data, "align")),
                ("color", nonempty_attr(data, "color")),
            ])
            .as_deref(),
        )
        .child(Node::text(text));
    Some(node)
}

fn render_quote(data: &Map<String, Value>) -> Option<Node> {
    let text = str_attr(data, "text")?;
    let mut node = Node::element("blockquote")
        .attr_opt(
            "style",
            style(&[("text-align", str_attr(data, "align"))]).as_deref(),
        )
        .child(Node::element("p").child(Node::text(text)));
    if let Some(author) = nonempty_attr(data, "author") {
        node = node.child(Node::element("footer").child(Node::text(author)));
    }
    Some(node)
}

fn render_list(data: &Map<String, Value>) -> Option<Node> {
    let items = data.get("items")?.as_array()?;
    let tag = match str_attr(data, "style") {
        Some("ordered") => "ol",
        // unordered is the catalog default; only the two styles are valid
        _ => "ul",
    };
    let node = Node::element(tag).children(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(|item| Node::element("li").child(Node::text(item))),
    );
    Some(node)
}

fn render_button(data: &Map<String, Value>) -> Option<Node> {
    let text = str_attr(data, "text")?;
    let url = str_attr(data, "url").unwrap_or("#");
    let variant = str_attr(data, "style").unwrap_or("primary");
    let size = str_attr(data, "size").unwrap_or("md");
    let anchor = Node::element("a")
        .attr("href", url)
        .attr("class", format!("btn btn-{} btn-{}", variant, size))
        .child(Node::text(text));
    let wrapper = Node::element("div")
        .attr_opt(
            "style",
            style(&[("text-align", str_attr(data, "align"))]).as_deref(),
        )
        .child(anchor);
    Some(wrapper)
}

// ── Media blocks ────────────────────────────────────────────────────────────

fn render_image(data: &Map<String, Value>) -> Option<Node> {
    let url = nonempty_attr(data, "url")?;
    let alt = str_attr(data, "alt").unwrap_or("");
    let width = str_attr(data, "width").unwrap_or("full");

    let img = Node::element("img")
        .attr("src", url)
        .attr("alt", alt)
        .attr("class", format!("img-{}", width));

    // A navigable link wraps the image; otherwise it renders bare.
    let inner = match nonempty_attr(data, "link") {
        Some(link) => Node::element("a").attr("href", link).child(img),
        None => img,
    };

    let figure = Node::element("figure")
        .attr_opt(
            "style",
            style(&[("text-align", str_attr(data, "align"))]).as_deref(),
        )
        .child(inner);
    let figure = match nonempty_attr(data, "caption") {
        Some(caption) => figure.child(Node::element("figcaption").child(Node::text(caption))),
        None => figure,
    };
    Some(figure)
}

fn render_video(data: &Map<String, Value>) -> Option<Node> {
    let url = nonempty_attr(data, "url")?;
    let provider = str_attr(data, "provider").unwrap_or("youtube");

    let player = match VideoProvider::parse(provider) {
        // Hosted providers embed via an iframe against the derived URL.
        Some(provider) => Node::element("iframe")
            .attr("src", provider.embed_url(url))
            .attr("allowfullscreen", "true"),
        // `direct` (and anything else) plays the URL natively.
        None => Node::element("video").attr("src", url).attr("controls", "true"),
    };

    let figure = Node::element("figure").attr("class", "video").child(player);
    let figure = match nonempty_attr(data, "caption") {
        Some(caption) => figure.child(Node::element("figcaption").child(Node::text(caption))),
        None => figure,
    };
    Some(figure)
}

fn render_code(data: &Map<String, Value>) -> Option<Node> {
    let code = str_attr(data, "code")?;
    let language = str_attr(data, "language").unwrap_or("text");
    let line_numbers = bool_attr(data, "showLineNumbers").unwrap_or(false);
    let node = Node::element("pre")
        .attr("data-line-numbers", if line_numbers { "true" } else { "false" })
        .child(
            Node::element("code")
                .attr("class", format!("language-{}", language))
                .child(Node::text(code)),
        );
    Some(node)
}

// ── Layout blocks ───────────────────────────────────────────────────────────

fn render_divider(data: &Map<String, Value>) -> Option<Node> {
    let node = Node::element("hr").attr_opt(
        "style",
        style(&[
            ("border-style", str_attr(data, "style")),
            ("border-color", str_attr(data, "color")),
            ("width", str_attr(data, "width")),
        ])
        .as_deref(),
    );
    Some(node)
}

fn render_spacer(data: &Map<String, Value>) -> Option<Node> {
    let height = str_attr(data, "height").unwrap_or("2rem");
    let node = Node::element("div")
        .attr("class", "spacer")
        .attr("style", format!("height: {}", scaled_height(height, Tier::Wide)))
        .attr("data-height-narrow", scaled_height(height, Tier::Narrow))
        .attr("data-height-medium", scaled_height(height, Tier::Medium));
    Some(node)
}

fn render_columns(data: &Map<String, Value>) -> Option<Node> {
    let columns = data.get("columns")?.as_array()?;
    let gap = str_attr(data, "gap").unwrap_or("1rem");

    let rendered = columns.iter().filter_map(|column| {
        let column = column.as_object()?;
        let width = column
            .get("width")
            .and_then(Value::as_f64)
            .unwrap_or(100.0 / columns.len().max(1) as f64);
        let blocks: Vec<Block> = column
            .get("blocks")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        let children = blocks.iter().filter_map(render_block);
        Some(
            Node::element("div")
                .attr("class", "column")
                .attr("style", format!("width: {}%", width))
                .children(children),
        )
    });

    let node = Node::element("div")
        .attr("class", "columns")
        .attr("style", format!("display: flex; gap: {}", gap))
        .children(rendered);
    Some(node)
}

fn render_hero(data: &Map<String, Value>) -> Option<Node> {
    let title = str_attr(data, "title")?;
    let height = str_attr(data, "height").unwrap_or("medium");
    let mut section = Node::element("section")
        .attr("class", format!("hero hero-{}", height))
        .attr_opt(
            "style",
            nonempty_attr(data, "backgroundImage")
                .map(|url| format!("background-image: url({})", url))
                .as_deref(),
        );

    if bool_attr(data, "overlay").unwrap_or(false) {
        let opacity = data
            .get("overlayOpacity")
            .and_then(Value::as_f64)
            .unwrap_or(0.5)
            .clamp(0.0, 1.0);
        section = section.child(
            Node::element("div")
                .attr("class", "hero-overlay")
                .attr("style", format!("opacity: {}", opacity)),
        );
    }

    let mut inner = Node::element("div")
        .attr("class", "hero-content")
        .child(Node::element("h1").child(Node::text(title)));
    if let Some(subtitle) = nonempty_attr(data, "subtitle") {
        inner = inner.child(Node::element("p").child(Node::text(subtitle)));
    }
    if let Some(text) = nonempty_attr(data, "buttonText") {
        let link = str_attr(data, "buttonLink").unwrap_or("#");
        inner = inner.child(
            Node::element("a")
                .attr("href", link)
                .attr("class", "btn btn-primary btn-lg")
                .child(Node::text(text)),
        );
    }
    Some(section.child(inner))
}

// ── Collaborator-backed blocks ──────────────────────────────────────────────
//
// These declare intent only; the host fetches and presents the referenced
// entities. The placeholders pass the declared parameters through as data
// attributes.

fn render_home_sections(data: &Map<String, Value>) -> Option<Node> {
    let node = Node::element("div")
        .attr("class", "home-sections-placeholder")
        .attr_opt("data-message", nonempty_attr(data, "message"));
    Some(node)
}

fn render_recipes_grid(data: &Map<String, Value>) -> Option<Node> {
    let mut node = Node::element("div")
        .attr("class", "recipes-grid-placeholder")
        .attr("data-limit", int_attr(data, "limit").unwrap_or(6).to_string())
        .attr_opt("data-sort-by", str_attr(data, "sortBy"))
        .attr_opt("data-category", nonempty_attr(data, "category"))
        .attr_opt("data-difficulty", nonempty_attr(data, "difficulty"))
        .attr_opt("data-region", nonempty_attr(data, "region"));
    if let Some(title) = nonempty_attr(data, "title") {
        node = node.child(Node::element("h2").child(Node::text(title)));
    }
    Some(node)
}

fn render_regions_grid(data: &Map<String, Value>) -> Option<Node> {
    let mut node = Node::element("div")
        .attr("class", "regions-grid-placeholder")
        .attr("data-limit", int_attr(data, "limit").unwrap_or(8).to_string());
    if let Some(title) = nonempty_attr(data, "title") {
        node = node.child(Node::element("h2").child(Node::text(title)));
    }
    Some(node)
}

// ── Contact blocks ──────────────────────────────────────────────────────────

/// Field names a contact form may declare, in no particular order
const CONTACT_FIELDS: [&str; 5] = ["name", "email", "phone", "subject", "message"];

fn render_contact_form(data: &Map<String, Value>) -> Option<Node> {
    let fields = data.get("fields")?.as_array()?;

    let mut form = Node::element("form").attr("class", "contact-form");
    if let Some(title) = nonempty_attr(data, "title") {
        form = form.child(Node::element("h2").child(Node::text(title)));
    }
    // Declared order is kept; names outside the known set are skipped.
    for field in fields.iter().filter_map(Value::as_str) {
        if !CONTACT_FIELDS.iter().any(|known| *known == field) {
            warn!(field, "skipping unknown contact form field");
            continue;
        }
        let control = if field == "message" {
            Node::element("textarea").attr("name", field)
        } else {
            let input_type = match field {
                "email" => "email",
                "phone" => "tel",
                _ => "text",
            };
            Node::element("input")
                .attr("type", input_type)
                .attr("name", field)
        };
        form = form.child(
            Node::element("label")
                .child(Node::text(field))
                .child(control),
        );
    }
    let submit = str_attr(data, "submitText").unwrap_or("Send");
    form = form.child(
        Node::element("button")
            .attr("type", "submit")
            .child(Node::text(submit)),
    );
    Some(form)
}

fn render_contact_info(data: &Map<String, Value>) -> Option<Node> {
    let mut node = Node::element("address").attr("class", "contact-info");
    if let Some(email) = nonempty_attr(data, "email") {
        node = node.child(
            Node::element("a")
                .attr("href", format!("mailto:{}", email))
                .child(Node::text(email)),
        );
    }
    if let Some(phone) = nonempty_attr(data, "phone") {
        node = node.child(
            Node::element("a")
                .attr("href", format!("tel:{}", phone))
                .child(Node::text(phone)),
        );
    }
    if let Some(address) = nonempty_attr(data, "address") {
        node = node.child(Node::element("p").child(Node::text(address)));
    }
    if let Some(links) = data.get("socialLinks").and_then(Value::as_array) {
        let items = links.iter().filter_map(|link| {
            let link = link.as_object()?;
            let platform = link.get("platform")?.as_str()?;
            let url = link.get("url")?.as_str()?;
            Some(
                Node::element("a")
                    .attr("href", url)
                    .attr("class", format!("social social-{}", platform))
                    .child(Node::text(platform)),
            )
        });
        node = node.child(
            Node::element("div")
                .attr("class", "social-links")
                .children(items),
        );
    }
    Some(node)
}

// ── Escape hatch ────────────────────────────────────────────────────────────

fn render_custom_html(data: &Map<String, Value>) -> Option<Node> {
    // Injected verbatim. Sanitization, if the host needs it, happens outside
    // this crate before the content reaches the renderer.
    let html = str_attr(data, "html")?;
    Some(Node::Raw(html.to_string()))
}

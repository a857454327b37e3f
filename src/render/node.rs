//! Output node tree and HTML emission
//!
//! The renderer produces a tree of [`Node`]s rather than strings so hosts can
//! post-process or adapt the output. `to_html` emits deterministic markup:
//! attributes in insertion order, text and attribute values escaped, raw
//! nodes verbatim.

/// One node of rendered output
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a tag, ordered attributes, and children
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    /// Text content, escaped on emission
    Text(String),
    /// Markup injected verbatim, no escaping. Used only by custom-html
    /// blocks; sanitization is the host's responsibility.
    Raw(String),
}

impl Node {
    /// Create an element with no attributes or children
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Add an attribute (builder style)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Add an attribute only when the value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Add a child node (builder style)
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Add several child nodes (builder style)
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// The element tag, if this is an element
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Look up an attribute value, if this is an element
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// The element's children; empty for text and raw nodes
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text content of this subtree (raw nodes excluded)
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Raw(_) => String::new(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }

    /// Emit the subtree as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                if is_void(tag) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Elements with no closing tag
fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "hr" | "br" | "input")
}

/// Escape text content
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape attribute values
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

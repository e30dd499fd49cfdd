//! View tree - the render target for all sections.
//!
//! Sections are pure functions from config slices (plus presentation state)
//! to a [`Node`] tree. The tree is plain data: building it has no side
//! effects, and serializing it to HTML is deterministic, so rendered output
//! can be asserted on directly in tests.
//!
//! All text content is escaped at serialization time; there is no raw-HTML
//! node kind, so config data can never inject markup.

use std::fmt::Write;

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the view tree: either an element or escaped text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with a tag, ordered attributes, classes, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

/// Start building an element node.
pub fn el(tag: &str) -> Element {
    Element {
        tag: tag.to_string(),
        attrs: Vec::new(),
        classes: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node. Content is escaped when serialized.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    /// Add a space-separated class list.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(|c| c.to_string()));
        self
    }

    /// Add an attribute. Attributes serialize in insertion order.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a sequence of child nodes.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serialize the tree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_text(content)),
            Node::Element(element) => {
                let _ = write!(out, "<{}", element.tag);

                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
                }

                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }

                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    out.push_str(">");
                    return;
                }

                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Collect the concatenated text content of the tree (unescaped).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(content),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let node: Node = el("a")
            .class("cta-button")
            .attr("href", "#projects")
            .text("View Work")
            .into();

        assert_eq!(
            node.to_html(),
            "<a class=\"cta-button\" href=\"#projects\">View Work</a>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node: Node = el("p").text("<script>alert(1)</script> & more").into();
        assert_eq!(
            node.to_html(),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_attr_quotes_escaped() {
        let node: Node = el("img").attr("src", "x\" onerror=\"y").into();
        assert_eq!(node.to_html(), "<img src=\"x&quot; onerror=&quot;y\">");
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let node: Node = el("img").attr("src", "photo.png").into();
        assert_eq!(node.to_html(), "<img src=\"photo.png\">");
    }

    #[test]
    fn test_nested_children_in_order() {
        let node: Node = el("div")
            .child(el("span").text("one"))
            .child(el("span").text("two"))
            .into();
        assert_eq!(node.to_html(), "<div><span>one</span><span>two</span></div>");
        assert_eq!(node.text_content(), "onetwo");
    }

    #[test]
    fn test_class_list_splits_whitespace() {
        let node: Node = el("div").class("glass-card  p-6 rounded-xl").into();
        assert_eq!(node.to_html(), "<div class=\"glass-card p-6 rounded-xl\"></div>");
    }
}

//! HTML serializer: converts `Node` trees into markup strings.

use folio_protocol::{Element, Node};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source"];

/// Serialize a single node.
pub fn to_html(node: &Node) -> String {
    let mut out = String::with_capacity(256);
    write_node(node, &mut out);
    out
}

/// Serialize a list of sibling nodes.
pub fn fragment_to_html(nodes: &[Node]) -> String {
    let mut out = String::with_capacity(nodes.len() * 256);
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    if !el.classes.is_empty() {
        out.push_str(&format!(r#" class="{}""#, escape_attr(&el.classes.join(" "))));
    }
    for (name, value) in &el.attrs {
        out.push_str(&format!(r#" {name}="{}""#, escape_attr(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str(&format!("</{}>", el.tag));
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_html_output() {
        let node = Node::from(
            Element::new("div")
                .class("border-b pb-6")
                .child(Element::new("h3").text("Jane Doe")),
        );
        assert_eq!(
            to_html(&node),
            r#"<div class="border-b pb-6"><h3>Jane Doe</h3></div>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node = Node::from(
            Element::new("img")
                .attr("src", "a.png")
                .attr("loading", "lazy"),
        );
        assert_eq!(to_html(&node), r#"<img src="a.png" loading="lazy">"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node = Node::from(
            Element::new("p")
                .attr("title", r#"say "hi" & 'bye'"#)
                .text("<script>alert(1)</script> & co"),
        );
        assert_eq!(
            to_html(&node),
            r#"<p title="say &quot;hi&quot; &amp; &#39;bye&#39;">&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</p>"#
        );
    }

    #[test]
    fn fragment_concatenates_siblings() {
        let nodes = vec![Node::text("a"), Element::new("br").into(), Node::text("b")];
        assert_eq!(fragment_to_html(&nodes), "a<br>b");
    }
}

//! Serialization of [Element] trees to HTML.

use std::fmt::{self, Write};

use crate::{Attribute, Element, Node};

/// Tags whose text children are written without escaping.
const RAW_TEXT_TAGS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
    "script",
    "style",
    "xmp",
];

/// Tags kept on the same line as their siblings when pretty-printing.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdo", "big", "br", "button", "cite", "code", "dfn", "em", "i",
    "img", "input", "kbd", "label", "map", "pre", "object", "output", "q", "samp", "script",
    "select", "small", "span", "strong", "sub", "sup", "textarea", "time", "tt", "var",
];

fn is_raw_text_tag(tag: &str) -> bool {
    RAW_TEXT_TAGS.contains(&tag)
}

fn write_start_tag(writer: &mut dyn Write, element: &Element) -> fmt::Result {
    write!(writer, "<{}", element.name.as_str())?;
    for Attribute { key, value } in element.attributes.iter() {
        write!(
            writer,
            " {}=\"{}\"",
            key.as_str(),
            html_escape::encode_double_quoted_attribute(value.as_str())
        )?;
    }
    write!(writer, ">")
}

fn write_text(writer: &mut dyn Write, text: &str, raw_text: bool) -> fmt::Result {
    if raw_text {
        write!(writer, "{text}")
    } else {
        write!(writer, "{}", html_escape::encode_text(text))
    }
}

/// Write an element in its compact `outerHTML` form.
pub(crate) fn write_element(writer: &mut dyn Write, element: &Element) -> fmt::Result {
    write_start_tag(writer, element)?;
    if element.void {
        return Ok(());
    }
    write_children(writer, element)?;
    write!(writer, "</{}>", element.name.as_str())
}

/// Write the children of an element in compact form.
pub(crate) fn write_children(writer: &mut dyn Write, element: &Element) -> fmt::Result {
    if element.void {
        return Ok(());
    }
    let raw_text = is_raw_text_tag(element.name.as_str());
    for child in element.children.iter() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text { text } => write_text(writer, text.as_str(), raw_text)?,
            Node::Raw { html } => write!(writer, "{}", html.as_str())?,
        }
    }
    Ok(())
}

/// Displays an element with block-level children on their own indented lines.
pub(crate) struct Pretty<'a, 'bump>(pub(crate) &'a Element<'bump>);
impl fmt::Display for Pretty<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element_pretty(f, self.0, 0)
    }
}

fn write_element_pretty(writer: &mut dyn Write, element: &Element, depth: usize) -> fmt::Result {
    write_start_tag(writer, element)?;
    if element.void {
        return Ok(());
    }

    let raw_text = is_raw_text_tag(element.name.as_str());
    let did_indent = write_many_pretty(writer, element.children.as_slice(), depth + 1, raw_text)?;

    if did_indent {
        writeln!(writer)?;
        for _ in 0..depth {
            write!(writer, "  ")?;
        }
    }
    write!(writer, "</{}>", element.name.as_str())
}

/// Returns whether or not the result was indented.
fn write_many_pretty(
    writer: &mut dyn Write,
    nodes: &[Node],
    depth: usize,
    raw_text: bool,
) -> Result<bool, fmt::Error> {
    let mut did_indent = false;
    let mut encountered_text = false;
    for node in nodes {
        encountered_text |= node.is_text();
        let indent_this_child = !encountered_text
            && node
                .as_element()
                .is_some_and(|e| !INLINE_TAGS.contains(&e.name.as_str()));
        if indent_this_child {
            writeln!(writer)?;
            for _ in 0..depth {
                write!(writer, "  ")?;
            }
            did_indent = true;
        }
        match node {
            Node::Element(element) => write_element_pretty(writer, element, depth)?,
            Node::Text { text } => {
                let mut escaped = String::new();
                write_text(&mut escaped, text.as_str(), raw_text)?;
                for (idx, line) in escaped.lines().enumerate() {
                    if idx > 0 {
                        writeln!(writer)?;
                    }
                    write!(writer, "{line}")?;
                }
            }
            Node::Raw { html } => write!(writer, "{}", html.as_str())?,
        }
    }
    Ok(did_indent)
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use crate::Document;

    #[test]
    fn void_elements_have_no_closing_tag() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        assert_eq!(doc.create_element("br").unwrap().outer_html(), "<br>");
        assert_eq!(doc.create_element("img").unwrap().outer_html(), "<img>");
        assert_eq!(doc.create_element("div").unwrap().outer_html(), "<div></div>");
    }

    #[test]
    fn void_element_children_are_not_serialized() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let mut br = doc.create_element("br").unwrap();
        br.append_child(doc.create_text_node("ignored"));
        assert_eq!(br.outer_html(), "<br>");
        assert_eq!(br.inner_html(), "");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let mut a = doc.create_element("a").unwrap();
        a.set_attribute("title", r#"say "hi" & <leave>"#);
        assert_eq!(
            a.outer_html(),
            r#"<a title="say &quot;hi&quot; &amp; &lt;leave&gt;"></a>"#
        );
    }

    #[test]
    fn raw_text_elements_are_not_escaped() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let mut script = doc.create_element("script").unwrap();
        script.append_child(doc.create_text_node("if (a < b && c) {}"));
        assert_eq!(script.outer_html(), "<script>if (a < b && c) {}</script>");

        let mut p = doc.create_element("p").unwrap();
        p.append_child(doc.create_text_node("if (a < b && c) {}"));
        assert_eq!(p.outer_html(), "<p>if (a &lt; b &amp;&amp; c) {}</p>");
    }

    #[test]
    fn should_indent_successive_p_tags() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let mut div = doc.create_element("div").unwrap();
        for text in ["Hello", "World"] {
            let mut p = doc.create_element("p").unwrap();
            p.append_child(doc.create_text_node(text));
            div.append_child(p);
        }
        assert_eq!(
            div.to_pretty_string(),
            "<div>\n  <p>Hello</p>\n  <p>World</p>\n</div>"
        );
        assert_eq!(div.outer_html(), "<div><p>Hello</p><p>World</p></div>");
    }

    #[test]
    fn wont_indent_text_surrounded_by_tags() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let mut h3 = doc.create_element("h3").unwrap();
        let mut first = doc.create_element("small").unwrap();
        first.append_child(doc.create_text_node("test "));
        let mut last = doc.create_element("small").unwrap();
        last.append_child(doc.create_text_node("!"));
        h3.append_child(first)
            .append_child(doc.create_text_node("tested"))
            .append_child(last);
        assert_eq!(
            h3.to_pretty_string(),
            "<h3><small>test </small>tested<small>!</small></h3>"
        );
    }
}

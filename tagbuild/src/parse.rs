//! Parses `innerHTML` markup into element and text nodes.

use scraper::{ElementRef, Html};

use crate::{Document, Element};

/// Parse `html` as a body fragment and append the resulting nodes to `parent`.
///
/// Parsing follows the HTML5 algorithm, so unclosed tags are closed and
/// misnested ones repaired. Comments, doctypes and processing instructions are
/// dropped.
pub(crate) fn append_fragment<'bump>(parent: &mut Element<'bump>, html: &str) {
    let document = Document::new(parent.bump());
    let fragment = Html::parse_fragment(html);
    if !fragment.errors.is_empty() {
        tracing::trace!(errors = ?fragment.errors, "recovered from malformed markup");
    }
    // Fragments are parsed into a wrapping `<html>` element.
    append_children(document, parent, fragment.root_element());
}

fn append_children<'bump>(
    document: Document<'bump>,
    parent: &mut Element<'bump>,
    source: ElementRef<'_>,
) {
    for child in source.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                parent.append_child(document.create_text_node(text));
            }
            scraper::Node::Element(_) => {
                let Some(source) = ElementRef::wrap(child) else {
                    continue;
                };
                let mut element = document.new_element(source.value().name());
                for (key, value) in source.value().attrs() {
                    element.set_attribute(key, value);
                }
                append_children(document, &mut element, source);
                parent.append_child(element);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use super::*;

    fn parse<'bump>(bump: &'bump Bump, html: &str) -> Element<'bump> {
        let mut div = Document::new(bump).new_element("div");
        append_fragment(&mut div, html);
        div
    }

    #[test]
    fn text_and_elements_become_nodes() {
        let bump = Bump::new();
        let div = parse(&bump, "foo<b>bar</b>xyz");
        assert_eq!(div.children().len(), 3);
        assert!(div.children()[0].is_text());
        assert_eq!(div.children()[1].as_element().unwrap().tag(), "b");
        assert!(div.children()[2].is_text());
        assert_eq!(div.inner_text().as_str(), "foobarxyz");
    }

    #[test]
    fn attributes_and_void_tags() {
        let bump = Bump::new();
        let div = parse(&bump, r#"<A HREF="/x" title='a &amp; b'>link</A><br>"#);
        let a = div.children()[0].as_element().unwrap();
        assert_eq!(a.tag(), "a");
        assert_eq!(a.get_attribute("href"), Some("/x"));
        assert_eq!(a.get_attribute("title"), Some("a & b"));
        assert!(div.children()[1].as_element().unwrap().is_void());
        assert_eq!(
            div.inner_html(),
            r#"<a href="/x" title="a &amp; b">link</a><br>"#
        );
    }

    #[test]
    fn malformed_markup_is_repaired() {
        let bump = Bump::new();
        assert_eq!(
            parse(&bump, "<b>unclosed").outer_html(),
            "<div><b>unclosed</b></div>"
        );
        assert_eq!(parse(&bump, "a<!-- note -->b").inner_text().as_str(), "ab");
    }
}

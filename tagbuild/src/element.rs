use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::Attribute;
use crate::{parse, render};

/// An element in an HTML tree, created through [crate::Document::create_element].
///
/// Elements are owned by the caller once created: they can be mutated, appended
/// to other elements as children, or serialized through [Element::outer_html].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element<'bump> {
    /// The name of the tag.
    pub(crate) name: BumpString<'bump>,
    /// The attributes of the tag, in the order they were first set.
    pub(crate) attributes: BumpVec<'bump, Attribute<'bump>>,
    /// The children of the tag.
    pub(crate) children: BumpVec<'bump, Node<'bump>>,
    /// Whether the tag is void.
    pub(crate) void: bool,
}

/// A node in an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node<'bump> {
    /// A tag element.
    Element(Element<'bump>),
    /// A text node. Escaped when serialized.
    Text {
        /// The text of the node.
        text: BumpString<'bump>,
    },
    /// Markup written verbatim, created through [crate::Document::create_raw].
    /// Never escaped.
    Raw {
        /// The raw HTML of the node.
        html: BumpString<'bump>,
    },
}
impl<'bump> From<Element<'bump>> for Node<'bump> {
    fn from(element: Element<'bump>) -> Self {
        Node::Element(element)
    }
}
impl<'bump> Node<'bump> {
    /// Create a text node.
    pub fn text(bump: &'bump Bump, text: &str) -> Node<'bump> {
        Node::Text {
            text: BumpString::from_str_in(text, bump),
        }
    }

    /// Create a raw HTML node.
    pub fn raw(bump: &'bump Bump, html: &str) -> Node<'bump> {
        Node::Raw {
            html: BumpString::from_str_in(html, bump),
        }
    }

    /// Returns the element if this node is an [`Element`](Node::Element).
    pub fn as_element(&self) -> Option<&Element<'bump>> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns `true` if the node is [`Element`](Node::Element).
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns `true` if the node is [`Text`](Node::Text).
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Returns `true` if the node is [`Raw`](Node::Raw).
    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw { .. })
    }

    fn push_inner_text(&self, out: &mut BumpString<'bump>) {
        match self {
            Node::Element(element) => {
                for child in element.children.iter() {
                    child.push_inner_text(out);
                }
            }
            Node::Text { text } => out.push_str(text.as_str()),
            Node::Raw { .. } => {}
        }
    }
}

impl<'bump> Element<'bump> {
    pub(crate) fn new(bump: &'bump Bump, name: &str, void: bool) -> Self {
        Element {
            name: BumpString::from_str_in(name, bump),
            attributes: BumpVec::new_in(bump),
            children: BumpVec::new_in(bump),
            void,
        }
    }

    /// The bump allocator this element was created in.
    pub fn bump(&self) -> &'bump Bump {
        self.attributes.bump()
    }

    /// Get the tag name of the element.
    pub fn tag(&self) -> &str {
        self.name.as_str()
    }

    /// Returns `true` if the element is void (i.e. has no closing tag).
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Get the attributes of the element.
    pub fn attributes(&self) -> &[Attribute<'bump>] {
        self.attributes.as_slice()
    }

    /// Get the value of the attribute named `key`.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key.as_str() == key)
            .map(|a| a.value.as_str())
    }

    /// Returns `true` if an attribute named `key` is set.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.get_attribute(key).is_some()
    }

    /// Set the attribute named `key` to `value`.
    ///
    /// An existing attribute keeps its position and has its value replaced;
    /// a new attribute is appended after the existing ones.
    pub fn set_attribute(&mut self, key: &str, value: &str) -> &mut Self {
        let bump = self.bump();
        match self.attributes.iter_mut().find(|a| a.key.as_str() == key) {
            Some(attribute) => attribute.value = BumpString::from_str_in(value, bump),
            None => self.attributes.push(Attribute::new(bump, key, value)),
        }
        self
    }

    /// Remove the attribute named `key`, returning whether it was present.
    pub fn remove_attribute(&mut self, key: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.key.as_str() != key);
        self.attributes.len() != before
    }

    /// Get the children of the element.
    pub fn children(&self) -> &[Node<'bump>] {
        self.children.as_slice()
    }

    /// Append a node as the last child of this element.
    ///
    /// Void elements accept children but never serialize them.
    pub fn append_child(&mut self, child: impl Into<Node<'bump>>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Replace all children of this element with the nodes parsed from `html`.
    ///
    /// The markup is parsed as an HTML body fragment, so malformed input is
    /// repaired the way a browser would. Nothing is sanitized: scripts and event
    /// handler attributes in `html` are kept. Never pass untrusted input.
    pub fn set_inner_html(&mut self, html: &str) -> &mut Self {
        self.children.clear();
        if !html.is_empty() {
            parse::append_fragment(self, html);
        }
        self
    }

    /// Get the concatenated text of all descendant text nodes.
    ///
    /// [`Raw`](Node::Raw) nodes are not parsed, so they contribute nothing.
    pub fn inner_text(&self) -> BumpString<'bump> {
        let mut result = BumpString::new_in(self.bump());
        for child in self.children.iter() {
            child.push_inner_text(&mut result);
        }
        result
    }

    /// Serialize the element, including its own tag, to a string.
    pub fn outer_html(&self) -> String {
        self.to_string()
    }

    /// Serialize the children of the element to a string.
    pub fn inner_html(&self) -> String {
        let mut output = String::new();
        // Writing into a `String` cannot fail.
        let _ = render::write_children(&mut output, self);
        output
    }

    /// Serialize the element with block-level children on their own indented lines.
    pub fn to_pretty_string(&self) -> String {
        render::Pretty(self).to_string()
    }

    /// Write the serialized element to a writer.
    pub fn write(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
        write!(writer, "{self}")
    }

    /// Write the indented serialization of the element to a writer.
    pub fn write_pretty(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
        write!(writer, "{}", render::Pretty(self))
    }
}

/// Formats the element as its `outerHTML`.
impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_element(f, self)
    }
}

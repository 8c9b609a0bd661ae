use std::ptr;

use bumpalo::Bump;

use crate::error::{BuildError, Result};
use crate::{Element, Node};

/// Tags that have no closing tag and never serialize their children.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Returns `true` if `tag` is one of the [VOID_TAGS].
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Returns `true` if `tag` can be used as an element name: an ASCII letter
/// followed by ASCII letters, digits or `-`.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A handle to the document that elements are created in.
///
/// The document owns nothing itself: it borrows the bump allocator that backs
/// every element, attribute and text node created through it. Handles are cheap
/// to copy, and two handles are equal if they share the same allocator.
#[derive(Debug, Clone, Copy)]
pub struct Document<'bump> {
    bump: &'bump Bump,
}
impl<'bump> Document<'bump> {
    /// Create a document backed by the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Document { bump }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Create an empty element with the given tag name.
    ///
    /// Tag names are ASCII-lowercased, and the element is marked void if the
    /// name is one of the [VOID_TAGS].
    ///
    /// # Errors
    ///
    /// Returns [BuildError::InvalidTag] if `tag` fails [is_valid_tag_name].
    pub fn create_element(&self, tag: &str) -> Result<Element<'bump>> {
        if !is_valid_tag_name(tag) {
            return Err(BuildError::InvalidTag {
                tag: tag.to_string(),
            });
        }
        Ok(self.new_element(tag))
    }

    /// Create an element for a name already known to be valid.
    pub(crate) fn new_element(&self, tag: &str) -> Element<'bump> {
        let tag = tag.to_ascii_lowercase();
        let void = is_void_tag(&tag);
        Element::new(self.bump, &tag, void)
    }

    /// Create a text node. The text is escaped when serialized.
    pub fn create_text_node(&self, text: &str) -> Node<'bump> {
        Node::text(self.bump, text)
    }

    /// Create a node holding markup that is serialized verbatim.
    pub fn create_raw(&self, html: &str) -> Node<'bump> {
        Node::raw(self.bump, html)
    }
}
impl PartialEq for Document<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.bump, other.bump)
    }
}
impl Eq for Document<'_> {}

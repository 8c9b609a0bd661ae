#![deny(missing_docs)]
//! A crate for building HTML element trees out of nested function calls.
//!
//! A builder is created per tag, either through [make_builder] or the per-tag
//! methods of [Tags]. Calling it with a list of arguments produces one [Element]:
//!
//! - a [Config] sets attributes and content (`class`/`cl`/`cls`, `innerHTML`/`ih`,
//!   `style`, `data`, and a fixed whitelist of HTML attributes; every other key
//!   is silently dropped),
//! - text is appended as a text node, escaped when serialized,
//! - elements are appended as children.
//!
//! Elements are created in a [Document], which borrows a bump allocator
//! ([bumpalo::Bump]). Documents are always injected: at the entry point of an
//! application, a [HostEnvironment] describes which documents the host makes
//! available and decides which one a builder uses.
//!
//! # Security
//!
//! `innerHTML`/`ih` parses its value as HTML and keeps everything it finds,
//! including `<script>` elements and event handler attributes. Only pass trusted
//! markup. Tag names are validated, see [is_valid_tag_name].
//!
//! # Example
//!
//! ```
//! use tagbuild::{bumpalo::Bump, Config, Document, Tags};
//!
//! let bump = Bump::new();
//! let t = Tags::new(Document::new(&bump));
//! let element = t.div((
//!     Config::new().with("cls", "container").with("data", [("userId", 7)]),
//!     t.h1("Hello, World!"),
//! ));
//! assert_eq!(
//!     element.outer_html(),
//!     r#"<div class="container" data-user-id="7"><h1>Hello, World!</h1></div>"#
//! );
//! ```

pub mod builder;
pub mod error;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;

mod arg;
pub use arg::{Arg, IntoArgs};

mod attribute;
pub use attribute::{is_whitelisted, Attribute, AttributeValue, WHITELISTED_ATTRIBUTES};

mod config;
pub use config::{Config, ConfigValue};

mod document;
pub use document::{is_valid_tag_name, is_void_tag, Document, VOID_TAGS};

mod element;
pub use element::{Element, Node};

mod environment;
pub use environment::HostEnvironment;

#[cfg(feature = "json")]
mod json;

mod parse;

mod render;

mod tags;
pub use tags::{Tags, TAG_NAMES};

pub use builder::{apply_config, make_builder, ElementBuilder};
pub use error::BuildError;

//! Builds elements for a single tag out of heterogeneous argument lists.

use tracing::trace;

use crate::error::{BuildError, Result};
use crate::util::{build_key_value_string, set_data_attribute};
use crate::{attribute, Arg, Config, ConfigValue, Document, Element, HostEnvironment, IntoArgs};

/// A builder for elements of one tag.
///
/// The builder only remembers its tag name, a default document and the host
/// environment; every call to [ElementBuilder::build] produces a fresh element.
///
/// # Example
///
/// ```
/// use tagbuild::{bumpalo::Bump, make_builder, Config, Document};
///
/// let bump = Bump::new();
/// let div = make_builder("div", Some(Document::new(&bump)));
/// let element = div
///     .build((Config::new().with("cls", "greeting"), "Hello, World!"))
///     .unwrap();
/// assert_eq!(element.outer_html(), r#"<div class="greeting">Hello, World!</div>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBuilder<'bump> {
    tag: String,
    default_document: Option<Document<'bump>>,
    environment: HostEnvironment<'bump>,
}

/// Create a builder for elements of `tag`, created in `default_document` unless
/// the builder's environment supplies a window document.
pub fn make_builder<'bump>(
    tag: &str,
    default_document: Option<Document<'bump>>,
) -> ElementBuilder<'bump> {
    ElementBuilder::new(tag, default_document)
}

impl<'bump> ElementBuilder<'bump> {
    /// Create a builder for elements of `tag`. See [make_builder].
    pub fn new(tag: &str, default_document: Option<Document<'bump>>) -> Self {
        ElementBuilder {
            tag: tag.to_string(),
            default_document,
            environment: HostEnvironment::default(),
        }
    }

    /// Use `environment` to resolve the document on every build.
    pub fn with_environment(mut self, environment: HostEnvironment<'bump>) -> Self {
        self.environment = environment;
        self
    }

    /// The tag this builder creates.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Build one element from `args`.
    ///
    /// Arguments are applied in order:
    ///
    /// - [Arg::Config] sets attributes and content, see [apply_config],
    /// - [Arg::Text] is appended as a text node,
    /// - [Arg::Element] is appended as a child,
    /// - [Arg::Empty] is ignored.
    ///
    /// # Errors
    ///
    /// Returns [BuildError::NoDocument] if neither the environment nor the
    /// default document provide a document, and [BuildError::InvalidTag] if the
    /// tag is not a valid element name. Malformed arguments never error.
    pub fn build(&self, args: impl IntoArgs<'bump>) -> Result<Element<'bump>> {
        let Some(document) = self.environment.resolve_document(self.default_document) else {
            tracing::debug!(tag = %self.tag, "no document available");
            return Err(BuildError::NoDocument {
                tag: self.tag.clone(),
            });
        };
        build_element(document, &self.tag, args)
    }
}

/// Build one element of `tag` in `document` from `args`.
pub(crate) fn build_element<'bump>(
    document: Document<'bump>,
    tag: &str,
    args: impl IntoArgs<'bump>,
) -> Result<Element<'bump>> {
    let element = document
        .create_element(tag)
        .inspect_err(|_| tracing::debug!(tag, "rejecting invalid tag name"))?;
    Ok(append_args(document, element, args))
}

/// Apply `args` to an already created `element`.
pub(crate) fn append_args<'bump>(
    document: Document<'bump>,
    mut element: Element<'bump>,
    args: impl IntoArgs<'bump>,
) -> Element<'bump> {
    let args = args.into_args();
    if args.is_empty() {
        return element;
    }

    for arg in args {
        match arg {
            Arg::Config(config) => apply_config(&mut element, &config),
            Arg::Text(text) => {
                element.append_child(document.create_text_node(&text));
            }
            Arg::Element(child) => {
                element.append_child(child);
            }
            Arg::Empty => trace!(tag = element.tag(), "ignoring empty argument"),
        }
    }
    element
}

/// Apply a configuration object to `element`, key by key in insertion order.
///
/// - `class`, `cl` and `cls` set the `class` attribute,
/// - `innerHTML` and `ih` replace all children with the value parsed as HTML,
///   see [Element::set_inner_html],
/// - `style` sets the `style` attribute from a mapping, see
///   [build_key_value_string],
/// - `data` sets `data-*` attributes from a mapping, see [set_data_attribute],
/// - any of the [crate::WHITELISTED_ATTRIBUTES] is set to the value's
///   string form.
///
/// Every other key is dropped, as is a mapping under a key that expects a single
/// value and a single value under `style` or `data`.
pub fn apply_config(element: &mut Element, config: &Config) {
    for (key, value) in config.iter() {
        match (key, value) {
            ("class" | "cl" | "cls", ConfigValue::Scalar(value)) => {
                element.set_attribute("class", &value.to_string());
            }
            ("innerHTML" | "ih", ConfigValue::Scalar(value)) => {
                element.set_inner_html(&value.to_string());
            }
            ("style", ConfigValue::Map(_)) => {
                element.set_attribute("style", &build_key_value_string(config, key));
            }
            ("data", ConfigValue::Map(_)) => {
                set_data_attribute(element, config, key);
            }
            (key, ConfigValue::Scalar(value)) if attribute::is_whitelisted(key) => {
                element.set_attribute(key, &value.to_string());
            }
            (key, _) => trace!(tag = element.tag(), key, "dropping configuration key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use super::*;

    #[test]
    fn build_without_document_fails() {
        let div = make_builder("div", None);
        assert_eq!(
            div.build(()),
            Err(BuildError::NoDocument {
                tag: "div".to_string()
            })
        );
        assert_eq!(
            div.build(()).unwrap_err().to_string(),
            "no document available to create a `<div>` element in"
        );
    }

    #[test]
    fn build_resolves_document_through_environment() {
        let (window, explicit, global) = (Bump::new(), Bump::new(), Bump::new());
        let window = Document::new(&window);
        let explicit = Document::new(&explicit);
        let global = Document::new(&global);

        let p = make_builder("p", Some(explicit))
            .with_environment(HostEnvironment::new().with_window(window));
        assert!(std::ptr::eq(p.build(()).unwrap().bump(), window.bump()));

        let p = make_builder("p", Some(explicit))
            .with_environment(HostEnvironment::new().with_global(global));
        assert!(std::ptr::eq(p.build(()).unwrap().bump(), explicit.bump()));

        let p = make_builder("p", None).with_environment(HostEnvironment::new().with_global(global));
        assert!(std::ptr::eq(p.build(()).unwrap().bump(), global.bump()));
    }

    #[test]
    fn builders_are_stateless() {
        let bump = Bump::new();
        let p = make_builder("p", Some(Document::new(&bump)));
        let first = p.build("foo").unwrap();
        let second = p.build(()).unwrap();
        assert_eq!(first.outer_html(), "<p>foo</p>");
        assert_eq!(second.outer_html(), "<p></p>");
        assert_eq!(p.tag(), "p");
    }

    #[test]
    fn class_aliases_last_one_wins() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let element = build_element(
            doc,
            "div",
            (
                Config::new().with("class", "a").with("cl", "b"),
                Config::new().with("cls", "c"),
            ),
        )
        .unwrap();
        assert_eq!(element.outer_html(), r#"<div class="c"></div>"#);
    }

    #[test]
    fn mismatched_value_shapes_are_dropped() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let element = build_element(
            doc,
            "div",
            Config::new()
                .with("class", [("a", "b")])
                .with("id", [("a", "b")])
                .with("style", "color:red")
                .with("data", "x")
                .with("ih", [("a", "b")]),
        )
        .unwrap();
        assert_eq!(element.outer_html(), "<div></div>");
    }

    #[test]
    fn inner_html_then_children_appends_after_markup() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let element = build_element(
            doc,
            "div",
            ("lost", Config::new().with("ih", "<b>x</b>"), "kept"),
        )
        .unwrap();
        assert_eq!(element.outer_html(), "<div><b>x</b>kept</div>");
    }

    #[test]
    fn invalid_tag_names_are_rejected() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let builder = make_builder("div onclick=alert(1)", Some(doc));
        assert_eq!(
            builder.build(()),
            Err(BuildError::InvalidTag {
                tag: "div onclick=alert(1)".to_string()
            })
        );
        assert_eq!(
            builder.build(()).unwrap_err().to_string(),
            "`div onclick=alert(1)` is not a valid tag name"
        );
        assert!(make_builder("DIV", Some(doc)).build(()).is_ok());
    }
}

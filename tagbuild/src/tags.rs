//! One build function per supported HTML tag.

use crate::builder::{append_args, build_element};
use crate::error::Result;
use crate::{Document, Element, ElementBuilder, IntoArgs};

/// A factory of element builders, one method per tag in [TAG_NAMES].
///
/// Each method takes any [IntoArgs] value: `()` for no arguments, a single
/// argument, or a tuple mixing configuration objects, text and elements.
///
/// # Example
///
/// ```
/// use tagbuild::{bumpalo::Bump, Config, Document, Tags};
///
/// let bump = Bump::new();
/// let t = Tags::new(Document::new(&bump));
/// let element = t.section((
///     t.h1("Title"),
///     t.p(("foo", t.br(()), "bar")),
///     t.div(Config::new().with("style", [("backgroundColor", "orange")])),
/// ));
/// assert_eq!(
///     element.outer_html(),
///     r#"<section><h1>Title</h1><p>foo<br>bar</p><div style="background-color:orange"></div></section>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tags<'bump> {
    document: Document<'bump>,
}
impl<'bump> Tags<'bump> {
    /// Create a factory that builds every element in `document`.
    pub fn new(document: Document<'bump>) -> Self {
        Self { document }
    }

    /// The document elements are created in.
    pub fn document(&self) -> Document<'bump> {
        self.document
    }

    /// Get the builder for `tag`, or `None` if `tag` is not one of the [TAG_NAMES].
    pub fn builder(&self, tag: &str) -> Option<ElementBuilder<'bump>> {
        TAG_NAMES
            .contains(&tag)
            .then(|| ElementBuilder::new(tag, Some(self.document)))
    }

    /// Build an element for any tag name, listed or not.
    ///
    /// # Errors
    ///
    /// Returns [crate::BuildError::InvalidTag] if `tag` is not a valid element
    /// name.
    pub fn element(&self, tag: &str, args: impl IntoArgs<'bump>) -> Result<Element<'bump>> {
        build_element(self.document, tag, args)
    }
}

macro_rules! tag_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Tags<'bump> {
            $(
                #[doc = concat!("Build a `<", stringify!($tag_ident), ">` element from the given arguments.")]
                pub fn $tag_ident(&self, args: impl IntoArgs<'bump>) -> Element<'bump> {
                    let element = self.document.new_element(stringify!($tag_ident));
                    append_args(self.document, element, args)
                }
            )*
        }
        /// Every tag that [Tags] has a build function for.
        pub const TAG_NAMES: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
tag_builders! {
    a, abbr, acronym, address, area, article, aside, audio,
    b, bdi, bdo, big, blockquote, body, br, button,
    canvas, caption, cite, code, col, colgroup, command,
    datalist, dd, del, details, dfn, div, dl, dt, em,
    embed, fieldset, figcaption, figure, footer, form, frame,
    frameset, h1, h2, h3, h4, h5, h6, head, header,
    hgroup, hr, html, i, iframe, img, input, ins, kbd,
    keygen, label, legend, li, link, map, mark, meta,
    meter, nav, noscript, object, ol, optgroup, option,
    output, p, param, pre, progress, q, rp, rt, ruby,
    samp, script, section, select, small, source, span,
    split, strong, style, sub, summary, sup, table, tbody,
    td, textarea, tfoot, th, thead, time, title, tr,
    track, tt, ul, var, video, wbr
}

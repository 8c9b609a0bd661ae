use crate::{Config, Element};

/// A single argument to an element builder.
///
/// What the builder does with an argument depends only on its variant:
/// configuration objects set attributes and content, text is appended as an
/// escaped text node, elements are appended as children, and everything else is
/// dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arg<'bump> {
    /// A configuration object.
    Config(Config),
    /// A text value.
    Text(String),
    /// A previously built element.
    Element(Element<'bump>),
    /// A value the builder does not recognise. Always ignored.
    #[default]
    Empty,
}
impl Arg<'_> {
    /// Returns `true` if the argument is a built element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns `true` if the argument is object-like: a configuration object or
    /// an element.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Element(_))
    }

    /// Returns `true` if the argument is a text value.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns `true` if the argument is [`Empty`](Arg::Empty), i.e. the
    /// builder ignores it.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
impl From<Config> for Arg<'_> {
    fn from(config: Config) -> Self {
        Arg::Config(config)
    }
}
impl<'bump> From<Element<'bump>> for Arg<'bump> {
    fn from(element: Element<'bump>) -> Self {
        Arg::Element(element)
    }
}
impl From<&str> for Arg<'_> {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}
impl From<String> for Arg<'_> {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}
impl From<&String> for Arg<'_> {
    fn from(text: &String) -> Self {
        Arg::Text(text.clone())
    }
}
impl<'bump, T: Into<Arg<'bump>>> From<Option<T>> for Arg<'bump> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Empty, Into::into)
    }
}

/// Trait for types that can be converted into an ordered list of [Arg]s.
///
/// This is implemented for `()` (no arguments), single arguments, vectors and
/// arrays of arguments, and tuples of up to sixteen values that each convert
/// into an [Arg].
pub trait IntoArgs<'bump> {
    /// Convert this value into a list of arguments.
    fn into_args(self) -> Vec<Arg<'bump>>;
}
impl<'bump> IntoArgs<'bump> for () {
    fn into_args(self) -> Vec<Arg<'bump>> {
        Vec::new()
    }
}
macro_rules! single_args {
    ($($ty:ty),*) => {
        $(
            impl<'bump> IntoArgs<'bump> for $ty {
                fn into_args(self) -> Vec<Arg<'bump>> {
                    vec![self.into()]
                }
            }
        )*
    };
}
single_args!(Config, &str, String, &String);
impl<'bump> IntoArgs<'bump> for Arg<'bump> {
    fn into_args(self) -> Vec<Arg<'bump>> {
        vec![self]
    }
}
impl<'bump> IntoArgs<'bump> for Element<'bump> {
    fn into_args(self) -> Vec<Arg<'bump>> {
        vec![Arg::Element(self)]
    }
}
impl<'bump, T: Into<Arg<'bump>>> IntoArgs<'bump> for Option<T> {
    fn into_args(self) -> Vec<Arg<'bump>> {
        vec![self.into()]
    }
}
impl<'bump, T: Into<Arg<'bump>>> IntoArgs<'bump> for Vec<T> {
    fn into_args(self) -> Vec<Arg<'bump>> {
        self.into_iter().map(Into::into).collect()
    }
}
impl<'bump, T: Into<Arg<'bump>>, const N: usize> IntoArgs<'bump> for [T; N] {
    fn into_args(self) -> Vec<Arg<'bump>> {
        self.into_iter().map(Into::into).collect()
    }
}
macro_rules! tuple_args {
    ($($ty:ident),+) => {
        impl<'bump, $($ty: Into<Arg<'bump>>),+> IntoArgs<'bump> for ($($ty,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Arg<'bump>> {
                let ($($ty,)+) = self;
                vec![$($ty.into()),+]
            }
        }
    };
}
tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);
tuple_args!(A, B, C, D, E, F, G);
tuple_args!(A, B, C, D, E, F, G, H);
tuple_args!(A, B, C, D, E, F, G, H, I);
tuple_args!(A, B, C, D, E, F, G, H, I, J);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

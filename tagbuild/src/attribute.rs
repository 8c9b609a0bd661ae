use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

/// A key-value pair for an HTML attribute.
///
/// Attribute values in the document model are always strings; typed values are
/// coerced through [AttributeValue]'s [fmt::Display] implementation before they
/// are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: BumpString<'bump>,
}
impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a string key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: BumpString::from_str_in(value, bump),
        }
    }
}

/// A typed value supplied through a [crate::Config].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
    /// A string value.
    String(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}
impl AttributeValue {
    /// Returns the value as a string slice if this is a String variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Formats the value the way a DOM coerces it when setting an attribute:
/// `1`, `1.5`, `true`, `Infinity`. Floats with a magnitude of at least `1e21`
/// or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => f.write_str(s),
            AttributeValue::Int(i) => write!(f, "{i}"),
            AttributeValue::Float(v) if v.is_nan() => f.write_str("NaN"),
            AttributeValue::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // Covers negative zero as well.
            AttributeValue::Float(v) if *v == 0.0 => f.write_str("0"),
            AttributeValue::Float(v) if v.abs() >= 1e21 || v.abs() < 1e-6 => {
                let exponent_form = format!("{v:e}");
                match exponent_form.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        write!(f, "{mantissa}e+{exponent}")
                    }
                    _ => f.write_str(&exponent_form),
                }
            }
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}
impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}
impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::String(value.clone())
    }
}
impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}
impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(value.into())
    }
}
impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}
macro_rules! int_attribute_values {
    ($($int:ty),*) => {
        $(
            impl From<$int> for AttributeValue {
                fn from(value: $int) -> Self {
                    AttributeValue::Int(value.into())
                }
            }
        )*
    };
}
int_attribute_values!(i8, i16, i32, i64, u8, u16, u32);

/// Attribute names that a configuration object may set directly.
///
/// Kept sorted so that [is_whitelisted] can binary search it.
pub const WHITELISTED_ATTRIBUTES: &[&str] = &[
    "accept", "accept-charset", "accesskey", "action", "align", "alt", "async",
    "autocomplete", "autofocus", "autoplay", "autosave", "bgcolor", "border",
    "buffered", "challenge", "charset", "checked", "cite", "code", "codebase",
    "color", "cols", "colspan", "content", "contenteditable", "contextmenu",
    "controls", "coords", "datetime", "default", "defer", "dir", "dirname",
    "disabled", "download", "draggable", "dropzone", "enctype", "for", "form",
    "formaction", "headers", "height", "hidden", "high", "href", "hreflang",
    "http-equiv", "icon", "id", "ismap", "itemprop", "keytype", "kind", "label",
    "lang", "language", "list", "loop", "low", "manifest", "max", "maxlength",
    "media", "method", "min", "multiple", "name", "novalidate", "open", "optimum",
    "pattern", "ping", "placeholder", "poster", "preload", "pubdate", "radiogroup",
    "readonly", "rel", "required", "reversed", "rows", "rowspan", "sandbox",
    "scope", "scoped", "seamless", "selected", "shape", "size", "sizes", "span",
    "spellcheck", "src", "srcdoc", "srclang", "start", "step", "summary",
    "tabindex", "target", "title", "type", "usemap", "value", "width", "wrap",
];

/// Returns `true` if `key` is one of the [WHITELISTED_ATTRIBUTES].
///
/// The comparison is exact: `ID` and `Href` are not whitelisted.
pub fn is_whitelisted(key: &str) -> bool {
    WHITELISTED_ATTRIBUTES.binary_search(&key).is_ok()
}

//! Configuration objects: ordered key/value mappings describing the attributes
//! and content of the element under construction.

use indexmap::IndexMap;

use crate::AttributeValue;

/// A value stored under a [Config] key.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// A single value, as used by `class`, `innerHTML` and whitelisted attributes.
    Scalar(AttributeValue),
    /// A nested mapping, as used by `style` and `data`.
    Map(IndexMap<String, AttributeValue>),
}
impl ConfigValue {
    /// Returns the value if this is a [`Scalar`](ConfigValue::Scalar).
    pub fn as_scalar(&self) -> Option<&AttributeValue> {
        match self {
            ConfigValue::Scalar(value) => Some(value),
            ConfigValue::Map(_) => None,
        }
    }

    /// Returns the mapping if this is a [`Map`](ConfigValue::Map).
    pub fn as_map(&self) -> Option<&IndexMap<String, AttributeValue>> {
        match self {
            ConfigValue::Scalar(_) => None,
            ConfigValue::Map(map) => Some(map),
        }
    }
}
impl From<AttributeValue> for ConfigValue {
    fn from(value: AttributeValue) -> Self {
        ConfigValue::Scalar(value)
    }
}
macro_rules! scalar_config_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigValue {
                fn from(value: $ty) -> Self {
                    ConfigValue::Scalar(value.into())
                }
            }
        )*
    };
}
scalar_config_values!(&str, String, &String, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32);
impl<K: Into<String>, V: Into<AttributeValue>, const N: usize> From<[(K, V); N]> for ConfigValue {
    fn from(entries: [(K, V); N]) -> Self {
        ConfigValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
impl<K: Into<String>, V: Into<AttributeValue>> From<Vec<(K, V)>> for ConfigValue {
    fn from(entries: Vec<(K, V)>) -> Self {
        ConfigValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
impl From<IndexMap<String, AttributeValue>> for ConfigValue {
    fn from(map: IndexMap<String, AttributeValue>) -> Self {
        ConfigValue::Map(map)
    }
}

/// An ordered mapping of keys to [ConfigValue]s.
///
/// Keys keep the position of their first insertion; inserting an existing key
/// again replaces its value.
///
/// # Example
///
/// ```
/// use tagbuild::Config;
///
/// let config = Config::new()
///     .with("cl", "card")
///     .with("style", [("backgroundColor", "orange")])
///     .with("tabindex", 1);
/// assert_eq!(config.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    entries: IndexMap<String, ConfigValue>,
}
impl Config {
    /// Create an empty configuration object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the configuration for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Config::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

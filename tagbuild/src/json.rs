//! Conversions from JSON values, for arguments that come from outside Rust.
//!
//! JSON objects become configuration objects, strings become text, and every
//! other JSON value becomes [Arg::Empty].

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{Arg, AttributeValue, Config, ConfigValue};

fn scalar_from_json(value: &Value) -> Option<AttributeValue> {
    match value {
        Value::String(s) => Some(AttributeValue::String(s.clone())),
        Value::Bool(b) => Some(AttributeValue::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(AttributeValue::Int)
            .or_else(|| n.as_f64().map(AttributeValue::Float)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl ConfigValue {
    /// Convert a JSON value stored under a configuration key.
    ///
    /// Strings, numbers and booleans become scalars and objects become mappings
    /// (dropping any entry that is not a scalar). Returns `None` for `null` and
    /// arrays.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(ConfigValue::Map(
                map.iter()
                    .filter_map(|(k, v)| Some((k.clone(), scalar_from_json(v)?)))
                    .collect::<IndexMap<_, _>>(),
            )),
            other => scalar_from_json(other).map(ConfigValue::Scalar),
        }
    }
}

impl From<Map<String, Value>> for Config {
    fn from(map: Map<String, Value>) -> Self {
        let mut config = Config::new();
        for (key, value) in &map {
            match ConfigValue::from_json(value) {
                Some(value) => {
                    config.insert(key.as_str(), value);
                }
                None => tracing::trace!(key = key.as_str(), "dropping non-scalar JSON value"),
            }
        }
        config
    }
}

impl From<Value> for Arg<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Arg::Config(map.into()),
            Value::String(text) => Arg::Text(text),
            _ => Arg::Empty,
        }
    }
}

impl<'bump> crate::IntoArgs<'bump> for Value {
    /// A top-level JSON array is spread into one argument per element; any other
    /// value is a single argument.
    fn into_args(self) -> Vec<Arg<'bump>> {
        match self {
            Value::Array(values) => values.into_iter().map(Arg::from).collect(),
            other => vec![other.into()],
        }
    }
}

impl<'de> serde::Deserialize<'de> for Config {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Config::from)
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use serde_json::json;

    use super::*;
    use crate::{Document, Tags};

    #[test]
    fn objects_become_configs_in_key_order() {
        let bump = Bump::new();
        let t = Tags::new(Document::new(&bump));
        let element = t.div(json!({
            "style": {"display": "block", "color": "orange"},
            "data": {"fooBar": "xyz", "n": 1},
            "tabindex": 1,
            "onclick": "alert(1)",
            "title": null
        }));
        assert_eq!(
            element.outer_html(),
            r#"<div style="display:block;color:orange" data-foo-bar="xyz" data-n="1" tabindex="1"></div>"#
        );
    }

    #[test]
    fn arrays_spread_into_arguments() {
        let bump = Bump::new();
        let t = Tags::new(Document::new(&bump));
        let element = t.p(json!(["foo", 1, null, {"cl": "x"}, "bar"]));
        assert_eq!(element.outer_html(), r#"<p class="x">foobar</p>"#);
    }

    #[test]
    fn nested_non_scalars_are_dropped() {
        let value = ConfigValue::from_json(&json!({"a": "b", "c": [1], "d": {"e": 1}})).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&AttributeValue::from("b")));
        assert_eq!(ConfigValue::from_json(&json!(null)), None);
        assert_eq!(
            ConfigValue::from_json(&json!(1.5)),
            Some(ConfigValue::Scalar(AttributeValue::Float(1.5)))
        );
    }

    #[test]
    fn deserialize_config() {
        let config: Config = serde_json::from_str(r#"{"ih": "<b>x</b>", "cls": "y"}"#).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["ih", "cls"]);
    }
}

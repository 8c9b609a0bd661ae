//! Utility functions.

use crate::{Config, ConfigValue, Element};

/// Convert a camelCase string into spinal-case.
///
/// The input is split into words made of an optional uppercase letter followed
/// by one or more lowercase letters (ASCII only). Everything else, including
/// spaces, digits and uppercase letters that do not start a word, is discarded.
/// The words are lowercased and joined with `-`.
///
/// Returns an empty string if the input contains no such word.
///
/// ```
/// use tagbuild::util::camel_case_to_spinal_case;
///
/// assert_eq!(camel_case_to_spinal_case("fooBar Xyz"), "foo-bar-xyz");
/// assert_eq!(camel_case_to_spinal_case("ABC"), "");
/// ```
pub fn camel_case_to_spinal_case(value: &str) -> String {
    let mut result = String::new();
    let mut word = String::new();
    let mut flush = |word: &mut String| {
        if !word.is_empty() {
            if !result.is_empty() {
                result.push('-');
            }
            result.push_str(word);
            word.clear();
        }
    };

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_lowercase() {
            word.push(c);
            continue;
        }
        flush(&mut word);
        if c.is_ascii_uppercase() && chars.peek().is_some_and(char::is_ascii_lowercase) {
            word.push(c.to_ascii_lowercase());
        }
    }
    flush(&mut word);
    result
}

/// Build a `key:value;key:value` string out of the mapping stored under `key`.
///
/// Sub-keys are converted with [camel_case_to_spinal_case] and kept in insertion
/// order. Returns an empty string if the mapping is empty, missing, or not a
/// mapping.
pub fn build_key_value_string(container: &Config, key: &str) -> String {
    let Some(map) = container.get(key).and_then(ConfigValue::as_map) else {
        return String::new();
    };
    map.iter()
        .map(|(k, v)| format!("{}:{}", camel_case_to_spinal_case(k), v))
        .collect::<Vec<_>>()
        .join(";")
}

/// Set a `data-*` attribute on `element` for every entry of the mapping stored
/// under `key`, and return the same element.
///
/// Sub-keys are converted with [camel_case_to_spinal_case]; values are set as
/// their string form without further escaping.
pub fn set_data_attribute<'a, 'bump>(
    element: &'a mut Element<'bump>,
    container: &Config,
    key: &str,
) -> &'a mut Element<'bump> {
    if let Some(map) = container.get(key).and_then(ConfigValue::as_map) {
        for (k, v) in map {
            element.set_attribute(
                &format!("data-{}", camel_case_to_spinal_case(k)),
                &v.to_string(),
            );
        }
    }
    element
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use rstest::rstest;

    use super::*;
    use crate::Document;

    #[rstest]
    #[case("foo", "foo")]
    #[case("foobarxyz", "foobarxyz")]
    #[case("fooBarXyz", "foo-bar-xyz")]
    #[case("fooBar Xyz", "foo-bar-xyz")]
    #[case("backgroundColor", "background-color")]
    #[case("FooBar", "foo-bar")]
    #[case("fooBAR", "foo")]
    #[case("ABc", "bc")]
    #[case("foo1bar", "foo-bar")]
    #[case("already-spinal", "already-spinal")]
    fn test_camel_case_to_spinal_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case_to_spinal_case(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("ABC")]
    #[case("123 --")]
    #[case("ÄÖÜ")]
    fn camel_case_without_words_is_empty(#[case] input: &str) {
        assert_eq!(camel_case_to_spinal_case(input), "");
    }

    #[test]
    fn test_build_key_value_string() {
        let empty = Config::new().with("style", Vec::<(&str, &str)>::new());
        assert_eq!(build_key_value_string(&empty, "style"), "");

        let one = Config::new().with("style", [("color", "red")]);
        assert_eq!(build_key_value_string(&one, "style"), "color:red");

        let camel = Config::new().with("style", [("backgroundColor", "red")]);
        assert_eq!(build_key_value_string(&camel, "style"), "background-color:red");

        let many = Config::new().with("style", [("color", "red"), ("display", "block")]);
        assert_eq!(
            build_key_value_string(&many, "style"),
            "color:red;display:block"
        );
    }

    #[test]
    fn build_key_value_string_without_mapping() {
        let config = Config::new().with("style", "color:red");
        assert_eq!(build_key_value_string(&config, "style"), "");
        assert_eq!(build_key_value_string(&config, "missing"), "");
    }

    #[test]
    fn test_set_data_attribute() {
        let bump = Bump::new();
        let doc = Document::new(&bump);

        let mut p = doc.create_element("p").unwrap();
        p.set_attribute("id", "foo");
        let empty = Config::new().with("data", Vec::<(&str, &str)>::new());
        assert_eq!(
            set_data_attribute(&mut p, &empty, "data").outer_html(),
            r#"<p id="foo"></p>"#
        );

        let config = Config::new().with("data", [("foo", "bar"), ("bar", "foo")]);
        assert_eq!(
            set_data_attribute(&mut p, &config, "data").outer_html(),
            r#"<p id="foo" data-foo="bar" data-bar="foo"></p>"#
        );

        let mut p = doc.create_element("p").unwrap();
        let camel = Config::new().with("data", [("fooXyz", 1)]);
        assert_eq!(
            set_data_attribute(&mut p, &camel, "data").outer_html(),
            r#"<p data-foo-xyz="1"></p>"#
        );
    }
}

//! Response decoding.
//!
//! Last.fm answers GET calls in JSON (we ask for it with `format=json`) and
//! POST calls in its default XML, wrapped in an `<lfm status="...">`
//! envelope. [`decode_body`] picks the path from the response content type.
//!
//! Response types implement [`Decode`]. The XML path converts the envelope's
//! children into the same JSON shape the service produces for its JSON
//! format, so most types only need a serde `Deserialize` impl:
//!
//! | XML                                  | JSON value                         |
//! |--------------------------------------|------------------------------------|
//! | `<name>Foo</name>`                   | `"name": "Foo"`                    |
//! | `<image size="small">url</image>`    | `"image": {"size": "small", "#text": "url"}` |
//! | `<track rank="1"><name>..</name>`    | `"track": {"@attr": {"rank": "1"}, "name": ..}` |
//! | repeated `<tag>` siblings            | `"tag": [...]`                     |

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DecodeError;

const JSON_MIME: &str = "application/json";
const ENVELOPE: &str = "lfm";

/// A value that can be decoded from either response format.
pub trait Decode: Sized {
    /// Decode a JSON body.
    fn from_json(body: &[u8]) -> Result<Self, DecodeError>;

    /// Decode from a non-empty `<lfm>` envelope.
    fn from_xml(envelope: roxmltree::Node<'_, '_>) -> Result<Self, DecodeError>;
}

impl<T: DeserializeOwned> Decode for T {
    fn from_json(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }

    fn from_xml(envelope: roxmltree::Node<'_, '_>) -> Result<Self, DecodeError> {
        Ok(serde_json::from_value(children_to_value(envelope))?)
    }
}

/// Whether a `Content-Type` header denotes JSON. Only the MIME essence is
/// compared; parameters such as `charset` are ignored.
pub fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_MIME))
}

/// Decode a response body according to its content type.
///
/// Returns `Ok(None)` when an XML envelope carries no inner content.
pub fn decode_body<T: Decode>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Option<T>, DecodeError> {
    if is_json(content_type) {
        return T::from_json(body).map(Some);
    }

    let text = std::str::from_utf8(body)
        .map_err(|e| DecodeError::Envelope(format!("body is not UTF-8: {e}")))?;
    let doc = roxmltree::Document::parse(text)?;
    let envelope = doc.root_element();

    if !envelope.tag_name().name().eq_ignore_ascii_case(ENVELOPE) {
        return Err(DecodeError::Envelope(format!(
            "expected <{ENVELOPE}>, found <{}>",
            envelope.tag_name().name()
        )));
    }

    if !has_inner_content(envelope) {
        return Ok(None);
    }

    T::from_xml(envelope).map(Some)
}

fn has_inner_content(node: roxmltree::Node<'_, '_>) -> bool {
    node.children().any(|child| {
        child.is_element() || (child.is_text() && child.text().is_some_and(|t| !t.trim().is_empty()))
    })
}

/// Children of `node` as a JSON object.
pub fn children_to_value(node: roxmltree::Node<'_, '_>) -> Value {
    let mut map = Map::new();
    for child in node.children().filter(|n| n.is_element()) {
        let key = qualified_name(child);
        let value = element_to_value(child);
        match map.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    Value::Object(map)
}

fn element_to_value(node: roxmltree::Node<'_, '_>) -> Value {
    let has_children = node.children().any(|n| n.is_element());
    let has_attributes = node.attributes().next().is_some();

    if has_children {
        let mut value = children_to_value(node);
        if has_attributes {
            if let Value::Object(map) = &mut value {
                map.insert("@attr".to_string(), attributes_to_map(node).into());
            }
        }
        return value;
    }

    let text = node.text().unwrap_or_default().to_string();
    if has_attributes {
        let mut map = attributes_to_map(node);
        map.insert("#text".to_string(), Value::String(text));
        return Value::Object(map);
    }

    Value::String(text)
}

fn attributes_to_map(node: roxmltree::Node<'_, '_>) -> Map<String, Value> {
    node.attributes()
        .map(|a| (a.name().to_string(), Value::String(a.value().to_string())))
        .collect()
}

/// `opensearch:Query` style names keep their prefix, like the JSON format.
fn qualified_name(node: roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let prefix = tag.namespace().and_then(|ns| node.lookup_prefix(ns));
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", tag.name()),
        _ => tag.name().to_string(),
    }
}

/// Lenient deserializers for fields whose shape varies between formats.
pub mod de {
    use serde::de::{DeserializeOwned, Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    /// A list that may arrive as a single object, an array, or not at all.
    pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Vec::new()),
            // Empty lists come back as "" in the XML bridge and as "\n" in some JSON
            Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
                .collect(),
            single => serde_json::from_value(single)
                .map(|item| vec![item])
                .map_err(D::Error::custom),
        }
    }

    /// A nested object that may arrive as an empty string: an empty XML
    /// element, or the `""` the service sends for missing sections.
    pub fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(T::default()),
            Value::String(s) if s.trim().is_empty() => Ok(T::default()),
            other => serde_json::from_value(other).map_err(D::Error::custom),
        }
    }

    /// An unsigned number sent as a number, a numeric string, or empty.
    pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_u64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                        .map(|f| f as u64)
                })
                .ok_or_else(|| D::Error::custom(format!("invalid count: {n}"))),
            Value::String(s) if s.trim().is_empty() => Ok(0),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid count: {s:?}"))),
            other => Err(D::Error::custom(format!("invalid count: {other}"))),
        }
    }

    /// A float sent as a number, a numeric string, or empty.
    pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0.0),
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom(format!("invalid number: {n}"))),
            Value::String(s) if s.trim().is_empty() => Ok(0.0),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid number: {s:?}"))),
            other => Err(D::Error::custom(format!("invalid number: {other}"))),
        }
    }

    /// A flag sent as `"1"`/`"0"`, `1`/`0`, or a JSON boolean.
    pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_u64().is_some_and(|v| v != 0)),
            Value::String(s) => Ok(matches!(s.trim(), "1" | "true")),
            other => Err(D::Error::custom(format!("invalid flag: {other}"))),
        }
    }
}

//! JSON document -> [`Node`] tree.
//!
//! Each node is an object with exactly one recognized key naming its kind.
//! Unrecognized keys next to the recognized one are ignored; no recognized
//! key, an unrecognized sole key, or two recognized keys is an error.
//! Nodes nest at most [`MAX_NODE_DEPTH`] deep.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{Axis, Node, NodeKind, SpaceValue, Stack, TextAlignment, TextContent};
use crate::error::DecodeError;

/// Deepest node nesting a document may use; the root is depth 1.
///
/// Each stack level costs three JSON levels (node, body, `subviews`), so this
/// stays inside serde_json's own recursion limit of 128.
pub const MAX_NODE_DEPTH: usize = 40;

/// Decode raw document bytes.
pub fn decode(bytes: &[u8]) -> Result<Node, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_value(&value)
}

/// Decode a document held as a string.
pub fn decode_str(document: &str) -> Result<Node, DecodeError> {
    decode(document.as_bytes())
}

/// Decode an already-parsed JSON value.
pub fn decode_value(value: &Value) -> Result<Node, DecodeError> {
    let node = decode_node(value, "", 1)?;
    tracing::debug!(
        kind = %node.kind(),
        nodes = node.node_count(),
        depth = node.depth(),
        "decoded view descriptor"
    );
    Ok(node)
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_value(&value).map_err(de::Error::custom)
    }
}

fn decode_node(value: &Value, path: &str, depth: usize) -> Result<Node, DecodeError> {
    if depth > MAX_NODE_DEPTH {
        return Err(DecodeError::NestedTooDeeply {
            limit: MAX_NODE_DEPTH,
        });
    }
    let object = as_object(value, path)?;
    let (kind, body) = select_kind(object, path)?;
    let body_path = format!("{}/{}", path, kind.key());

    let node = match kind {
        NodeKind::Stack => Node::Stack(decode_stack(body, &body_path, depth)?),
        NodeKind::Title => Node::Title(decode_text(body, &body_path)?),
        NodeKind::Heading => Node::Heading(decode_text(body, &body_path)?),
        NodeKind::Subheading => Node::Subheading(decode_text(body, &body_path)?),
        NodeKind::Body => Node::Body(decode_text(body, &body_path)?),
        NodeKind::Bullet => Node::Bullet(decode_text(body, &body_path)?),
        NodeKind::Space => Node::Space(decode_space(body, &body_path)?),
    };
    Ok(node)
}

/// Pick the single recognized key of a node object.
fn select_kind<'a>(
    object: &'a Map<String, Value>,
    path: &str,
) -> Result<(NodeKind, &'a Value), DecodeError> {
    let mut recognized = object
        .iter()
        .filter_map(|(key, body)| NodeKind::from_key(key).map(|kind| (kind, body)));

    match (recognized.next(), recognized.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(DecodeError::MultipleKeys {
            path: path.to_string(),
            keys: object
                .keys()
                .filter(|key| NodeKind::from_key(key).is_some())
                .cloned()
                .collect(),
        }),
        (None, _) => match object.keys().next() {
            Some(key) if object.len() == 1 => Err(DecodeError::UnknownKey {
                path: path.to_string(),
                key: key.clone(),
            }),
            _ => Err(DecodeError::NoRecognizedKey {
                path: path.to_string(),
            }),
        },
    }
}

fn decode_stack(body: &Value, path: &str, depth: usize) -> Result<Stack, DecodeError> {
    let fields = as_object(body, path)?;

    let axis_value = required_str(fields, "axis", path)?;
    let axis = Axis::from_wire(axis_value).ok_or_else(|| DecodeError::InvalidAxis {
        path: path.to_string(),
        value: axis_value.to_string(),
    })?;

    let subviews = match fields.get("subviews") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DecodeError::InvalidField {
                path: path.to_string(),
                field: "subviews",
                expected: "an array",
                found: describe(other).to_string(),
            })
        }
        None => {
            return Err(DecodeError::MissingField {
                path: path.to_string(),
                field: "subviews",
            })
        }
    };

    let children = subviews
        .iter()
        .enumerate()
        .map(|(index, child)| {
            decode_node(child, &format!("{}/subviews/{}", path, index), depth + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Stack { axis, children })
}

fn decode_text(body: &Value, path: &str) -> Result<TextContent, DecodeError> {
    let fields = as_object(body, path)?;
    let text = required_str(fields, "text", path)?.to_string();

    // Absent and null both mean "use the default at render time"; an
    // unknown or empty token does not.
    let alignment = match fields.get("alignment") {
        None | Some(Value::Null) => None,
        Some(Value::String(token)) => Some(TextAlignment::from_wire(token).ok_or_else(|| {
            DecodeError::InvalidAlignment {
                path: path.to_string(),
                value: token.clone(),
            }
        })?),
        Some(other) => {
            return Err(DecodeError::InvalidAlignment {
                path: path.to_string(),
                value: other.to_string(),
            })
        }
    };

    Ok(TextContent { text, alignment })
}

fn decode_space(body: &Value, path: &str) -> Result<SpaceValue, DecodeError> {
    let fields = as_object(body, path)?;
    let value = fields.get("value").ok_or_else(|| DecodeError::MissingField {
        path: path.to_string(),
        field: "value",
    })?;

    let invalid = || DecodeError::InvalidSpaceValue {
        path: path.to_string(),
        value: value.to_string(),
    };

    match value {
        Value::Number(number) => match number.as_f64() {
            Some(points) if points.is_finite() && points >= 0.0 => Ok(SpaceValue::Fixed(points)),
            _ => Err(invalid()),
        },
        Value::String(token) if token == "flex" => Ok(SpaceValue::Flexible),
        _ => Err(invalid()),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::NotAnObject {
        path: path.to_string(),
        found: describe(value).to_string(),
    })
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'a str, DecodeError> {
    match fields.get(field) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(DecodeError::InvalidField {
            path: path.to_string(),
            field,
            expected: "a string",
            found: describe(other).to_string(),
        }),
        None => Err(DecodeError::MissingField {
            path: path.to_string(),
            field,
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

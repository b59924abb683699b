//! Built-in scalar coercion behaviors: `String`, `Int`, `Float`, `Boolean`,
//! `ID`.

use std::sync::Arc;

use iris_ast::Value;
use serde_json::{Number, Value as Json};

use crate::types::{IrisTypeDefinition, ScalarBehavior};

const INT_MIN: i64 = i32::MIN as i64;
const INT_MAX: i64 = i32::MAX as i64;

fn parse_int_literal(node: &Value) -> Option<Json> {
    match node {
        Value::Int(n) => {
            let v: i64 = n.value.parse().ok()?;
            if (INT_MIN..=INT_MAX).contains(&v) {
                Some(Json::Number(Number::from(v)))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn serialize_int(value: &Json) -> std::result::Result<Json, String> {
    let n = match value {
        Json::Number(n) => n,
        Json::Bool(b) => return Ok(Json::Number(Number::from(*b as i64))),
        _ => return Err(format!("Int cannot represent non-integer value: {value}")),
    };
    let v = n
        .as_i64()
        .ok_or_else(|| format!("Int cannot represent non-integer value: {value}"))?;
    if (INT_MIN..=INT_MAX).contains(&v) {
        Ok(Json::Number(Number::from(v)))
    } else {
        Err(format!("Int cannot represent non 32-bit signed integer value: {value}"))
    }
}

fn parse_float_literal(node: &Value) -> Option<Json> {
    let raw = match node {
        Value::Int(n) => &n.value,
        Value::Float(n) => &n.value,
        _ => return None,
    };
    let v: f64 = raw.parse().ok()?;
    Number::from_f64(v).map(Json::Number)
}

fn serialize_float(value: &Json) -> std::result::Result<Json, String> {
    let v = match value {
        Json::Number(n) => n.as_f64().ok_or_else(|| format!("Float cannot represent value: {value}"))?,
        Json::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return Err(format!("Float cannot represent non numeric value: {value}")),
    };
    if !v.is_finite() {
        return Err(format!("Float cannot represent non finite value: {value}"));
    }
    Ok(Number::from_f64(v).map(Json::Number).unwrap_or(Json::Null))
}

fn parse_boolean_literal(node: &Value) -> Option<Json> {
    match node {
        Value::Boolean(b) => Some(Json::Bool(b.value)),
        _ => None,
    }
}

fn serialize_boolean(value: &Json) -> std::result::Result<Json, String> {
    match value {
        Json::Bool(b) => Ok(Json::Bool(*b)),
        _ => Err(format!("Boolean cannot represent a non boolean value: {value}")),
    }
}

fn parse_string_literal(node: &Value) -> Option<Json> {
    match node {
        Value::String(s) => Some(Json::String(s.value.clone())),
        _ => None,
    }
}

fn serialize_string(value: &Json) -> std::result::Result<Json, String> {
    match value {
        Json::String(s) => Ok(Json::String(s.clone())),
        Json::Number(n) => Ok(Json::String(n.to_string())),
        Json::Bool(b) => Ok(Json::String(b.to_string())),
        _ => Err(format!("String cannot represent value: {value}")),
    }
}

fn parse_id_literal(node: &Value) -> Option<Json> {
    match node {
        Value::String(s) => Some(Json::String(s.value.clone())),
        Value::Int(n) => Some(Json::String(n.value.clone())),
        _ => None,
    }
}

fn serialize_id(value: &Json) -> std::result::Result<Json, String> {
    match value {
        Json::String(s) => Ok(Json::String(s.clone())),
        Json::Number(n) if n.is_i64() || n.is_u64() => Ok(Json::String(n.to_string())),
        _ => Err(format!("ID cannot represent value: {value}")),
    }
}

/// The five built-in scalars, pre-registered in every schema's type map.
/// User SDL may not redefine any of these names.
pub fn builtin_scalars() -> Vec<Arc<IrisTypeDefinition>> {
    let defs: &[(&str, ScalarBehavior)] = &[
        ("Int", ScalarBehavior { parse_literal: parse_int_literal, serialize: serialize_int }),
        ("Float", ScalarBehavior { parse_literal: parse_float_literal, serialize: serialize_float }),
        ("String", ScalarBehavior { parse_literal: parse_string_literal, serialize: serialize_string }),
        ("Boolean", ScalarBehavior { parse_literal: parse_boolean_literal, serialize: serialize_boolean }),
        ("ID", ScalarBehavior { parse_literal: parse_id_literal, serialize: serialize_id }),
    ];
    defs.iter().map(|(name, behavior)| Arc::new(IrisTypeDefinition::new_scalar(*name, *behavior))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_ast::IntValueNode;

    #[test]
    fn int_rejects_out_of_range() {
        let node = Value::Int(IntValueNode { value: "99999999999".into(), loc: None });
        assert!(parse_int_literal(&node).is_none());
    }

    #[test]
    fn id_accepts_string_or_int_on_input_but_serializes_string() {
        let node = Value::Int(IntValueNode { value: "42".into(), loc: None });
        assert_eq!(parse_id_literal(&node), Some(Json::String("42".into())));
        assert_eq!(serialize_id(&Json::Number(42.into())).unwrap(), Json::String("42".into()));
    }

    #[test]
    fn float_rejects_non_finite_on_serialize() {
        assert!(serialize_float(&Json::String("x".into())).is_err());
    }
}

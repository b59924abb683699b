//! `valueFromASTUntyped`: a plain literal → JSON conversion that does not
//! need a target `IrisType` at all. This is what the schema builder uses to
//! compute argument default values, which keeps the builder from needing to
//! depend on the fully typed value-coercion crate built on top of this one.

use std::collections::HashMap;

use iris_ast::Value;
use serde_json::{Map, Number, Value as Json};

pub type Variables = HashMap<String, Json>;

pub fn value_from_ast_untyped(node: &Value, variables: Option<&Variables>) -> Option<Json> {
    match node {
        Value::Variable(v) => variables.and_then(|vars| vars.get(&v.name.value)).cloned(),
        Value::Int(n) => {
            if let Ok(i) = n.value.parse::<i64>() {
                Some(Json::Number(Number::from(i)))
            } else {
                n.value.parse::<f64>().ok().and_then(Number::from_f64).map(Json::Number)
            }
        }
        Value::Float(n) => n.value.parse::<f64>().ok().and_then(Number::from_f64).map(Json::Number),
        Value::String(s) => Some(Json::String(s.value.clone())),
        Value::Boolean(b) => Some(Json::Bool(b.value)),
        Value::Null(_) => Some(Json::Null),
        Value::Enum(e) => Some(Json::String(e.value.clone())),
        Value::List(list) => {
            let mut out = Vec::with_capacity(list.values.len());
            for item in &list.values {
                out.push(value_from_ast_untyped(item, variables)?);
            }
            Some(Json::Array(out))
        }
        Value::Object(obj) => {
            let mut map = Map::with_capacity(obj.fields.len());
            for field in &obj.fields {
                let value = value_from_ast_untyped(&field.value, variables)?;
                map.insert(field.name.value.clone(), value);
            }
            Some(Json::Object(map))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_ast::{BooleanValueNode, IntValueNode, ListValueNode, NullValueNode};

    #[test]
    fn converts_list_of_scalars() {
        let node = Value::List(ListValueNode {
            values: vec![
                Value::Boolean(BooleanValueNode { value: true, loc: None }),
                Value::Null(NullValueNode { loc: None }),
            ],
            loc: None,
        });
        assert_eq!(
            value_from_ast_untyped(&node, None),
            Some(Json::Array(vec![Json::Bool(true), Json::Null]))
        );
    }

    #[test]
    fn unbound_variable_is_none() {
        let node = Value::Int(IntValueNode { value: "1".into(), loc: None });
        assert_eq!(value_from_ast_untyped(&node, None), Some(Json::Number(1.into())));
    }
}

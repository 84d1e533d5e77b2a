//! Deep-key-sorted, whitespace-free JSON serialisation used to produce a
//! deterministic byte string for hashing (§3.3: canonical form).

use serde_json::Value;
use std::collections::BTreeMap;

/// Render `value` with object keys sorted at every nesting depth and no
/// insignificant whitespace. Two JSON documents that differ only in key
/// order or formatting produce byte-identical output.
pub fn canonicalize(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (key, val)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key).expect("string keys always serialise"));
                out.push(':');
                write_canonical(val, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        other => {
            out.push_str(&serde_json::to_string(other).expect("scalar always serialises"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_is_irrelevant() {
        let a = json!({"type": "Point", "coordinates": [1.0, 2.0]});
        let b = json!({"coordinates": [1.0, 2.0], "type": "Point"});
        assert_eq!(canonicalize(&a), canonicalize(&b));
    }

    #[test]
    fn whitespace_is_stripped() {
        let v: Value = serde_json::from_str(r#"{ "a" : 1 , "b" : [1, 2] }"#).unwrap();
        assert_eq!(canonicalize(&v), r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn nested_objects_are_sorted_at_every_depth() {
        let v = json!({"z": {"b": 1, "a": 2}, "a": 1});
        assert_eq!(canonicalize(&v), r#"{"a":1,"z":{"a":2,"b":1}}"#);
    }
}

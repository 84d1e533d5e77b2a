//! Property: canonical JSON is independent of source key order and object
//! nesting shape (§3.3, §8).

use astral_models::canon::canonicalize;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn shuffled_object(pairs: Vec<(String, Value)>, seed: usize) -> Value {
    let mut entries = pairs;
    let len = entries.len();
    if len > 1 {
        entries.rotate_left(seed % len);
    }
    let mut map = Map::new();
    for (k, v) in entries {
        map.insert(k, v);
    }
    Value::Object(map)
}

proptest! {
    #[test]
    fn key_order_never_affects_canonical_output(
        a in 0i64..1000,
        b in 0i64..1000,
        c in 0i64..1000,
        rotation in 0usize..6,
    ) {
        let pairs = vec![
            ("alpha".to_string(), json!(a)),
            ("beta".to_string(), json!(b)),
            ("gamma".to_string(), json!(c)),
        ];
        let canonical_order = canonicalize(&shuffled_object(pairs.clone(), 0));
        let rotated = canonicalize(&shuffled_object(pairs, rotation));
        prop_assert_eq!(canonical_order, rotated);
    }

    #[test]
    fn canonical_output_never_contains_insignificant_whitespace(
        a in 0i64..1000,
        b in 0i64..1000,
    ) {
        let v = json!({"x": a, "nested": {"y": b, "list": [a, b]}});
        let out = canonicalize(&v);
        prop_assert!(!out.contains(' '));
        prop_assert!(!out.contains('\n'));
    }
}

#[test]
fn geometry_ref_hash_is_stable_across_reordered_geojson() {
    let a = json!({
        "type": "Point",
        "coordinates": [-122.4194, 37.7749],
    });
    let b = json!({
        "coordinates": [-122.4194, 37.7749],
        "type": "Point",
    });
    assert_eq!(canonicalize(&a), canonicalize(&b));
}

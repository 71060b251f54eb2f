use crate::error::{AppError, AppResult};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Sha256 hex digest of `value` serialized as compact JSON with object keys
/// in sorted order, so struct field order and map insertion order never
/// change the hash.
///
/// Values go through `serde_json::Value` first; its map is a `BTreeMap`
/// unless `preserve_order` is enabled, which this workspace never does.
pub fn canonical_hash<T: Serialize>(value: &T) -> AppResult<String> {
    let tree = serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("json serialize error: {e}")))?;
    let bytes = serde_json::to_vec(&tree)
        .map_err(|e| AppError::internal(format!("json encode error: {e}")))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Forward {
        a: i32,
        b: Vec<i32>,
    }

    #[derive(Serialize)]
    struct Backward {
        b: Vec<i32>,
        a: i32,
    }

    #[test]
    fn field_order_does_not_change_hash() {
        let h1 = canonical_hash(&Forward { a: 1, b: vec![2, 3] }).unwrap();
        let h2 = canonical_hash(&Backward { b: vec![2, 3], a: 1 }).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
        assert!(h1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn nested_map_insertion_order_does_not_change_hash() {
        let forward: HashMap<&str, HashMap<&str, f64>> = HashMap::from([
            ("weights", HashMap::from([("Critical", 100.0), ("Info", 1.0)])),
            ("caps", HashMap::from([("links", 10.0)])),
        ]);
        let backward: HashMap<&str, HashMap<&str, f64>> = HashMap::from([
            ("caps", HashMap::from([("links", 10.0)])),
            ("weights", HashMap::from([("Info", 1.0), ("Critical", 100.0)])),
        ]);
        assert_eq!(canonical_hash(&forward).unwrap(), canonical_hash(&backward).unwrap());
    }

    #[test]
    fn array_order_and_values_are_significant() {
        let base = canonical_hash(&Forward { a: 1, b: vec![2, 3] }).unwrap();
        let swapped = canonical_hash(&Forward { a: 1, b: vec![3, 2] }).unwrap();
        let changed = canonical_hash(&Forward { a: 2, b: vec![2, 3] }).unwrap();
        assert_ne!(base, swapped);
        assert_ne!(base, changed);
    }
}

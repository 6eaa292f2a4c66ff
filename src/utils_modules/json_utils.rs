use crate::common::*;

#[doc = "Function that compares two json documents for logical equality."]
/// Objects are compared key by key regardless of key order. Lists whose elements are
/// all objects are compared as unordered collections; any other list keeps its order.
///
/// # Arguments
/// * `left` - Document as held by the caller
/// * `right` - Document as stored in the index
///
/// # Returns
/// * bool - true when both documents carry the same data.
pub fn compare_documents(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            if left_map.len() != right_map.len() {
                return false;
            }

            left_map.iter().all(|(key, left_value)| match right_map.get(key) {
                Some(right_value) => compare_documents(left_value, right_value),
                None => false,
            })
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            if left_items.len() != right_items.len() {
                return false;
            }

            let all_objects: bool = !left_items.is_empty()
                && left_items.iter().all(Value::is_object)
                && right_items.iter().all(Value::is_object);

            if all_objects {
                /* Element order is not part of document identity for lists of objects. */
                let mut left_sorted: Vec<Value> = left_items.to_vec();
                let mut right_sorted: Vec<Value> = right_items.to_vec();
                left_sorted.sort_by_key(|value| canonical_string(value));
                right_sorted.sort_by_key(|value| canonical_string(value));

                left_sorted
                    .iter()
                    .zip(right_sorted.iter())
                    .all(|(left_value, right_value)| compare_documents(left_value, right_value))
            } else {
                left_items == right_items
            }
        }
        _ => left == right,
    }
}

#[doc = "Renders a json value with object keys in sorted order. Used as a stable sort key."]
fn canonical_string(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let inner: Vec<String> = keys
                .into_iter()
                .map(|key| format!("{:?}:{}", key, canonical_string(&map[key])))
                .collect();
            format!("{{{}}}", inner.join(","))
        }
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(canonical_string).collect();
            format!("[{}]", inner.join(","))
        }
        _ => value.to_string(),
    }
}

#[doc = "Function that resolves a dotted path such as 'document.issued_at' inside a json value."]
pub fn get_value_by_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| current.get(segment))
}

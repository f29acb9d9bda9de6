use serde_json::Value;

/// Visit every member of `value` depth first.
///
/// `visit` receives the dotted path of the parent (`""` at the top), the
/// member name (array elements use their index), the member value and the
/// parent. Objects and arrays are descended into after they are visited.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spx_util::walk_object;
///
/// let doc = json!({"a": {"b": 1}, "c": [true]});
/// let mut seen = Vec::new();
/// walk_object(&doc, |path, prop, _, _| seen.push(format!("{path}/{prop}")));
/// assert_eq!(seen, ["/a", "a/b", "/c", "c/0"]);
/// ```
pub fn walk_object<F>(value: &Value, mut visit: F)
where
    F: FnMut(&str, &str, &Value, &Value),
{
    walk("", value, &mut visit);
}

fn walk<F>(path: &str, parent: &Value, visit: &mut F)
where
    F: FnMut(&str, &str, &Value, &Value),
{
    match parent {
        Value::Object(map) => {
            for (prop, value) in map {
                step(path, prop, value, parent, visit);
            }
        }
        Value::Array(items) => {
            for (idx, value) in items.iter().enumerate() {
                step(path, &idx.to_string(), value, parent, visit);
            }
        }
        _ => {}
    }
}

fn step<F>(path: &str, prop: &str, value: &Value, parent: &Value, visit: &mut F)
where
    F: FnMut(&str, &str, &Value, &Value),
{
    visit(path, prop, value, parent);
    if value.is_object() || value.is_array() {
        let child_path = if path.is_empty() {
            prop.to_string()
        } else {
            format!("{path}.{prop}")
        };
        walk(&child_path, value, visit);
    }
}

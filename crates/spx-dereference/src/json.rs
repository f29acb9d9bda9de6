use serde_json::{Map, Value};

use crate::types::{Container, PathStep};

/// How many `null` holes a single write may open past the end of an array.
pub const MAX_ARRAY_GAP: usize = 1 << 16;

/// JSON documents are containers: objects hold members, arrays hold elements,
/// and every other value holds nothing.
impl Container for Value {
    type Key = PathStep;

    fn empty() -> Self {
        Value::Object(Map::new())
    }

    fn child(&self, key: &PathStep) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(&*key.as_key()),
            Value::Array(arr) => arr.get(key.as_index()?),
            _ => None,
        }
    }

    fn child_mut(&mut self, key: &PathStep) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(&*key.as_key()),
            Value::Array(arr) => arr.get_mut(key.as_index()?),
            _ => None,
        }
    }

    fn set_child(&mut self, key: &PathStep, value: Value) -> Result<(), Value> {
        match self {
            Value::Object(map) => {
                map.insert(key.as_key().into_owned(), value);
                Ok(())
            }
            Value::Array(arr) => {
                let Some(idx) = key.as_index() else {
                    return Err(value);
                };
                if idx < arr.len() {
                    arr[idx] = value;
                } else if idx - arr.len() <= MAX_ARRAY_GAP {
                    // Writing past the end leaves `null` holes, like a sparse array.
                    arr.resize(idx, Value::Null);
                    arr.push(value);
                } else {
                    return Err(value);
                }
                Ok(())
            }
            _ => Err(value),
        }
    }
}

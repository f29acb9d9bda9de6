//! Path-based access into nested containers.
//!
//! Given a root container and an ordered list of steps, walk the chain of
//! nested containers, optionally creating missing intermediate containers and
//! assigning a final value. JSON documents ([`serde_json::Value`]) are
//! containers out of the box; other tree types opt in by implementing
//! [`Container`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use spx_dereference::{access, get, to_path, PathStep};
//!
//! let mut doc = json!({"attr1": {"a": 1, "b": [10, 20]}});
//!
//! assert_eq!(get(&doc, &to_path(["attr1", "a"])), Some(&json!(1)));
//! assert_eq!(get(&doc, &[PathStep::from("attr1"), PathStep::from("b"), PathStep::Index(1)]), Some(&json!(20)));
//! assert_eq!(get(&doc, &to_path(["attr3", "a"])), None);
//!
//! access(&mut doc, &to_path(["attr1", "d", "e"]), Some(json!("test")), false).unwrap();
//! assert_eq!(doc["attr1"]["d"], json!({"e": "test"}));
//! ```

use thiserror::Error;

mod access;
mod get;
mod json;
pub mod types;

pub use access::access;
pub use get::{get, get_mut};
pub use json::MAX_ARRAY_GAP;
pub use types::{is_valid_index, to_path, Container, Path, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DereferenceError {
    /// The container at `key`'s parent refused to hold a value.
    #[error("dereference: unable to assign property {key} of value: {container}")]
    Assignment { key: String, container: String },
}

//! spx - path access, hierarchical publish/subscribe and web helpers
//!
//! Re-exports the member crates as one namespace:
//!
//! - [`dereference`]: walk nested containers by key path, creating missing
//!   levels on demand.
//! - [`pubsub`]: a topic hub whose publishes cascade into sub-namespaces.
//! - [`util`]: query strings, URLs, GUIDs, hashing, string cleanup, weighted
//!   random selection and server-aligned clocks.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use serde_json::{json, Value};
//! use spx::{append_res_params, TopicHub};
//!
//! let hub: TopicHub<Value> = TopicHub::new();
//! let urls = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&urls);
//! hub.subscribe("request.image", move |_, store| {
//!     sink.borrow_mut().push(append_res_params("http://swoop.com/img", store));
//!     Ok(())
//! });
//!
//! hub.publish("request", &json!({"resParams": {"id": 7}})).unwrap();
//! assert_eq!(*urls.borrow(), ["http://swoop.com/img?id=7"]);
//! ```

pub use spx_dereference as dereference;
pub use spx_pubsub as pubsub;
pub use spx_util as util;

pub use spx_dereference::{access, get, get_mut, to_path, Container, DereferenceError, PathStep};
pub use spx_pubsub::{Callback, HubConfig, Subscription, Topic, TopicHub};
pub use spx_util::{
    append_query_params, append_res_params, clean_unknown_chars, clean_white_space, guid,
    hash_code, ie_version, is_guid, obj_to_url_params, parse_meta_content, resolve_url,
    select_weighted, server_time_fn, url_to_object, walk_object, weighted_random, QueryValue,
    ServerClock, Weighted,
};

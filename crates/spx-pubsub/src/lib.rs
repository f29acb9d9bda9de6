//! Hierarchical publish/subscribe.
//!
//! A [`TopicHub`] owns a tree of topics addressed by namespace segments
//! (`"eventA.ns1"` is the `ns1` namespace inside `eventA`). Publishing to a
//! topic reaches the callbacks of that topic and of everything below it:
//! publishing `"eventA"` reaches subscribers of `"eventA"`, `"eventA.ns1"`
//! and `"eventA.ns2"`, while publishing `"eventA.ns1"` reaches neither
//! `"eventA"` nor `"eventA.ns2"`. Publishing to the root reaches everyone.
//!
//! Topic nodes are located and created with [`spx_dereference::access`].

use std::rc::Rc;

mod config;
mod hub;
mod node;
mod topic;

pub use config::HubConfig;
pub use hub::{Subscription, TopicHub};
pub use node::TopicNode;
pub use topic::{IntoTopic, Topic, DEFAULT_DELIMITER};

/// Default error type callbacks may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A registered callback. Identity (for unsubscribing) is the `Rc` pointer.
pub type Callback<A, E = BoxError> = Rc<dyn Fn(&Topic, &A) -> Result<(), E>>;

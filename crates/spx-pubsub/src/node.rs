use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use spx_dereference::Container;
use tracing::debug;

use crate::Callback;

/// A tree element holding a callback list and named sub-topics.
///
/// Sub-topics keep insertion order, which fixes delivery order across
/// sibling namespaces.
pub struct TopicNode<A, E> {
    callbacks: Vec<Callback<A, E>>,
    sub_topics: IndexMap<String, TopicNode<A, E>>,
}

impl<A, E> TopicNode<A, E> {
    pub fn callbacks(&self) -> &[Callback<A, E>] {
        &self.callbacks
    }

    pub fn sub_topics(&self) -> impl Iterator<Item = (&str, &TopicNode<A, E>)> {
        self.sub_topics.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// No callbacks here and no sub-topics below.
    pub fn is_vacant(&self) -> bool {
        self.callbacks.is_empty() && self.sub_topics.is_empty()
    }

    /// Callbacks registered at this node and every descendant.
    pub fn total_callbacks(&self) -> usize {
        self.callbacks.len()
            + self
                .sub_topics
                .values()
                .map(TopicNode::total_callbacks)
                .sum::<usize>()
    }

    pub(crate) fn push(&mut self, callback: Callback<A, E>) {
        self.callbacks.push(callback);
    }

    /// Remove the first callback that is the same reference as `callback`.
    pub(crate) fn remove(&mut self, callback: &Callback<A, E>) -> bool {
        match self.callbacks.iter().position(|c| Rc::ptr_eq(c, callback)) {
            Some(pos) => {
                self.callbacks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Append this node's callbacks, then each sub-topic's, depth first.
    pub(crate) fn collect(&self, out: &mut Vec<Callback<A, E>>) {
        out.extend(self.callbacks.iter().cloned());
        for node in self.sub_topics.values() {
            node.collect(out);
        }
    }

    /// Drop vacant nodes along `path`, deepest first.
    pub(crate) fn prune(&mut self, path: &[String]) {
        let Some((head, rest)) = path.split_first() else {
            return;
        };
        if let Some(node) = self.sub_topics.get_mut(head) {
            node.prune(rest);
            if node.is_vacant() {
                debug!(segment = %head, "pruning empty topic node");
                self.sub_topics.shift_remove(head);
            }
        }
    }
}

impl<A, E> Default for TopicNode<A, E> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            sub_topics: IndexMap::new(),
        }
    }
}

impl<A, E> fmt::Debug for TopicNode<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicNode")
            .field("callbacks", &self.callbacks.len())
            .field("sub_topics", &self.sub_topics)
            .finish()
    }
}

impl<A, E> fmt::Display for TopicNode<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "topic node ({} callbacks, {} sub-topics)",
            self.callbacks.len(),
            self.sub_topics.len()
        )
    }
}

/// Topic nodes are containers keyed by segment name; they accept any child.
impl<A, E> Container for TopicNode<A, E> {
    type Key = String;

    fn empty() -> Self {
        Self::default()
    }

    fn child(&self, key: &String) -> Option<&Self> {
        self.sub_topics.get(key)
    }

    fn child_mut(&mut self, key: &String) -> Option<&mut Self> {
        self.sub_topics.get_mut(key)
    }

    fn set_child(&mut self, key: &String, value: Self) -> Result<(), Self> {
        self.sub_topics.insert(key.clone(), value);
        Ok(())
    }
}

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use spx_dereference::{access, get, get_mut};
use tracing::{debug, trace};

use crate::config::HubConfig;
use crate::node::TopicNode;
use crate::topic::{IntoTopic, Topic};
use crate::{BoxError, Callback};

/// Handle returned by [`TopicHub::subscribe`]: the resolved topic and the
/// callback reference that was registered.
pub struct Subscription<A, E = BoxError> {
    topic: Topic,
    callback: Callback<A, E>,
}

impl<A, E> Subscription<A, E> {
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn callback(&self) -> &Callback<A, E> {
        &self.callback
    }
}

impl<A, E> Clone for Subscription<A, E> {
    fn clone(&self) -> Self {
        Self {
            topic: self.topic.clone(),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<A, E> fmt::Debug for Subscription<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

/// A hierarchical publish/subscribe hub.
///
/// Topics form a tree of namespaces. Publishing to a topic delivers to the
/// callbacks of that topic and of every more specific topic below it, never
/// to enclosing or sibling namespaces.
///
/// Delivery is synchronous. Callbacks are gathered before any runs, so a
/// callback may subscribe, unsubscribe or publish on the same hub; such
/// changes apply to later publishes only.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use spx_pubsub::TopicHub;
///
/// let hub: TopicHub<u32> = TopicHub::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let log = Rc::clone(&seen);
/// hub.subscribe("eventA", move |topic, n| {
///     log.borrow_mut().push(format!("eventA got {topic}:{n}"));
///     Ok(())
/// });
/// let log = Rc::clone(&seen);
/// hub.subscribe("eventA.ns1", move |topic, n| {
///     log.borrow_mut().push(format!("ns1 got {topic}:{n}"));
///     Ok(())
/// });
///
/// hub.publish("eventA", &1).unwrap();
/// hub.publish("eventA.ns1", &2).unwrap();
///
/// assert_eq!(
///     *seen.borrow(),
///     ["eventA got eventA:1", "ns1 got eventA:1", "ns1 got eventA.ns1:2"]
/// );
/// ```
pub struct TopicHub<A, E = BoxError> {
    config: HubConfig,
    root: RefCell<TopicNode<A, E>>,
}

impl<A, E> TopicHub<A, E> {
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    pub fn with_config(config: HubConfig) -> Self {
        Self {
            config,
            root: RefCell::new(TopicNode::default()),
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Parse a topic name with this hub's delimiter.
    pub fn topic(&self, name: &str) -> Topic {
        Topic::parse(name, self.config.delimiter)
    }

    /// Render a topic with this hub's delimiter.
    ///
    /// Callbacks receive a [`Topic`]; its `Display` always uses `.`, so a hub
    /// configured with another delimiter names topics through this method.
    pub fn topic_name(&self, topic: &Topic) -> String {
        topic.join(self.config.delimiter)
    }

    /// Register `callback` on `topic` and return a handle to it.
    ///
    /// The same callback may be registered more than once; each registration
    /// is delivered separately.
    pub fn subscribe<F>(&self, topic: impl IntoTopic, callback: F) -> Subscription<A, E>
    where
        F: Fn(&Topic, &A) -> Result<(), E> + 'static,
    {
        self.subscribe_shared(topic, Rc::new(callback))
    }

    /// Register an existing callback reference on `topic`.
    ///
    /// Use this to subscribe one callback to several topics and later remove
    /// it by reference.
    pub fn subscribe_shared(
        &self,
        topic: impl IntoTopic,
        callback: Callback<A, E>,
    ) -> Subscription<A, E> {
        let topic = topic.into_topic(self.config.delimiter);
        let mut root = self.root.borrow_mut();
        if let Some(node) = resolve(&mut *root, &topic) {
            node.push(Rc::clone(&callback));
            trace!(topic = %topic, "subscribed");
        }
        Subscription { topic, callback }
    }

    /// Register `callback` on the root, receiving every publish.
    pub fn subscribe_all<F>(&self, callback: F) -> Subscription<A, E>
    where
        F: Fn(&Topic, &A) -> Result<(), E> + 'static,
    {
        self.subscribe(Topic::root(), callback)
    }

    /// Remove the first registration of `callback` (by reference) on `topic`.
    ///
    /// Returns whether anything was removed. Missing topics are not created.
    pub fn unsubscribe(&self, topic: impl IntoTopic, callback: &Callback<A, E>) -> bool {
        let topic = topic.into_topic(self.config.delimiter);
        let mut root = self.root.borrow_mut();
        let removed = match get_mut(&mut *root, topic.segments()) {
            Some(node) => node.remove(callback),
            None => false,
        };
        if !removed {
            debug!(topic = %topic, "unsubscribe matched no callback");
        } else if self.config.prune_empty {
            root.prune(topic.segments());
        }
        removed
    }

    /// Remove a root registration of `callback`.
    pub fn unsubscribe_all(&self, callback: &Callback<A, E>) -> bool {
        self.unsubscribe(Topic::root(), callback)
    }

    /// Remove the registration a [`Subscription`] refers to.
    pub fn cancel(&self, subscription: &Subscription<A, E>) -> bool {
        self.unsubscribe(&subscription.topic, &subscription.callback)
    }

    /// Deliver `args` to every callback on `topic` and below.
    ///
    /// Callbacks run in order: the topic's own callbacks first, then each
    /// sub-topic depth first in creation order. Each receives the published
    /// topic (not the one it subscribed to) and `args`.
    ///
    /// Publishing to a topic nobody has seen creates its node.
    ///
    /// # Errors
    ///
    /// The first error returned by a callback, unchanged. Callbacks after it
    /// do not run.
    pub fn publish(&self, topic: impl IntoTopic, args: &A) -> Result<(), E> {
        let topic = topic.into_topic(self.config.delimiter);
        let callbacks = {
            let mut root = self.root.borrow_mut();
            let mut out = Vec::new();
            if let Some(node) = resolve(&mut *root, &topic) {
                node.collect(&mut out);
            }
            out
        };
        trace!(topic = %topic, callbacks = callbacks.len(), "publish");
        for callback in &callbacks {
            callback(&topic, args)?;
        }
        Ok(())
    }

    /// Deliver `args` to every callback in the hub.
    pub fn publish_all(&self, args: &A) -> Result<(), E> {
        self.publish(Topic::root(), args)
    }

    /// Callbacks registered directly on `topic`, not counting sub-topics.
    pub fn callback_count(&self, topic: impl IntoTopic) -> usize {
        let topic = topic.into_topic(self.config.delimiter);
        let root = self.root.borrow();
        get(&*root, topic.segments()).map_or(0, |node| node.callbacks().len())
    }

    /// Whether a node exists for `topic`, with or without callbacks.
    pub fn contains(&self, topic: impl IntoTopic) -> bool {
        let topic = topic.into_topic(self.config.delimiter);
        let root = self.root.borrow();
        get(&*root, topic.segments()).is_some()
    }

    /// No callbacks registered anywhere.
    pub fn is_empty(&self) -> bool {
        self.root.borrow().total_callbacks() == 0
    }
}

impl<A, E> Default for TopicHub<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, E> fmt::Debug for TopicHub<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicHub")
            .field("config", &self.config)
            .field("root", &*self.root.borrow())
            .finish()
    }
}

/// Find the node for `topic`, creating empty nodes along the way.
///
/// [`TopicNode`] accepts every sub-topic, so this only yields `None` if that
/// ever stops being true; callers then treat the topic as unreachable.
fn resolve<'a, A, E>(
    root: &'a mut TopicNode<A, E>,
    topic: &Topic,
) -> Option<&'a mut TopicNode<A, E>> {
    match access(root, topic.segments(), Some(TopicNode::default()), false) {
        Ok(node) => node,
        Err(err) => {
            debug!(topic = %topic, error = %err, "topic node rejected a sub-topic");
            None
        }
    }
}

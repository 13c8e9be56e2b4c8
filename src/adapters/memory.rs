use crate::core::{SharedSubscriber, Subscriber, SubscriberId, SubscriberRepository};
use std::rc::Rc;

/// Process-lifetime subscriber store backed by a `Vec`.
///
/// The store owns the canonical subscriber objects. `find_all` hands out a
/// fresh list of handles to those same objects, so reshaping the list never
/// touches the store while mutating a subscriber through a handle does.
/// Ids are not required to be unique.
#[derive(Debug, Default)]
pub struct InMemorySubscriberDao {
    subscribers: Vec<SharedSubscriber>,
}

impl InMemorySubscriberDao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_all<I>(&mut self, subscribers: I) -> Vec<SharedSubscriber>
    where
        I: IntoIterator<Item = Subscriber>,
    {
        subscribers.into_iter().map(|s| self.save(s)).collect()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl SubscriberRepository for InMemorySubscriberDao {
    fn save(&mut self, subscriber: Subscriber) -> SharedSubscriber {
        tracing::debug!("Subscriber saved: {}", subscriber);
        let handle = subscriber.into_shared();
        self.subscribers.push(Rc::clone(&handle));
        handle
    }

    fn find_all(&self) -> Vec<SharedSubscriber> {
        self.subscribers.clone()
    }

    fn find_by_id(&self, id: SubscriberId) -> Option<SharedSubscriber> {
        self.subscribers
            .iter()
            .find(|s| s.borrow().id() == id)
            .cloned()
    }
}

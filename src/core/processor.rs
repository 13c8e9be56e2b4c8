use crate::core::{Result, SharedSubscriber, SubscriberAction, SubscriberFilter};
use std::rc::Rc;

/// Applies filters and actions over a list of subscriber handles.
pub struct SubscriberProcessor;

impl SubscriberProcessor {
    /// The handles whose subscriber matches `filter`, in input order.
    pub fn find_subscribers<F>(list: &[SharedSubscriber], filter: &F) -> Vec<SharedSubscriber>
    where
        F: SubscriberFilter + ?Sized,
    {
        let matched: Vec<SharedSubscriber> = list
            .iter()
            .filter(|handle| filter.matches(&handle.borrow()))
            .cloned()
            .collect();

        tracing::debug!("Filter matched {} of {} subscribers", matched.len(), list.len());
        matched
    }

    pub fn count_matching<F>(list: &[SharedSubscriber], filter: &F) -> usize
    where
        F: SubscriberFilter + ?Sized,
    {
        list.iter()
            .filter(|handle| filter.matches(&handle.borrow()))
            .count()
    }

    /// Runs `action` on every matching subscriber, in input order, and
    /// returns the handles it ran on.
    ///
    /// Stops at the first failing action. Subscribers processed before the
    /// failure keep their changes.
    pub fn apply_to_matching<F, A>(
        list: &[SharedSubscriber],
        filter: &F,
        action: &A,
    ) -> Result<Vec<SharedSubscriber>>
    where
        F: SubscriberFilter + ?Sized,
        A: SubscriberAction + ?Sized,
    {
        let mut applied = Vec::new();

        for handle in list {
            // the filter may read other handles, so it only gets a shared borrow
            if !filter.matches(&handle.borrow()) {
                continue;
            }

            let mut subscriber = handle.borrow_mut();
            if let Err(e) = action.run(&mut subscriber) {
                tracing::warn!(
                    "Action failed on subscriber {} after {} updates: {}",
                    subscriber.id(),
                    applied.len(),
                    e
                );
                return Err(e);
            }
            tracing::debug!("Action applied: {}", *subscriber);

            drop(subscriber);
            applied.push(Rc::clone(handle));
        }

        Ok(applied)
    }
}

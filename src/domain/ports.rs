use crate::core::action::AndThen;
use crate::core::filter::{And, Not, Or};
use crate::domain::model::{SharedSubscriber, Subscriber, SubscriberId};
use crate::utils::error::Result;

pub type BoxedFilter = Box<dyn SubscriberFilter>;
pub type BoxedAction = Box<dyn SubscriberAction>;

/// A pure predicate over a subscriber.
///
/// Combinators consume their operands and return a new filter; pass a
/// reference (`&filter`) to keep using the original afterwards.
pub trait SubscriberFilter {
    fn matches(&self, subscriber: &Subscriber) -> bool;

    /// Matches when both filters match. `other` is not consulted when
    /// `self` already fails.
    fn and<F>(self, other: F) -> And<Self, F>
    where
        Self: Sized,
        F: SubscriberFilter,
    {
        And::new(self, other)
    }

    /// Matches when either filter matches. `other` is not consulted when
    /// `self` already matches.
    fn or<F>(self, other: F) -> Or<Self, F>
    where
        Self: Sized,
        F: SubscriberFilter,
    {
        Or::new(self, other)
    }

    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    fn boxed(self) -> BoxedFilter
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<F: SubscriberFilter + ?Sized> SubscriberFilter for &F {
    fn matches(&self, subscriber: &Subscriber) -> bool {
        (**self).matches(subscriber)
    }
}

impl<F: SubscriberFilter + ?Sized> SubscriberFilter for Box<F> {
    fn matches(&self, subscriber: &Subscriber) -> bool {
        (**self).matches(subscriber)
    }
}

/// An in-place mutation of a subscriber.
///
/// Failures come from the subscriber's own validation and leave that
/// subscriber unchanged.
pub trait SubscriberAction {
    fn run(&self, subscriber: &mut Subscriber) -> Result<()>;

    /// Runs `self`, then `next`. `next` is skipped when `self` fails.
    fn and_then<A>(self, next: A) -> AndThen<Self, A>
    where
        Self: Sized,
        A: SubscriberAction,
    {
        AndThen::new(self, next)
    }

    fn boxed(self) -> BoxedAction
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<A: SubscriberAction + ?Sized> SubscriberAction for &A {
    fn run(&self, subscriber: &mut Subscriber) -> Result<()> {
        (**self).run(subscriber)
    }
}

impl<A: SubscriberAction + ?Sized> SubscriberAction for Box<A> {
    fn run(&self, subscriber: &mut Subscriber) -> Result<()> {
        (**self).run(subscriber)
    }
}

pub trait SubscriberRepository {
    /// Stores the subscriber and returns the handle now owned by the store.
    fn save(&mut self, subscriber: Subscriber) -> SharedSubscriber;

    /// Snapshot of the stored handles, in insertion order.
    fn find_all(&self) -> Vec<SharedSubscriber>;

    fn find_by_id(&self, id: SubscriberId) -> Option<SharedSubscriber>;
}

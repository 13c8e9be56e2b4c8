use crate::core::{Subscriber, SubscriberFilter};

/// Wraps a closure as a [`SubscriberFilter`].
pub fn filter_fn<F>(f: F) -> FnFilter<F>
where
    F: Fn(&Subscriber) -> bool,
{
    FnFilter { f }
}

#[derive(Clone, Copy)]
pub struct FnFilter<F> {
    f: F,
}

impl<F> SubscriberFilter for FnFilter<F>
where
    F: Fn(&Subscriber) -> bool,
{
    fn matches(&self, subscriber: &Subscriber) -> bool {
        (self.f)(subscriber)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: SubscriberFilter, B: SubscriberFilter> SubscriberFilter for And<A, B> {
    fn matches(&self, subscriber: &Subscriber) -> bool {
        self.left.matches(subscriber) && self.right.matches(subscriber)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: SubscriberFilter, B: SubscriberFilter> SubscriberFilter for Or<A, B> {
    fn matches(&self, subscriber: &Subscriber) -> bool {
        self.left.matches(subscriber) || self.right.matches(subscriber)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: SubscriberFilter> SubscriberFilter for Not<A> {
    fn matches(&self, subscriber: &Subscriber) -> bool {
        !self.inner.matches(subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Plan;
    use std::cell::Cell;

    fn subscriber(active: bool, months: i64) -> Subscriber {
        Subscriber::new(1, "test@example.com", Plan::Basic, active, months).unwrap()
    }

    #[test]
    fn test_closure_filter() {
        let active = filter_fn(|s: &Subscriber| s.is_active());
        assert!(active.matches(&subscriber(true, 0)));
        assert!(!active.matches(&subscriber(false, 0)));
    }

    #[test]
    fn test_combinators() {
        let active = filter_fn(|s: &Subscriber| s.is_active());
        let expiring = filter_fn(|s: &Subscriber| s.months_remaining() <= 1);

        let both = (&active).and(&expiring);
        let either = (&active).or(&expiring);
        let inactive = (&active).negate();

        let s = subscriber(true, 4);
        assert!(!both.matches(&s));
        assert!(either.matches(&s));
        assert!(!inactive.matches(&s));

        let s = subscriber(false, 1);
        assert!(!both.matches(&s));
        assert!(either.matches(&s));
        assert!(inactive.matches(&s));

        // operands are still usable after composing by reference
        assert!(active.matches(&subscriber(true, 9)));
    }

    #[test]
    fn test_and_skips_right_when_left_fails() {
        let calls = Cell::new(0);
        let never = filter_fn(|_: &Subscriber| false);
        let counting = filter_fn(|_: &Subscriber| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(!never.and(&counting).matches(&subscriber(true, 0)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_or_skips_right_when_left_matches() {
        let calls = Cell::new(0);
        let always = filter_fn(|_: &Subscriber| true);
        let counting = filter_fn(|_: &Subscriber| {
            calls.set(calls.get() + 1);
            false
        });

        assert!(always.or(&counting).matches(&subscriber(true, 0)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_boxed_filter_composes() {
        let boxed = filter_fn(|s: &Subscriber| s.is_active()).boxed();
        let negated = boxed.negate();
        assert!(negated.matches(&subscriber(false, 0)));
    }
}

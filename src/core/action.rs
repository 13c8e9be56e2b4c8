use crate::core::{Result, Subscriber, SubscriberAction};

/// Wraps a closure as a [`SubscriberAction`].
pub fn action_fn<F>(f: F) -> FnAction<F>
where
    F: Fn(&mut Subscriber) -> Result<()>,
{
    FnAction { f }
}

#[derive(Clone, Copy)]
pub struct FnAction<F> {
    f: F,
}

impl<F> SubscriberAction for FnAction<F>
where
    F: Fn(&mut Subscriber) -> Result<()>,
{
    fn run(&self, subscriber: &mut Subscriber) -> Result<()> {
        (self.f)(subscriber)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndThen<A, B> {
    first: A,
    next: B,
}

impl<A, B> AndThen<A, B> {
    pub fn new(first: A, next: B) -> Self {
        Self { first, next }
    }
}

impl<A: SubscriberAction, B: SubscriberAction> SubscriberAction for AndThen<A, B> {
    fn run(&self, subscriber: &mut Subscriber) -> Result<()> {
        self.first.run(subscriber)?;
        self.next.run(subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Plan;

    fn bob() -> Subscriber {
        Subscriber::new(2, "bob@example.com", Plan::Basic, true, 1).unwrap()
    }

    #[test]
    fn test_closure_action() {
        let upgrade = action_fn(|s: &mut Subscriber| {
            s.set_plan(Plan::Pro);
            Ok(())
        });
        let mut s = bob();
        upgrade.run(&mut s).unwrap();
        assert_eq!(s.plan(), Plan::Pro);
    }

    #[test]
    fn test_and_then_runs_in_order() {
        let double = action_fn(|s: &mut Subscriber| {
            s.set_months_remaining(i64::from(s.months_remaining()) * 2)
        });
        let add_one = action_fn(|s: &mut Subscriber| s.extend_months(1));

        let mut s = bob();
        (&double).and_then(&add_one).run(&mut s).unwrap();
        assert_eq!(s.months_remaining(), 3);

        let mut s = bob();
        add_one.and_then(double).run(&mut s).unwrap();
        assert_eq!(s.months_remaining(), 4);
    }

    #[test]
    fn test_and_then_stops_on_failure() {
        let fail = action_fn(|s: &mut Subscriber| s.extend_months(-10));
        let deactivate = action_fn(|s: &mut Subscriber| {
            s.set_active(false);
            Ok(())
        });

        let mut s = bob();
        assert!(fail.and_then(deactivate).run(&mut s).is_err());
        assert!(s.is_active());
        assert_eq!(s.months_remaining(), 1);
    }
}

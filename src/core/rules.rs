//! Business rules: the predefined filters and actions, plus a read-only
//! registry that names them.

use crate::core::action::action_fn;
use crate::core::filter::filter_fn;
use crate::core::{
    BoxedAction, BoxedFilter, Plan, Result, Subscriber, SubscriberAction, SubscriberError,
    SubscriberFilter,
};
use std::collections::BTreeMap;

/// Subscriber is active.
pub fn active() -> impl SubscriberFilter + Copy {
    filter_fn(|s: &Subscriber| s.is_active())
}

/// One month or less remaining.
pub fn expiring() -> impl SubscriberFilter + Copy {
    filter_fn(|s: &Subscriber| s.months_remaining() <= 1)
}

pub fn active_and_expiring() -> impl SubscriberFilter + Copy {
    active().and(expiring())
}

pub fn by_plan(plan: Plan) -> impl SubscriberFilter + Copy {
    filter_fn(move |s: &Subscriber| s.plan() == plan)
}

/// Any plan other than FREE.
pub fn paying() -> impl SubscriberFilter + Copy {
    by_plan(Plan::Free).negate()
}

/// Adds `months` to the remaining months; see [`Subscriber::extend_months`]
/// for how a negative value is handled.
pub fn extend_subscription(months: i64) -> impl SubscriberAction + Copy {
    action_fn(move |s: &mut Subscriber| s.extend_months(months))
}

pub fn deactivate() -> impl SubscriberAction + Copy {
    action_fn(|s: &mut Subscriber| {
        s.set_active(false);
        Ok(())
    })
}

/// Named filters and actions, fixed once built.
pub struct RuleCatalog {
    filters: BTreeMap<String, BoxedFilter>,
    actions: BTreeMap<String, BoxedAction>,
}

impl RuleCatalog {
    pub fn empty() -> Self {
        Self {
            filters: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }

    /// The predefined rules under their canonical names.
    pub fn standard() -> Self {
        let mut catalog = Self::empty()
            .with_filter("active", active())
            .with_filter("expiring", expiring())
            .with_filter("active_and_expiring", active_and_expiring())
            .with_filter("paying", paying())
            .with_action("deactivate", deactivate());

        for plan in Plan::ALL {
            let name = format!("plan_{}", plan.as_str().to_ascii_lowercase());
            catalog = catalog.with_filter(name, by_plan(plan));
        }
        catalog
    }

    /// Registers a filter, replacing any previous one with the same name.
    pub fn with_filter(
        mut self,
        name: impl Into<String>,
        filter: impl SubscriberFilter + 'static,
    ) -> Self {
        self.filters.insert(name.into(), filter.boxed());
        self
    }

    /// Registers an action, replacing any previous one with the same name.
    pub fn with_action(
        mut self,
        name: impl Into<String>,
        action: impl SubscriberAction + 'static,
    ) -> Self {
        self.actions.insert(name.into(), action.boxed());
        self
    }

    pub fn filter(&self, name: &str) -> Result<&dyn SubscriberFilter> {
        self.filters
            .get(name)
            .map(|f| &**f)
            .ok_or_else(|| SubscriberError::UnknownRule {
                name: name.to_string(),
            })
    }

    pub fn action(&self, name: &str) -> Result<&dyn SubscriberAction> {
        self.actions
            .get(name)
            .map(|a| &**a)
            .ok_or_else(|| SubscriberError::UnknownRule {
                name: name.to_string(),
            })
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

use crate::utils::error::{Result, SubscriberError};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

pub type SubscriberId = u64;

/// Handle to a subscriber owned by a repository.
///
/// Cloning the handle never copies the entity: a mutation made through one
/// handle is visible through every other handle to the same subscriber.
pub type SharedSubscriber = Rc<RefCell<Subscriber>>;

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Plan {
    Free,
    Basic,
    Pro,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Basic, Plan::Pro];

    /// BASIC and PRO are paid tiers.
    pub fn is_paying(&self) -> bool {
        !matches!(self, Plan::Free)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "FREE",
            Plan::Basic => "BASIC",
            Plan::Pro => "PRO",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = SubscriberError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Plan::ALL
            .into_iter()
            .find(|plan| plan.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                SubscriberError::validation("plan", s, "Plan must be one of FREE, BASIC or PRO")
            })
    }
}

/// A subscriber and its mutable subscription state.
///
/// Every constructor and setter keeps two invariants: the email is never
/// blank and the months remaining never drop below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    id: SubscriberId,
    email: String,
    plan: Plan,
    active: bool,
    months_remaining: u32,
}

impl Subscriber {
    pub fn new(
        id: SubscriberId,
        email: impl Into<String>,
        plan: Plan,
        active: bool,
        months_remaining: i64,
    ) -> Result<Self> {
        let email = email.into();
        validate_non_empty_string("email", &email)?;

        Ok(Self {
            id,
            email,
            plan,
            active,
            months_remaining: months_from(months_remaining)?,
        })
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn months_remaining(&self) -> u32 {
        self.months_remaining
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        validate_non_empty_string("email", &email)?;
        self.email = email;
        Ok(())
    }

    pub fn set_plan(&mut self, plan: Plan) {
        self.plan = plan;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_months_remaining(&mut self, months: i64) -> Result<()> {
        self.months_remaining = months_from(months)?;
        Ok(())
    }

    /// Adds `months` to the remaining months.
    ///
    /// A negative delta is accepted as long as the total stays at or above
    /// zero; otherwise the subscriber is left unchanged and a validation
    /// error is returned.
    pub fn extend_months(&mut self, months: i64) -> Result<()> {
        let total = i64::from(self.months_remaining)
            .checked_add(months)
            .ok_or_else(|| {
                SubscriberError::validation("months_remaining", months, "Extension overflows")
            })?;
        self.set_months_remaining(total)
    }

    pub fn into_shared(self) -> SharedSubscriber {
        Rc::new(RefCell::new(self))
    }
}

fn months_from(months: i64) -> Result<u32> {
    validate_non_negative("months_remaining", months)?;
    u32::try_from(months).map_err(|_| {
        SubscriberError::validation("months_remaining", months, "Value is too large")
    })
}

impl fmt::Display for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] active={} months_remaining={}",
            self.id, self.email, self.plan, self.active, self.months_remaining
        )
    }
}

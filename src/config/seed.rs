use crate::core::{Plan, Subscriber, SubscriberId};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial subscribers, as read from a TOML seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub subscribers: Vec<SubscriberRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub id: SubscriberId,
    pub email: String,
    pub plan: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub months_remaining: i64,
}

fn default_active() -> bool {
    true
}

impl SubscriberRecord {
    fn new(id: SubscriberId, email: &str, plan: Plan, months_remaining: i64) -> Self {
        Self {
            id,
            email: email.to_string(),
            plan: plan.to_string(),
            active: true,
            months_remaining,
        }
    }

    pub fn to_subscriber(&self) -> Result<Subscriber> {
        let plan: Plan = self.plan.parse()?;
        Subscriber::new(
            self.id,
            self.email.clone(),
            plan,
            self.active,
            self.months_remaining,
        )
    }
}

impl Validate for SubscriberRecord {
    fn validate(&self) -> Result<()> {
        self.to_subscriber().map(|_| ())
    }
}

impl SeedFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let seed = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} subscribers from {}",
            seed.subscribers.len(),
            path.as_ref().display()
        );
        Ok(seed)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The demonstration set used when no seed file is given.
    pub fn builtin() -> Self {
        Self {
            subscribers: vec![
                SubscriberRecord::new(1, "alice@example.com", Plan::Free, 0),
                SubscriberRecord::new(2, "bob@example.com", Plan::Basic, 1),
                SubscriberRecord::new(3, "charlie@example.com", Plan::Pro, 5),
                SubscriberRecord::new(4, "diana@example.com", Plan::Basic, 0),
                SubscriberRecord::new(5, "eve@example.com", Plan::Pro, 2),
            ],
        }
    }

    /// Builds every subscriber, failing on the first invalid record.
    pub fn into_subscribers(self) -> Result<Vec<Subscriber>> {
        self.subscribers
            .iter()
            .map(SubscriberRecord::to_subscriber)
            .collect()
    }
}

impl Validate for SeedFile {
    fn validate(&self) -> Result<()> {
        self.subscribers.iter().try_for_each(|record| record.validate())
    }
}

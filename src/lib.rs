pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::InMemorySubscriberDao;
pub use app::{DemoReport, DemoRunner, OutputFormat, ReportWriter};
pub use config::SeedFile;
pub use crate::core::processor::SubscriberProcessor;
pub use crate::core::rules::{self, RuleCatalog};
pub use crate::core::{
    Plan, SharedSubscriber, Subscriber, SubscriberAction, SubscriberFilter, SubscriberId,
    SubscriberRepository,
};
pub use utils::error::{Result, SubscriberError};

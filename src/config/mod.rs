#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use seed::{SeedFile, SubscriberRecord};

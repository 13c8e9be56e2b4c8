pub mod demo;
pub mod report;

pub use demo::DemoRunner;
pub use report::{DemoReport, OutputFormat, ReportWriter, StepReport};

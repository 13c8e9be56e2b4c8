use crate::core::{Result, SharedSubscriber, Subscriber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// State of the selected subscribers right after a step ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub title: String,
    pub subscribers: Vec<Subscriber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StepReport {
    pub fn new(title: impl Into<String>, handles: &[SharedSubscriber]) -> Self {
        Self {
            title: title.into(),
            subscribers: handles.iter().map(|s| s.borrow().clone()).collect(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoReport {
    pub steps: Vec<StepReport>,
    /// Why the run stopped early, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Writes steps as they complete (text) or the whole report at the end (json).
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn write_step(&mut self, step: &StepReport) -> Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }

        writeln!(self.out, "== {} ==", step.title)?;
        if step.subscribers.is_empty() {
            writeln!(self.out, "  (none)")?;
        }
        for subscriber in &step.subscribers {
            writeln!(self.out, "  {}", subscriber)?;
        }
        if let Some(note) = &step.note {
            writeln!(self.out, "  {}", note)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn finish(&mut self, report: &DemoReport) -> Result<()> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.out, report)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

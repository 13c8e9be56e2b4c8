use crate::app::report::{DemoReport, ReportWriter, StepReport};
use crate::core::processor::SubscriberProcessor;
use crate::core::rules::{extend_subscription, RuleCatalog};
use crate::core::{Result, SubscriberId, SubscriberRepository};
use std::io::Write;

const EXTEND_ACTION: &str = "extend_subscription";

#[derive(Debug, Clone)]
enum Step {
    ShowAll { title: String },
    Find { title: String, filter: &'static str },
    Apply {
        title: String,
        filter: &'static str,
        action: &'static str,
    },
    Lookup { ids: Vec<SubscriberId> },
}

fn script(extend_months: i64) -> Vec<Step> {
    vec![
        Step::ShowAll {
            title: "All subscribers".to_string(),
        },
        Step::Find {
            title: "Active subscribers".to_string(),
            filter: "active",
        },
        Step::Find {
            title: "Expiring subscribers".to_string(),
            filter: "expiring",
        },
        Step::Find {
            title: "Active and expiring subscribers".to_string(),
            filter: "active_and_expiring",
        },
        Step::Find {
            title: "Paying subscribers".to_string(),
            filter: "paying",
        },
        Step::Find {
            title: "PRO subscribers".to_string(),
            filter: "plan_pro",
        },
        Step::Apply {
            title: format!(
                "Extend active and expiring subscribers by {} months",
                extend_months
            ),
            filter: "active_and_expiring",
            action: EXTEND_ACTION,
        },
        Step::Apply {
            title: "Deactivate FREE subscribers".to_string(),
            filter: "plan_free",
            action: "deactivate",
        },
        Step::Lookup { ids: vec![3, 99] },
        Step::ShowAll {
            title: "Final state".to_string(),
        },
    ]
}

/// Runs the fixed walkthrough of filters and actions over a repository.
pub struct DemoRunner {
    catalog: RuleCatalog,
    steps: Vec<Step>,
}

impl DemoRunner {
    pub fn new(extend_months: i64) -> Self {
        Self {
            catalog: RuleCatalog::standard()
                .with_action(EXTEND_ACTION, extend_subscription(extend_months)),
            steps: script(extend_months),
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Runs every step in order, writing each one as it completes.
    ///
    /// A failing action aborts the run; mutations made by earlier steps
    /// stay in the repository. The steps completed before the failure are
    /// still written out, followed by the error.
    pub fn run<R, W>(&self, repository: &R, writer: &mut ReportWriter<W>) -> Result<DemoReport>
    where
        R: SubscriberRepository,
        W: Write,
    {
        let mut report = DemoReport::default();

        for step in &self.steps {
            let step_report = match self.run_step(step, repository) {
                Ok(step_report) => step_report,
                Err(e) => {
                    tracing::warn!("Run stopped after {} steps: {}", report.steps.len(), e);
                    report.error = Some(e.to_string());
                    writer.finish(&report)?;
                    return Err(e);
                }
            };
            tracing::info!(
                "Step '{}' selected {} subscribers",
                step_report.title,
                step_report.subscribers.len()
            );
            writer.write_step(&step_report)?;
            report.steps.push(step_report);
        }

        writer.finish(&report)?;
        Ok(report)
    }

    fn run_step<R: SubscriberRepository>(&self, step: &Step, repository: &R) -> Result<StepReport> {
        let all = repository.find_all();

        match step {
            Step::ShowAll { title } => Ok(StepReport::new(title.as_str(), &all)),
            Step::Find { title, filter } => {
                let filter = self.catalog.filter(filter)?;
                let found = SubscriberProcessor::find_subscribers(&all, filter);
                Ok(StepReport::new(title.as_str(), &found))
            }
            Step::Apply {
                title,
                filter,
                action,
            } => {
                let filter = self.catalog.filter(filter)?;
                let action = self.catalog.action(action)?;
                let updated = SubscriberProcessor::apply_to_matching(&all, filter, action)?;
                Ok(StepReport::new(title.as_str(), &updated)
                    .with_note(format!("{} subscribers updated", updated.len())))
            }
            Step::Lookup { ids } => {
                let mut found = Vec::new();
                let mut missing = Vec::new();
                for id in ids {
                    match repository.find_by_id(*id) {
                        Some(subscriber) => found.push(subscriber),
                        None => {
                            tracing::info!("Subscriber with id {} not found", id);
                            missing.push(id.to_string());
                        }
                    }
                }

                let listed = ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                let step_report = StepReport::new(format!("Look up ids {}", listed), &found);
                if missing.is_empty() {
                    Ok(step_report)
                } else {
                    Ok(step_report.with_note(format!("Not found: {}", missing.join(", "))))
                }
            }
        }
    }
}

impl Default for DemoRunner {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySubscriberDao;
    use crate::app::report::OutputFormat;
    use crate::config::SeedFile;

    fn seeded_dao() -> InMemorySubscriberDao {
        let mut dao = InMemorySubscriberDao::new();
        dao.save_all(SeedFile::builtin().into_subscribers().unwrap());
        dao
    }

    fn step_ids(report: &DemoReport, index: usize) -> Vec<SubscriberId> {
        report.steps[index]
            .subscribers
            .iter()
            .map(|s| s.id())
            .collect()
    }

    #[test]
    fn test_script_names_resolve_in_catalog() {
        let runner = DemoRunner::default();
        for step in &runner.steps {
            match step {
                Step::Find { filter, .. } => assert!(runner.catalog().filter(filter).is_ok()),
                Step::Apply { filter, action, .. } => {
                    assert!(runner.catalog().filter(filter).is_ok());
                    assert!(runner.catalog().action(action).is_ok());
                }
                Step::ShowAll { .. } | Step::Lookup { .. } => {}
            }
        }
    }

    #[test]
    fn test_run_over_builtin_subscribers() {
        let dao = seeded_dao();
        let mut writer = ReportWriter::new(Vec::new(), OutputFormat::Text);
        let report = DemoRunner::default().run(&dao, &mut writer).unwrap();

        assert_eq!(report.steps.len(), 10);
        assert_eq!(step_ids(&report, 0), vec![1, 2, 3, 4, 5]);
        assert_eq!(step_ids(&report, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(step_ids(&report, 2), vec![1, 2, 4]);
        assert_eq!(step_ids(&report, 3), vec![1, 2, 4]);
        assert_eq!(step_ids(&report, 4), vec![2, 3, 4, 5]);
        assert_eq!(step_ids(&report, 5), vec![3, 5]);
        assert_eq!(step_ids(&report, 6), vec![1, 2, 4]);
        assert_eq!(step_ids(&report, 7), vec![1]);
        assert_eq!(step_ids(&report, 8), vec![3]);
        assert_eq!(report.steps[8].note.as_deref(), Some("Not found: 99"));

        let months: Vec<u32> = report.steps[9]
            .subscribers
            .iter()
            .map(|s| s.months_remaining())
            .collect();
        assert_eq!(months, vec![3, 4, 5, 3, 2]);

        let alice = dao.find_by_id(1).unwrap();
        assert!(!alice.borrow().is_active());

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.starts_with("== All subscribers ==\n"));
        assert!(text.contains("== Extend active and expiring subscribers by 3 months =="));
        assert!(text.contains("3 subscribers updated"));
    }

    #[test]
    fn test_run_on_empty_repository() {
        let dao = InMemorySubscriberDao::new();
        let mut writer = ReportWriter::new(Vec::new(), OutputFormat::Json);
        let report = DemoRunner::new(1).run(&dao, &mut writer).unwrap();

        assert!(report.steps.iter().all(|s| s.subscribers.is_empty()));
        let value: serde_json::Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(value["steps"].as_array().unwrap().len(), 10);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_run_still_writes_completed_steps() {
        let dao = seeded_dao();
        let mut writer = ReportWriter::new(Vec::new(), OutputFormat::Json);
        let err = DemoRunner::new(5_000_000_000)
            .run(&dao, &mut writer)
            .unwrap_err();
        assert!(err.is_validation());

        let value: serde_json::Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        let steps = value["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[5]["title"], "PRO subscribers");
        assert!(value["error"].as_str().unwrap().contains("months_remaining"));
    }
}

//! Ordered seeding pipeline.

use std::time::Instant;

use rand::Rng;
use tracing::{error, info, warn};

use crate::config::{FailurePolicy, SeedConfig, TableCounts};
use crate::db::{SeedError, Seeder};
use crate::models::Table;

/// Outcome of seeding one table.
#[derive(Debug)]
pub struct StepReport {
    pub table: Table,
    /// Rows generated for the step.
    pub requested: usize,
    /// Rows the database reported as inserted (0 when the step failed).
    pub inserted: u64,
    pub elapsed_ms: u64,
    pub error: Option<SeedError>,
}

impl StepReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a pipeline run, one entry per executed step.
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub steps: Vec<StepReport>,
    /// Table whose failure stopped the run under [`FailurePolicy::Abort`].
    pub aborted_at: Option<Table>,
}

impl PipelineReport {
    /// Steps that failed and were rolled back.
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.succeeded())
    }

    /// True when every table was seeded without error.
    pub fn is_complete(&self) -> bool {
        self.steps.len() == Table::ALL.len() && self.steps.iter().all(StepReport::succeeded)
    }

    /// Rows inserted into `table`, if its step ran.
    pub fn inserted(&self, table: Table) -> Option<u64> {
        self.steps
            .iter()
            .find(|s| s.table == table)
            .map(|s| s.inserted)
    }

    /// Total rows inserted across all steps.
    pub fn total_inserted(&self) -> u64 {
        self.steps.iter().map(|s| s.inserted).sum()
    }
}

/// Seeds every table in dependency order.
///
/// # Example
///
/// ```rust,ignore
/// let report = Pipeline::new()
///     .with_counts(TableCounts::uniform(10))
///     .with_failure_policy(FailurePolicy::Abort)
///     .run(&mut seeder, &mut rng)
///     .await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    counts: TableCounts,
    on_failure: FailurePolicy,
}

impl Pipeline {
    /// Creates a pipeline with the default counts and failure policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline from the counts and policy of a run configuration.
    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            counts: config.counts,
            on_failure: config.on_failure,
        }
    }

    pub fn with_counts(mut self, counts: TableCounts) -> Self {
        self.counts = counts;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Runs every step in [`Table::ALL`] order.
    ///
    /// A failed step has already been rolled back by the seeder. Under
    /// [`FailurePolicy::Continue`] the remaining steps still run; under
    /// [`FailurePolicy::Abort`] the run stops and `aborted_at` is set.
    pub async fn run(&self, seeder: &mut Seeder, rng: &mut impl Rng) -> PipelineReport {
        let mut report = PipelineReport::default();

        for table in Table::ALL {
            let requested = self.counts.for_table(table);
            info!("Seeding {} {}...", requested, table.label());

            let started = Instant::now();
            let result = seeder.seed(table, requested, rng).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let step = match result {
                Ok(inserted) => {
                    info!("{} {} inserted successfully", inserted, table.label());
                    StepReport {
                        table,
                        requested,
                        inserted,
                        elapsed_ms,
                        error: None,
                    }
                }
                Err(e) => {
                    error!("Seeding {} failed: {}", table.label(), e);
                    StepReport {
                        table,
                        requested,
                        inserted: 0,
                        elapsed_ms,
                        error: Some(e),
                    }
                }
            };

            let failed = !step.succeeded();
            report.steps.push(step);

            if failed {
                match self.on_failure {
                    FailurePolicy::Continue => {
                        warn!(
                            "Continuing after failed step; tables after {} may reference incomplete data",
                            table
                        );
                    }
                    FailurePolicy::Abort => {
                        report.aborted_at = Some(table);
                        break;
                    }
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(table: Table, inserted: u64, error: Option<SeedError>) -> StepReport {
        StepReport {
            table,
            requested: 10,
            inserted,
            elapsed_ms: 1,
            error,
        }
    }

    #[test]
    fn test_complete_report() {
        let report = PipelineReport {
            steps: Table::ALL.into_iter().map(|t| step(t, 10, None)).collect(),
            aborted_at: None,
        };

        assert!(report.is_complete());
        assert_eq!(report.failures().count(), 0);
        assert_eq!(report.total_inserted(), 70);
        assert_eq!(report.inserted(Table::Vendor), Some(10));
    }

    #[test]
    fn test_failed_step_is_not_complete() {
        let mut steps: Vec<_> = Table::ALL.into_iter().map(|t| step(t, 10, None)).collect();
        steps[1] = step(Table::Product, 0, Some(SeedError::EmptyParent(Table::Category)));
        let report = PipelineReport {
            steps,
            aborted_at: None,
        };

        assert!(!report.is_complete());
        let failed: Vec<_> = report.failures().map(|s| s.table).collect();
        assert_eq!(failed, vec![Table::Product]);
    }

    #[test]
    fn test_aborted_report_is_partial() {
        let report = PipelineReport {
            steps: vec![
                step(Table::Category, 10, None),
                step(Table::Product, 0, Some(SeedError::EmptyParent(Table::Category))),
            ],
            aborted_at: Some(Table::Product),
        };

        assert!(!report.is_complete());
        assert_eq!(report.inserted(Table::Order), None);
    }

    #[test]
    fn test_from_config() {
        let mut config = SeedConfig::default();
        config.counts = TableCounts::uniform(3);
        config.on_failure = FailurePolicy::Abort;

        let pipeline = Pipeline::from_config(&config);
        assert_eq!(pipeline.counts, TableCounts::uniform(3));
        assert_eq!(pipeline.on_failure, FailurePolicy::Abort);
    }
}

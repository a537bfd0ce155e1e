//! Benchmark harness: timed trials, always-on verification, and reporting.
//!
//! Runs strictly sequentially — one scenario at a time, one strategy at a
//! time, one trial at a time — so timings stay comparable across runs.
//! Nothing is cached between scenarios.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{ProxibenchError, Result};
use crate::service::ProximityQueryService;
use crate::spatial;
use crate::store::PointStore;
use crate::types::{Item, Query};

/// Default number of timed trials per scenario × strategy.
pub const DEFAULT_TRIALS: usize = 5;

/// Benchmark configuration: trial count and the scenarios to run.
///
/// Loadable from JSON:
///
/// ```rust
/// use proxibench::BenchConfig;
///
/// let json = r#"{
///     "trials": 3,
///     "scenarios": [{ "center": { "x": 126.978, "y": 37.5665 }, "radius_meters": 250.0 }]
/// }"#;
/// let config: BenchConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.trials, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "BenchConfig::default_trials")]
    pub trials: usize,
    pub scenarios: Vec<Query>,
}

impl BenchConfig {
    const fn default_trials() -> usize {
        DEFAULT_TRIALS
    }

    pub fn with_scenarios(scenarios: Vec<Query>) -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            scenarios,
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Reject malformed configuration before any trial runs.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ProxibenchError::InvalidInput(
                "trial count must be at least 1".to_string(),
            ));
        }
        for query in &self.scenarios {
            query.validate()?;
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    /// Five trials of a single 100 m query at the Seoul city center.
    fn default() -> Self {
        Self::with_scenarios(vec![Query::from_lat_lng(37.5665, 126.9780, 100.0)])
    }
}

/// The two query execution paths under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Full-scan exact distance filter, no supporting index.
    NoIndex,
    /// Bounding-box range pre-filter plus exact refinement.
    CompositeIndex,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::NoIndex, Strategy::CompositeIndex];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NoIndex => "Default (No Index)",
            Strategy::CompositeIndex => "Composite Index",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed timed trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub elapsed_ms: f64,
    pub items_found: usize,
    /// False when at least one returned item violated the radius invariant.
    pub verified: bool,
}

/// Aggregate for one scenario × strategy run.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub query: Query,
    /// Completed trials, in execution order. Trials aborted by a store
    /// failure are absent, not zero-filled.
    pub trials: Vec<TrialRecord>,
    /// Store failure that ended the run early, if any.
    pub aborted: Option<String>,
}

impl StrategyReport {
    /// Arithmetic mean over the completed trials; `None` when none completed.
    pub fn mean_ms(&self) -> Option<f64> {
        if self.trials.is_empty() {
            return None;
        }
        let total: f64 = self.trials.iter().map(|t| t.elapsed_ms).sum();
        Some(total / self.trials.len() as f64)
    }

    /// Number of trials whose result set violated the radius invariant.
    pub fn verification_failures(&self) -> usize {
        self.trials.iter().filter(|t| !t.verified).count()
    }
}

/// Full benchmark output: one [`StrategyReport`] per scenario × strategy.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkReport {
    pub runs: Vec<StrategyReport>,
}

impl BenchmarkReport {
    /// True when every completed trial of every run passed verification and
    /// no run was aborted by a store failure.
    pub fn all_verified(&self) -> bool {
        self.runs
            .iter()
            .all(|run| run.aborted.is_none() && run.verification_failures() == 0)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Proximity Search Benchmark ===")?;
        for run in &self.runs {
            writeln!(
                f,
                "\n{} at ({:.4}, {:.4}), radius {} m",
                run.strategy,
                run.query.center.y(),
                run.query.center.x(),
                run.query.radius_meters,
            )?;
            for (i, trial) in run.trials.iter().enumerate() {
                write!(
                    f,
                    "  Run {}: found {} items in {:.3} ms",
                    i + 1,
                    trial.items_found,
                    trial.elapsed_ms,
                )?;
                if trial.verified {
                    writeln!(f)?;
                } else {
                    writeln!(f, "  [VERIFICATION FAILED]")?;
                }
            }
            match run.mean_ms() {
                Some(mean) => writeln!(
                    f,
                    "  Average: {:.3} ms over {} runs",
                    mean,
                    run.trials.len()
                )?,
                None => writeln!(f, "  No completed runs")?,
            }
            if run.verification_failures() > 0 {
                writeln!(
                    f,
                    "  DEFECT: {} run(s) returned items outside the radius",
                    run.verification_failures()
                )?;
            }
            if let Some(err) = &run.aborted {
                writeln!(f, "  ABORTED: {}", err)?;
            }
        }
        Ok(())
    }
}

/// Drives repeated timed trials of both strategies over a scenario list.
#[derive(Debug)]
pub struct BenchmarkRunner<S: PointStore> {
    service: ProximityQueryService<S>,
    config: BenchConfig,
}

impl<S: PointStore> BenchmarkRunner<S> {
    pub fn new(service: ProximityQueryService<S>, config: BenchConfig) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run every scenario against both strategies and collect the report.
    ///
    /// Configuration is validated up front; an invalid scenario means no
    /// trial runs at all. Store failures abort the affected strategy run
    /// only, and are carried in its report rather than returned here.
    pub fn run(&self) -> Result<BenchmarkReport> {
        self.config.validate()?;

        let mut report = BenchmarkReport::default();
        for query in &self.config.scenarios {
            for strategy in Strategy::ALL {
                report.runs.push(self.run_strategy(query, strategy));
            }
        }
        Ok(report)
    }

    fn run_strategy(&self, query: &Query, strategy: Strategy) -> StrategyReport {
        log::info!(
            "benchmarking {} at ({:.4}, {:.4}), radius {} m, {} trials",
            strategy,
            query.center.y(),
            query.center.x(),
            query.radius_meters,
            self.config.trials,
        );

        let mut run = StrategyReport {
            strategy,
            query: query.clone(),
            trials: Vec::with_capacity(self.config.trials),
            aborted: None,
        };

        for trial in 0..self.config.trials {
            // Time only the strategy invocation; verification happens after
            // the clock stops.
            let start = Instant::now();
            let result = match strategy {
                Strategy::NoIndex => self.service.query_without_index(query),
                Strategy::CompositeIndex => self.service.query_with_composite_index(query),
            };
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            match result {
                Ok(items) => {
                    let verified = verify_within_radius(&items, query);
                    if !verified {
                        log::error!(
                            "{} trial {} returned items outside the {} m radius",
                            strategy,
                            trial + 1,
                            query.radius_meters,
                        );
                    }
                    run.trials.push(TrialRecord {
                        elapsed_ms,
                        items_found: items.len(),
                        verified,
                    });
                }
                Err(err) => {
                    log::error!(
                        "{} trial {} aborted the run: {}",
                        strategy,
                        trial + 1,
                        err
                    );
                    run.aborted = Some(err.to_string());
                    break;
                }
            }
        }

        run
    }
}

/// Always-active correctness check of a result set against the query radius.
///
/// Deliberately not a debug assertion: a benchmark whose correctness check
/// can be compiled away proves nothing.
fn verify_within_radius(items: &[Item], query: &Query) -> bool {
    items
        .iter()
        .all(|item| spatial::is_within_radius(&query.center, &item.position(), query.radius_meters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn runner_with(items: Vec<Item>, config: BenchConfig) -> BenchmarkRunner<MemoryStore> {
        BenchmarkRunner::new(
            ProximityQueryService::new(MemoryStore::with_items(items)),
            config,
        )
    }

    #[test]
    fn test_run_produces_report_per_scenario_and_strategy() {
        let runner = runner_with(
            vec![Item::new(1, 37.5665, 126.9780), Item::new(2, 38.5665, 126.9780)],
            BenchConfig::default(),
        );

        let report = runner.run().unwrap();
        assert_eq!(report.runs.len(), 2);
        for run in &report.runs {
            assert_eq!(run.trials.len(), DEFAULT_TRIALS);
            assert!(run.aborted.is_none());
            assert_eq!(run.verification_failures(), 0);
            for trial in &run.trials {
                assert_eq!(trial.items_found, 1);
            }
        }
        assert!(report.all_verified());
    }

    #[test]
    fn test_mean_of_constant_times_is_that_constant() {
        let run = StrategyReport {
            strategy: Strategy::NoIndex,
            query: Query::from_lat_lng(37.5665, 126.9780, 100.0),
            trials: (0..5)
                .map(|_| TrialRecord {
                    elapsed_ms: 0.25,
                    items_found: 1,
                    verified: true,
                })
                .collect(),
            aborted: None,
        };

        assert_eq!(run.mean_ms(), Some(0.25));
    }

    #[test]
    fn test_mean_absent_without_completed_trials() {
        let run = StrategyReport {
            strategy: Strategy::CompositeIndex,
            query: Query::from_lat_lng(37.5665, 126.9780, 100.0),
            trials: Vec::new(),
            aborted: Some("store unavailable: connection refused".to_string()),
        };

        assert_eq!(run.mean_ms(), None);
    }

    #[test]
    fn test_invalid_config_rejected_before_trials() {
        let runner = runner_with(
            vec![Item::new(1, 37.5665, 126.9780)],
            BenchConfig::default().with_trials(0),
        );
        assert!(runner.run().is_err());

        let runner = runner_with(
            vec![Item::new(1, 37.5665, 126.9780)],
            BenchConfig::with_scenarios(vec![Query::from_lat_lng(37.5665, 126.9780, -1.0)]),
        );
        assert!(runner.run().is_err());
    }

    #[test]
    fn test_report_rendering_mentions_runs_and_mean() {
        let runner = runner_with(vec![Item::new(1, 37.5665, 126.9780)], BenchConfig::default());
        let report = runner.run().unwrap();
        let text = report.to_string();

        assert!(text.contains("=== Proximity Search Benchmark ==="));
        assert!(text.contains("Default (No Index)"));
        assert!(text.contains("Composite Index"));
        assert!(text.contains("Run 1: found 1 items"));
        assert!(text.contains("Average:"));
        assert!(!text.contains("DEFECT"));
        assert!(!text.contains("ABORTED"));
    }
}

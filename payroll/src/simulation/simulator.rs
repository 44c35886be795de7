//! Main simulator harness for deterministic simulation testing.

// Simulation code legitimately needs cloning for test data
#![allow(clippy::disallowed_methods)]

use crate::store::RecordTree;
use crate::types::Employee;

use super::invariants::{InvariantChecker, InvariantViolation, ReferenceModel};
use super::operation_gen::{Operation, OperationGenConfig, OperationGenerator};

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Operation generation configuration.
    pub operation_config: OperationGenConfig,
    /// Run the full content comparison every this many operations. Ordering
    /// and per-operation results are checked every time regardless.
    pub content_check_interval: usize,
}

impl SimulatorConfig {
    /// Create a new simulator config with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            operation_config: OperationGenConfig::default(),
            content_check_interval: 1,
        }
    }

    /// Set the operation configuration.
    #[must_use]
    pub fn with_operation_config(mut self, config: OperationGenConfig) -> Self {
        self.operation_config = config;
        self
    }

    /// Set how often the full content comparison runs.
    #[must_use]
    pub const fn with_content_check_interval(mut self, interval: usize) -> Self {
        self.content_check_interval = interval;
        self
    }
}

/// Counters accumulated while a simulation runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of operations applied.
    pub operations_processed: u64,
    /// Inserts that added a record.
    pub inserts: u64,
    /// Inserts ignored because the key existed.
    pub duplicate_inserts: u64,
    /// Lookups that found a record.
    pub finds_hit: u64,
    /// Lookups that found nothing.
    pub finds_missed: u64,
    /// Removals of a present key.
    pub removals: u64,
    /// Removals of an absent key.
    pub removals_missed: u64,
    /// Updates applied.
    pub updates: u64,
}

/// Results from a simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The seed used for this simulation.
    pub seed: u64,
    /// Operation counters.
    pub stats: SimulationStats,
    /// Records left in the store.
    pub final_count: usize,
    /// Height of the tree at the end of the run.
    pub final_height: usize,
    /// Invariant violations detected.
    pub invariant_violations: Vec<InvariantViolation>,
}

impl SimulationResult {
    /// Check if the simulation passed (no invariant violations).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.invariant_violations.is_empty()
    }
}

/// The main simulator harness.
///
/// Ties together the operation generator, the store under test, the
/// reference model and the invariant checker.
pub struct Simulator {
    config: SimulatorConfig,
    generator: OperationGenerator,
    tree: RecordTree<Employee>,
    model: ReferenceModel,
    checker: InvariantChecker,
    stats: SimulationStats,
}

impl Simulator {
    /// Create a new simulator with the given configuration.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let generator =
            OperationGenerator::with_config(config.seed, config.operation_config.clone());
        Self {
            config,
            generator,
            tree: RecordTree::new(),
            model: ReferenceModel::new(),
            checker: InvariantChecker::new(),
            stats: SimulationStats::default(),
        }
    }

    /// The store under test.
    #[must_use]
    pub const fn tree(&self) -> &RecordTree<Employee> {
        &self.tree
    }

    /// Apply `count` generated operations and report what happened.
    ///
    /// Can be called repeatedly; counters accumulate across calls.
    pub fn run(&mut self, count: usize) -> SimulationResult {
        tracing::debug!(seed = self.config.seed, count, "starting simulation run");
        for _ in 0..count {
            let operation = self.generator.next_operation();
            self.step(operation);
        }

        let index = self.operation_index();
        self.checker.check_contents(&self.tree, &self.model, index);

        let result = SimulationResult {
            seed: self.config.seed,
            stats: self.stats.clone(),
            final_count: self.tree.count(),
            final_height: self.tree.height(),
            invariant_violations: self.checker.violations().to_vec(),
        };
        if !result.passed() {
            tracing::warn!(
                seed = result.seed,
                violations = result.invariant_violations.len(),
                "simulation found invariant violations"
            );
        }
        result
    }

    fn operation_index(&self) -> usize {
        usize::try_from(self.stats.operations_processed).unwrap_or(usize::MAX)
    }

    /// Apply one operation to both the store and the model and compare.
    fn step(&mut self, operation: Operation) {
        let index = self.operation_index();
        match operation {
            Operation::Insert(employee) => {
                let expected = self.model.insert(employee.clone());
                let actual = self.tree.insert(employee);
                self.checker.check_result("insert", &actual, &expected, index);
                if actual {
                    self.stats.inserts += 1;
                } else {
                    self.stats.duplicate_inserts += 1;
                }
            }
            Operation::Find(id) => {
                let expected = self.model.find(id);
                let actual = self.tree.find(id);
                self.checker.check_result("find", &actual, &expected, index);
                if actual.is_some() {
                    self.stats.finds_hit += 1;
                } else {
                    self.stats.finds_missed += 1;
                }
            }
            Operation::Remove(id) => {
                let expected = self.model.remove(id);
                let actual = self.tree.remove(id);
                self.checker.check_result("remove", &actual, &expected, index);
                if actual {
                    self.stats.removals += 1;
                } else {
                    self.stats.removals_missed += 1;
                }
            }
            Operation::Update { id, employee } => {
                let expected = self.model.update(id, employee.clone());
                let actual = self.tree.update(id, employee);
                self.checker.check_result("update", &actual, &expected, index);
                self.stats.updates += 1;
            }
        }

        self.checker.check_ordering(&self.tree, index);
        let interval = self.config.content_check_interval.max(1);
        if index % interval == 0 {
            self.checker.check_contents(&self.tree, &self.model, index);
        }
        self.stats.operations_processed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_simulation_passes() {
        for seed in [0, 1, 2, 42, 12345] {
            let mut sim = Simulator::new(SimulatorConfig::new(seed));
            let result = sim.run(2_000);
            assert!(result.passed(), "seed {seed}: {:?}", result.invariant_violations);
            assert_eq!(result.stats.operations_processed, 2_000);
            assert!(result.stats.removals > 0);
            assert!(result.stats.duplicate_inserts > 0);
        }
    }

    #[test]
    fn test_churn_simulation_passes() {
        let config = SimulatorConfig::new(99).with_operation_config(OperationGenConfig::churn());
        let mut sim = Simulator::new(config);
        let result = sim.run(5_000);
        assert!(result.passed(), "{:?}", result.invariant_violations);
        assert!(result.final_count <= 32);
    }

    #[test]
    fn test_ascending_inserts_build_a_chain() {
        let config = SimulatorConfig::new(5)
            .with_operation_config(OperationGenConfig::ascending_inserts())
            .with_content_check_interval(100);
        let mut sim = Simulator::new(config);
        let result = sim.run(500);
        assert!(result.passed(), "{:?}", result.invariant_violations);
        assert_eq!(result.final_count, 500);
        assert_eq!(result.final_height, 500);
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let mut a = Simulator::new(SimulatorConfig::new(777));
        let mut b = Simulator::new(SimulatorConfig::new(777));
        let result_a = a.run(1_000);
        let result_b = b.run(1_000);

        assert_eq!(result_a.stats.inserts, result_b.stats.inserts);
        assert_eq!(result_a.stats.removals, result_b.stats.removals);
        assert_eq!(result_a.final_height, result_b.final_height);
        assert_eq!(a.tree().export_ordered(), b.tree().export_ordered());
    }

    #[test]
    fn test_runs_accumulate() {
        let mut sim = Simulator::new(SimulatorConfig::new(3));
        sim.run(100);
        let result = sim.run(100);
        assert_eq!(result.stats.operations_processed, 200);
        assert!(result.passed());
    }
}

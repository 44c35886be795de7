//! Operation generator for deterministic simulation testing.
//!
//! Produces random but reproducible sequences of store operations. Keys are
//! drawn from a small pool so that duplicates, misses and re-keying updates
//! happen often.

// Simulation code legitimately needs cloning for test data
#![allow(clippy::disallowed_methods)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Employee, EmployeeId};

/// Configuration for operation generation.
///
/// The rates are probabilities of the non-insert operations; whatever is left
/// over (`1 - find - remove - update`) is the insert rate.
#[derive(Debug, Clone)]
pub struct OperationGenConfig {
    /// Probability of a lookup.
    pub find_rate: f64,
    /// Probability of a removal.
    pub remove_rate: f64,
    /// Probability of an update.
    pub update_rate: f64,
    /// Keys are drawn from `0..key_space`.
    pub key_space: i32,
    /// Probability that an insert uses the next key of an ascending run
    /// instead of a random one. Ascending runs grow chain-shaped subtrees.
    pub ascending_rate: f64,
}

impl Default for OperationGenConfig {
    fn default() -> Self {
        Self {
            find_rate: 0.25,
            remove_rate: 0.2,
            update_rate: 0.15,
            key_space: 200,
            ascending_rate: 0.0,
        }
    }
}

impl OperationGenConfig {
    /// Only inserts, in ascending key order: the worst case for an
    /// unbalanced tree.
    #[must_use]
    pub const fn ascending_inserts() -> Self {
        Self {
            find_rate: 0.0,
            remove_rate: 0.0,
            update_rate: 0.0,
            key_space: i32::MAX,
            ascending_rate: 1.0,
        }
    }

    /// Mostly removals and updates over a tiny key pool, so that two-child
    /// removals and key collisions are frequent.
    #[must_use]
    pub const fn churn() -> Self {
        Self {
            find_rate: 0.1,
            remove_rate: 0.35,
            update_rate: 0.25,
            key_space: 32,
            ascending_rate: 0.0,
        }
    }
}

/// One store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Insert(Employee),
    Find(EmployeeId),
    Remove(EmployeeId),
    Update { id: EmployeeId, employee: Employee },
}

const NAMES: [&str; 8] = [
    "Ada", "Alan", "Barbara", "Edsger", "Grace", "Ken", "Margaret", "Niklaus",
];

/// Generator for random [`Operation`]s.
///
/// The same seed and configuration always yield the same sequence.
pub struct OperationGenerator {
    rng: StdRng,
    config: OperationGenConfig,
    /// Next key of the ascending insert run.
    next_ascending: i32,
}

impl OperationGenerator {
    /// Create a new generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, OperationGenConfig::default())
    }

    /// Create a new generator with custom configuration.
    #[must_use]
    pub fn with_config(seed: u64, config: OperationGenConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            next_ascending: 0,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &OperationGenConfig {
        &self.config
    }

    /// Generate the next operation.
    pub fn next_operation(&mut self) -> Operation {
        let roll: f64 = self.rng.random();
        let find = self.config.find_rate;
        let remove = find + self.config.remove_rate;
        let update = remove + self.config.update_rate;

        if roll < find {
            Operation::Find(self.random_id())
        } else if roll < remove {
            Operation::Remove(self.random_id())
        } else if roll < update {
            let id = self.random_id();
            // Half of the updates keep their key, the rest move the record.
            let new_id = if self.rng.random_bool(0.5) {
                id
            } else {
                self.random_id()
            };
            Operation::Update {
                id,
                employee: self.employee(new_id),
            }
        } else {
            let id = if self.rng.random_bool(self.config.ascending_rate) {
                self.next_ascending_id()
            } else {
                self.random_id()
            };
            Operation::Insert(self.employee(id))
        }
    }

    fn random_id(&mut self) -> EmployeeId {
        EmployeeId(self.rng.random_range(0..self.config.key_space.max(1)))
    }

    fn next_ascending_id(&mut self) -> EmployeeId {
        let id = EmployeeId(self.next_ascending);
        self.next_ascending = self.next_ascending.saturating_add(1);
        id
    }

    fn employee(&mut self, id: EmployeeId) -> Employee {
        let name = NAMES[self.rng.random_range(0..NAMES.len())];
        // Whole cents, so rendered salaries are stable.
        let cents: u32 = self.rng.random_range(100_000..20_000_000);
        Employee::new(id, name, f64::from(cents) / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_operations() {
        let mut a = OperationGenerator::new(7);
        let mut b = OperationGenerator::new(7);
        for _ in 0..200 {
            assert_eq!(a.next_operation(), b.next_operation());
        }
    }

    #[test]
    fn test_ascending_inserts() {
        let mut generator =
            OperationGenerator::with_config(1, OperationGenConfig::ascending_inserts());
        for expected in 0..50 {
            match generator.next_operation() {
                Operation::Insert(employee) => assert_eq!(employee.id(), EmployeeId(expected)),
                other => panic!("expected insert, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_ids_stay_in_key_space() {
        let config = OperationGenConfig {
            key_space: 10,
            ..OperationGenConfig::default()
        };
        let mut generator = OperationGenerator::with_config(3, config);
        for _ in 0..500 {
            let id = match generator.next_operation() {
                Operation::Insert(e) => e.id(),
                Operation::Find(id) | Operation::Remove(id) => id,
                Operation::Update { id, employee } => {
                    assert!((0..10).contains(&employee.id().get()));
                    id
                }
            };
            assert!((0..10).contains(&id.get()));
        }
    }

    #[test]
    fn test_all_operation_kinds_generated() {
        let mut generator = OperationGenerator::new(42);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let kind = match generator.next_operation() {
                Operation::Insert(_) => 0,
                Operation::Find(_) => 1,
                Operation::Remove(_) => 2,
                Operation::Update { .. } => 3,
            };
            seen[kind] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}

//! Deterministic simulation testing for the record store.
//!
//! A seeded generator produces a stream of store operations. Each operation
//! is applied both to a [`RecordTree`](crate::store::RecordTree) and to a
//! `BTreeMap` reference model with the same duplicate-insert and
//! remove-then-insert update rules. After each step the two are compared and
//! the tree's ordering invariant is checked.
//!
//! # Design Principles
//!
//! 1. All randomness is seeded for reproducibility
//! 2. Given the same seed, execution is identical
//! 3. Invariants are checked after every operation, not just at the end
//!
//! # Usage
//!
//! ```
//! use payroll::simulation::{Simulator, SimulatorConfig};
//!
//! let mut sim = Simulator::new(SimulatorConfig::new(12345));
//! let result = sim.run(500);
//!
//! assert!(result.passed(), "{:?}", result.invariant_violations);
//! ```

mod invariants;
mod operation_gen;
mod simulator;

pub use invariants::{InvariantChecker, InvariantViolation, ReferenceModel};
pub use operation_gen::{Operation, OperationGenConfig, OperationGenerator};
pub use simulator::{SimulationResult, SimulationStats, Simulator, SimulatorConfig};

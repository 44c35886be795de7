// Life of a command:
// 1. A line comes in on stdin
// 2. The shell parses and validates it into a `Command`
// 3. The session applies it to the record store:
//     - add:    insert (existing ids are left alone)
//     - find:   exact-id lookup
//     - update: remove the old id, then insert the replacement
//     - remove: search tree deletion
//     - list:   in-order walk of the whole tree
// 4. The reply is written to stdout
//
// System components:
//  - Record store (unbalanced binary search tree)
//  - Command shell
//  - Deterministic simulation harness for the store

pub mod config;
mod e2e_tests;
pub mod shell;
pub mod simulation;
pub mod store;
#[cfg(test)]
mod testing;
pub mod types;

pub use shell::Session;
pub use store::RecordTree;

//! End-to-end tests at the shell command/reply level.
//!
//! Each test file covers a specific scenario, feeding command lines through
//! a `Session` and checking both the replies and the resulting store.

#![cfg(test)]

mod helpers;

mod test_duplicate_add;
mod test_listing;
mod test_two_child_removal;
mod test_update_semantics;

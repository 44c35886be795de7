//! Line-oriented command shell over the payroll store.
//!
//! The shell is the only place user input is parsed. It reads one command
//! per line, validates it (see [`command`]) and applies it to a
//! [`RecordTree`](crate::store::RecordTree) owned by a [`Session`].
//!
//! # Usage
//!
//! ```
//! use payroll::config::ShellConfig;
//! use payroll::shell::{Reply, Session};
//!
//! let mut session = Session::new(ShellConfig::default());
//! session.handle_line("add 1, Ada, 1500");
//! assert_eq!(
//!     session.handle_line("find 1"),
//!     Some(Reply::Info(
//!         "Employee found: Employee [id=1, name=Ada, salary=1500.00]".to_string()
//!     ))
//! );
//! ```

pub mod command;
mod session;

pub use command::{Command, ParseError};
pub use session::{Reply, Session, SessionError};

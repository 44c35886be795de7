//! A shell session: one store driven by a stream of command lines.

use std::fmt;
use std::io::{BufRead, Write};

use crate::config::ShellConfig;
use crate::shell::command::{Command, ParseError};
use crate::store::RecordTree;
use crate::types::Employee;

/// What the session has to say about one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command succeeded; the text is shown as is.
    Info(String),
    /// The command was rejected or found nothing.
    Error(String),
    /// The session should end.
    Exit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(text) => write!(f, "{text}"),
            Self::Error(text) => write!(f, "Error: {text}"),
            Self::Exit => Ok(()),
        }
    }
}

/// Errors that end a session.
#[derive(Debug)]
pub enum SessionError {
    /// Reading commands or writing replies failed.
    Io(std::io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

const NOT_FOUND: &str = "Employee not found!";

/// The payroll shell: owns the record store and turns commands into replies.
pub struct Session {
    employees: RecordTree<Employee>,
    config: ShellConfig,
}

impl Session {
    #[must_use]
    pub const fn new(config: ShellConfig) -> Self {
        Self {
            employees: RecordTree::new(),
            config,
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn employees(&self) -> &RecordTree<Employee> {
        &self.employees
    }

    /// Parse and execute one line. Blank lines produce no reply.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match line.parse::<Command>() {
            Ok(command) => Some(self.execute(command)),
            Err(ParseError::Empty) => None,
            Err(e) => {
                tracing::warn!("rejected input {line:?}: {e:?}");
                Some(Reply::Error(e.to_string()))
            }
        }
    }

    /// Execute an already validated command against the store.
    pub fn execute(&mut self, command: Command) -> Reply {
        tracing::debug!("executing {command:?}");
        let reply = match command {
            Command::Add(employee) => {
                let id = employee.id();
                if self.employees.insert(employee) {
                    Reply::Info("Employee added successfully!".to_string())
                } else {
                    Reply::Info(format!(
                        "Employee {id} already exists; record left unchanged."
                    ))
                }
            }
            Command::Find(id) => match self.employees.find(id) {
                Some(employee) => Reply::Info(format!(
                    "Employee found: {}",
                    employee.display_with(self.config.salary_decimals)
                )),
                None => Reply::Error(NOT_FOUND.to_string()),
            },
            Command::Update { id, employee } => {
                // Only existing employees can be updated from the shell, even
                // though the store itself would treat this as an insert.
                if self.employees.contains(id) {
                    let outcome = self.employees.update(id, employee);
                    tracing::debug!("update of {id}: {outcome:?}");
                    Reply::Info("Employee updated successfully!".to_string())
                } else {
                    Reply::Error(NOT_FOUND.to_string())
                }
            }
            Command::Remove(id) => {
                if self.employees.remove(id) {
                    Reply::Info("Employee removed successfully!".to_string())
                } else {
                    Reply::Error(NOT_FOUND.to_string())
                }
            }
            Command::List => self.list(),
            Command::Count => Reply::Info(self.employees.count().to_string()),
            Command::Help => Reply::Info(Command::USAGE.to_string()),
            Command::Exit => Reply::Exit,
        };
        tracing::debug!("reply: {reply:?}");
        reply
    }

    fn list(&self) -> Reply {
        if self.employees.is_empty() {
            return Reply::Info("No employees.".to_string());
        }
        let decimals = self.config.salary_decimals;
        Reply::Info(self.employees.render_in_order(|e| e.display_with(decimals)))
    }

    /// Read commands from `input` until `exit` or end of input, writing one
    /// reply per command to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `input` or writing to `output` fails.
    /// Invalid commands are reported to `output` and do not end the session.
    pub fn run<I, W>(&mut self, input: I, output: &mut W) -> Result<(), SessionError>
    where
        I: BufRead,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            if !self.config.prompt.is_empty() {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            match self.handle_line(&line?) {
                None => {}
                Some(Reply::Exit) => break,
                Some(reply) => writeln!(output, "{reply}")?,
            }
        }
        output.flush()?;
        Ok(())
    }
}

//! Command parsing and input validation for the payroll shell.
//!
//! Everything the store receives has been validated here first: ids parse as
//! integers, names are non-empty and salaries are finite numbers.

use std::fmt;
use std::str::FromStr;

use crate::types::{Employee, EmployeeId};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <id>, <name>, <salary>`
    Add(Employee),
    /// `find <id>`
    Find(EmployeeId),
    /// `update <id> <new id>, <name>, <salary>`
    Update {
        /// The record to replace.
        id: EmployeeId,
        /// The replacement, possibly under a different id.
        employee: Employee,
    },
    /// `remove <id>`
    Remove(EmployeeId),
    /// `list`
    List,
    /// `count`
    Count,
    /// `help`
    Help,
    /// `exit` or `quit`
    Exit,
}

impl Command {
    /// One-line usage summary per command, shown by `help`.
    pub const USAGE: &'static str = "\
add <id>, <name>, <salary>            add an employee
find <id>                             show one employee
update <id> <id>, <name>, <salary>    replace an employee's record
remove <id>                           remove an employee
list                                  show all employees by id
count                                 show the number of employees
help                                  show this summary
exit                                  leave the shell";
}

/// Reasons a command line is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is empty or whitespace only.
    Empty,
    /// The first word is not a known command.
    UnknownCommand(String),
    /// The command needs an argument that was not given.
    MissingArgument { command: &'static str },
    /// The command takes no argument but one was given.
    UnexpectedArgument { command: &'static str },
    /// A standalone employee id is not an integer.
    InvalidId(String),
    /// A record does not have exactly three comma-separated fields.
    InvalidRecordFormat { fields: usize },
    /// The id or salary inside a record is not a number.
    InvalidNumber(String),
    /// The salary parsed but is NaN or infinite.
    NonFiniteSalary(String),
    /// The name inside a record is blank.
    EmptyName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty command. Type 'help' for a list of commands."),
            Self::UnknownCommand(word) => {
                write!(f, "Unknown command '{word}'. Type 'help' for a list of commands.")
            }
            Self::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'. Type 'help' for usage.")
            }
            Self::UnexpectedArgument { command } => {
                write!(f, "'{command}' does not take an argument.")
            }
            Self::InvalidId(_) => write!(
                f,
                "Invalid input. Please enter a valid numeric value for Employee ID."
            ),
            Self::InvalidRecordFormat { .. } => write!(
                f,
                "Invalid input format. Please enter ID, Name, and Salary separated by commas."
            ),
            Self::InvalidNumber(_) => {
                write!(f, "Invalid input. Please enter valid numeric values.")
            }
            Self::NonFiniteSalary(value) => {
                write!(f, "Invalid input. Salary must be a finite number, got '{value}'.")
            }
            Self::EmptyName => write!(f, "Invalid input. Name must not be empty."),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "add" => {
                let record = required(rest, "add")?;
                Ok(Self::Add(parse_employee(record)?))
            }
            "find" => Ok(Self::Find(parse_id(required(rest, "find")?)?)),
            "remove" => Ok(Self::Remove(parse_id(required(rest, "remove")?)?)),
            "update" => {
                let (id, record) = required(rest, "update")?
                    .split_once(char::is_whitespace)
                    .ok_or(ParseError::MissingArgument { command: "update" })?;
                Ok(Self::Update {
                    id: parse_id(id)?,
                    employee: parse_employee(record)?,
                })
            }
            "list" => no_argument(rest, "list", Self::List),
            "count" => no_argument(rest, "count", Self::Count),
            "help" => no_argument(rest, "help", Self::Help),
            "exit" | "quit" => no_argument(rest, "exit", Self::Exit),
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command })
    } else {
        Ok(rest)
    }
}

fn no_argument(rest: &str, command: &'static str, parsed: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArgument { command })
    }
}

/// Parse a standalone employee id.
pub fn parse_id(text: &str) -> Result<EmployeeId, ParseError> {
    let text = text.trim();
    text.parse::<i32>()
        .map(EmployeeId)
        .map_err(|_| ParseError::InvalidId(text.to_string()))
}

/// Parse an `<id>, <name>, <salary>` record.
pub fn parse_employee(text: &str) -> Result<Employee, ParseError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let [id, name, salary] = fields.as_slice() else {
        return Err(ParseError::InvalidRecordFormat {
            fields: fields.len(),
        });
    };

    let id = id
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber((*id).to_string()))?;
    let salary_value = salary
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber((*salary).to_string()))?;
    if !salary_value.is_finite() {
        return Err(ParseError::NonFiniteSalary((*salary).to_string()));
    }
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }

    Ok(Employee::new(id, *name, salary_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse("add 7, Ada Lovelace, 1234.5").unwrap(),
            Command::Add(Employee::new(7, "Ada Lovelace", 1234.5))
        );
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!(parse("  FIND   12 ").unwrap(), Command::Find(EmployeeId(12)));
        assert_eq!(parse("List").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            parse("update 3 4, Grace, 10").unwrap(),
            Command::Update {
                id: EmployeeId(3),
                employee: Employee::new(4, "Grace", 10.0),
            }
        );
    }

    #[test]
    fn test_parse_update_without_record() {
        assert_eq!(
            parse("update 3").unwrap_err(),
            ParseError::MissingArgument { command: "update" }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("remove -4").unwrap(), Command::Remove(EmployeeId(-4)));
        assert_eq!(parse("count").unwrap(), Command::Count);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Exit);
        assert_eq!(parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse("   ").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("fire 3").unwrap_err(),
            ParseError::UnknownCommand("fire".to_string())
        );
    }

    #[test]
    fn test_missing_and_unexpected_arguments() {
        assert_eq!(
            parse("find").unwrap_err(),
            ParseError::MissingArgument { command: "find" }
        );
        assert_eq!(
            parse("list everything").unwrap_err(),
            ParseError::UnexpectedArgument { command: "list" }
        );
    }

    #[test]
    fn test_invalid_id() {
        let error = parse("find abc").unwrap_err();
        assert_eq!(error, ParseError::InvalidId("abc".to_string()));
        assert_eq!(
            error.to_string(),
            "Invalid input. Please enter a valid numeric value for Employee ID."
        );
    }

    #[test]
    fn test_id_out_of_range() {
        assert!(matches!(
            parse("find 99999999999").unwrap_err(),
            ParseError::InvalidId(_)
        ));
    }

    #[test]
    fn test_record_with_wrong_field_count() {
        let error = parse_employee("1, Ada").unwrap_err();
        assert_eq!(error, ParseError::InvalidRecordFormat { fields: 2 });
        assert_eq!(
            error.to_string(),
            "Invalid input format. Please enter ID, Name, and Salary separated by commas."
        );
        assert_eq!(
            parse_employee("1, Ada, 2, 3").unwrap_err(),
            ParseError::InvalidRecordFormat { fields: 4 }
        );
    }

    #[test]
    fn test_record_with_bad_numbers() {
        assert_eq!(
            parse_employee("x, Ada, 10").unwrap_err(),
            ParseError::InvalidNumber("x".to_string())
        );
        let error = parse_employee("1, Ada, lots").unwrap_err();
        assert_eq!(error, ParseError::InvalidNumber("lots".to_string()));
        assert_eq!(
            error.to_string(),
            "Invalid input. Please enter valid numeric values."
        );
    }

    #[test]
    fn test_record_with_non_finite_salary() {
        assert_eq!(
            parse_employee("1, Ada, NaN").unwrap_err(),
            ParseError::NonFiniteSalary("NaN".to_string())
        );
        assert_eq!(
            parse_employee("1, Ada, inf").unwrap_err(),
            ParseError::NonFiniteSalary("inf".to_string())
        );
    }

    #[test]
    fn test_record_with_empty_name() {
        assert_eq!(parse_employee("1,  , 10").unwrap_err(), ParseError::EmptyName);
    }
}

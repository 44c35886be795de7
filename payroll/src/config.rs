//! Shell configuration module.
//!
//! Loads settings for the interactive payroll shell from environment
//! variables.
//!
//! # Environment Variables
//!
//! - `PAYROLL_PROMPT`: Prompt printed before each command (default: `"> "`).
//!   An empty value disables the prompt, which is handy when piping scripts.
//! - `PAYROLL_SALARY_DECIMALS`: Decimal places used when printing salaries
//!   (default: `2`, at most `6`).
//!
//! Logging is configured separately through `RUST_LOG`.

/// Shell configuration.
///
/// # Post-conditions
///
/// - `salary_decimals` is at most [`ShellConfig::MAX_SALARY_DECIMALS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prompt written before reading each command line.
    pub prompt: String,
    /// Number of decimal places used when rendering salaries.
    pub salary_decimals: usize,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: Self::DEFAULT_PROMPT.to_string(),
            salary_decimals: Self::DEFAULT_SALARY_DECIMALS,
        }
    }
}

impl ShellConfig {
    /// Default prompt.
    pub const DEFAULT_PROMPT: &'static str = "> ";
    /// Default number of salary decimal places.
    pub const DEFAULT_SALARY_DECIMALS: usize = 2;
    /// Largest accepted number of salary decimal places.
    pub const MAX_SALARY_DECIMALS: usize = 6;

    const PROMPT_VAR: &'static str = "PAYROLL_PROMPT";
    const SALARY_DECIMALS_VAR: &'static str = "PAYROLL_SALARY_DECIMALS";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PAYROLL_SALARY_DECIMALS` is set but is not an
    /// integer between 0 and 6.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prompt = lookup(Self::PROMPT_VAR).unwrap_or_else(|| Self::DEFAULT_PROMPT.to_string());
        let salary_decimals = Self::parse_salary_decimals(lookup(Self::SALARY_DECIMALS_VAR))?;

        Ok(Self {
            prompt,
            salary_decimals,
        })
    }

    /// Parse the salary decimals setting, falling back to the default.
    fn parse_salary_decimals(value: Option<String>) -> Result<usize, ConfigError> {
        let Some(value) = value else {
            return Ok(Self::DEFAULT_SALARY_DECIMALS);
        };
        match value.trim().parse::<usize>() {
            Ok(decimals) if decimals <= Self::MAX_SALARY_DECIMALS => Ok(decimals),
            _ => Err(ConfigError::InvalidValue {
                name: Self::SALARY_DECIMALS_VAR.to_string(),
                message: format!(
                    "'{value}' is not a valid number of decimal places (must be 0-{})",
                    Self::MAX_SALARY_DECIMALS
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ShellConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ShellConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        assert_eq!(ShellConfig::DEFAULT_PROMPT, "> ");
        assert_eq!(ShellConfig::DEFAULT_SALARY_DECIMALS, 2);
        assert_eq!(load(&[]).unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PAYROLL_PROMPT", ""),
            ("PAYROLL_SALARY_DECIMALS", "0"),
        ])
        .unwrap();
        assert_eq!(config.prompt, "");
        assert_eq!(config.salary_decimals, 0);
    }

    #[test]
    fn test_salary_decimals_out_of_range() {
        let error = load(&[("PAYROLL_SALARY_DECIMALS", "7")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid value for PAYROLL_SALARY_DECIMALS: '7' is not a valid number of decimal places (must be 0-6)"
        );
    }

    #[test]
    fn test_salary_decimals_not_a_number() {
        let error = load(&[("PAYROLL_SALARY_DECIMALS", "two")]).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { ref name, .. } if name == "PAYROLL_SALARY_DECIMALS"));
    }
}

//! The employee record held by the payroll store.

use std::fmt;

use crate::store::Keyed;
use crate::types::EmployeeId;

/// An employee record.
///
/// The store only looks at `id`. Name and salary are carried along untouched;
/// the shell validates them before a record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    salary: f64,
}

impl Employee {
    /// Decimal places used by the plain `Display` impl.
    pub const DEFAULT_SALARY_DECIMALS: usize = 2;

    #[must_use]
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
        }
    }

    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn salary(&self) -> f64 {
        self.salary
    }

    /// Render the record with the salary rounded to `salary_decimals` places.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll::types::Employee;
    /// let employee = Employee::new(7, "Ada", 1234.5);
    /// assert_eq!(
    ///     employee.display_with(1).to_string(),
    ///     "Employee [id=7, name=Ada, salary=1234.5]"
    /// );
    /// ```
    #[must_use]
    pub const fn display_with(&self, salary_decimals: usize) -> EmployeeDisplay<'_> {
        EmployeeDisplay {
            employee: self,
            salary_decimals,
        }
    }
}

impl Keyed for Employee {
    type Key = EmployeeId;

    fn key(&self) -> EmployeeId {
        self.id
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(Self::DEFAULT_SALARY_DECIMALS).fmt(f)
    }
}

/// Display adapter returned by [`Employee::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct EmployeeDisplay<'a> {
    employee: &'a Employee,
    salary_decimals: usize,
}

impl fmt::Display for EmployeeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee [id={}, name={}, salary={:.*}]",
            self.employee.id, self.employee.name, self.salary_decimals, self.employee.salary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_accessors() {
        let employee = Employee::new(3, "Grace", 5000.0);
        assert_eq!(employee.id(), EmployeeId(3));
        assert_eq!(employee.name(), "Grace");
        assert!((employee.salary() - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_employee_key_is_id() {
        let employee = Employee::new(11, "Linus", 1.0);
        assert_eq!(employee.key(), EmployeeId(11));
    }

    #[test]
    fn test_employee_display_default_decimals() {
        let employee = Employee::new(1, "Alan", 2500.0);
        assert_eq!(
            employee.to_string(),
            "Employee [id=1, name=Alan, salary=2500.00]"
        );
    }

    #[test]
    fn test_employee_display_with_zero_decimals() {
        let employee = Employee::new(1, "Alan", 2500.49);
        assert_eq!(
            employee.display_with(0).to_string(),
            "Employee [id=1, name=Alan, salary=2500]"
        );
    }
}

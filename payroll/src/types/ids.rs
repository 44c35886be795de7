//! ID types for payroll records.
//!
//! Employee IDs are the only key the record store understands. Wrapping the
//! raw integer keeps store keys from being mixed up with other integers such
//! as counts or salaries.

use std::fmt;

/// A unique identifier for an employee.
///
/// # Invariants
///
/// - Within one store, no two records share an ID.
/// - Ordering follows the wrapped integer, so negative IDs sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EmployeeId(pub i32);

impl EmployeeId {
    /// Create an employee ID from a raw integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll::types::EmployeeId;
    /// let id = EmployeeId::new(42);
    /// assert_eq!(id.get(), 42);
    /// ```
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<EmployeeId> for i32 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_ordering() {
        let mut ids = vec![EmployeeId(3), EmployeeId(-1), EmployeeId(0)];
        ids.sort();
        assert_eq!(ids, vec![EmployeeId(-1), EmployeeId(0), EmployeeId(3)]);
    }

    #[test]
    fn test_employee_id_display() {
        assert_eq!(EmployeeId(17).to_string(), "17");
        assert_eq!(EmployeeId(-5).to_string(), "-5");
    }

    #[test]
    fn test_employee_id_conversions() {
        let id: EmployeeId = 9.into();
        assert_eq!(i32::from(id), 9);
    }
}

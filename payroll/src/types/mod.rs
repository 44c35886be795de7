pub mod employee;
pub mod ids;

pub use employee::{Employee, EmployeeDisplay};
pub use ids::EmployeeId;

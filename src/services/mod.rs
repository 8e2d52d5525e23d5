//! Services Layer
//!
//! Business logic kept apart from the HTTP layer.

pub mod employee_service;

pub use employee_service::EmployeeService;

//! Core services orchestrating domain operations over the ports.

pub mod app_core;
pub mod departments;
pub mod employees;
pub mod products;

pub use app_core::AppCore;
pub use departments::DepartmentService;
pub use employees::EmployeeService;
pub use products::ProductService;

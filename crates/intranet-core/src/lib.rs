//! Core domain types, ports, and services for the intranet back-office API.
//!
//! This crate contains no I/O. Persistence lives behind the repository and
//! procedure-store traits in [`ports`]; adapters wire concrete
//! implementations in at their composition roots.

pub mod domain;
pub mod gateway;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Department, Employee, NewDepartment, NewEmployee, NewProduct, Product,
};
pub use gateway::{
    CommandDescriptor, EMPTY_RESULT, GatewayError, GatewayService, ProcedureRegistry, resolve,
};
pub use ports::{
    CoreError, DepartmentRepository, EmployeeRepository, ProcedureStore, ProcedureStoreError,
    ProductRepository, Repos, RepositoryError,
};
pub use services::AppCore;

// Silence unused dev-dependency warnings for test-only tooling
#[cfg(test)]
use tokio_test as _;

//! `AppCore` - the primary application facade.
//!
//! Adapters (web, CLI) receive an `AppCore` instance and use it to access
//! all functionality. It is constructed at the adapter's composition root
//! with concrete implementations of the repositories and procedure store.

use std::sync::Arc;

use crate::gateway::{GatewayService, ProcedureRegistry};
use crate::ports::{ProcedureStore, Repos};

use super::{DepartmentService, EmployeeService, ProductService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = intranet_db::CoreFactory::build_repos(pool.clone());
/// let store = intranet_db::CoreFactory::procedure_store(pool);
/// let registry = ProcedureRegistry::new(store.list_targets().await?);
/// let core = AppCore::new(repos, store, registry);
///
/// let products = core.products().list().await?;
/// let body = core.gateway().dispatch(raw_json).await?;
/// ```
pub struct AppCore {
    products: ProductService,
    employees: EmployeeService,
    departments: DepartmentService,
    gateway: GatewayService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and procedure
    /// store. `registry` is the command table populated at startup.
    pub fn new(
        repos: Repos,
        store: Arc<dyn ProcedureStore>,
        registry: ProcedureRegistry,
    ) -> Self {
        Self {
            products: ProductService::new(repos.products),
            employees: EmployeeService::new(repos.employees),
            departments: DepartmentService::new(repos.departments),
            gateway: GatewayService::new(store, registry),
        }
    }

    /// Access the product service.
    pub const fn products(&self) -> &ProductService {
        &self.products
    }

    /// Access the employee service.
    pub const fn employees(&self) -> &EmployeeService {
        &self.employees
    }

    /// Access the department service.
    pub const fn departments(&self) -> &DepartmentService {
        &self.departments
    }

    /// Access the procedure gateway.
    pub const fn gateway(&self) -> &GatewayService {
        &self.gateway
    }
}

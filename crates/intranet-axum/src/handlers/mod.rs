//! HTTP request handlers, grouped by resource.

pub mod common;
pub mod departments;
pub mod employees;
pub mod products;

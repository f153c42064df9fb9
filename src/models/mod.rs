//! Core data models for the payroll engine.
//!
//! This module contains the employee entity, its roles and employment types,
//! and the append-only transaction log.

mod employee;
mod role;
mod transaction;

pub use employee::{Compensation, Employee, Project};
pub use role::{EmploymentType, Role};
pub use transaction::{TransactionKind, TransactionLog, TransactionRecord};

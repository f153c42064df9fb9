//! Payroll and Vacation Policy Engine
//!
//! This crate computes pay for salaried, hourly, freelance and intern
//! employees and enforces role-specific vacation and payout rules. Every
//! successful payment and vacation is recorded in the employee's own
//! append-only transaction log.
//!
//! Payment policies are chosen by employment type and vacation policies by
//! role, both once when an employee is built by the
//! [`EmployeeFactory`](factory::EmployeeFactory). The numeric policy
//! parameters come from a YAML or JSON file loaded by
//! [`ConfigLoader`](config::ConfigLoader).

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod factory;
pub mod models;
pub mod payment;
pub mod roster;
pub mod vacation;

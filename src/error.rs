//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejected operation: configuration loading, employee
//! construction, and vacation denials.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Vacation denials are ordinary, expected outcomes and are reported through
/// this type like any other failure. Use [`EngineError::is_denial`] to tell a
/// rule denial apart from a construction or configuration problem.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::PayoutCapExceeded { requested: 12, cap: 10 };
/// assert_eq!(
///     error.to_string(),
///     "Payout cap exceeded: requested 12 days, at most 10 days may be paid out"
/// );
/// assert!(error.is_denial());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested employment type is not one the engine knows.
    #[error("Invalid employment type: '{value}'")]
    InvalidEmploymentType {
        /// The rejected input.
        value: String,
    },

    /// The requested role could not be used.
    #[error("Invalid role: '{value}'")]
    InvalidRole {
        /// The rejected input.
        value: String,
    },

    /// A type-specific employee input was missing or out of range.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The request asks for more days than the employee has left.
    #[error("Insufficient vacation balance: requested {requested} days, {available} available")]
    InsufficientVacationBalance {
        /// Days requested.
        requested: u32,
        /// Days remaining on the balance.
        available: u32,
    },

    /// A manager asked to pay out more days than allowed in one request.
    #[error("Payout cap exceeded: requested {requested} days, at most {cap} days may be paid out")]
    PayoutCapExceeded {
        /// Days requested.
        requested: u32,
        /// The payout cap.
        cap: u32,
    },

    /// A vice president exceeded the per-request day limit.
    #[error("Per-request cap exceeded: requested {requested} days, at most {cap} days per request")]
    PerRequestCapExceeded {
        /// Days requested.
        requested: u32,
        /// The per-request cap.
        cap: u32,
    },

    /// The employee is not eligible for vacation or payout at all.
    #[error("Vacation not permitted: role '{role}' is not eligible for vacation or payout")]
    VacationNotPermitted {
        /// The role of the denied employee.
        role: String,
    },

    /// The request itself is malformed (e.g. zero days).
    #[error("Invalid vacation request: {message}")]
    InvalidVacationRequest {
        /// A description of what is wrong with the request.
        message: String,
    },

    /// No employee matched the roster lookup.
    #[error("Employee not found: {key}")]
    EmployeeNotFound {
        /// The index or id that was looked up.
        key: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns true for vacation rule denials.
    ///
    /// Denials are expected outcomes of a well-formed request against a
    /// policy; everything else points at bad input or configuration.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            EngineError::InsufficientVacationBalance { .. }
                | EngineError::PayoutCapExceeded { .. }
                | EngineError::PerRequestCapExceeded { .. }
                | EngineError::VacationNotPermitted { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

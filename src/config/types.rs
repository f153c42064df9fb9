//! Configuration types for payment and vacation policies.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML or JSON policy files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::DEFAULT_BONUS_THRESHOLD_HOURS;

/// Days of vacation a newly created employee starts with.
pub const DEFAULT_INITIAL_VACATION_DAYS: u32 = 25;

/// Parameters of the salaried payment policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedConfig {
    /// Bonus as a ratio of the salary (0.10 is a 10% bonus).
    pub bonus_percent: Decimal,
}

impl Default for SalariedConfig {
    fn default() -> Self {
        Self {
            bonus_percent: Decimal::new(10, 2),
        }
    }
}

/// Parameters of the hourly payment policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyConfig {
    /// Hours that must be exceeded before the bonus applies.
    pub bonus_threshold: u32,
    /// Flat bonus paid when the threshold is exceeded.
    pub bonus_amount: Decimal,
}

impl Default for HourlyConfig {
    fn default() -> Self {
        Self {
            bonus_threshold: DEFAULT_BONUS_THRESHOLD_HOURS,
            bonus_amount: Decimal::ONE_HUNDRED,
        }
    }
}

/// Vacation parameters shared by every employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationConfig {
    /// Starting balance for new employees.
    #[serde(default = "default_initial_days")]
    pub initial_days: u32,
}

fn default_initial_days() -> u32 {
    DEFAULT_INITIAL_VACATION_DAYS
}

impl Default for VacationConfig {
    fn default() -> Self {
        Self {
            initial_days: DEFAULT_INITIAL_VACATION_DAYS,
        }
    }
}

/// The complete policy configuration.
///
/// The `salaried` and `hourly` sections are required; `vacation` falls back
/// to [`VacationConfig::default`] when absent.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PolicyConfig;
///
/// let config: PolicyConfig = serde_json::from_str(
///     r#"{
///         "salaried": { "bonus_percent": "0.15" },
///         "hourly": { "bonus_threshold": 150, "bonus_amount": "80" }
///     }"#,
/// ).unwrap();
///
/// assert_eq!(config.hourly.bonus_threshold, 150);
/// assert_eq!(config.vacation.initial_days, 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Salaried payment parameters.
    pub salaried: SalariedConfig,
    /// Hourly payment parameters.
    pub hourly: HourlyConfig,
    /// Vacation parameters.
    #[serde(default)]
    pub vacation: VacationConfig,
}

impl PolicyConfig {
    /// Checks value ranges that serde cannot express.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.salaried.bonus_percent.is_sign_negative() {
            return Err(format!(
                "salaried.bonus_percent must not be negative (got {})",
                self.salaried.bonus_percent
            ));
        }
        if self.hourly.bonus_amount.is_sign_negative() {
            return Err(format!(
                "hourly.bonus_amount must not be negative (got {})",
                self.hourly.bonus_amount
            ));
        }
        Ok(())
    }
}

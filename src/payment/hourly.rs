//! Hourly payment policy.
//!
//! Pays `rate * hours`, plus a flat bonus when the hours worked strictly
//! exceed the configured threshold. Working exactly the threshold earns no
//! bonus.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Compensation, Employee, EmploymentType};

use super::{PaymentPolicy, PaymentQuote, overflow, type_mismatch};

/// Default hours that must be exceeded before the hourly bonus applies.
pub const DEFAULT_BONUS_THRESHOLD_HOURS: u32 = 160;

/// Pays `rate * hours + (bonus_amount if hours > bonus_threshold else 0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyPaymentPolicy {
    bonus_threshold: u32,
    bonus_amount: Decimal,
}

impl HourlyPaymentPolicy {
    /// Creates the policy.
    pub fn new(bonus_threshold: u32, bonus_amount: Decimal) -> Self {
        Self {
            bonus_threshold,
            bonus_amount,
        }
    }

    /// Hours that must be exceeded for the bonus.
    pub fn bonus_threshold(&self) -> u32 {
        self.bonus_threshold
    }

    /// The flat bonus.
    pub fn bonus_amount(&self) -> Decimal {
        self.bonus_amount
    }
}

impl PaymentPolicy for HourlyPaymentPolicy {
    fn name(&self) -> &'static str {
        "hourly"
    }

    fn employment_type(&self) -> EmploymentType {
        EmploymentType::Hourly
    }

    fn calculate(&self, employee: &Employee) -> EngineResult<PaymentQuote> {
        let Compensation::Hourly { rate, hours } = employee.compensation() else {
            return Err(type_mismatch(self, employee));
        };

        let base = rate
            .checked_mul(*hours)
            .ok_or_else(|| overflow(self, employee))?;
        let earns_bonus = *hours > Decimal::from(self.bonus_threshold);

        let quote = if earns_bonus {
            PaymentQuote {
                amount: base
                    .checked_add(self.bonus_amount)
                    .ok_or_else(|| overflow(self, employee))?,
                description: format!(
                    "Hourly {}h x {} + {} bonus (over {}h)",
                    hours, rate, self.bonus_amount, self.bonus_threshold
                ),
            }
        } else {
            PaymentQuote {
                amount: base,
                description: format!(
                    "Hourly {}h x {}, no bonus (threshold {}h)",
                    hours, rate, self.bonus_threshold
                ),
            }
        };
        Ok(quote)
    }
}

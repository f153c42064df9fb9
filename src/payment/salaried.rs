//! Salaried payment policy.
//!
//! Pays the salary plus a configured bonus ratio of it.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Compensation, Employee, EmploymentType};

use super::{PaymentPolicy, PaymentQuote, overflow, type_mismatch};

/// Pays `salary * (1 + bonus_percent)`.
///
/// # Example
///
/// ```
/// use payroll_engine::factory::{EmployeeFactory, EmploymentInputs};
/// use payroll_engine::payment::{PaymentPolicy, SalariedPaymentPolicy};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = SalariedPaymentPolicy::new(Decimal::from_str("0.10").unwrap());
/// let employee = EmployeeFactory::default()
///     .create_employee(
///         "Alice",
///         "manager",
///         "salaried",
///         EmploymentInputs::salaried(Decimal::new(5000, 0)),
///     )
///     .unwrap();
///
/// let quote = policy.calculate(&employee).unwrap();
/// assert_eq!(quote.amount, Decimal::new(5500, 0));
/// assert_eq!(quote.description, "Salaried 5000 + 10% bonus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariedPaymentPolicy {
    bonus_percent: Decimal,
}

impl SalariedPaymentPolicy {
    /// Creates the policy with a bonus ratio (0.10 for 10%).
    pub fn new(bonus_percent: Decimal) -> Self {
        Self { bonus_percent }
    }

    /// The configured bonus ratio.
    pub fn bonus_percent(&self) -> Decimal {
        self.bonus_percent
    }
}

impl PaymentPolicy for SalariedPaymentPolicy {
    fn name(&self) -> &'static str {
        "salaried"
    }

    fn employment_type(&self) -> EmploymentType {
        EmploymentType::Salaried
    }

    fn calculate(&self, employee: &Employee) -> EngineResult<PaymentQuote> {
        let Compensation::Salaried { salary } = employee.compensation() else {
            return Err(type_mismatch(self, employee));
        };

        let amount = salary
            .checked_mul(self.bonus_percent)
            .and_then(|bonus| salary.checked_add(bonus))
            .ok_or_else(|| overflow(self, employee))?;
        let percent = self
            .bonus_percent
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| overflow(self, employee))?
            .normalize();

        Ok(PaymentQuote {
            amount,
            description: format!("Salaried {} + {}% bonus", salary, percent),
        })
    }
}

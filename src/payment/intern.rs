//! Intern payment policy.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Compensation, Employee, EmploymentType};

use super::{PaymentPolicy, PaymentQuote, type_mismatch};

/// Interns are unpaid; every pay run still logs a zero-amount record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternPaymentPolicy;

impl PaymentPolicy for InternPaymentPolicy {
    fn name(&self) -> &'static str {
        "intern"
    }

    fn employment_type(&self) -> EmploymentType {
        EmploymentType::Intern
    }

    fn calculate(&self, employee: &Employee) -> EngineResult<PaymentQuote> {
        if !matches!(employee.compensation(), Compensation::Intern) {
            return Err(type_mismatch(self, employee));
        }

        Ok(PaymentQuote {
            amount: Decimal::ZERO,
            description: "Interns are not paid".to_string(),
        })
    }
}

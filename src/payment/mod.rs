//! Payment policies for the payroll engine.
//!
//! Each employment type has one payment policy. Policies are immutable once
//! built from configuration and shared (`Arc`) by every employee of their
//! type. A policy only computes a [`PaymentQuote`]; the employee logs it.

mod freelancer;
mod hourly;
mod intern;
mod salaried;

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmploymentType};

pub use freelancer::FreelancerPaymentPolicy;
pub use hourly::{DEFAULT_BONUS_THRESHOLD_HOURS, HourlyPaymentPolicy};
pub use intern::InternPaymentPolicy;
pub use salaried::SalariedPaymentPolicy;

/// The amount owed for one pay run and how it was arrived at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentQuote {
    /// The amount to pay.
    pub amount: Decimal,
    /// Human-readable explanation, stored in the transaction log.
    pub description: String,
}

/// A strategy computing an employee's pay.
pub trait PaymentPolicy: fmt::Debug + Send + Sync {
    /// Stable policy name used in logs.
    fn name(&self) -> &'static str;

    /// The employment type this policy pays.
    fn employment_type(&self) -> EmploymentType;

    /// Computes the payment for `employee` without changing it.
    ///
    /// Fails with `CalculationError` when the employee's pay attributes
    /// belong to a different employment type, or when the amount overflows.
    fn calculate(&self, employee: &Employee) -> EngineResult<PaymentQuote>;
}

fn type_mismatch(policy: &dyn PaymentPolicy, employee: &Employee) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "{} policy cannot pay {} employee '{}'",
            policy.name(),
            employee.employment_type(),
            employee.name()
        ),
    }
}

fn overflow(policy: &dyn PaymentPolicy, employee: &Employee) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "{} payment for '{}' exceeds the representable amount",
            policy.name(),
            employee.name()
        ),
    }
}

/// The four shared payment policies, one per employment type.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PolicyConfig;
/// use payroll_engine::models::EmploymentType;
/// use payroll_engine::payment::PaymentPolicies;
///
/// let policies = PaymentPolicies::from_config(&PolicyConfig::default());
/// assert_eq!(policies.for_type(EmploymentType::Hourly).name(), "hourly");
/// ```
#[derive(Debug, Clone)]
pub struct PaymentPolicies {
    salaried: Arc<dyn PaymentPolicy>,
    hourly: Arc<dyn PaymentPolicy>,
    freelancer: Arc<dyn PaymentPolicy>,
    intern: Arc<dyn PaymentPolicy>,
}

impl PaymentPolicies {
    /// Builds the policies from configuration.
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            salaried: Arc::new(SalariedPaymentPolicy::new(config.salaried.bonus_percent)),
            hourly: Arc::new(HourlyPaymentPolicy::new(
                config.hourly.bonus_threshold,
                config.hourly.bonus_amount,
            )),
            freelancer: Arc::new(FreelancerPaymentPolicy),
            intern: Arc::new(InternPaymentPolicy),
        }
    }

    /// Returns the shared policy for an employment type.
    pub fn for_type(&self, employment_type: EmploymentType) -> Arc<dyn PaymentPolicy> {
        match employment_type {
            EmploymentType::Salaried => Arc::clone(&self.salaried),
            EmploymentType::Hourly => Arc::clone(&self.hourly),
            EmploymentType::Freelancer => Arc::clone(&self.freelancer),
            EmploymentType::Intern => Arc::clone(&self.intern),
        }
    }
}

impl Default for PaymentPolicies {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_type_resolves_to_matching_policy() {
        let policies = PaymentPolicies::default();
        for employment_type in EmploymentType::ALL {
            assert_eq!(
                policies.for_type(employment_type).employment_type(),
                employment_type
            );
        }
    }

    #[test]
    fn test_policies_are_shared_not_copied() {
        let policies = PaymentPolicies::default();
        let a = policies.for_type(EmploymentType::Salaried);
        let b = policies.for_type(EmploymentType::Salaried);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_policy_names() {
        let policies = PaymentPolicies::default();
        let names: Vec<&str> = EmploymentType::ALL
            .iter()
            .map(|t| policies.for_type(*t).name())
            .collect();
        assert_eq!(names, vec!["salaried", "hourly", "freelancer", "intern"]);
    }
}

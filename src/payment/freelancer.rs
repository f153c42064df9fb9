//! Freelancer payment policy.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Compensation, Employee, EmploymentType};

use super::{PaymentPolicy, PaymentQuote, overflow, type_mismatch};

/// Pays the sum of all project amounts. No projects pays zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreelancerPaymentPolicy;

impl PaymentPolicy for FreelancerPaymentPolicy {
    fn name(&self) -> &'static str {
        "freelancer"
    }

    fn employment_type(&self) -> EmploymentType {
        EmploymentType::Freelancer
    }

    fn calculate(&self, employee: &Employee) -> EngineResult<PaymentQuote> {
        let Compensation::Freelancer { projects } = employee.compensation() else {
            return Err(type_mismatch(self, employee));
        };

        let amount = projects
            .iter()
            .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.amount))
            .ok_or_else(|| overflow(self, employee))?;

        Ok(PaymentQuote {
            amount,
            description: format!("Freelancer payout for {} project(s)", projects.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{Project, Role};
    use crate::vacation::FreelancerVacationPolicy;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn freelancer(projects: Vec<Project>) -> Employee {
        Employee::new(
            "Diana",
            Role::Freelancer,
            Compensation::Freelancer { projects },
            25,
            Arc::new(FreelancerPaymentPolicy),
            Arc::new(FreelancerVacationPolicy),
        )
    }

    #[test]
    fn test_sums_project_amounts() {
        let employee = freelancer(vec![
            Project::new("Website", dec("1200")),
            Project::new("App", dec("1800")),
        ]);

        let quote = FreelancerPaymentPolicy.calculate(&employee).unwrap();
        assert_eq!(quote.amount, dec("3000"));
        assert_eq!(quote.description, "Freelancer payout for 2 project(s)");
    }

    #[test]
    fn test_no_projects_pays_zero() {
        let quote = FreelancerPaymentPolicy.calculate(&freelancer(vec![])).unwrap();
        assert_eq!(quote.amount, Decimal::ZERO);
    }

    #[test]
    fn test_cents_are_preserved() {
        let employee = freelancer(vec![
            Project::new("Audit", dec("0.10")),
            Project::new("Report", dec("0.20")),
        ]);
        let quote = FreelancerPaymentPolicy.calculate(&employee).unwrap();
        assert_eq!(quote.amount, dec("0.30"));
    }

    #[test]
    fn test_overflowing_project_sum_is_calculation_error() {
        let employee = freelancer(vec![
            Project::new("Big", Decimal::MAX),
            Project::new("Bigger", Decimal::MAX),
        ]);
        let result = FreelancerPaymentPolicy.calculate(&employee);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}

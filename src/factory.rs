//! Employee construction.
//!
//! [`EmployeeFactory`] turns loosely-typed input (role and employment type
//! as strings, optional pay attributes) into a fully bound [`Employee`].
//! It resolves the role and employment type, reconciles the two for the
//! contractor and intern classes, validates the type-specific inputs and
//! attaches the shared payment and vacation policies.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Compensation, Employee, EmploymentType, Project, Role};
use crate::payment::{PaymentPolicies, PaymentPolicy};
use crate::vacation::{VacationPolicies, VacationPolicy};

/// Type-specific pay inputs for a new employee.
///
/// Only the fields relevant to the resolved employment type are read:
/// `salary` for salaried, `rate` and `hours` for hourly, `projects` for
/// freelancers. Interns need nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInputs {
    /// Salary per pay run.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Hourly rate.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Hours worked in the pay run.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Freelance projects.
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl EmploymentInputs {
    /// Inputs for a salaried employee.
    pub fn salaried(salary: Decimal) -> Self {
        Self {
            salary: Some(salary),
            ..Self::default()
        }
    }

    /// Inputs for an hourly employee.
    pub fn hourly(rate: Decimal, hours: Decimal) -> Self {
        Self {
            rate: Some(rate),
            hours: Some(hours),
            ..Self::default()
        }
    }

    /// Inputs for a freelancer.
    pub fn freelancer(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    /// No inputs, as for an intern.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Builds employees bound to shared policies.
///
/// One factory holds one set of policies; every employee it creates shares
/// them.
///
/// # Example
///
/// ```
/// use payroll_engine::factory::{EmployeeFactory, EmploymentInputs};
/// use payroll_engine::models::{EmploymentType, Role};
///
/// let factory = EmployeeFactory::default();
/// let charlie = factory
///     .create_employee("Charlie", "Intern", "salaried", EmploymentInputs::none())
///     .unwrap();
///
/// assert_eq!(charlie.role(), &Role::Intern);
/// assert_eq!(charlie.employment_type(), EmploymentType::Intern);
/// assert!(!charlie.can_request_vacation());
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeFactory {
    payment_policies: PaymentPolicies,
    vacation_policies: VacationPolicies,
    initial_vacation_days: u32,
}

impl EmployeeFactory {
    /// Creates a factory from explicit policy sets.
    pub fn new(
        payment_policies: PaymentPolicies,
        vacation_policies: VacationPolicies,
        initial_vacation_days: u32,
    ) -> Self {
        Self {
            payment_policies,
            vacation_policies,
            initial_vacation_days,
        }
    }

    /// Creates a factory whose policies follow `config`.
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self::new(
            PaymentPolicies::from_config(config),
            VacationPolicies::default(),
            config.vacation.initial_days,
        )
    }

    /// Starting vacation balance for new employees.
    pub fn initial_vacation_days(&self) -> u32 {
        self.initial_vacation_days
    }

    /// The shared payment policy for an employment type.
    pub fn payment_policy_for(&self, employment_type: EmploymentType) -> Arc<dyn PaymentPolicy> {
        self.payment_policies.for_type(employment_type)
    }

    /// The shared vacation policy for a role.
    pub fn vacation_policy_for(&self, role: &Role) -> Arc<dyn VacationPolicy> {
        self.vacation_policies.for_role(role)
    }

    /// Creates an employee.
    ///
    /// `role` and `employment_type` are trimmed and matched
    /// case-insensitively. The `freelancer` and `intern` roles force the
    /// matching employment type, and those employment types force the
    /// matching role.
    ///
    /// # Errors
    ///
    /// - `InvalidEmploymentType` for an unknown employment type
    /// - `InvalidRole` for an empty role
    /// - `InvalidEmployee` for an empty name or a missing or negative pay input
    pub fn create_employee(
        &self,
        name: &str,
        role: &str,
        employment_type: &str,
        inputs: EmploymentInputs,
    ) -> EngineResult<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "name must not be empty".to_string(),
            });
        }

        let requested_type: EmploymentType = employment_type.parse()?;
        let requested_role: Role = role.parse()?;
        let (role, employment_type) = reconcile(requested_role, requested_type);

        let compensation = compensation_for(employment_type, inputs)?;
        let payment_policy = self.payment_policy_for(employment_type);
        let vacation_policy = self.vacation_policy_for(&role);

        debug!(
            role = %role,
            employment_type = %employment_type,
            payment_policy = payment_policy.name(),
            vacation_policy = vacation_policy.name(),
            "Resolved employee policies"
        );

        let employee = Employee::new(
            name,
            role,
            compensation,
            self.initial_vacation_days,
            payment_policy,
            vacation_policy,
        );

        info!(
            employee_id = %employee.id(),
            name = employee.name(),
            role = %employee.role(),
            employment_type = %employee.employment_type(),
            "Employee created"
        );

        Ok(employee)
    }
}

impl Default for EmployeeFactory {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

fn reconcile(role: Role, employment_type: EmploymentType) -> (Role, EmploymentType) {
    match role {
        Role::Freelancer => (Role::Freelancer, EmploymentType::Freelancer),
        Role::Intern => (Role::Intern, EmploymentType::Intern),
        other => match employment_type {
            EmploymentType::Freelancer => (Role::Freelancer, EmploymentType::Freelancer),
            EmploymentType::Intern => (Role::Intern, EmploymentType::Intern),
            _ => (other, employment_type),
        },
    }
}

fn compensation_for(
    employment_type: EmploymentType,
    inputs: EmploymentInputs,
) -> EngineResult<Compensation> {
    match employment_type {
        EmploymentType::Salaried => Ok(Compensation::Salaried {
            salary: required("salary", inputs.salary)?,
        }),
        EmploymentType::Hourly => Ok(Compensation::Hourly {
            rate: required("rate", inputs.rate)?,
            hours: required("hours", inputs.hours)?,
        }),
        EmploymentType::Freelancer => {
            for project in &inputs.projects {
                non_negative("projects", project.amount)?;
            }
            Ok(Compensation::Freelancer {
                projects: inputs.projects,
            })
        }
        EmploymentType::Intern => Ok(Compensation::Intern),
    }
}

fn required(field: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
    let value = value.ok_or_else(|| EngineError::InvalidEmployee {
        field: field.to_string(),
        message: "value is required".to_string(),
    })?;
    non_negative(field, value)
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(value)
}

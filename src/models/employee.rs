//! Employee model and related types.
//!
//! An [`Employee`] carries its identity, its type-specific pay attributes, a
//! vacation balance, its own transaction log, and the two shared policies it
//! was bound to at construction.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::payment::PaymentPolicy;
use crate::vacation::{VacationPolicy, VacationRequest};

use super::role::{EmploymentType, Role};
use super::transaction::{TransactionKind, TransactionLog, TransactionRecord};

/// A freelance project and what it pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Amount owed for the project.
    pub amount: Decimal,
}

impl Project {
    /// Creates a project.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Pay attributes, one variant per employment type.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Compensation, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let hourly = Compensation::Hourly {
///     rate: Decimal::new(30, 0),
///     hours: Decimal::new(170, 0),
/// };
/// assert_eq!(hourly.employment_type(), EmploymentType::Hourly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum Compensation {
    /// Fixed salary.
    Salaried {
        /// Salary per pay run.
        salary: Decimal,
    },
    /// Paid by the hour.
    Hourly {
        /// Rate per hour.
        rate: Decimal,
        /// Hours worked in the pay run.
        hours: Decimal,
    },
    /// Paid per project.
    Freelancer {
        /// Projects in the order they were entered.
        projects: Vec<Project>,
    },
    /// No pay attributes.
    Intern,
}

impl Compensation {
    /// The employment type this variant belongs to.
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            Compensation::Salaried { .. } => EmploymentType::Salaried,
            Compensation::Hourly { .. } => EmploymentType::Hourly,
            Compensation::Freelancer { .. } => EmploymentType::Freelancer,
            Compensation::Intern => EmploymentType::Intern,
        }
    }
}

/// Represents an employee bound to a payment and a vacation policy.
///
/// Employees are normally built by [`EmployeeFactory`](crate::factory::EmployeeFactory),
/// which resolves the policies from the role and employment type. Role and
/// employment type never change after construction.
#[derive(Debug)]
pub struct Employee {
    id: Uuid,
    name: String,
    role: Role,
    compensation: Compensation,
    vacation_days: u32,
    payment_policy: Arc<dyn PaymentPolicy>,
    vacation_policy: Arc<dyn VacationPolicy>,
    transactions: TransactionLog,
}

impl Employee {
    /// Creates an employee with an empty transaction log and a fresh id.
    pub fn new(
        name: impl Into<String>,
        role: Role,
        compensation: Compensation,
        vacation_days: u32,
        payment_policy: Arc<dyn PaymentPolicy>,
        vacation_policy: Arc<dyn VacationPolicy>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            compensation,
            vacation_days,
            payment_policy,
            vacation_policy,
            transactions: TransactionLog::new(),
        }
    }

    /// Unique identifier assigned at construction.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's role.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// The employment type, derived from the pay attributes.
    pub fn employment_type(&self) -> EmploymentType {
        self.compensation.employment_type()
    }

    /// The type-specific pay attributes.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Remaining vacation days.
    pub fn vacation_days(&self) -> u32 {
        self.vacation_days
    }

    /// Whether the employment type allows vacation at all.
    ///
    /// Callers use this to decide whether to offer vacation; the bound
    /// vacation policy enforces the same rule on its own.
    pub fn can_request_vacation(&self) -> bool {
        self.employment_type().is_vacation_eligible()
    }

    /// The employee's transaction history.
    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    /// Name of the bound payment policy.
    pub fn payment_policy_name(&self) -> &'static str {
        self.payment_policy.name()
    }

    /// Name of the bound vacation policy.
    pub fn vacation_policy_name(&self) -> &'static str {
        self.vacation_policy.name()
    }

    /// Calculates this pay run's payment and logs exactly one payment record.
    ///
    /// The amount is returned and logged without trailing zeros.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::factory::{EmployeeFactory, EmploymentInputs};
    /// use rust_decimal::Decimal;
    ///
    /// let factory = EmployeeFactory::default();
    /// let mut alice = factory
    ///     .create_employee(
    ///         "Alice",
    ///         "manager",
    ///         "salaried",
    ///         EmploymentInputs::salaried(Decimal::new(5000, 0)),
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(alice.calculate_payment().unwrap(), Decimal::new(5500, 0));
    /// assert_eq!(alice.transactions().len(), 1);
    /// ```
    pub fn calculate_payment(&mut self) -> EngineResult<Decimal> {
        let quote = self.payment_policy.calculate(self)?;
        let amount = quote.amount.normalize();

        info!(
            employee_id = %self.id,
            policy = self.payment_policy.name(),
            amount = %amount,
            "Payment calculated"
        );

        self.transactions.append(TransactionRecord::new(
            TransactionKind::Payment,
            amount,
            quote.description,
        ));
        Ok(amount)
    }

    /// Requests `days` of vacation, or a payout of `days` when `payout` is set.
    ///
    /// On success the bound policy's grant is applied: the balance is reduced
    /// (unless the policy says otherwise) and one vacation record is logged.
    /// A denied request changes nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::error::EngineError;
    /// use payroll_engine::factory::{EmployeeFactory, EmploymentInputs};
    /// use rust_decimal::Decimal;
    ///
    /// let factory = EmployeeFactory::default();
    /// let mut alice = factory
    ///     .create_employee(
    ///         "Alice",
    ///         "manager",
    ///         "salaried",
    ///         EmploymentInputs::salaried(Decimal::new(5000, 0)),
    ///     )
    ///     .unwrap();
    ///
    /// alice.request_vacation(5, true).unwrap();
    /// assert_eq!(alice.vacation_days(), 20);
    ///
    /// let denied = alice.request_vacation(11, true);
    /// assert!(matches!(denied, Err(EngineError::PayoutCapExceeded { .. })));
    /// assert_eq!(alice.vacation_days(), 20);
    /// ```
    pub fn request_vacation(&mut self, days: u32, payout: bool) -> EngineResult<()> {
        let request = VacationRequest::new(days, payout);

        let grant = match self.vacation_policy.authorize(self, request) {
            Ok(grant) => grant,
            Err(err) => {
                warn!(
                    employee_id = %self.id,
                    policy = self.vacation_policy.name(),
                    days,
                    payout,
                    error = %err,
                    "Vacation request denied"
                );
                return Err(err);
            }
        };

        if grant.deduct {
            self.vacation_days = self.vacation_days.checked_sub(grant.days).ok_or(
                EngineError::InsufficientVacationBalance {
                    requested: grant.days,
                    available: self.vacation_days,
                },
            )?;
        }

        info!(
            employee_id = %self.id,
            policy = self.vacation_policy.name(),
            days = grant.days,
            payout,
            remaining = self.vacation_days,
            "Vacation request granted"
        );

        self.transactions.append(TransactionRecord::new(
            TransactionKind::Vacation,
            Decimal::from(grant.days),
            grant.description,
        ));
        Ok(())
    }

    /// Renders the transaction history, newest first, one record per line.
    pub fn render_transactions(&self) -> String {
        let mut out = format!("--- Transaction history for {} ---", self.name);
        for record in self.transactions.render() {
            out.push('\n');
            out.push_str(&record.to_string());
        }
        out
    }
}

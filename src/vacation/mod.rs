//! Vacation policies for the payroll engine.
//!
//! The vacation policy is chosen by role when the employee is created. A
//! policy inspects the employee and the request and either grants it, as a
//! [`VacationGrant`] the employee then applies, or denies it with one of the
//! rule-violation errors. Policies never mutate the employee themselves, so a
//! denied request cannot leave partial changes behind.
//!
//! | Role | Rule |
//! |---|---|
//! | manager | payouts capped at 10 days; otherwise limited by balance |
//! | vice_president | at most 5 days per request; balance is not deducted |
//! | intern, freelancer | never eligible |
//! | anything else | limited by balance |

mod ineligible;
mod manager;
mod standard;
mod vice_president;

use std::fmt;
use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Role};

pub use ineligible::{FreelancerVacationPolicy, InternVacationPolicy};
pub use manager::{MANAGER_PAYOUT_CAP_DAYS, ManagerVacationPolicy};
pub use standard::DefaultVacationPolicy;
pub use vice_president::{VICE_PRESIDENT_REQUEST_CAP_DAYS, VicePresidentVacationPolicy};

/// A request for time off, or for paying out days instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacationRequest {
    /// Number of days; must be positive.
    pub days: u32,
    /// Convert the days to a payout rather than time off.
    pub payout: bool,
}

impl VacationRequest {
    /// Creates a request.
    pub fn new(days: u32, payout: bool) -> Self {
        Self { days, payout }
    }

    /// "payout" or "time off", for log descriptions.
    pub fn label(&self) -> &'static str {
        if self.payout { "payout" } else { "time off" }
    }
}

/// A granted request, ready to be applied to the employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationGrant {
    /// Days granted, recorded in the log.
    pub days: u32,
    /// Whether the days come off the employee's balance.
    pub deduct: bool,
    /// Human-readable explanation, stored in the transaction log.
    pub description: String,
}

/// A strategy deciding vacation and payout requests.
pub trait VacationPolicy: fmt::Debug + Send + Sync {
    /// Stable policy name used in logs.
    fn name(&self) -> &'static str;

    /// Grants or denies `request` for `employee` without changing it.
    fn authorize(&self, employee: &Employee, request: VacationRequest)
    -> EngineResult<VacationGrant>;
}

fn ensure_positive(request: VacationRequest) -> EngineResult<()> {
    if request.days == 0 {
        return Err(EngineError::InvalidVacationRequest {
            message: "at least one day must be requested".to_string(),
        });
    }
    Ok(())
}

fn ensure_balance(employee: &Employee, request: VacationRequest) -> EngineResult<()> {
    if request.days > employee.vacation_days() {
        return Err(EngineError::InsufficientVacationBalance {
            requested: request.days,
            available: employee.vacation_days(),
        });
    }
    Ok(())
}

/// The five shared vacation policies and the role lookup over them.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Role;
/// use payroll_engine::vacation::VacationPolicies;
///
/// let policies = VacationPolicies::default();
/// assert_eq!(policies.for_role(&Role::VicePresident).name(), "vice_president");
/// assert_eq!(policies.for_role(&Role::Other("designer".into())).name(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct VacationPolicies {
    manager: Arc<dyn VacationPolicy>,
    vice_president: Arc<dyn VacationPolicy>,
    intern: Arc<dyn VacationPolicy>,
    freelancer: Arc<dyn VacationPolicy>,
    default: Arc<dyn VacationPolicy>,
}

impl VacationPolicies {
    /// Returns the shared policy for a role.
    pub fn for_role(&self, role: &Role) -> Arc<dyn VacationPolicy> {
        match role {
            Role::Manager => Arc::clone(&self.manager),
            Role::VicePresident => Arc::clone(&self.vice_president),
            Role::Intern => Arc::clone(&self.intern),
            Role::Freelancer => Arc::clone(&self.freelancer),
            Role::Other(_) => Arc::clone(&self.default),
        }
    }
}

impl Default for VacationPolicies {
    fn default() -> Self {
        Self {
            manager: Arc::new(ManagerVacationPolicy),
            vice_president: Arc::new(VicePresidentVacationPolicy),
            intern: Arc::new(InternVacationPolicy),
            freelancer: Arc::new(FreelancerVacationPolicy),
            default: Arc::new(DefaultVacationPolicy),
        }
    }
}

//! Vacation policies for roles that are never eligible.

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::{VacationGrant, VacationPolicy, VacationRequest};

fn not_permitted(employee: &Employee) -> EngineError {
    EngineError::VacationNotPermitted {
        role: employee.role().to_string(),
    }
}

/// Interns cannot take vacation or payouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternVacationPolicy;

impl VacationPolicy for InternVacationPolicy {
    fn name(&self) -> &'static str {
        "intern"
    }

    fn authorize(
        &self,
        employee: &Employee,
        _request: VacationRequest,
    ) -> EngineResult<VacationGrant> {
        Err(not_permitted(employee))
    }
}

/// Freelancers cannot take vacation or payouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreelancerVacationPolicy;

impl VacationPolicy for FreelancerVacationPolicy {
    fn name(&self) -> &'static str {
        "freelancer"
    }

    fn authorize(
        &self,
        employee: &Employee,
        _request: VacationRequest,
    ) -> EngineResult<VacationGrant> {
        Err(not_permitted(employee))
    }
}

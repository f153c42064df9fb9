//! Default vacation policy for every role without rules of its own.

use crate::error::EngineResult;
use crate::models::Employee;

use super::{VacationGrant, VacationPolicy, VacationRequest, ensure_balance, ensure_positive};

/// Grants any request the balance covers, time off or payout alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultVacationPolicy;

impl VacationPolicy for DefaultVacationPolicy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn authorize(
        &self,
        employee: &Employee,
        request: VacationRequest,
    ) -> EngineResult<VacationGrant> {
        ensure_positive(request)?;
        ensure_balance(employee, request)?;

        Ok(VacationGrant {
            days: request.days,
            deduct: true,
            description: format!("Standard {}", request.label()),
        })
    }
}

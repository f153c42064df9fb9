//! Manager vacation policy.

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::{VacationGrant, VacationPolicy, VacationRequest, ensure_balance, ensure_positive};

/// Most days a manager may pay out in one request.
pub const MANAGER_PAYOUT_CAP_DAYS: u32 = 10;

/// Managers may pay out at most [`MANAGER_PAYOUT_CAP_DAYS`] per request;
/// time off is only limited by the balance.
///
/// The payout cap is checked before the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagerVacationPolicy;

impl VacationPolicy for ManagerVacationPolicy {
    fn name(&self) -> &'static str {
        "manager"
    }

    fn authorize(
        &self,
        employee: &Employee,
        request: VacationRequest,
    ) -> EngineResult<VacationGrant> {
        ensure_positive(request)?;

        if request.payout && request.days > MANAGER_PAYOUT_CAP_DAYS {
            return Err(EngineError::PayoutCapExceeded {
                requested: request.days,
                cap: MANAGER_PAYOUT_CAP_DAYS,
            });
        }
        ensure_balance(employee, request)?;

        Ok(VacationGrant {
            days: request.days,
            deduct: true,
            description: format!("Manager {}", request.label()),
        })
    }
}

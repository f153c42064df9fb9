//! Vice president vacation policy.
//!
//! Requests above [`VICE_PRESIDENT_REQUEST_CAP_DAYS`] are denied whether or
//! not they are payouts. Granted requests are logged but the balance is left
//! untouched, and no balance check is made.
//!
//! The missing deduction differs from every other policy. It is kept as-is
//! and pinned by tests until product owners confirm the intent.

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::{VacationGrant, VacationPolicy, VacationRequest, ensure_positive};

/// Most days a vice president may request at once.
pub const VICE_PRESIDENT_REQUEST_CAP_DAYS: u32 = 5;

/// Per-request cap, no balance deduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VicePresidentVacationPolicy;

impl VacationPolicy for VicePresidentVacationPolicy {
    fn name(&self) -> &'static str {
        "vice_president"
    }

    fn authorize(
        &self,
        _employee: &Employee,
        request: VacationRequest,
    ) -> EngineResult<VacationGrant> {
        ensure_positive(request)?;

        if request.days > VICE_PRESIDENT_REQUEST_CAP_DAYS {
            return Err(EngineError::PerRequestCapExceeded {
                requested: request.days,
                cap: VICE_PRESIDENT_REQUEST_CAP_DAYS,
            });
        }

        Ok(VacationGrant {
            days: request.days,
            deduct: false,
            description: format!("VP {}", request.label()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Compensation, Role};
    use crate::payment::HourlyPaymentPolicy;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn vice_president(balance: u32) -> Employee {
        Employee::new(
            "Victor",
            Role::VicePresident,
            Compensation::Hourly {
                rate: Decimal::new(90, 0),
                hours: Decimal::new(150, 0),
            },
            balance,
            Arc::new(HourlyPaymentPolicy::new(160, Decimal::ONE_HUNDRED)),
            Arc::new(VicePresidentVacationPolicy),
        )
    }

    #[test]
    fn test_five_days_granted_without_deduction() {
        let grant = VicePresidentVacationPolicy
            .authorize(&vice_president(25), VacationRequest::new(5, false))
            .unwrap();
        assert_eq!(grant.days, 5);
        assert!(!grant.deduct);
        assert_eq!(grant.description, "VP time off");
    }

    #[test]
    fn test_six_days_denied_for_time_off_and_payout() {
        for payout in [false, true] {
            let result = VicePresidentVacationPolicy
                .authorize(&vice_president(25), VacationRequest::new(6, payout));
            assert_eq!(
                result,
                Err(EngineError::PerRequestCapExceeded {
                    requested: 6,
                    cap: 5
                })
            );
        }
    }

    #[test]
    fn test_balance_is_not_checked() {
        let grant = VicePresidentVacationPolicy
            .authorize(&vice_president(0), VacationRequest::new(3, true))
            .unwrap();
        assert_eq!(grant.description, "VP payout");
    }

    #[test]
    fn test_repeated_grants_leave_balance_unchanged() {
        let mut employee = vice_president(25);
        for _ in 0..4 {
            employee.request_vacation(5, false).unwrap();
        }
        assert_eq!(employee.vacation_days(), 25);
        assert_eq!(employee.transactions().len(), 4);
    }
}

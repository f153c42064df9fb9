//! The caller-owned collection of employees and the batch operations over it.
//!
//! A [`Roster`] runs the day-to-day payroll operations: listing employees
//! by role or vacation eligibility, paying everyone, and routing vacation
//! requests to one employee or many. Batch operations treat each employee
//! independently and report one outcome per employee.

use std::fmt;

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Role};
use crate::vacation::VacationRequest;

/// Addresses one employee in a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeKey {
    /// Position in insertion order, starting at zero.
    Index(usize),
    /// The employee's id.
    Id(Uuid),
}

impl fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeKey::Index(index) => write!(f, "index {}", index),
            EmployeeKey::Id(id) => write!(f, "id {}", id),
        }
    }
}

impl From<usize> for EmployeeKey {
    fn from(index: usize) -> Self {
        EmployeeKey::Index(index)
    }
}

impl From<Uuid> for EmployeeKey {
    fn from(id: Uuid) -> Self {
        EmployeeKey::Id(id)
    }
}

/// The result of paying one employee in [`Roster::pay_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutcome {
    /// The employee's id.
    pub employee_id: Uuid,
    /// The employee's name.
    pub name: String,
    /// The amount paid, or why nothing was paid.
    pub result: EngineResult<Decimal>,
}

/// The result of one request in [`Roster::request_vacations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationOutcome {
    /// The employee the request addressed.
    pub key: EmployeeKey,
    /// The request as submitted.
    pub request: VacationRequest,
    /// Whether it was granted.
    pub result: EngineResult<()>,
}

/// Employees in insertion order.
///
/// # Example
///
/// ```
/// use payroll_engine::factory::{EmployeeFactory, EmploymentInputs};
/// use payroll_engine::roster::{EmployeeKey, Roster};
/// use rust_decimal::Decimal;
///
/// let factory = EmployeeFactory::default();
/// let mut roster = Roster::new();
/// roster.add(factory.create_employee("Alice", "manager", "salaried",
///     EmploymentInputs::salaried(Decimal::new(5000, 0))).unwrap());
/// roster.add(factory.create_employee("Charlie", "intern", "intern",
///     EmploymentInputs::none()).unwrap());
///
/// let outcomes = roster.pay_all();
/// assert_eq!(outcomes.len(), 2);
/// assert!(roster.request_vacation(EmployeeKey::Index(1), 1, false).is_err());
/// assert!(roster.request_vacation(EmployeeKey::Index(0), 1, false).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee and returns its id.
    pub fn add(&mut self, employee: Employee) -> Uuid {
        let id = employee.id();
        self.employees.push(employee);
        id
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All employees in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    fn position(&self, key: EmployeeKey) -> EngineResult<usize> {
        let position = match key {
            EmployeeKey::Index(index) if index < self.employees.len() => Some(index),
            EmployeeKey::Index(_) => None,
            EmployeeKey::Id(id) => self.employees.iter().position(|e| e.id() == id),
        };
        position.ok_or_else(|| EngineError::EmployeeNotFound {
            key: key.to_string(),
        })
    }

    /// Looks up one employee.
    pub fn get(&self, key: impl Into<EmployeeKey>) -> EngineResult<&Employee> {
        let index = self.position(key.into())?;
        Ok(&self.employees[index])
    }

    /// Looks up one employee for mutation.
    pub fn get_mut(&mut self, key: impl Into<EmployeeKey>) -> EngineResult<&mut Employee> {
        let index = self.position(key.into())?;
        Ok(&mut self.employees[index])
    }

    /// First employee with the given name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Employee> {
        let name = name.trim();
        self.employees
            .iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Employees holding `role`.
    pub fn by_role(&self, role: &Role) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.role() == role).collect()
    }

    /// Employees whose employment type allows vacation.
    pub fn eligible_for_vacation(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.can_request_vacation())
            .collect()
    }

    /// Pays every employee once, in roster order.
    ///
    /// A failure for one employee is reported in its outcome and does not
    /// stop the rest.
    pub fn pay_all(&mut self) -> Vec<PaymentOutcome> {
        let outcomes: Vec<PaymentOutcome> = self
            .employees
            .iter_mut()
            .map(|employee| PaymentOutcome {
                employee_id: employee.id(),
                name: employee.name().to_string(),
                result: employee.calculate_payment(),
            })
            .collect();

        let total = outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount));
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 {
            warn!(failed, "Some employees could not be paid");
        }
        info!(
            employees = outcomes.len(),
            failed,
            total = ?total,
            "Payroll run completed"
        );

        outcomes
    }

    /// Routes one vacation request to the addressed employee.
    pub fn request_vacation(
        &mut self,
        key: impl Into<EmployeeKey>,
        days: u32,
        payout: bool,
    ) -> EngineResult<()> {
        self.get_mut(key)?.request_vacation(days, payout)
    }

    /// Applies a batch of vacation requests in order.
    ///
    /// Every request gets its own outcome; a denial or unknown key never
    /// affects the other requests.
    pub fn request_vacations<I>(&mut self, requests: I) -> Vec<VacationOutcome>
    where
        I: IntoIterator<Item = (EmployeeKey, VacationRequest)>,
    {
        let outcomes: Vec<VacationOutcome> = requests
            .into_iter()
            .map(|(key, request)| VacationOutcome {
                key,
                request,
                result: self.request_vacation(key, request.days, request.payout),
            })
            .collect();

        let granted = outcomes.iter().filter(|o| o.result.is_ok()).count();
        info!(
            requests = outcomes.len(),
            granted,
            denied = outcomes.len() - granted,
            "Vacation batch processed"
        );

        outcomes
    }

    /// Renders the transaction history of one employee.
    pub fn render_transactions(&self, key: impl Into<EmployeeKey>) -> EngineResult<String> {
        Ok(self.get(key)?.render_transactions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{EmployeeFactory, EmploymentInputs};
    use crate::models::Project;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hire(roster: &mut Roster, name: &str, role: &str, kind: &str, inputs: EmploymentInputs) {
        let employee = EmployeeFactory::default()
            .create_employee(name, role, kind, inputs)
            .unwrap();
        roster.add(employee);
    }

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        hire(
            &mut roster,
            "Alice",
            "manager",
            "salaried",
            EmploymentInputs::salaried(dec("5000")),
        );
        hire(
            &mut roster,
            "Bob",
            "developer",
            "hourly",
            EmploymentInputs::hourly(dec("30"), dec("170")),
        );
        hire(&mut roster, "Charlie", "intern", "intern", EmploymentInputs::none());
        hire(
            &mut roster,
            "Diana",
            "freelancer",
            "freelancer",
            EmploymentInputs::freelancer(vec![
                Project::new("Website", dec("1200")),
                Project::new("App", dec("1800")),
            ]),
        );
        hire(
            &mut roster,
            "Victor",
            "vice_president",
            "salaried",
            EmploymentInputs::salaried(dec("9000")),
        );
        roster
    }

    #[test]
    fn test_lookup_by_index_and_id() {
        let roster = sample_roster();
        let bob = roster.get(EmployeeKey::Index(1)).unwrap();
        assert_eq!(bob.name(), "Bob");
        assert_eq!(roster.get(bob.id()).unwrap().name(), "Bob");
    }

    #[test]
    fn test_unknown_keys_are_not_found() {
        let roster = sample_roster();
        assert_eq!(
            roster.get(EmployeeKey::Index(99)).unwrap_err(),
            EngineError::EmployeeNotFound {
                key: "index 99".to_string()
            }
        );
        assert!(matches!(
            roster.get(Uuid::new_v4()),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let roster = sample_roster();
        assert_eq!(roster.find("alice").unwrap().name(), "Alice");
        assert!(roster.find("Zed").is_none());
    }

    #[test]
    fn test_by_role_and_eligibility() {
        let roster = sample_roster();

        let managers: Vec<&str> = roster.by_role(&Role::Manager).iter().map(|e| e.name()).collect();
        assert_eq!(managers, vec!["Alice"]);

        let eligible: Vec<&str> = roster
            .eligible_for_vacation()
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(eligible, vec!["Alice", "Bob", "Victor"]);
    }

    #[test]
    fn test_pay_all_pays_everyone_in_order() {
        let mut roster = sample_roster();

        let outcomes = roster.pay_all();
        let amounts: Vec<Decimal> = outcomes.iter().map(|o| o.result.clone().unwrap()).collect();

        assert_eq!(
            amounts,
            vec![dec("5500"), dec("5200"), dec("0"), dec("3000"), dec("9900")]
        );
        assert!(roster.iter().all(|e| e.transactions().len() == 1));
    }

    #[test]
    fn test_pay_all_isolates_overflowing_employee() {
        let mut roster = Roster::new();
        hire(
            &mut roster,
            "Alice",
            "manager",
            "salaried",
            EmploymentInputs::salaried(dec("5000")),
        );
        hire(
            &mut roster,
            "Max",
            "manager",
            "salaried",
            EmploymentInputs::salaried(Decimal::MAX),
        );
        hire(
            &mut roster,
            "Diana",
            "freelancer",
            "freelancer",
            EmploymentInputs::freelancer(vec![Project::new("Website", dec("1200"))]),
        );

        let outcomes = roster.pay_all();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].result, Ok(dec("5500")));
        assert!(matches!(
            outcomes[1].result,
            Err(EngineError::CalculationError { .. })
        ));
        assert_eq!(outcomes[2].result, Ok(dec("1200")));
        assert_eq!(roster.get(EmployeeKey::Index(0)).unwrap().transactions().len(), 1);
        assert!(roster.get(EmployeeKey::Index(1)).unwrap().transactions().is_empty());
        assert_eq!(roster.get(EmployeeKey::Index(2)).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_vacation_batch_isolates_denials() {
        let mut roster = sample_roster();
        let requests = vec![
            (EmployeeKey::Index(0), VacationRequest::new(12, true)),
            (EmployeeKey::Index(1), VacationRequest::new(5, false)),
            (EmployeeKey::Index(2), VacationRequest::new(1, false)),
            (EmployeeKey::Index(42), VacationRequest::new(1, false)),
            (EmployeeKey::Index(4), VacationRequest::new(5, false)),
        ];

        let outcomes = roster.request_vacations(requests);

        assert_eq!(outcomes.len(), 5);
        assert!(matches!(
            outcomes[0].result,
            Err(EngineError::PayoutCapExceeded { .. })
        ));
        assert!(outcomes[1].result.is_ok());
        assert!(matches!(
            outcomes[2].result,
            Err(EngineError::VacationNotPermitted { .. })
        ));
        assert!(matches!(
            outcomes[3].result,
            Err(EngineError::EmployeeNotFound { .. })
        ));
        assert!(outcomes[4].result.is_ok());

        assert_eq!(roster.get(EmployeeKey::Index(0)).unwrap().vacation_days(), 25);
        assert_eq!(roster.get(EmployeeKey::Index(1)).unwrap().vacation_days(), 20);
        assert_eq!(roster.get(EmployeeKey::Index(4)).unwrap().vacation_days(), 25);
        assert_eq!(roster.get(EmployeeKey::Index(4)).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_render_transactions_for_key() {
        let mut roster = sample_roster();
        roster.request_vacation(EmployeeKey::Index(1), 2, false).unwrap();

        let rendered = roster.render_transactions(EmployeeKey::Index(1)).unwrap();

        assert!(rendered.starts_with("--- Transaction history for Bob ---"));
        assert_eq!(rendered.lines().count(), 2);
        assert!(roster.render_transactions(EmployeeKey::Index(99)).is_err());
    }

    #[test]
    fn test_key_display() {
        let id = Uuid::nil();
        assert_eq!(EmployeeKey::Index(3).to_string(), "index 3");
        assert_eq!(
            EmployeeKey::from(id).to_string(),
            "id 00000000-0000-0000-0000-000000000000"
        );
    }
}

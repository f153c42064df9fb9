//! Organizational roles and employment types.
//!
//! Roles decide which vacation policy applies; employment types decide which
//! payment policy applies. The two vary independently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Represents the type of employment arrangement.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmploymentType;
///
/// let parsed: EmploymentType = " Hourly ".parse().unwrap();
/// assert_eq!(parsed, EmploymentType::Hourly);
/// assert!(parsed.is_vacation_eligible());
/// assert!("contractor".parse::<EmploymentType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Paid a fixed salary plus a configured bonus ratio.
    Salaried,
    /// Paid per hour, with a flat bonus above an hours threshold.
    Hourly,
    /// Paid the sum of their project amounts.
    Freelancer,
    /// Unpaid.
    Intern,
}

impl EmploymentType {
    /// All employment types, in declaration order.
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::Salaried,
        EmploymentType::Hourly,
        EmploymentType::Freelancer,
        EmploymentType::Intern,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Salaried => "salaried",
            EmploymentType::Hourly => "hourly",
            EmploymentType::Freelancer => "freelancer",
            EmploymentType::Intern => "intern",
        }
    }

    /// Only salaried and hourly employees may take vacation or payouts.
    pub fn is_vacation_eligible(&self) -> bool {
        matches!(self, EmploymentType::Salaried | EmploymentType::Hourly)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salaried" => Ok(EmploymentType::Salaried),
            "hourly" => Ok(EmploymentType::Hourly),
            "freelancer" => Ok(EmploymentType::Freelancer),
            "intern" => Ok(EmploymentType::Intern),
            _ => Err(EngineError::InvalidEmploymentType {
                value: s.to_string(),
            }),
        }
    }
}

/// An organizational role.
///
/// Four roles carry their own vacation rules; any other non-empty role name
/// is kept verbatim (lowercased) in [`Role::Other`] and gets the default
/// rules.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Role;
///
/// assert_eq!("Vice_President".parse::<Role>().unwrap(), Role::VicePresident);
/// assert_eq!(
///     "Developer".parse::<Role>().unwrap(),
///     Role::Other("developer".to_string())
/// );
/// assert!("   ".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// `manager`
    Manager,
    /// `vice_president`
    VicePresident,
    /// `intern`
    Intern,
    /// `freelancer`
    Freelancer,
    /// Any other role.
    Other(String),
}

impl Role {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Manager => "manager",
            Role::VicePresident => "vice_president",
            Role::Intern => "intern",
            Role::Freelancer => "freelancer",
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "" => Err(EngineError::InvalidRole {
                value: s.to_string(),
            }),
            "manager" => Ok(Role::Manager),
            "vice_president" => Ok(Role::VicePresident),
            "intern" => Ok(Role::Intern),
            "freelancer" => Ok(Role::Freelancer),
            _ => Ok(Role::Other(normalized)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

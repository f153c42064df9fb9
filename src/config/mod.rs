//! Configuration loading for the payroll engine.
//!
//! This module loads the numeric policy parameters (salaried bonus ratio,
//! hourly bonus threshold and amount, starting vacation balance) from YAML
//! or JSON files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payment_policies.yaml").unwrap();
//! println!("Hourly threshold: {}h", loader.config().hourly.bonus_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_INITIAL_VACATION_DAYS, HourlyConfig, PolicyConfig, SalariedConfig, VacationConfig,
};

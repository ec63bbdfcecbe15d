// Core exports
pub mod budget;
pub mod currency;
pub mod districts;
pub mod prompts;

pub use budget::{allocate, calculate_budget_distribution, BudgetDistribution, BudgetLine, BudgetShares};
pub use currency::format_inr;
pub use districts::{district_info, District, UnknownDistrict, UNKNOWN_DISTRICT_INFO};
pub use prompts::{assistant_prompt, ideas_prompt};

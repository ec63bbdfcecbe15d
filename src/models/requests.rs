use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile fields as submitted by the form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    pub district: String,
    #[serde(default)]
    pub qualifications: String,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(default)]
    pub interests: String,
}

/// Budget pre-filled in the form
pub const DEFAULT_BUDGET: f64 = 100_000.0;

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

/// Follow-up question about the user's business
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(nested)]
    pub profile: ProfileRequest,
    #[validate(length(min = 1))]
    pub question: String,
}

/// Standalone budget split request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BudgetRequest {
    #[validate(range(min = 0.0))]
    pub budget: f64,
}

/// Request to export generated ideas as a Word document
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExportRequest {
    #[validate(nested)]
    pub profile: ProfileRequest,
    pub ideas: String,
}

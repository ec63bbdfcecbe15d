use serde::{Deserialize, Serialize};
use crate::core::BudgetLine;

/// Response for the generate ideas endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub ideas: String,
    pub budget_distribution: Vec<BudgetLine>,
    pub export_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Response for the assistant endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Response for the budget endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub budget: f64,
    pub budget_distribution: Vec<BudgetLine>,
}

/// District entry for the selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictEntry {
    pub name: String,
    pub description: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub export_available: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

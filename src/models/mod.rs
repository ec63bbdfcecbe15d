// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ProfileError};
pub use requests::{AskRequest, BudgetRequest, ExportRequest, ProfileRequest, DEFAULT_BUDGET};
pub use responses::{AskResponse, BudgetResponse, DistrictEntry, ErrorResponse, HealthResponse, IdeasResponse};

//! Idea Forge - business idea generator for Tamil Nadu entrepreneurs
//!
//! This library collects a user profile, folds it into prompts for a hosted
//! Gemini model, splits the user's budget across spending categories, and
//! exports the result as a Word document.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_budget_distribution, district_info, BudgetDistribution, District};
pub use models::{Profile, ProfileRequest, IdeasResponse, AskResponse};

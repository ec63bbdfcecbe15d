use crate::core::{District, UnknownDistrict};
use crate::models::requests::ProfileRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning submitted form data into a profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error(transparent)]
    UnknownDistrict(#[from] UnknownDistrict),

    #[error("Budget must be a finite, non-negative amount (got {0})")]
    InvalidBudget(f64),
}

/// User profile submitted through the form
///
/// Lives for a single request and is passed explicitly to prompt builders
/// and the document exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub district: District,
    pub qualifications: String,
    pub budget: f64,
    pub interests: String,
}

impl TryFrom<ProfileRequest> for Profile {
    type Error = ProfileError;

    fn try_from(req: ProfileRequest) -> Result<Self, Self::Error> {
        if !req.budget.is_finite() || req.budget < 0.0 {
            return Err(ProfileError::InvalidBudget(req.budget));
        }

        Ok(Self {
            district: req.district.parse()?,
            name: req.name,
            qualifications: req.qualifications,
            budget: req.budget,
            interests: req.interests,
        })
    }
}

use serde::{Deserialize, Serialize};

/// Profile text submitted for optimization. Built from form state, sent once,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub headline: String,
    pub summary: String,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
}

/// The four suggestion sections recovered from a model reply.
/// Every field is always present; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub headline: String,
    pub keywords: Vec<String>,
    pub experience: Vec<String>,
    pub summary: String,
}

/// Body of `POST /api/linkedin/analyze`.
///
/// The browser sends exactly one of the two fields depending on the active
/// input mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_data: Option<ProfileInput>,
}

impl AnalyzeRequest {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            linkedin_url: Some(url.into()),
            profile_data: None,
        }
    }

    pub fn from_profile(profile: ProfileInput) -> Self {
        Self {
            linkedin_url: None,
            profile_data: Some(profile),
        }
    }
}

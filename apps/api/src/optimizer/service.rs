//! Optimization pipeline: prompt → model → parse.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::optimizer::models::{OptimizationResult, ProfileInput};
use crate::optimizer::parser::parse_reply;
use crate::optimizer::prompts::build_optimize_prompt;

/// Runs one optimization. A model failure is reported as `AppError::Llm`
/// carrying the underlying message; parsing itself never fails.
pub async fn optimize_profile(
    profile: &ProfileInput,
    generator: &dyn TextGenerator,
) -> Result<OptimizationResult, AppError> {
    let prompt = build_optimize_prompt(profile);
    debug!("Optimization prompt built ({} chars)", prompt.len());

    let reply = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let result = parse_reply(&reply);
    info!(
        "Profile optimized: {} keywords, {} experience points",
        result.keywords.len(),
        result.experience.len()
    );

    Ok(result)
}

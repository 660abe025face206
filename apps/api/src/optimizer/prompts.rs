// Prompt construction for profile optimization.
// The reply format requested here is exactly what `parser` understands.

use crate::optimizer::models::ProfileInput;

/// Renders the optimization prompt for a profile.
///
/// Experience lines are joined with newlines and skills with `", "`. Input is
/// interpolated as-is, without escaping.
pub fn build_optimize_prompt(profile: &ProfileInput) -> String {
    format!(
        r#"You are a professional LinkedIn profile optimizer. Analyze this LinkedIn profile data and provide optimization suggestions in a structured format:

Profile Data:
Headline: {headline}
Summary: {summary}
Experience: {experience}
Skills: {skills}

Please provide your suggestions in exactly this format (do not add any additional text or explanations):

HEADLINE:
[Your optimized headline suggestion]

KEYWORDS:
- [Keyword 1]
- [Keyword 2]
- [Keyword 3]

EXPERIENCE:
- [Improved experience point 1]
- [Improved experience point 2]
- [Improved experience point 3]

SUMMARY:
[Your optimized summary suggestion]"#,
        headline = profile.headline,
        summary = profile.summary,
        experience = profile.experience.join("\n"),
        skills = profile.skills.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileInput {
        ProfileInput {
            headline: "Backend Engineer".to_string(),
            summary: "I build APIs.".to_string(),
            experience: vec!["Built billing".to_string(), "Cut latency 30%".to_string()],
            skills: vec!["Rust".to_string(), "Postgres".to_string()],
        }
    }

    #[test]
    fn test_prompt_interpolates_profile_fields() {
        let prompt = build_optimize_prompt(&profile());
        assert!(prompt.contains("Headline: Backend Engineer\n"));
        assert!(prompt.contains("Summary: I build APIs.\n"));
        assert!(prompt.contains("Experience: Built billing\nCut latency 30%\n"));
        assert!(prompt.contains("Skills: Rust, Postgres\n"));
    }

    #[test]
    fn test_prompt_requests_sections_in_order() {
        let prompt = build_optimize_prompt(&profile());
        let positions: Vec<usize> = ["HEADLINE:", "KEYWORDS:", "EXPERIENCE:", "SUMMARY:"]
            .iter()
            .map(|h| prompt.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.ends_with("[Your optimized summary suggestion]"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_optimize_prompt(&profile()), build_optimize_prompt(&profile()));
    }

    #[test]
    fn test_prompt_does_not_escape_input() {
        let mut p = profile();
        p.headline = "{summary} <b>\"quoted\"</b>".to_string();
        let prompt = build_optimize_prompt(&p);
        assert!(prompt.contains("Headline: {summary} <b>\"quoted\"</b>\n"));
    }

    #[test]
    fn test_prompt_with_empty_lists() {
        let prompt = build_optimize_prompt(&ProfileInput::default());
        assert!(prompt.contains("Experience: \nSkills: \n"));
    }
}

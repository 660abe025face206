//! Reply Parser — turns the model's plain-text reply into an `OptimizationResult`.
//!
//! The reply is split on blank lines into sections. Each section is classified
//! by its leading header token; unrecognised sections are dropped without error
//! and the matching result field simply stays empty.

use crate::optimizer::models::OptimizationResult;

pub const HEADLINE_HEADER: &str = "HEADLINE:";
pub const KEYWORDS_HEADER: &str = "KEYWORDS:";
pub const EXPERIENCE_HEADER: &str = "EXPERIENCE:";
pub const SUMMARY_HEADER: &str = "SUMMARY:";

const SECTION_SEPARATOR: &str = "\n\n";

/// One blank-line-delimited block of the reply, classified by header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    Headline(&'a str),
    Keywords(&'a str),
    Experience(&'a str),
    Summary(&'a str),
    Unknown,
}

impl<'a> Section<'a> {
    /// Classifies a raw section. Headers are tested in fixed priority order and
    /// the first match wins; the payload is the text after the header token.
    pub fn classify(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if let Some(rest) = trimmed.strip_prefix(HEADLINE_HEADER) {
            Section::Headline(rest)
        } else if let Some(rest) = trimmed.strip_prefix(KEYWORDS_HEADER) {
            Section::Keywords(rest)
        } else if let Some(rest) = trimmed.strip_prefix(EXPERIENCE_HEADER) {
            Section::Experience(rest)
        } else if let Some(rest) = trimmed.strip_prefix(SUMMARY_HEADER) {
            Section::Summary(rest)
        } else {
            Section::Unknown
        }
    }
}

/// Parses a full model reply. Never fails: missing sections leave their field
/// at its default and a repeated header overwrites the earlier one.
pub fn parse_reply(reply: &str) -> OptimizationResult {
    reply
        .split(SECTION_SEPARATOR)
        .map(Section::classify)
        .fold(OptimizationResult::default(), |mut result, section| {
            match section {
                Section::Headline(text) => result.headline = text.trim().to_string(),
                Section::Keywords(body) => result.keywords = bullet_lines(body),
                Section::Experience(body) => result.experience = bullet_lines(body),
                Section::Summary(text) => result.summary = text.trim().to_string(),
                Section::Unknown => {}
            }
            result
        })
}

/// Keeps only `-` bulleted lines, with one leading dash removed and trimmed.
fn bullet_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .filter_map(|line| line.trim_start().strip_prefix('-'))
        .map(|item| item.trim().to_string())
        .collect()
}

/// Renders a result back into the reply format the parser reads.
pub fn render_reply(result: &OptimizationResult) -> String {
    let bullets = |items: &[String]| -> String {
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    [
        format!("{HEADLINE_HEADER}\n{}", result.headline),
        format!("{KEYWORDS_HEADER}\n{}", bullets(&result.keywords)),
        format!("{EXPERIENCE_HEADER}\n{}", bullets(&result.experience)),
        format!("{SUMMARY_HEADER}\n{}", result.summary),
    ]
    .join(SECTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parses_well_formed_reply() {
        let reply = "HEADLINE:\nSenior Engineer\n\nKEYWORDS:\n- Leadership\n- Python\n\nEXPERIENCE:\n- Led team of 5\n\nSUMMARY:\nResults-driven engineer.";
        let result = parse_reply(reply);
        assert_eq!(
            result,
            OptimizationResult {
                headline: "Senior Engineer".to_string(),
                keywords: strings(&["Leadership", "Python"]),
                experience: strings(&["Led team of 5"]),
                summary: "Results-driven engineer.".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_reply_yields_defaults() {
        assert_eq!(parse_reply(""), OptimizationResult::default());
    }

    #[test]
    fn test_missing_keywords_leaves_empty_list() {
        let reply = "HEADLINE:\nData Scientist\n\nSUMMARY:\nCurious.";
        let result = parse_reply(reply);
        assert!(result.keywords.is_empty());
        assert_eq!(result.headline, "Data Scientist");
        assert_eq!(result.summary, "Curious.");
    }

    #[test]
    fn test_duplicate_headline_last_wins() {
        let reply = "HEADLINE:\nFirst\n\nHEADLINE:\nSecond";
        assert_eq!(parse_reply(reply).headline, "Second");
    }

    #[test]
    fn test_unknown_sections_are_dropped() {
        let reply = "Here are your suggestions!\n\nHEADLINE:\nPM\n\nHope this helps.";
        let result = parse_reply(reply);
        assert_eq!(result.headline, "PM");
        assert!(result.keywords.is_empty());
        assert!(result.experience.is_empty());
        assert!(result.summary.is_empty());
    }

    #[test]
    fn test_header_must_lead_the_section() {
        let reply = "Note: HEADLINE:\nNot a headline";
        assert_eq!(parse_reply(reply), OptimizationResult::default());
    }

    #[test]
    fn test_headline_on_same_line_as_header() {
        let reply = "  HEADLINE: Staff Engineer  \n\nSUMMARY:   Builds things.\n";
        let result = parse_reply(reply);
        assert_eq!(result.headline, "Staff Engineer");
        assert_eq!(result.summary, "Builds things.");
    }

    #[test]
    fn test_non_bullet_lines_are_skipped() {
        let reply = "KEYWORDS:\nTop picks:\n- Rust\n* Go\n   -   Kubernetes  \n-";
        assert_eq!(parse_reply(reply).keywords, strings(&["Rust", "Kubernetes", ""]));
    }

    #[test]
    fn test_only_one_leading_dash_is_stripped() {
        let reply = "EXPERIENCE:\n-- Cut costs\n- Built a real-time pipeline";
        assert_eq!(
            parse_reply(reply).experience,
            strings(&["- Cut costs", "Built a real-time pipeline"])
        );
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        let reply = "KEYWORDS:\r\n- Sales\r\n- CRM\r";
        assert_eq!(parse_reply(reply).keywords, strings(&["Sales", "CRM"]));
    }

    #[test]
    fn test_classify_priority_and_unknown() {
        assert_eq!(Section::classify("\n HEADLINE:x"), Section::Headline("x"));
        assert_eq!(Section::classify("SUMMARY:\nok"), Section::Summary("\nok"));
        assert_eq!(Section::classify("headline: lower"), Section::Unknown);
        assert_eq!(Section::classify(""), Section::Unknown);
    }

    #[test]
    fn test_render_then_parse_is_stable() {
        let original = OptimizationResult {
            headline: "Product Leader | B2B SaaS".to_string(),
            keywords: strings(&["Roadmapping", "Go-to-market", "Analytics"]),
            experience: strings(&["Grew ARR 3x", "Hired 12 PMs", "Launched v2"]),
            summary: "I turn ambiguous problems into shipped products.".to_string(),
        };
        let reparsed = parse_reply(&render_reply(&original));
        assert_eq!(reparsed, original);
        assert_eq!(parse_reply(&render_reply(&reparsed)), reparsed);
    }

    #[test]
    fn test_render_parse_preserves_empty_result() {
        let empty = OptimizationResult::default();
        assert_eq!(parse_reply(&render_reply(&empty)), empty);
    }
}

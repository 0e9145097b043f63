//! Structural validation of blog posts against the editorial rule set.
//!
//! Checks are pure functions over text. Rule violations are reported as
//! data, never as `Err`: errors fail the post, warnings are advisory and
//! never flip the overall verdict. Which checks run is driven entirely by
//! which fields are present in the input.

use crate::model::{BlogPostFields, FieldValidation, ValidationReport};
use crate::rules::{
    CONCLUSION_MAX_WORDS, CONCLUSION_MIN_WORDS, INTRO_MAX_WORDS, INTRO_MIN_WORDS,
    MIN_MAIN_SECTIONS, RECOMMENDED_MIN_LINKS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::utils::word_count;
use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level sections are `##` headings at the start of a line. Deeper
/// headings (`###`) intentionally do not match.
static MAIN_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^## ").expect("static regex"));

/// Inline Markdown links with an absolute http(s) target, on a single line.
static EXTERNAL_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]\n]*\]\(https?://[^)\n]*\)").expect("static regex"));

/// Check a title against the length window and the question/colon
/// recommendation. Length is measured in characters, not bytes.
pub fn validate_title(title: &str) -> FieldValidation {
    let mut check = FieldValidation::new();
    let chars = title.chars().count();
    check.length = Some(chars);

    if chars < TITLE_MIN_CHARS {
        check.push_error(format!(
            "Title too short: {chars} characters (minimum {TITLE_MIN_CHARS})"
        ));
    } else if chars > TITLE_MAX_CHARS {
        check.push_error(format!(
            "Title too long: {chars} characters (maximum {TITLE_MAX_CHARS})"
        ));
    }

    if !title.contains(['?', ':']) {
        check.push_warning(
            "Title should ideally pose a question or clearly state the problem/solution"
                .to_string(),
        );
    }

    check
}

/// Check an introduction against its word-count window.
pub fn validate_introduction(introduction: &str) -> FieldValidation {
    let mut check = FieldValidation::new();
    let words = word_count(introduction);
    check.word_count = Some(words);

    if words < INTRO_MIN_WORDS {
        check.push_error(format!(
            "Introduction too short: {words} words (minimum {INTRO_MIN_WORDS})"
        ));
    } else if words > INTRO_MAX_WORDS {
        check.push_error(format!(
            "Introduction too long: {words} words (maximum {INTRO_MAX_WORDS})"
        ));
    }

    check
}

/// Check a conclusion against its word-count window.
pub fn validate_conclusion(conclusion: &str) -> FieldValidation {
    let mut check = FieldValidation::new();
    let words = word_count(conclusion);
    check.word_count = Some(words);

    if words < CONCLUSION_MIN_WORDS {
        check.push_error(format!(
            "Conclusion too short: {words} words (minimum {CONCLUSION_MIN_WORDS})"
        ));
    } else if words > CONCLUSION_MAX_WORDS {
        check.push_error(format!(
            "Conclusion too long: {words} words (maximum {CONCLUSION_MAX_WORDS})"
        ));
    }

    check
}

/// Check a Markdown body for section count, balanced code fences, and
/// external links. The link shortage is advisory only.
pub fn validate_content_structure(content: &str) -> FieldValidation {
    let mut check = FieldValidation::new();

    let sections = MAIN_SECTION_RE.find_iter(content).count();
    check.main_sections = Some(sections);
    if sections < MIN_MAIN_SECTIONS {
        check.push_error(format!(
            "Insufficient main sections: {sections} (minimum {MIN_MAIN_SECTIONS})"
        ));
    }

    // An odd number of fence markers means a block was opened and never
    // closed.
    if content.matches("```").count() % 2 != 0 {
        check.push_error("Unclosed code block detected".to_string());
    }

    let links = EXTERNAL_LINK_RE.find_iter(content).count();
    check.external_links = Some(links);
    if links < RECOMMENDED_MIN_LINKS {
        check.push_warning(format!(
            "Few external links: {links} (recommended minimum {RECOMMENDED_MIN_LINKS})"
        ));
    }

    check
}

/// Run every applicable check over the supplied fields and aggregate the
/// outcome. Absent fields are skipped entirely; an input with no fields at
/// all validates cleanly. Re-running on the same input yields an identical
/// report.
pub fn validate_blog_post(fields: &BlogPostFields) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(title) = fields.title.as_deref() {
        let check = validate_title(title);
        tally(&mut report, &check);
        report.validations.title = Some(check);
    }

    if let Some(introduction) = fields.introduction.as_deref() {
        let check = validate_introduction(introduction);
        tally(&mut report, &check);
        report.validations.introduction = Some(check);
    }

    if let Some(conclusion) = fields.conclusion.as_deref() {
        let check = validate_conclusion(conclusion);
        tally(&mut report, &check);
        report.validations.conclusion = Some(check);
    }

    if let Some(content) = fields.content.as_deref() {
        let check = validate_content_structure(content);
        tally(&mut report, &check);
        report.validations.structure = Some(check);
    }

    report
}

fn tally(report: &mut ValidationReport, check: &FieldValidation) {
    if !check.valid {
        report.overall_valid = false;
    }
    report.summary.total_errors += check.errors.len();
    report.summary.total_warnings += check.warnings.len();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn title_length_boundaries() {
        let at_min = validate_title(&"a".repeat(40));
        assert!(at_min.valid);
        assert_eq!(at_min.length, Some(40));

        let too_short = validate_title(&"a".repeat(39));
        assert!(!too_short.valid);
        assert_eq!(
            too_short.errors,
            vec!["Title too short: 39 characters (minimum 40)"]
        );

        let at_max = validate_title(&"a".repeat(80));
        assert!(at_max.valid);

        let too_long = validate_title(&"a".repeat(81));
        assert_eq!(
            too_long.errors,
            vec!["Title too long: 81 characters (maximum 80)"]
        );
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 40 two-byte characters: 80 bytes, still within the window.
        let check = validate_title(&"é".repeat(40));
        assert_eq!(check.length, Some(40));
        assert!(check.valid);
    }

    #[test]
    fn title_without_question_or_colon_warns_but_stays_valid() {
        let plain = validate_title(&"a".repeat(50));
        assert!(plain.valid);
        assert_eq!(plain.warnings.len(), 1);

        let with_colon = validate_title(&format!("{}: subtitle", "a".repeat(40)));
        assert!(with_colon.warnings.is_empty());

        let with_question = validate_title(&format!("{}?", "a".repeat(45)));
        assert!(with_question.warnings.is_empty());
    }

    #[test]
    fn introduction_word_window() {
        assert!(validate_introduction(&words(150)).valid);
        assert!(validate_introduction(&words(300)).valid);

        let short = validate_introduction(&words(149));
        assert_eq!(
            short.errors,
            vec!["Introduction too short: 149 words (minimum 150)"]
        );

        let long = validate_introduction(&words(301));
        assert_eq!(
            long.errors,
            vec!["Introduction too long: 301 words (maximum 300)"]
        );
    }

    #[test]
    fn conclusion_word_window() {
        assert!(validate_conclusion(&words(100)).valid);
        assert!(validate_conclusion(&words(200)).valid);
        assert!(!validate_conclusion(&words(99)).valid);
        assert!(!validate_conclusion(&words(201)).valid);
    }

    #[test]
    fn structure_counts_only_top_level_headings() {
        let content = "## One\n### Nested\n## Two\n##NoSpace\n  ## Indented\n## Three\n";
        let check = validate_content_structure(content);
        assert_eq!(check.main_sections, Some(3));
        assert!(check.valid);

        let sparse = validate_content_structure("## Only\n## Two\n");
        assert_eq!(
            sparse.errors,
            vec!["Insufficient main sections: 2 (minimum 3)"]
        );
    }

    #[test]
    fn odd_fence_count_is_an_error() {
        let balanced = "## A\n## B\n## C\n```\ncode\n```\n";
        assert!(validate_content_structure(balanced).valid);

        let unclosed = "## A\n## B\n## C\n```\ncode\n";
        let check = validate_content_structure(unclosed);
        assert!(check.errors.contains(&"Unclosed code block detected".to_string()));
    }

    #[test]
    fn link_shortage_is_a_warning_not_an_error() {
        let content = "## A\n## B\n## C\n[one](https://a.example) [two](http://b.example)\n";
        let check = validate_content_structure(content);
        assert_eq!(check.external_links, Some(2));
        assert!(check.valid);
        assert_eq!(
            check.warnings,
            vec!["Few external links: 2 (recommended minimum 3)"]
        );

        let enough = "## A\n## B\n## C\n\
            [1](https://a.example) [2](https://b.example) [3](https://c.example)\n";
        assert!(validate_content_structure(enough).warnings.is_empty());
    }

    #[test]
    fn links_must_sit_on_one_line_and_be_absolute() {
        let content = "## A\n## B\n## C\n[split\nlabel](https://a.example) [rel](/docs)\n";
        let check = validate_content_structure(content);
        assert_eq!(check.external_links, Some(0));
    }

    #[test]
    fn empty_input_validates_cleanly() {
        let report = validate_blog_post(&BlogPostFields::default());
        assert!(report.overall_valid);
        assert!(report.validations.title.is_none());
        assert!(report.validations.structure.is_none());
        assert_eq!(report.summary.total_errors, 0);
        assert_eq!(report.summary.total_warnings, 0);
    }

    #[test]
    fn present_but_empty_fields_run_and_fail() {
        let fields = BlogPostFields {
            title: Some(String::new()),
            introduction: Some(String::new()),
            content: Some(String::new()),
            conclusion: Some(String::new()),
        };
        let report = validate_blog_post(&fields);
        assert!(!report.overall_valid);
        // Empty title, intro, conclusion, and section count all fail.
        assert_eq!(report.summary.total_errors, 4);
        let structure = report.validations.structure.expect("structure ran");
        assert_eq!(structure.main_sections, Some(0));
    }

    #[test]
    fn warnings_never_flip_overall_valid() {
        let fields = BlogPostFields {
            title: Some("a".repeat(50)),
            ..BlogPostFields::default()
        };
        let report = validate_blog_post(&fields);
        assert!(report.overall_valid);
        assert_eq!(report.summary.total_errors, 0);
        assert_eq!(report.summary.total_warnings, 1);
    }

    #[test]
    fn summary_counts_match_per_field_lists() {
        let fields = BlogPostFields {
            title: Some("short".to_string()),
            introduction: Some(words(10)),
            content: Some("## Only\n```\n".to_string()),
            conclusion: None,
        };
        let report = validate_blog_post(&fields);
        assert!(!report.overall_valid);
        assert!(report.validations.conclusion.is_none());

        let mut errors = 0;
        let mut warnings = 0;
        for check in [
            report.validations.title.as_ref(),
            report.validations.introduction.as_ref(),
            report.validations.structure.as_ref(),
        ]
        .into_iter()
        .flatten()
        {
            errors += check.errors.len();
            warnings += check.warnings.len();
        }
        assert_eq!(report.summary.total_errors, errors);
        assert_eq!(report.summary.total_warnings, warnings);
    }

    #[test]
    fn validation_is_idempotent() {
        let fields = BlogPostFields {
            title: Some("Understanding Rust: From Basics to Advanced Implementation".to_string()),
            introduction: Some(words(200)),
            content: Some("## A\n## B\n## C\n".to_string()),
            conclusion: Some(words(150)),
        };
        let first = serde_json::to_string(&validate_blog_post(&fields)).expect("serialize");
        let second = serde_json::to_string(&validate_blog_post(&fields)).expect("serialize");
        assert_eq!(first, second);
    }
}

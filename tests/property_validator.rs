//! Property tests for the validation rules.
//!
//! The rule windows are closed intervals and every check is a pure function
//! of its input, so the properties here pin the boundary behavior and the
//! error/warning bookkeeping across arbitrary inputs.

use blogsmith_mcp::model::BlogPostFields;
use blogsmith_mcp::validator::{
    validate_blog_post, validate_conclusion, validate_content_structure, validate_introduction,
    validate_title,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn title_validity_matches_the_character_window(title in "\\PC{0,120}") {
        let check = validate_title(&title);
        let chars = title.chars().count();

        prop_assert_eq!(check.length, Some(chars));
        prop_assert_eq!(check.valid, (40..=80).contains(&chars));
        prop_assert_eq!(check.valid, check.errors.is_empty());
    }

    #[test]
    fn introduction_counts_words_and_applies_the_window(words in 0usize..400) {
        let text = "word ".repeat(words);
        let check = validate_introduction(&text);

        prop_assert_eq!(check.word_count, Some(words));
        prop_assert_eq!(check.valid, (150..=300).contains(&words));
    }

    #[test]
    fn conclusion_counts_words_and_applies_the_window(words in 0usize..300) {
        let text = "word ".repeat(words);
        let check = validate_conclusion(&text);

        prop_assert_eq!(check.word_count, Some(words));
        prop_assert_eq!(check.valid, (100..=200).contains(&words));
    }

    #[test]
    fn fence_balance_decides_structure_validity(headings in 3usize..10, fences in 0usize..7) {
        let mut content = String::new();
        for n in 0..headings {
            content.push_str(&format!("## Section {n}\n\nbody text\n\n"));
        }
        for _ in 0..fences {
            content.push_str("```\n");
        }

        let check = validate_content_structure(&content);
        prop_assert_eq!(check.main_sections, Some(headings));
        prop_assert_eq!(check.valid, fences % 2 == 0);
        if fences % 2 != 0 {
            prop_assert!(check.errors.iter().any(|e| e.contains("Unclosed code block")));
        }
    }

    #[test]
    fn link_shortage_warns_without_failing(links in 0usize..6) {
        let mut content = String::from("## One\n\n## Two\n\n## Three\n\n");
        for n in 0..links {
            content.push_str(&format!("See [ref {n}](https://example.com/{n}) for details.\n"));
        }

        let check = validate_content_structure(&content);
        prop_assert_eq!(check.external_links, Some(links));
        prop_assert!(check.valid, "link count never fails a post");
        prop_assert_eq!(!check.warnings.is_empty(), links < 3);
    }

    #[test]
    fn report_summary_is_consistent_with_field_checks(
        title in proptest::option::of("\\PC{0,90}"),
        introduction in proptest::option::of("\\PC{0,200}"),
        conclusion in proptest::option::of("\\PC{0,200}"),
        content in proptest::option::of("\\PC{0,200}"),
    ) {
        let fields = BlogPostFields {
            title,
            introduction,
            conclusion,
            content,
        };
        let report = validate_blog_post(&fields);

        let checks = [
            report.validations.title.as_ref(),
            report.validations.introduction.as_ref(),
            report.validations.conclusion.as_ref(),
            report.validations.structure.as_ref(),
        ];

        let errors: usize = checks.iter().flatten().map(|check| check.errors.len()).sum();
        let warnings: usize = checks.iter().flatten().map(|check| check.warnings.len()).sum();

        prop_assert_eq!(report.summary.total_errors, errors);
        prop_assert_eq!(report.summary.total_warnings, warnings);
        prop_assert_eq!(report.overall_valid, errors == 0);
        prop_assert_eq!(
            report.overall_valid,
            checks.iter().flatten().all(|check| check.valid)
        );
    }

    #[test]
    fn validation_is_pure(text in "\\PC{0,120}") {
        let fields = BlogPostFields {
            title: Some(text.clone()),
            introduction: Some(text.clone()),
            conclusion: Some(text.clone()),
            content: Some(text),
        };

        let first = validate_blog_post(&fields);
        let second = validate_blog_post(&fields);
        prop_assert_eq!(
            serde_json::to_string(&first).expect("serialize"),
            serde_json::to_string(&second).expect("serialize")
        );
    }
}

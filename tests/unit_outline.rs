use assert_matches::assert_matches;
use blogsmith_mcp::BlogError;
use blogsmith_mcp::model::{AudienceLevel, DesiredLength};
use blogsmith_mcp::outline::{build_outline, title_suggestions};

#[test]
fn medium_outline_has_six_sections_in_plan_order() {
    let outline = build_outline(
        "Rust Async Programming",
        AudienceLevel::Intermediate,
        vec!["tokio".to_string()],
        DesiredLength::Medium,
    )
    .expect("outline");

    let titles: Vec<&str> = outline
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Introduction",
            "Core Concepts",
            "Implementation Guide",
            "Best Practices",
            "Real-world Examples",
            "Conclusion",
        ]
    );
    assert_eq!(outline.estimated_total_words, 2050);
    assert_eq!(outline.topic, "Rust Async Programming");
    assert_eq!(outline.keywords, vec!["tokio".to_string()]);
}

#[test]
fn short_outline_keeps_the_first_four_sections() {
    let outline = build_outline(
        "GraphQL",
        AudienceLevel::Beginner,
        Vec::new(),
        DesiredLength::Short,
    )
    .expect("outline");

    assert_eq!(outline.sections.len(), 4);
    assert_eq!(outline.sections[3].title, "Best Practices");
    assert_eq!(outline.estimated_total_words, 1500);
}

#[test]
fn long_outline_appends_advanced_sections_after_conclusion() {
    let outline = build_outline(
        "Kubernetes",
        AudienceLevel::Advanced,
        Vec::new(),
        DesiredLength::Long,
    )
    .expect("outline");

    assert_eq!(outline.sections.len(), 8);
    assert_eq!(outline.sections[5].title, "Conclusion");
    assert_eq!(outline.sections[6].title, "Advanced Techniques");
    assert_eq!(outline.sections[7].title, "Performance Considerations");
    assert_eq!(outline.estimated_total_words, 2850);
}

#[test]
fn totals_always_equal_the_sum_of_section_estimates() {
    for length in [
        DesiredLength::Short,
        DesiredLength::Medium,
        DesiredLength::Long,
    ] {
        let outline = build_outline("Docker", AudienceLevel::Intermediate, Vec::new(), length)
            .expect("outline");
        let sum: u32 = outline
            .sections
            .iter()
            .map(|section| section.estimated_words)
            .sum();
        assert_eq!(outline.estimated_total_words, sum);
    }
}

#[test]
fn five_title_suggestions_mention_the_topic() {
    let suggestions = title_suggestions("WebAssembly");
    assert_eq!(suggestions.len(), 5);
    assert!(
        suggestions
            .iter()
            .all(|suggestion| suggestion.contains("WebAssembly"))
    );
}

#[test]
fn blank_topic_is_rejected() {
    let error = build_outline(
        "   ",
        AudienceLevel::Intermediate,
        Vec::new(),
        DesiredLength::Medium,
    )
    .expect_err("whitespace topic should fail");

    assert_matches!(error, BlogError::InvalidArgument(_));
    assert_eq!(error.to_string(), "topic is required");
}

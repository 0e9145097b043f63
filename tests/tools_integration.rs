use anyhow::Result;
use blogsmith_mcp::model::{AudienceLevel, BlogPostFields, DesiredLength};
use blogsmith_mcp::tools::{
    GenerateBlogOutlineParams, GenerateCompleteBlogParams, GetBusinessRulesParams, KeywordsInput,
    ValidateBlogPostParams, generate_blog_outline, generate_complete_blog, get_business_rules,
    validate_blog_post_tool,
};
use serde_json::json;

mod support;

#[tokio::test(flavor = "current_thread")]
async fn outline_tool_honors_parameters() -> Result<()> {
    let state = support::seeded_state(7);

    let outline = generate_blog_outline(
        state,
        GenerateBlogOutlineParams {
            topic: "Rust Procedural Macros".to_string(),
            target_audience: AudienceLevel::Advanced,
            keywords: KeywordsInput::Csv("syn, quote".to_string()),
            desired_length: DesiredLength::Long,
        },
    )
    .await?;

    assert_eq!(outline.topic, "Rust Procedural Macros");
    assert_eq!(outline.target_audience, AudienceLevel::Advanced);
    assert_eq!(outline.keywords, vec!["syn".to_string(), "quote".to_string()]);
    assert_eq!(outline.sections.len(), 8);
    assert_eq!(outline.title_suggestions.len(), 5);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn blank_topic_is_rejected_by_the_outline_tool() {
    let state = support::seeded_state(7);

    let error = generate_blog_outline(
        state,
        GenerateBlogOutlineParams {
            topic: "  ".to_string(),
            target_audience: AudienceLevel::default(),
            keywords: KeywordsInput::default(),
            desired_length: DesiredLength::default(),
        },
    )
    .await
    .expect_err("whitespace topic should fail");

    assert!(error.to_string().contains("topic is required"));
}

#[tokio::test(flavor = "current_thread")]
async fn seeded_state_generates_identical_posts_per_call() -> Result<()> {
    let state = support::seeded_state(99);

    let params = || GenerateCompleteBlogParams {
        topic: "Database Sharding".to_string(),
        target_audience: AudienceLevel::Intermediate,
        keywords: KeywordsInput::List(vec!["postgres".to_string()]),
        desired_length: DesiredLength::Medium,
        custom_requirements: None,
    };

    let first = generate_complete_blog(state.clone(), params()).await?;
    let second = generate_complete_blog(state, params()).await?;

    assert_eq!(first.title, second.title);
    assert_eq!(first.content, second.content);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn csv_and_list_keywords_are_equivalent() -> Result<()> {
    let csv_state = support::seeded_state(4);
    let list_state = support::seeded_state(4);

    let from_csv = generate_complete_blog(
        csv_state,
        GenerateCompleteBlogParams {
            topic: "API Gateways".to_string(),
            target_audience: AudienceLevel::Beginner,
            keywords: KeywordsInput::Csv(" kong , envoy ".to_string()),
            desired_length: DesiredLength::Short,
            custom_requirements: None,
        },
    )
    .await?;

    let from_list = generate_complete_blog(
        list_state,
        GenerateCompleteBlogParams {
            topic: "API Gateways".to_string(),
            target_audience: AudienceLevel::Beginner,
            keywords: KeywordsInput::List(vec!["kong".to_string(), "envoy".to_string()]),
            desired_length: DesiredLength::Short,
            custom_requirements: None,
        },
    )
    .await?;

    assert_eq!(from_csv.keywords, from_list.keywords);
    assert_eq!(from_csv.content, from_list.content);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn complete_blog_carries_a_self_validation_report() -> Result<()> {
    let state = support::seeded_state(21);

    let post = generate_complete_blog(
        state,
        GenerateCompleteBlogParams {
            topic: "Load Balancing".to_string(),
            target_audience: AudienceLevel::Intermediate,
            keywords: KeywordsInput::default(),
            desired_length: DesiredLength::Medium,
            custom_requirements: None,
        },
    )
    .await?;

    let report = post.validation.as_ref().expect("validation attached");
    let structure = report
        .validations
        .structure
        .as_ref()
        .expect("structure checked");
    assert!(structure.valid, "generated documents satisfy structure rules");
    assert!(structure.main_sections.unwrap_or(0) >= 3);
    assert!(structure.external_links.unwrap_or(0) >= 3);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn non_object_custom_requirements_are_rejected() {
    let state = support::seeded_state(21);

    let error = generate_complete_blog(
        state,
        GenerateCompleteBlogParams {
            topic: "Load Balancing".to_string(),
            target_audience: AudienceLevel::default(),
            keywords: KeywordsInput::default(),
            desired_length: DesiredLength::default(),
            custom_requirements: Some(json!(["brief"])),
        },
    )
    .await
    .expect_err("array requirements should fail");

    assert!(error.to_string().contains("custom_requirements"));
}

#[tokio::test(flavor = "current_thread")]
async fn absent_fields_skip_their_checks() -> Result<()> {
    let state = support::seeded_state(1);

    let report = validate_blog_post_tool(
        state,
        ValidateBlogPostParams {
            blog_post: BlogPostFields::default(),
        },
    )
    .await?;

    assert!(report.overall_valid);
    assert!(report.validations.title.is_none());
    assert!(report.validations.introduction.is_none());
    assert!(report.validations.conclusion.is_none());
    assert!(report.validations.structure.is_none());
    assert_eq!(report.summary.total_errors, 0);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn present_but_empty_title_fails_its_check() -> Result<()> {
    let state = support::seeded_state(1);

    let report = validate_blog_post_tool(
        state,
        ValidateBlogPostParams {
            blog_post: BlogPostFields {
                title: Some(String::new()),
                ..BlogPostFields::default()
            },
        },
    )
    .await?;

    assert!(!report.overall_valid);
    let title = report.validations.title.as_ref().expect("title checked");
    assert!(!title.valid);
    assert_eq!(title.length, Some(0));
    assert_eq!(report.summary.total_errors, 1);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn business_rules_expose_sections_and_filtering() -> Result<()> {
    let state = support::seeded_state(1);

    let full = get_business_rules(state.clone(), GetBusinessRulesParams { section: None }).await?;
    let object = full.as_object().expect("rules document is an object");
    for key in ["structure", "quality", "seo", "validation"] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(full["structure"]["title"]["min_length"], 40);
    assert_eq!(full["structure"]["introduction"]["min_words"], 150);

    let seo = get_business_rules(
        state.clone(),
        GetBusinessRulesParams {
            section: Some("seo".to_string()),
        },
    )
    .await?;
    assert!(seo.get("keywords").is_some());
    assert!(seo.get("structure").is_none());

    let unknown = get_business_rules(
        state,
        GetBusinessRulesParams {
            section: Some("branding".to_string()),
        },
    )
    .await?;
    assert_eq!(unknown, json!({}));
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn invocation_counters_accumulate() -> Result<()> {
    let state = support::seeded_state(2);

    generate_blog_outline(
        state.clone(),
        GenerateBlogOutlineParams {
            topic: "CI Pipelines".to_string(),
            target_audience: AudienceLevel::default(),
            keywords: KeywordsInput::default(),
            desired_length: DesiredLength::default(),
        },
    )
    .await?;

    generate_complete_blog(
        state.clone(),
        GenerateCompleteBlogParams {
            topic: "CI Pipelines".to_string(),
            target_audience: AudienceLevel::default(),
            keywords: KeywordsInput::default(),
            desired_length: DesiredLength::Short,
            custom_requirements: None,
        },
    )
    .await?;

    validate_blog_post_tool(
        state.clone(),
        ValidateBlogPostParams {
            blog_post: BlogPostFields::default(),
        },
    )
    .await?;

    let stats = state.generation_stats();
    assert_eq!(stats.outlines_generated, 1);
    assert_eq!(stats.posts_generated, 1);
    assert_eq!(stats.validations_run, 1);
    Ok(())
}

//! Outline planning: title candidates plus an ordered section plan sized to
//! the requested length.

use crate::error::BlogError;
use crate::model::{AudienceLevel, DesiredLength, Outline, OutlineSection};
use crate::utils::now_rfc3339;

/// Sections kept when a short outline is requested.
const SHORT_SECTION_COUNT: usize = 4;

/// Five fixed title candidates for a topic. These are suggestions for a
/// human author; the synthesizer picks its own title separately.
pub fn title_suggestions(topic: &str) -> Vec<String> {
    vec![
        format!("A Complete Guide to {topic}"),
        format!("Understanding {topic}: Best Practices and Implementation"),
        format!("How to Master {topic}: A Developer's Guide"),
        format!("{topic} Explained: From Basics to Advanced Concepts"),
        format!("Building with {topic}: Practical Examples and Use Cases"),
    ]
}

/// Build the planned outline for a topic.
///
/// The medium plan is six sections from Introduction through Conclusion. A
/// short plan keeps only the first four; a long plan appends Advanced
/// Techniques and Performance Considerations after the Conclusion entry,
/// preserving that observable order.
pub fn build_outline(
    topic: &str,
    target_audience: AudienceLevel,
    keywords: Vec<String>,
    desired_length: DesiredLength,
) -> Result<Outline, BlogError> {
    if topic.trim().is_empty() {
        return Err(BlogError::invalid_argument("topic is required"));
    }

    let mut sections = base_sections(topic);
    match desired_length {
        DesiredLength::Short => sections.truncate(SHORT_SECTION_COUNT),
        DesiredLength::Medium => {}
        DesiredLength::Long => sections.extend(extended_sections(topic)),
    }

    let estimated_total_words = sections.iter().map(|section| section.estimated_words).sum();

    Ok(Outline {
        topic: topic.to_string(),
        target_audience,
        keywords,
        title_suggestions: title_suggestions(topic),
        sections,
        estimated_total_words,
        generated_at: now_rfc3339(),
    })
}

fn base_sections(topic: &str) -> Vec<OutlineSection> {
    vec![
        OutlineSection {
            title: "Introduction".to_string(),
            description: format!(
                "Overview of {topic} and its importance in modern development"
            ),
            estimated_words: 200,
        },
        OutlineSection {
            title: "Core Concepts".to_string(),
            description: format!("Fundamental principles and concepts of {topic}"),
            estimated_words: 400,
        },
        OutlineSection {
            title: "Implementation Guide".to_string(),
            description: format!("Step-by-step implementation of {topic} with examples"),
            estimated_words: 600,
        },
        OutlineSection {
            title: "Best Practices".to_string(),
            description: "Industry best practices and common pitfalls to avoid".to_string(),
            estimated_words: 300,
        },
        OutlineSection {
            title: "Real-world Examples".to_string(),
            description: format!("Practical use cases and examples of {topic} in action"),
            estimated_words: 400,
        },
        OutlineSection {
            title: "Conclusion".to_string(),
            description: format!("Summary and next steps for learning more about {topic}"),
            estimated_words: 150,
        },
    ]
}

fn extended_sections(topic: &str) -> Vec<OutlineSection> {
    vec![
        OutlineSection {
            title: "Advanced Techniques".to_string(),
            description: format!("Advanced techniques and patterns for {topic}"),
            estimated_words: 500,
        },
        OutlineSection {
            title: "Performance Considerations".to_string(),
            description: format!("Performance optimization strategies for {topic}"),
            estimated_words: 300,
        },
    ]
}

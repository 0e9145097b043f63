//! Content synthesis: turns an outline into a complete Markdown draft.
//!
//! Generation is template expansion, not free composition. Randomness is
//! confined to picking among fixed phrasing variants and is injected as an
//! `rand::Rng`, so callers (and tests) control determinism by choosing the
//! generator.

mod sections;

pub use sections::classify_section_type;

use crate::error::BlogError;
use crate::model::{
    AudienceLevel, BlogPost, GeneratedSection, Outline, PostMetadata,
};
use crate::utils::{now_rfc3339, word_count};
use rand::Rng;
use serde_json::Value;

/// Author tag stamped into every generated post's metadata.
pub const AUTHOR_TAG: &str = "Blogsmith AI";

const WORDS_PER_MINUTE: f64 = 225.0;

/// Draft a complete post from an outline.
///
/// Outline entries titled "Introduction" or "Conclusion" (case-insensitive)
/// are ignored; the synthesizer always writes its own introduction and
/// conclusion. `custom_requirements` is accepted for schema compatibility
/// but no requirement keys are interpreted yet; a non-object value is
/// rejected.
pub fn generate_complete_blog_post<R: Rng>(
    outline: &Outline,
    custom_requirements: Option<&Value>,
    rng: &mut R,
) -> Result<BlogPost, BlogError> {
    if outline.topic.trim().is_empty() {
        return Err(BlogError::invalid_argument("outline topic is required"));
    }
    if let Some(requirements) = custom_requirements {
        if !requirements.is_object() {
            return Err(BlogError::from(anyhow::anyhow!(
                "custom_requirements must be a JSON object"
            )));
        }
    }

    let topic = outline.topic.as_str();
    let audience = outline.target_audience;
    let keywords = outline.keywords.as_slice();

    let title = generate_title(topic, keywords, audience, rng);
    let introduction = generate_introduction(topic, audience, keywords, rng);

    let drafted: Vec<GeneratedSection> = outline
        .sections
        .iter()
        .filter(|section| !is_reserved_title(&section.title))
        .map(|section| sections::generate_section(section, topic, audience, keywords))
        .collect();

    let conclusion = generate_conclusion(topic, audience, keywords, rng);
    let content = assemble_document(&title, &introduction, &drafted, &conclusion);
    let total_words = word_count(&content);

    Ok(BlogPost {
        title,
        introduction,
        conclusion,
        sections: drafted,
        keywords: outline.keywords.clone(),
        target_audience: audience,
        metadata: build_metadata(outline),
        generated_at: now_rfc3339(),
        word_count: total_words,
        estimated_reading_time: reading_time_minutes(total_words),
        validation: None,
        content,
    })
}

/// The introduction and conclusion slots belong to the synthesizer.
fn is_reserved_title(title: &str) -> bool {
    matches!(
        title.to_lowercase().as_str(),
        "introduction" | "conclusion"
    )
}

fn generate_title<R: Rng>(
    topic: &str,
    keywords: &[String],
    audience: AudienceLevel,
    rng: &mut R,
) -> String {
    let level = audience.title_case();
    let mut title = match rng.gen_range(0..7) {
        0 => format!("The Complete Guide to {topic}: Best Practices for {level} Developers"),
        1 => format!("Mastering {topic}: A Comprehensive {level}-Level Tutorial"),
        2 => format!("Understanding {topic}: From Basics to Advanced Implementation"),
        3 => format!("How to Implement {topic}: A Step-by-Step Guide for {level} Users"),
        4 => format!("{topic} Explained: Essential Concepts and Practical Examples"),
        5 => format!("Building with {topic}: Modern Approaches and Best Practices"),
        _ => format!("The Developer's Guide to {topic}: Tips, Tricks, and Real-World Applications"),
    };

    // Short titles get a keyword suffix, but never past the length cap.
    if title.chars().count() < 50 && !keywords.is_empty() {
        let suffix = format!(" - {}", join_keywords(keywords, 2));
        if title.chars().count() + suffix.chars().count() <= 80 {
            title.push_str(&suffix);
        }
    }

    title
}

fn generate_introduction<R: Rng>(
    topic: &str,
    audience: AudienceLevel,
    keywords: &[String],
    rng: &mut R,
) -> String {
    let context = audience.intro_phrase();
    let mut introduction = match rng.gen_range(0..3) {
        0 => format!(
            "In today's rapidly evolving technology landscape, {topic} has emerged as a \
             critical component for {context}. This comprehensive guide will explore the \
             fundamental concepts, practical implementations, and best practices that will \
             help you master {topic} and leverage its full potential in your projects."
        ),
        1 => format!(
            "Understanding {topic} is essential for modern developers who want to stay \
             competitive in the tech industry. Whether you're {context}, this article will \
             provide you with the knowledge and practical insights needed to effectively \
             implement {topic} in your work."
        ),
        _ => format!(
            "As technology continues to advance, {topic} has become increasingly important \
             for {context}. In this detailed exploration, we'll dive deep into the core \
             concepts, examine real-world applications, and provide you with actionable \
             strategies for implementing {topic} successfully."
        ),
    };

    if !keywords.is_empty() {
        introduction.push_str(&format!(
            " Key areas we'll cover include {}, ensuring you gain practical knowledge that \
             can be immediately applied to your projects.",
            join_keywords(keywords, 3)
        ));
    }

    let hook = match rng.gen_range(0..3) {
        0 => format!(
            " Did you know that proper implementation of {topic} can significantly improve \
             your application's performance and maintainability?"
        ),
        1 => format!(
            " Recent industry surveys show that {topic} skills are among the most \
             sought-after in today's job market."
        ),
        _ => format!(
            " Many developers struggle with {topic} implementation, but with the right \
             approach, it becomes much more manageable."
        ),
    };
    introduction.push_str(&hook);

    introduction
}

fn generate_conclusion<R: Rng>(
    topic: &str,
    audience: AudienceLevel,
    keywords: &[String],
    rng: &mut R,
) -> String {
    let context = audience.closing_phrase();
    let mut conclusion = match rng.gen_range(0..3) {
        0 => format!(
            "Throughout this comprehensive guide, we've explored the essential aspects of \
             {topic}, from fundamental concepts to advanced implementation strategies. By \
             following the best practices and examples outlined in this article, you'll be \
             well-equipped to leverage {topic} effectively in your projects. Remember that \
             mastering {topic} is an ongoing journey, and staying updated with the latest \
             developments in this field will help you maintain a competitive edge."
        ),
        1 => format!(
            "In conclusion, {topic} represents a powerful tool for {context} looking to \
             enhance their technical capabilities. The concepts, strategies, and best \
             practices we've discussed provide a solid foundation for your journey with \
             {topic}. As you continue to explore and implement these techniques, remember \
             to adapt them to your specific use cases and requirements."
        ),
        _ => format!(
            "We've covered the essential elements of {topic}, providing you with both \
             theoretical understanding and practical implementation guidance. The key to \
             success with {topic} lies in consistent practice, continuous learning, and \
             staying informed about emerging trends and best practices in the field. Use \
             this knowledge as a stepping stone to further exploration and mastery of \
             {topic}."
        ),
    };

    let call_to_action = match rng.gen_range(0..3) {
        0 => format!(
            " Start implementing {topic} in your next project and experience the benefits \
             firsthand."
        ),
        1 => format!(
            " Join the community of developers who are successfully using {topic} to build \
             better applications."
        ),
        _ => format!(
            " Continue your learning journey by exploring advanced {topic} resources and \
             documentation."
        ),
    };
    conclusion.push_str(&call_to_action);

    if !keywords.is_empty() {
        conclusion.push_str(&format!(
            " Focus on mastering {} as your next steps in the {topic} ecosystem.",
            join_keywords(keywords, 2)
        ));
    }

    conclusion
}

/// Assemble the full document: title, introduction, drafted sections, a
/// Conclusion heading, and a fixed references list that keeps generated
/// posts above the external-link recommendation.
fn assemble_document(
    title: &str,
    introduction: &str,
    sections: &[GeneratedSection],
    conclusion: &str,
) -> String {
    let mut document = format!("# {title}\n\n{introduction}\n\n");

    for section in sections {
        document.push_str(&section.content);
        document.push_str("\n\n");
    }

    document.push_str(&format!("## Conclusion\n\n{conclusion}\n\n"));
    document.push_str("## References and Further Reading\n\n");
    document.push_str("- [Official Documentation](https://example.com/docs)\n");
    document.push_str("- [Community Resources](https://example.com/community)\n");
    document.push_str("- [Best Practices Guide](https://example.com/best-practices)\n");
    document.push_str("- [Advanced Tutorials](https://example.com/tutorials)\n\n");

    document
}

fn build_metadata(outline: &Outline) -> PostMetadata {
    let mut tags = outline.keywords.clone();
    tags.push(outline.topic.clone());
    tags.push("development".to_string());
    tags.push("programming".to_string());

    PostMetadata {
        author: AUTHOR_TAG.to_string(),
        topic: outline.topic.clone(),
        keywords: outline.keywords.clone(),
        target_audience: outline.target_audience,
        content_type: "technical_blog".to_string(),
        seo_optimized: true,
        reading_level: outline.target_audience,
        categories: vec![
            "Technology".to_string(),
            "Development".to_string(),
            "Tutorial".to_string(),
        ],
        tags,
    }
}

fn reading_time_minutes(words: usize) -> u32 {
    ((words as f64 / WORDS_PER_MINUTE).round() as u32).max(1)
}

/// Join up to `limit` keywords with commas, in input order.
pub(crate) fn join_keywords(keywords: &[String], limit: usize) -> String {
    keywords
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Section body generators, one per recognized section type.
//!
//! Each generator expands a fixed template around the topic. Code blocks are
//! emitted as `text` fences holding placeholder comments so drafts stay
//! language-neutral until a human fills them in.

use crate::model::{AudienceLevel, GeneratedSection, OutlineSection, SectionType};
use crate::utils::word_count;

use super::join_keywords;

const CORE_CONCEPT_CUES: &[&str] = &["concept", "fundamental", "basic", "theory"];
const IMPLEMENTATION_CUES: &[&str] = &["implementation", "guide", "how to", "step"];
const BEST_PRACTICE_CUES: &[&str] = &["best practice", "tips", "recommendation"];
const EXAMPLE_CUES: &[&str] = &["example", "case study", "real-world", "practical"];
const ADVANCED_CUES: &[&str] = &["advanced", "expert", "complex"];
const PERFORMANCE_CUES: &[&str] = &["performance", "optimization", "speed"];

/// Map a section title to the template family used to draft its body.
///
/// Matching is case-insensitive substring search, first family wins. Titles
/// that match nothing fall back to [`SectionType::Generic`].
pub fn classify_section_type(title: &str) -> SectionType {
    let lower = title.to_lowercase();
    let contains_any = |cues: &[&str]| cues.iter().any(|cue| lower.contains(cue));

    if contains_any(CORE_CONCEPT_CUES) {
        SectionType::CoreConcepts
    } else if contains_any(IMPLEMENTATION_CUES) {
        SectionType::Implementation
    } else if contains_any(BEST_PRACTICE_CUES) {
        SectionType::BestPractices
    } else if contains_any(EXAMPLE_CUES) {
        SectionType::Examples
    } else if contains_any(ADVANCED_CUES) {
        SectionType::AdvancedTechniques
    } else if contains_any(PERFORMANCE_CUES) {
        SectionType::Performance
    } else {
        SectionType::Generic
    }
}

/// Draft one outline section into a `## `-headed Markdown body.
pub(crate) fn generate_section(
    section: &OutlineSection,
    topic: &str,
    audience: AudienceLevel,
    keywords: &[String],
) -> GeneratedSection {
    let section_type = classify_section_type(&section.title);
    let content = match section_type {
        SectionType::CoreConcepts => core_concepts(topic, &section.title, audience, keywords),
        SectionType::Implementation => implementation(topic, &section.title),
        SectionType::BestPractices => best_practices(topic, &section.title),
        SectionType::Examples => examples(topic, &section.title),
        SectionType::AdvancedTechniques => advanced_techniques(topic, &section.title),
        SectionType::Performance => performance(topic, &section.title),
        SectionType::Generic => {
            generic(topic, &section.title, &section.description, audience, keywords)
        }
    };
    let words = word_count(&content);

    GeneratedSection {
        title: section.title.clone(),
        content,
        word_count: words,
        section_type,
    }
}

fn core_concepts(
    topic: &str,
    title: &str,
    audience: AudienceLevel,
    keywords: &[String],
) -> String {
    let mut content = format!("## {title}\n\n");
    content.push_str(&format!(
        "To effectively work with {topic}, it's essential to understand the fundamental \
         concepts that form its foundation. These core principles will guide your \
         implementation decisions and help you avoid common pitfalls.\n\n"
    ));

    let concepts = [
        format!(
            "**Architecture and Design Patterns**: {topic} follows specific architectural \
             patterns that promote scalability and maintainability. Understanding these \
             patterns is crucial for building robust applications."
        ),
        format!(
            "**Key Components**: The main components of {topic} work together to provide a \
             comprehensive solution. Each component has specific responsibilities and \
             interfaces."
        ),
        format!(
            "**Data Flow and Processing**: How data moves through {topic} systems affects \
             performance and reliability. Understanding this flow helps optimize your \
             implementations."
        ),
        format!(
            "**Integration Points**: {topic} typically integrates with other systems and \
             technologies. Knowing these integration patterns is essential for real-world \
             applications."
        ),
    ];
    for concept in &concepts {
        content.push_str(concept);
        content.push_str("\n\n");
    }

    content.push_str(&format!(
        "When working with {topic}, consider how these concepts apply to your specific use \
         case. The {audience}-level approach focuses on practical application while \
         maintaining theoretical understanding.\n\n"
    ));

    if !keywords.is_empty() {
        content.push_str(&format!(
            "Key areas to focus on include {}, which represent the most important aspects \
             for practical implementation.\n\n",
            join_keywords(keywords, 3)
        ));
    }

    content
}

const IMPLEMENTATION_STEPS: [(&str, &str); 5] = [
    (
        "Environment Setup",
        "Prepare your development environment with the necessary tools and dependencies.",
    ),
    (
        "Initial Configuration",
        "Configure the basic settings and parameters for your implementation.",
    ),
    (
        "Core Implementation",
        "Build the main functionality following established patterns and best practices.",
    ),
    (
        "Testing and Validation",
        "Implement comprehensive testing to ensure your solution works correctly.",
    ),
    (
        "Optimization and Refinement",
        "Fine-tune your implementation for performance and reliability.",
    ),
];

const IMPLEMENTATION_CHALLENGES: [&str; 3] = [
    "**Configuration Issues**: Ensure all configuration parameters are correctly set and validated.",
    "**Performance Bottlenecks**: Monitor performance metrics and optimize critical paths.",
    "**Integration Problems**: Verify compatibility with existing systems and dependencies.",
];

fn implementation(topic: &str, title: &str) -> String {
    let mut content = format!("## {title}\n\n");
    content.push_str(&format!(
        "Implementing {topic} requires a systematic approach that ensures both \
         functionality and maintainability. This section provides step-by-step guidance \
         for successful implementation.\n\n"
    ));

    for (index, (step, detail)) in IMPLEMENTATION_STEPS.iter().enumerate() {
        content.push_str(&format!("### Step {}: {step}\n\n", index + 1));
        content.push_str(&format!("{detail}\n\n"));
        content.push_str("```text\n");
        content.push_str(&format!("# Example code for {}\n", step.to_lowercase()));
        content.push_str(&format!("# This demonstrates the implementation of {topic}\n"));
        content.push_str("# Replace with actual implementation code\n");
        content.push_str("```\n\n");
    }

    content.push_str("### Common Implementation Challenges\n\n");
    content.push_str(&format!(
        "When implementing {topic}, you may encounter several common challenges. Here are \
         the most frequent issues and their solutions:\n\n"
    ));
    for challenge in IMPLEMENTATION_CHALLENGES {
        content.push_str(&format!("- {challenge}\n"));
    }
    content.push('\n');

    content
}

const PRACTICE_CATEGORIES: [(&str, [&str; 4]); 3] = [
    (
        "Code Organization and Structure",
        [
            "Maintain clear separation of concerns",
            "Use consistent naming conventions",
            "Implement proper error handling",
            "Document your code thoroughly",
        ],
    ),
    (
        "Performance and Optimization",
        [
            "Profile your application regularly",
            "Optimize critical code paths",
            "Use appropriate caching strategies",
            "Monitor resource usage",
        ],
    ),
    (
        "Security and Reliability",
        [
            "Validate all input data",
            "Implement proper authentication",
            "Use secure communication protocols",
            "Plan for failure scenarios",
        ],
    ),
];

fn best_practices(topic: &str, title: &str) -> String {
    let mut content = format!("## {title}\n\n");
    content.push_str(&format!(
        "Following established best practices is crucial for successful {topic} \
         implementation. These guidelines have been developed through industry experience \
         and help ensure reliable, maintainable solutions.\n\n"
    ));

    for (category, practices) in &PRACTICE_CATEGORIES {
        content.push_str(&format!("### {category}\n\n"));
        for practice in practices {
            content.push_str(&format!(
                "- **{practice}**: This ensures your {topic} implementation remains robust \
                 and maintainable.\n"
            ));
        }
        content.push('\n');
    }

    content.push_str("### Industry Insights\n\n");
    content.push_str(&format!(
        "Leading organizations have identified several key factors for successful {topic} \
         adoption:\n\n"
    ));
    content.push_str(&format!(
        "1. **Team Training**: Ensure your team understands {topic} concepts and best \
         practices.\n"
    ));
    content.push_str("2. **Gradual Implementation**: Start with small, manageable projects before scaling up.\n");
    content.push_str("3. **Continuous Monitoring**: Implement monitoring and alerting for production systems.\n");
    content.push_str(&format!(
        "4. **Regular Updates**: Stay current with {topic} updates and security patches.\n\n"
    ));

    content
}

fn examples(topic: &str, title: &str) -> String {
    let mut content = format!("## {title}\n\n");
    content.push_str(&format!(
        "Real-world examples demonstrate how {topic} can be applied in practical \
         scenarios. These examples showcase different use cases and implementation \
         approaches.\n\n"
    ));

    let scenarios = [
        (
            "E-commerce Platform Integration",
            format!(
                "This example shows how {topic} can be integrated into an e-commerce \
                 platform to improve user experience and system performance."
            ),
            "Online retail with high traffic volumes",
        ),
        (
            "Data Processing Pipeline",
            format!(
                "Learn how {topic} can be used to build efficient data processing \
                 pipelines for analytics and reporting."
            ),
            "Big data analytics and business intelligence",
        ),
        (
            "Mobile Application Backend",
            format!(
                "Discover how {topic} powers mobile application backends, providing \
                 scalable and responsive services."
            ),
            "Mobile app development and API services",
        ),
    ];

    for (scenario, description, use_case) in &scenarios {
        content.push_str(&format!("### {scenario}\n\n"));
        content.push_str(&format!("{description}\n\n"));
        content.push_str(&format!("**Use Case**: {use_case}\n\n"));
        content.push_str("```text\n");
        content.push_str(&format!("# {scenario} implementation\n"));
        content.push_str(&format!(
            "# This example demonstrates {topic} in {}\n",
            use_case.to_lowercase()
        ));
        content.push_str("# Replace with actual implementation code\n");
        content.push_str("```\n\n");
        content.push_str("**Key Takeaways**:\n");
        content.push_str(&format!("- Demonstrates practical {topic} implementation\n"));
        content.push_str("- Shows integration with existing systems\n");
        content.push_str("- Highlights performance considerations\n\n");
    }

    content
}

fn advanced_techniques(topic: &str, title: &str) -> String {
    let mut content = format!("## {title}\n\n");
    content.push_str(&format!(
        "Advanced {topic} techniques enable sophisticated implementations that can handle \
         complex requirements and scale effectively. These techniques are particularly \
         valuable for experienced developers working on demanding projects.\n\n"
    ));

    let advanced_topics = [
        (
            "Custom Extensions and Plugins",
            format!(
                "Learn how to extend {topic} functionality through custom plugins and \
                 extensions."
            ),
        ),
        (
            "Performance Optimization Strategies",
            format!(
                "Advanced techniques for optimizing {topic} performance in high-load \
                 scenarios."
            ),
        ),
        (
            "Integration Patterns",
            format!(
                "Sophisticated patterns for integrating {topic} with complex system \
                 architectures."
            ),
        ),
    ];

    for (heading, description) in &advanced_topics {
        content.push_str(&format!("### {heading}\n\n"));
        content.push_str(&format!("{description}\n\n"));
        content.push_str("**Technical Implementation**:\n\n");
        content.push_str("```text\n");
        content.push_str(&format!("# Advanced {topic} implementation\n"));
        content.push_str("# This demonstrates sophisticated techniques\n");
        content.push_str("# Replace with actual implementation code\n");
        content.push_str("```\n\n");
    }

    content.push_str("### Considerations for Advanced Usage\n\n");
    content.push_str(&format!(
        "When implementing advanced {topic} techniques, consider the following:\n\n"
    ));
    content.push_str("- **Complexity Management**: Balance advanced features with maintainability\n");
    content.push_str("- **Performance Impact**: Monitor the performance implications of advanced techniques\n");
    content.push_str("- **Team Expertise**: Ensure your team has the necessary skills for advanced implementations\n");
    content.push_str("- **Documentation**: Thoroughly document advanced implementations for future maintenance\n\n");

    content
}

fn performance(topic: &str, title: &str) -> String {
    let mut content = format!("## {title}\n\n");
    content.push_str(&format!(
        "Performance optimization is crucial for {topic} implementations in production \
         environments. This section covers key performance considerations and optimization \
         strategies.\n\n"
    ));

    let areas = [
        (
            "Memory Management",
            format!(
                "Efficient memory usage is essential for {topic} performance, especially \
                 in resource-constrained environments."
            ),
            [
                "Object pooling and reuse",
                "Garbage collection optimization",
                "Memory leak prevention",
            ],
        ),
        (
            "CPU Optimization",
            format!("Optimizing CPU usage ensures {topic} can handle high loads efficiently."),
            [
                "Algorithm optimization",
                "Parallel processing",
                "Caching strategies",
            ],
        ),
        (
            "I/O Performance",
            format!(
                "Input/output operations often become bottlenecks in {topic} \
                 implementations."
            ),
            [
                "Asynchronous operations",
                "Connection pooling",
                "Batch processing",
            ],
        ),
    ];

    for (area, description, techniques) in &areas {
        content.push_str(&format!("### {area}\n\n"));
        content.push_str(&format!("{description}\n\n"));
        content.push_str("**Optimization Techniques**:\n\n");
        for technique in techniques {
            content.push_str(&format!(
                "- **{technique}**: Implement this technique to improve {}\n",
                area.to_lowercase()
            ));
        }
        content.push('\n');
        content.push_str("```text\n");
        content.push_str(&format!("# {area} optimization example\n"));
        content.push_str(&format!("# Demonstrates {topic} performance optimization\n"));
        content.push_str("# Replace with actual implementation code\n");
        content.push_str("```\n\n");
    }

    content.push_str("### Performance Monitoring\n\n");
    content.push_str(&format!(
        "Continuous monitoring is essential for maintaining optimal {topic} performance:\n\n"
    ));
    content.push_str("- **Metrics Collection**: Track key performance indicators\n");
    content.push_str("- **Alerting**: Set up alerts for performance degradation\n");
    content.push_str("- **Profiling**: Regular performance profiling to identify bottlenecks\n");
    content.push_str("- **Benchmarking**: Establish performance baselines and targets\n\n");

    content
}

fn generic(
    topic: &str,
    title: &str,
    description: &str,
    audience: AudienceLevel,
    keywords: &[String],
) -> String {
    let mut content = format!("## {title}\n\n");
    if !description.is_empty() {
        content.push_str(&format!("{description}\n\n"));
    }
    content.push_str(&format!(
        "This section explores important aspects of {topic} that are relevant to \
         {audience}-level developers. Understanding these concepts will enhance your \
         ability to work effectively with {topic}.\n\n"
    ));

    content.push_str("### Key Concepts\n\n");
    content.push_str(&format!(
        "The fundamental concepts in this area of {topic} include:\n\n"
    ));
    content.push_str(&format!(
        "- **Core Principles**: Understanding the underlying principles that guide this \
         aspect of {topic}\n"
    ));
    content.push_str("- **Implementation Strategies**: Different approaches for implementing these concepts\n");
    content.push_str("- **Best Practices**: Proven methods for achieving optimal results\n\n");

    content.push_str("### Practical Application\n\n");
    content.push_str("Applying these concepts in real-world scenarios requires careful consideration of:\n\n");
    content.push_str("- **Context and Requirements**: Understanding your specific use case\n");
    content.push_str("- **Trade-offs and Decisions**: Balancing different factors in your implementation\n");
    content.push_str(&format!(
        "- **Integration Considerations**: How this fits with your overall {topic} \
         strategy\n\n"
    ));

    if !keywords.is_empty() {
        content.push_str("### Related Technologies\n\n");
        content.push_str(&format!(
            "This aspect of {topic} often involves working with {}. Understanding how \
             these technologies interact is important for successful implementation.\n\n",
            join_keywords(keywords, 3)
        ));
    }

    content
}

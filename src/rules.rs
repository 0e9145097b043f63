//! The editorial rule set: numeric thresholds plus the human-readable
//! guidance served by `get_business_rules`.
//!
//! Thresholds live here as constants so the validator and the published
//! rules document can never drift apart. The document itself is typed
//! rather than a loose JSON blob; only the section filter works on
//! `serde_json::Value` because its result shape depends on the filter.

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Value, json};

pub const TITLE_MIN_CHARS: usize = 40;
pub const TITLE_MAX_CHARS: usize = 80;
pub const INTRO_MIN_WORDS: usize = 150;
pub const INTRO_MAX_WORDS: usize = 300;
pub const CONCLUSION_MIN_WORDS: usize = 100;
pub const CONCLUSION_MAX_WORDS: usize = 200;
pub const MIN_MAIN_SECTIONS: usize = 3;
pub const RECOMMENDED_MIN_LINKS: usize = 3;

/// Rule expressed as a character-length window.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct LengthRule {
    pub min_length: usize,
    pub max_length: usize,
    pub requirements: Vec<String>,
}

/// Rule expressed as a word-count window.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WordCountRule {
    pub min_words: usize,
    pub max_words: usize,
    pub requirements: Vec<String>,
}

/// Rule expressed as a minimum section count.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SectionCountRule {
    pub min_sections: usize,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct StructureRules {
    pub title: LengthRule,
    pub introduction: WordCountRule,
    pub main_body: SectionCountRule,
    pub conclusion: WordCountRule,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QualityRules {
    pub technical_accuracy: Vec<String>,
    pub clarity: Vec<String>,
    pub originality: Vec<String>,
    pub tone: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SeoRules {
    pub keywords: Vec<String>,
    pub linking: Vec<String>,
    pub media: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ReviewRules {
    pub automated_checks: Vec<String>,
    pub review_process: Vec<String>,
}

/// The complete rules document. Read-only; there is no configuration
/// surface for overriding thresholds at runtime.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BusinessRules {
    pub structure: StructureRules,
    pub quality: QualityRules,
    pub seo: SeoRules,
    pub validation: ReviewRules,
}

impl BusinessRules {
    pub fn document() -> Self {
        Self {
            structure: StructureRules {
                title: LengthRule {
                    min_length: TITLE_MIN_CHARS,
                    max_length: TITLE_MAX_CHARS,
                    requirements: string_vec(&[
                        "Must be SEO-friendly",
                        "Should pose a question or state problem/solution",
                    ]),
                },
                introduction: WordCountRule {
                    min_words: INTRO_MIN_WORDS,
                    max_words: INTRO_MAX_WORDS,
                    requirements: string_vec(&[
                        "Must summarize the problem and solution",
                        "Should hook the reader",
                    ]),
                },
                main_body: SectionCountRule {
                    min_sections: MIN_MAIN_SECTIONS,
                    requirements: string_vec(&[
                        "Clear headings",
                        "Logical flow",
                        "Technical terms defined",
                        "Code snippets formatted",
                    ]),
                },
                conclusion: WordCountRule {
                    min_words: CONCLUSION_MIN_WORDS,
                    max_words: CONCLUSION_MAX_WORDS,
                    requirements: string_vec(&[
                        "Summarize key points",
                        "Provide actionable insights",
                    ]),
                },
            },
            quality: QualityRules {
                technical_accuracy: string_vec(&[
                    "Cross-reference with reputable sources",
                    "Verify code snippets",
                ]),
                clarity: string_vec(&[
                    "Average sentence length ≤ 20 words",
                    "Paragraphs ≤ 5-7 sentences",
                    "Use active voice",
                ]),
                originality: string_vec(&["Must be original content", "Proper citation required"]),
                tone: string_vec(&[
                    "Informative and professional",
                    "Helpful and encouraging",
                ]),
            },
            seo: SeoRules {
                keywords: string_vec(&[
                    "1-3% keyword density",
                    "Keywords in first paragraph",
                    "Use long-tail keywords",
                ]),
                linking: string_vec(&[
                    "Minimum 2 internal links",
                    "Minimum 3 external links",
                    "Descriptive anchor text",
                ]),
                media: string_vec(&[
                    "Descriptive alt text",
                    "Optimized file sizes",
                    "Media supports content",
                ]),
            },
            validation: ReviewRules {
                automated_checks: string_vec(&[
                    "Length validation",
                    "Keyword density",
                    "Link validation",
                ]),
                review_process: string_vec(&[
                    "Technical accuracy review",
                    "Clarity assessment",
                    "Quality control",
                ]),
            },
        }
    }
}

/// Serialize the rules document, optionally narrowed to one top-level
/// section. `None` and `"all"` return the whole document; an unknown
/// section name yields an empty object rather than an error.
pub fn rules_document(section: Option<&str>) -> Value {
    let rules = BusinessRules::document();
    match section.unwrap_or("all") {
        "all" => json!(rules),
        "structure" => json!(rules.structure),
        "quality" => json!(rules.quality),
        "seo" => json!(rules.seo),
        "validation" => json!(rules.validation),
        _ => json!({}),
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

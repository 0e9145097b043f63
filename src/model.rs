//! Wire-facing data model for outlines, generated posts, and validation
//! reports.
//!
//! Every type here crosses the MCP or HTTP boundary, so all of them derive
//! `Serialize` and `JsonSchema`; request-side types also derive
//! `Deserialize`. Timestamps travel as RFC 3339 strings rather than typed
//! datetimes so reports serialize byte-identically on re-validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Audience a post is written for. Selects the phrasing used by the
/// synthesizer and fills the `reading_level` metadata field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl AudienceLevel {
    /// Capitalized form used inside title patterns.
    pub fn title_case(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// How an introduction describes this audience.
    pub fn intro_phrase(&self) -> &'static str {
        match self {
            Self::Beginner => {
                "newcomers to the field and those just starting their development journey"
            }
            Self::Intermediate => {
                "developers with some experience looking to deepen their understanding"
            }
            Self::Advanced => "experienced professionals seeking to master advanced concepts",
        }
    }

    /// How a conclusion describes this audience.
    pub fn closing_phrase(&self) -> &'static str {
        match self {
            Self::Beginner => "newcomers to the field",
            Self::Intermediate => "developers with growing expertise",
            Self::Advanced => "experienced professionals",
        }
    }
}

/// Requested outline size. Controls how many planned sections are emitted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DesiredLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// Structural flavor of a planned section, inferred once from its title.
/// The synthesizer dispatches on this instead of re-matching title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SectionType {
    CoreConcepts,
    Implementation,
    BestPractices,
    Examples,
    AdvancedTechniques,
    Performance,
    Generic,
}

/// One planned section of an outline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutlineSection {
    pub title: String,
    /// One-line summary of what the section should cover.
    pub description: String,
    /// Target word count for the drafted section body.
    pub estimated_words: u32,
}

/// A planned blog post: title candidates plus an ordered section list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Outline {
    pub topic: String,
    pub target_audience: AudienceLevel,
    pub keywords: Vec<String>,
    pub title_suggestions: Vec<String>,
    pub sections: Vec<OutlineSection>,
    /// Sum of `estimated_words` across `sections`.
    pub estimated_total_words: u32,
    /// RFC 3339 timestamp recording when the outline was built.
    pub generated_at: String,
}

/// A drafted section body along with the classification that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedSection {
    pub title: String,
    /// Markdown body, beginning with the section's own `##` heading.
    pub content: String,
    pub word_count: usize,
    pub section_type: SectionType,
}

/// Descriptive metadata attached to every generated post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PostMetadata {
    pub author: String,
    pub topic: String,
    pub keywords: Vec<String>,
    pub target_audience: AudienceLevel,
    pub content_type: String,
    pub seo_optimized: bool,
    pub reading_level: AudienceLevel,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// A fully drafted post. `content` is the assembled Markdown document; the
/// surrounding fields expose its parts so callers can edit them separately
/// and re-validate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlogPost {
    pub title: String,
    pub introduction: String,
    /// Complete Markdown document, from the `#` title line through the
    /// references list.
    pub content: String,
    pub conclusion: String,
    pub sections: Vec<GeneratedSection>,
    pub keywords: Vec<String>,
    pub target_audience: AudienceLevel,
    pub metadata: PostMetadata,
    pub generated_at: String,
    /// Whitespace-delimited word count of `content`.
    pub word_count: usize,
    /// Reading time in minutes at 225 words per minute, never below 1.
    pub estimated_reading_time: u32,
    /// Structural report attached after generation; never populated by the
    /// synthesizer itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationReport>,
}

/// The subset of a post the validator inspects.
///
/// Each field is optional, and absence is meaningful: an absent field skips
/// its checks entirely, while a present-but-empty string runs them (and
/// fails them). Unknown fields in the input are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BlogPostFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    /// Full Markdown body; drives the structure checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
}

impl From<&BlogPost> for BlogPostFields {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: Some(post.title.clone()),
            introduction: Some(post.introduction.clone()),
            content: Some(post.content.clone()),
            conclusion: Some(post.conclusion.clone()),
        }
    }
}

/// Outcome of the checks run against one field of a post.
///
/// Only the measurement relevant to the field is populated: `length` for
/// titles, `word_count` for introductions and conclusions, the section and
/// link counts for body structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldValidation {
    /// False as soon as any error is recorded. Warnings leave it untouched.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Title length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Word count of the measured field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Number of `## ` headings found in the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_sections: Option<usize>,
    /// Number of absolute `http(s)` Markdown links found in the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_links: Option<usize>,
}

impl FieldValidation {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            length: None,
            word_count: None,
            main_sections: None,
            external_links: None,
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.valid = false;
        self.errors.push(message);
    }

    pub fn push_warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}

impl Default for FieldValidation {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-field validation outcomes. A `None` slot means the field was absent
/// from the input and its checks never ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldValidations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<FieldValidation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationSummary {
    pub total_errors: usize,
    pub total_warnings: usize,
}

/// Aggregated validation outcome for a post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// True until any executed check records an error.
    pub overall_valid: bool,
    pub validations: FieldValidations,
    pub summary: ValidationSummary,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            overall_valid: true,
            validations: FieldValidations::default(),
            summary: ValidationSummary::default(),
        }
    }
}

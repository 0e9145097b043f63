use chrono::{SecondsFormat, Utc};

/// Whitespace-delimited word count. Both the validator and the synthesizer
/// measure text this way, so the numbers they report agree.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Current wall-clock time as an RFC 3339 UTC string with second precision.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

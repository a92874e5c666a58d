//! Interpretation of free-text oracle replies.
//!
//! Everything fragile about reading AI output lives here, as explicit
//! functions with typed failure modes, rather than as string checks spread
//! through the facade.

use thiserror::Error;

use flagquiz_core::Country;

const ENGLISH_LABELS: [&str; 2] = ["国名（英語）:", "国名(英語):"];
const LOCALIZED_LABELS: [&str; 2] = ["国名（日本語）:", "国名(日本語):"];
const FLAG_LABELS: [&str; 1] = ["国旗URL:"];

/// Failure to read a country record out of a completion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountryParseError {
    /// One of the three labeled lines was absent.
    #[error("country response missing field: {0}")]
    MissingField(&'static str),
}

/// Affirmative-prefix test for Yes/No verdicts: trimmed, case-insensitive,
/// accepts any reply starting with "yes".
pub fn is_affirmative(response: &str) -> bool {
    response.trim().to_lowercase().starts_with("yes")
}

/// Exact-token test for guess grading: the trimmed reply must be 正解.
pub fn is_correct_verdict(response: &str) -> bool {
    response.trim() == "正解"
}

/// Parses the three-line labeled country format.
///
/// Each label is located by prefix match (both full-width and ASCII
/// parenthesis variants); the value is the substring after the first `:`,
/// trimmed. All three fields are required; a partial record is a failure.
pub fn parse_country_response(response: &str) -> Result<Country, CountryParseError> {
    let mut english = None;
    let mut localized = None;
    let mut flag_url = None;

    for line in response.lines() {
        let line = line.trim();
        if let Some(value) = labeled_value(line, &ENGLISH_LABELS) {
            english = Some(value);
        } else if let Some(value) = labeled_value(line, &LOCALIZED_LABELS) {
            localized = Some(value);
        } else if let Some(value) = labeled_value(line, &FLAG_LABELS) {
            flag_url = Some(value);
        }
    }

    let english = english.ok_or(CountryParseError::MissingField("english name"))?;
    let localized = localized.ok_or(CountryParseError::MissingField("localized name"))?;
    let flag_url = flag_url.ok_or(CountryParseError::MissingField("flag url"))?;

    Ok(Country::new(english, localized, flag_url))
}

fn labeled_value(line: &str, labels: &[&str]) -> Option<String> {
    if !labels.iter().any(|label| line.starts_with(label)) {
        return None;
    }
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
}

use serde_json::Value;

use crate::errors::ParseError;

/// Candidate list extracted from a provider reply, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPayload {
    pub candidates: Vec<Value>,
    /// Key of the object entry the list was found under, if the reply was wrapped.
    pub envelope_key: Option<String>,
}

/// Decodes the raw reply and locates the list of question candidates.
///
/// A bare array is taken as-is. An object is scanned in document order and the
/// first entry holding an array wins; later arrays are ignored, never merged.
pub fn parse_quiz_response(raw_text: &str) -> Result<ParsedPayload, ParseError> {
    let value: Value = serde_json::from_str(raw_text)
        .map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    match value {
        Value::Array(candidates) => Ok(ParsedPayload {
            candidates,
            envelope_key: None,
        }),
        Value::Object(entries) => entries
            .into_iter()
            .find_map(|(key, entry)| match entry {
                Value::Array(candidates) => Some(ParsedPayload {
                    candidates,
                    envelope_key: Some(key),
                }),
                _ => None,
            })
            .ok_or(ParseError::NoListFound),
        Value::Null => Err(ParseError::UnexpectedShape("null")),
        Value::Bool(_) => Err(ParseError::UnexpectedShape("boolean")),
        Value::Number(_) => Err(ParseError::UnexpectedShape("number")),
        Value::String(_) => Err(ParseError::UnexpectedShape("string")),
    }
}

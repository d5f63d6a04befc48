use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::domain::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    NotAnObject,
    MissingField(&'static str),
    NonStringField(&'static str),
    OptionsNotAList,
    WrongOptionCount(usize),
    NonStringOption(usize),
    BlankQuestion,
    AnswerNotInOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedCandidate {
    pub index: usize,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub questions: Vec<Question>,
    pub dropped: Vec<DroppedCandidate>,
}

impl ValidationReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAnObject => write!(f, "not a JSON object"),
            RejectReason::MissingField(field) => write!(f, "missing '{}'", field),
            RejectReason::NonStringField(field) => write!(f, "'{}' is not a string", field),
            RejectReason::OptionsNotAList => write!(f, "'options' is not a list"),
            RejectReason::WrongOptionCount(n) => write!(f, "{} options instead of 4", n),
            RejectReason::NonStringOption(i) => write!(f, "option {} is not a string", i),
            RejectReason::BlankQuestion => write!(f, "question text is blank"),
            RejectReason::AnswerNotInOptions => write!(f, "answer is not one of the options"),
        }
    }
}

/// Keeps the well-formed candidates, in order, and records why the rest were dropped.
/// Never fails: an empty report is for the caller to judge.
pub fn validate_candidates(candidates: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, candidate) in candidates.iter().enumerate() {
        match validate_candidate(candidate) {
            Ok(question) => report.questions.push(question),
            Err(reason) => {
                log::warn!("Dropping quiz candidate {}: {}", index, reason);
                report.dropped.push(DroppedCandidate { index, reason });
            }
        }
    }

    report
}

fn validate_candidate(candidate: &Value) -> Result<Question, RejectReason> {
    let fields = candidate.as_object().ok_or(RejectReason::NotAnObject)?;

    let text = require(fields, "question")?;
    let options = require(fields, "options")?;
    let answer = require(fields, "answer")?;

    let options = options.as_array().ok_or(RejectReason::OptionsNotAList)?;
    if options.len() != 4 {
        return Err(RejectReason::WrongOptionCount(options.len()));
    }
    let options: [String; 4] = [
        option_text(options, 0)?,
        option_text(options, 1)?,
        option_text(options, 2)?,
        option_text(options, 3)?,
    ];

    let text = text
        .as_str()
        .ok_or(RejectReason::NonStringField("question"))?;
    if text.trim().is_empty() {
        return Err(RejectReason::BlankQuestion);
    }

    let answer = answer
        .as_str()
        .ok_or(RejectReason::NonStringField("answer"))?;

    Question::new(text, options, answer).ok_or(RejectReason::AnswerNotInOptions)
}

fn require<'a>(
    fields: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, RejectReason> {
    fields.get(key).ok_or(RejectReason::MissingField(key))
}

fn option_text(options: &[Value], index: usize) -> Result<String, RejectReason> {
    options[index]
        .as_str()
        .map(str::to_string)
        .ok_or(RejectReason::NonStringOption(index))
}

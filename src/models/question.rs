use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Original labels of the three candidate answers, in source order.
pub const ANSWER_LABELS: [&str; 3] = ["1", "2", "3"];

/// JSON keys holding the three candidate answers, aligned with [`ANSWER_LABELS`].
pub const ANSWER_FIELDS: [&str; 3] = ["Answer 1", "Answer 2", "Answer 3"];

const GROUND_TRUTH_FIELD: &str = "Ground Truth";

/// Question identifier, either a number or a string as given in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(serde_json::Number),
    Text(String),
}

impl QuestionId {
    /// Identifier for the record at the given 1-based position.
    pub fn positional(position: usize) -> Self {
        QuestionId::Number(position.into())
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::Text(s.to_string())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

/// A question record exactly as it appears in the input file.
///
/// Required fields are optional here so that a missing one can be reported
/// with its position instead of as a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub qid: Option<QuestionId>,
    #[serde(rename = "Ground Truth")]
    pub ground_truth: Option<String>,
    #[serde(rename = "Answer 1")]
    pub answer_1: Option<String>,
    #[serde(rename = "Answer 2")]
    pub answer_2: Option<String>,
    #[serde(rename = "Answer 3")]
    pub answer_3: Option<String>,
}

impl RawRecord {
    /// Check that all required fields are present.
    ///
    /// `position` is the 1-based index of the record in the input array.
    pub fn validate(self, position: usize) -> FormResult<QuestionRecord> {
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or(FormError::MissingField { position, field })
        };

        let ground_truth = require(self.ground_truth, GROUND_TRUTH_FIELD)?;
        let answers = [
            require(self.answer_1, ANSWER_FIELDS[0])?,
            require(self.answer_2, ANSWER_FIELDS[1])?,
            require(self.answer_3, ANSWER_FIELDS[2])?,
        ];

        Ok(QuestionRecord {
            qid: self.qid,
            ground_truth,
            answers,
        })
    }
}

/// A validated question: ground truth plus three answers in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    /// Explicit identifier, if the input supplied one.
    pub qid: Option<QuestionId>,
    pub ground_truth: String,
    /// Answer texts indexed by original label minus one.
    pub answers: [String; 3],
}

impl QuestionRecord {
    pub fn new(ground_truth: impl Into<String>, answers: [&str; 3]) -> Self {
        Self {
            qid: None,
            ground_truth: ground_truth.into(),
            answers: answers.map(str::to_string),
        }
    }

    pub fn with_qid(mut self, qid: impl Into<QuestionId>) -> Self {
        self.qid = Some(qid.into());
        self
    }

    /// Identifier to show for this record at the given 1-based position.
    pub fn resolve_id(&self, position: usize) -> QuestionId {
        self.qid
            .clone()
            .unwrap_or_else(|| QuestionId::positional(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_complete_record() {
        let record = parse(
            r#"{"Ground Truth":"Paris","Answer 1":"Paris","Answer 2":"London","Answer 3":"Rome"}"#,
        )
        .validate(1)
        .unwrap();

        assert_eq!(record.ground_truth, "Paris");
        assert_eq!(record.answers, ["Paris", "London", "Rome"]);
        assert_eq!(record.qid, None);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let err = parse(r#"{"Ground Truth":"x","Answer 1":"a","Answer 3":"c"}"#)
            .validate(4)
            .unwrap_err();

        match err {
            FormError::MissingField { position, field } => {
                assert_eq!(position, 4);
                assert_eq!(field, "Answer 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = parse(r#"{"Ground Truth":null,"Answer 1":"a","Answer 2":"b","Answer 3":"c"}"#)
            .validate(1)
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::MissingField {
                field: "Ground Truth",
                ..
            }
        ));
    }

    #[test]
    fn test_qid_number_and_string() {
        let numeric = parse(r#"{"qid": 42}"#);
        assert_eq!(numeric.qid.unwrap().to_string(), "42");

        let text = parse(r#"{"qid": "q-7"}"#);
        assert_eq!(text.qid, Some(QuestionId::Text("q-7".to_string())));
    }

    #[test]
    fn test_resolve_id() {
        let record = QuestionRecord::new("gt", ["a", "b", "c"]);
        assert_eq!(record.resolve_id(5), QuestionId::positional(5));

        let record = record.with_qid("custom");
        assert_eq!(record.resolve_id(5).to_string(), "custom");
    }
}

use serde::Serialize;

use super::QuestionId;

/// One answer as shown on the form, remembering its original label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayAnswer {
    pub orig: &'static str,
    pub text: String,
}

/// A question ready to be handed to the template.
///
/// Field names are the ones the template refers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedQuestion {
    pub id: QuestionId,
    /// Ground-truth text, unescaped.
    pub gt: String,
    /// Answers in display order.
    pub answers: [DisplayAnswer; 3],
    /// Original labels in display order, e.g. `"2,1,3"`.
    pub order_str: String,
}

impl RenderedQuestion {
    /// Original labels in display order.
    pub fn labels(&self) -> [&'static str; 3] {
        [
            self.answers[0].orig,
            self.answers[1].orig,
            self.answers[2].orig,
        ]
    }

    pub fn answer_key(&self, form_type: &'static str) -> AnswerKeyEntry<'_> {
        AnswerKeyEntry {
            id: &self.id,
            order_str: &self.order_str,
            form_type,
        }
    }
}

/// Display order of one question, for matching submitted choices back to
/// original labels.
#[derive(Debug, Serialize)]
pub struct AnswerKeyEntry<'a> {
    pub id: &'a QuestionId,
    pub order_str: &'a str,
    pub form_type: &'static str,
}

mod question;
mod rendered;

pub use question::{QuestionId, QuestionRecord, RawRecord, ANSWER_FIELDS, ANSWER_LABELS};
pub use rendered::{AnswerKeyEntry, DisplayAnswer, RenderedQuestion};

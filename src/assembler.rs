//! Turns question records into their randomized display form.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::{DisplayAnswer, QuestionRecord, RenderedQuestion, ANSWER_LABELS};

/// Builds [`RenderedQuestion`]s with independently shuffled answer order.
pub struct FormAssembler<R> {
    rng: R,
}

impl<R: Rng> FormAssembler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Assemble every record, keeping input order.
    pub fn assemble(&mut self, records: Vec<QuestionRecord>) -> Vec<RenderedQuestion> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| self.assemble_one(i + 1, record))
            .collect()
    }

    /// Assemble the record found at the given 1-based position.
    pub fn assemble_one(&mut self, position: usize, record: QuestionRecord) -> RenderedQuestion {
        let id = record.resolve_id(position);

        let [a1, a2, a3] = record.answers;
        let mut answers = [
            DisplayAnswer {
                orig: ANSWER_LABELS[0],
                text: a1,
            },
            DisplayAnswer {
                orig: ANSWER_LABELS[1],
                text: a2,
            },
            DisplayAnswer {
                orig: ANSWER_LABELS[2],
                text: a3,
            },
        ];
        answers.shuffle(&mut self.rng);

        let order_str = answers
            .iter()
            .map(|answer| answer.orig)
            .collect::<Vec<_>>()
            .join(",");

        debug!(%id, order = %order_str, "assembled question");

        RenderedQuestion {
            id,
            gt: record.ground_truth,
            answers,
            order_str,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::QuestionId;

    fn seeded(seed: u64) -> FormAssembler<StdRng> {
        FormAssembler::new(StdRng::seed_from_u64(seed))
    }

    fn sample_records() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("Paris", ["Paris", "London", "Rome"]),
            QuestionRecord::new("4", ["3", "4", "5"]).with_qid("q-two"),
            QuestionRecord::new("blue", ["red", "green", "blue"]),
        ]
    }

    #[test]
    fn test_single_question_example() {
        let problems = seeded(1).assemble(vec![QuestionRecord::new(
            "Paris",
            ["Paris", "London", "Rome"],
        )]);

        assert_eq!(problems.len(), 1);
        let problem = &problems[0];
        assert_eq!(problem.id, QuestionId::positional(1));
        assert_eq!(problem.gt, "Paris");

        let mut texts: Vec<_> = problem.answers.iter().map(|a| a.text.as_str()).collect();
        texts.sort();
        assert_eq!(texts, ["London", "Paris", "Rome"]);
    }

    #[test]
    fn test_preserves_length_order_and_ids() {
        let problems = seeded(7).assemble(sample_records());

        assert_eq!(problems.len(), 3);
        assert_eq!(problems[0].gt, "Paris");
        assert_eq!(problems[1].gt, "4");
        assert_eq!(problems[2].gt, "blue");

        assert_eq!(problems[0].id.to_string(), "1");
        assert_eq!(problems[1].id.to_string(), "q-two");
        assert_eq!(problems[2].id.to_string(), "3");
    }

    #[test]
    fn test_labels_are_a_permutation_and_match_order_str() {
        for seed in 0..50 {
            for problem in seeded(seed).assemble(sample_records()) {
                let labels: HashSet<_> = problem.labels().into_iter().collect();
                assert_eq!(labels, HashSet::from(["1", "2", "3"]));

                let split: Vec<_> = problem.order_str.split(',').collect();
                assert_eq!(split, problem.labels());
            }
        }
    }

    #[test]
    fn test_label_keeps_its_text() {
        let records = vec![QuestionRecord::new("gt", ["one", "two", "three"])];
        let problem = &seeded(3).assemble(records)[0];

        for answer in &problem.answers {
            let expected = match answer.orig {
                "1" => "one",
                "2" => "two",
                "3" => "three",
                other => panic!("unexpected label {other}"),
            };
            assert_eq!(answer.text, expected);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let first: Vec<_> = seeded(42)
            .assemble(sample_records())
            .into_iter()
            .map(|p| p.order_str)
            .collect();
        let second: Vec<_> = seeded(42)
            .assemble(sample_records())
            .into_iter()
            .map(|p| p.order_str)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_orderings_occur() {
        let mut assembler = seeded(2024);
        let mut seen = HashSet::new();
        for i in 0..600 {
            let record = QuestionRecord::new("gt", ["a", "b", "c"]);
            seen.insert(assembler.assemble_one(i + 1, record).order_str);
        }
        assert_eq!(seen.len(), 6);
    }
}

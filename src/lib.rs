//! # mc-form
//!
//! Generates static HTML forms for human evaluation of multiple-choice
//! answers. Each question has a ground-truth text and three candidate
//! answers; the answers are shown in a random order while every radio button
//! keeps the answer's original label (1, 2 or 3) as its value.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mc_form::{FormError, FormRenderer, SurveyForm};
//!
//! fn main() -> Result<(), FormError> {
//!     let form = SurveyForm::from_json("questions.json", &mut rand::thread_rng())?;
//!
//!     let renderer = FormRenderer::new("templates");
//!     let html = form.render(
//!         &renderer,
//!         "mc_from_json.html.jinja2",
//!         "https://script.google.com/macros/s/.../exec",
//!         None,
//!     )?;
//!
//!     mc_form::output::write_html("out/form.html", &html)?;
//!     Ok(())
//! }
//! ```

mod assembler;
pub mod config;
mod data;
mod error;
pub mod logging;
mod models;
pub mod output;
mod render;

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{info, warn};

pub use assembler::FormAssembler;
pub use config::Config;
pub use data::load_questions_from_json;
pub use error::{FormError, FormResult};
pub use models::{
    AnswerKeyEntry, DisplayAnswer, QuestionId, QuestionRecord, RawRecord, RenderedQuestion,
    ANSWER_FIELDS, ANSWER_LABELS,
};
pub use render::{FormContext, FormRenderer, DEFAULT_PAGE_TITLE, FORM_TYPE};

/// An assembled form: every question with its display order fixed.
pub struct SurveyForm {
    problems: Vec<RenderedQuestion>,
}

impl SurveyForm {
    /// Assemble a form from validated records.
    pub fn from_records<R: Rng>(records: Vec<QuestionRecord>, rng: &mut R) -> Self {
        Self {
            problems: FormAssembler::new(rng).assemble(records),
        }
    }

    /// Load records from a JSON file and assemble them.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mc_form::SurveyForm;
    ///
    /// let form = SurveyForm::from_json("questions.json", &mut rand::thread_rng())
    ///     .expect("Failed to load questions");
    /// ```
    pub fn from_json<P: AsRef<Path>, R: Rng>(path: P, rng: &mut R) -> FormResult<Self> {
        let records = load_questions_from_json(path)?;
        Ok(Self::from_records(records, rng))
    }

    pub fn problems(&self) -> &[RenderedQuestion] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Render the form through the named template.
    pub fn render(
        &self,
        renderer: &FormRenderer,
        template_name: &str,
        google_script_url: &str,
        page_title: Option<&str>,
    ) -> FormResult<String> {
        let mut ctx = FormContext::new(google_script_url, &self.problems);
        if let Some(title) = page_title {
            ctx = ctx.with_page_title(title);
        }
        renderer.render(template_name, &ctx)
    }

    /// The display order of every question as pretty JSON.
    pub fn answer_key_json(&self) -> FormResult<String> {
        output::answer_key_json(&self.problems, FORM_TYPE)
    }
}

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct FormJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub google_script_url: String,
    pub page_title: String,
    pub template_dir: PathBuf,
    pub template_name: String,
    /// Where to write the answer key, if anywhere.
    pub answer_key: Option<PathBuf>,
}

impl FormJob {
    /// Load, assemble, render and write.
    ///
    /// Nothing is written unless every earlier step succeeded. Returns the
    /// number of questions in the form.
    pub fn run<R: Rng>(&self, rng: &mut R) -> FormResult<usize> {
        let form = SurveyForm::from_json(&self.input, rng)?;
        if form.is_empty() {
            warn!(input = %self.input.display(), "input has no questions, rendering an empty form");
        } else {
            info!(questions = form.len(), input = %self.input.display(), "assembled form");
        }

        let renderer = FormRenderer::new(&self.template_dir);
        let html = form.render(
            &renderer,
            &self.template_name,
            &self.google_script_url,
            Some(&self.page_title),
        )?;

        let answer_key = match &self.answer_key {
            Some(path) => Some((path, form.answer_key_json()?)),
            None => None,
        };

        output::write_html(&self.output, &html)?;
        info!(path = %self.output.display(), "wrote form");

        if let Some((path, json)) = answer_key {
            output::write_answer_key(path, &json)?;
            info!(path = %path.display(), "wrote answer key");
        }

        Ok(form.len())
    }
}

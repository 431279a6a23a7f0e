use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for form generation.
#[derive(Debug, Error)]
pub enum FormError {
    /// The input JSON file does not exist.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input JSON file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON array of question objects.
    #[error("failed to parse {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A question record lacks one of the required fields.
    #[error("question #{position} is missing required field \"{field}\"")]
    MissingField {
        /// 1-based position of the record in the input array.
        position: usize,
        field: &'static str,
    },

    /// The named template is not in the template directory.
    #[error("template \"{name}\" not found in {}", .dir.display())]
    TemplateNotFound { name: String, dir: PathBuf },

    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),

    #[error("failed to serialize answer key: {0}")]
    AnswerKey(#[from] serde_json::Error),

    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type FormResult<T> = Result<T, FormError>;

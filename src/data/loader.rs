use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{FormError, FormResult};
use crate::models::{QuestionRecord, RawRecord};

/// Load and validate all question records from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> FormResult<Vec<QuestionRecord>> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FormError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => FormError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let raw: Vec<RawRecord> =
        serde_json::from_str(&json_content).map_err(|source| FormError::InputParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), records = raw.len(), "parsed input");

    validate_all(raw)
}

fn validate_all(raw: Vec<RawRecord>) -> FormResult<Vec<QuestionRecord>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, record)| record.validate(i + 1))
        .collect()
}

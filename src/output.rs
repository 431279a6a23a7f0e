//! Persisting the rendered form and its answer key.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FormError, FormResult};
use crate::models::{AnswerKeyEntry, RenderedQuestion};

/// Write the rendered HTML, creating the parent directory if needed.
pub fn write_html<P: AsRef<Path>>(path: P, html: &str) -> FormResult<()> {
    write_file(path.as_ref(), html)
}

/// Serialize the display order of every question as a JSON answer key.
pub fn answer_key_json(problems: &[RenderedQuestion], form_type: &'static str) -> FormResult<String> {
    let entries: Vec<AnswerKeyEntry<'_>> = problems
        .iter()
        .map(|problem| problem.answer_key(form_type))
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Write a previously serialized answer key.
pub fn write_answer_key<P: AsRef<Path>>(path: P, json: &str) -> FormResult<()> {
    write_file(path.as_ref(), json)
}

fn write_file(path: &Path, contents: &str) -> FormResult<()> {
    let write_err = |source| FormError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

//! Template rendering for the evaluation form.

use std::path::{Path, PathBuf};

use minijinja::{path_loader, AutoEscape, Environment, ErrorKind};
use serde::Serialize;
use tracing::debug;

use crate::error::{FormError, FormResult};
use crate::models::RenderedQuestion;

/// Tag identifying the template version in submitted results.
pub const FORM_TYPE: &str = "mc_from_json_v1";

/// Page title used when none is supplied.
pub const DEFAULT_PAGE_TITLE: &str = "SayNext Human Evaluation";

/// Values exposed to the template.
#[derive(Debug, Serialize)]
pub struct FormContext<'a> {
    pub page_title: &'a str,
    pub google_script_url: &'a str,
    pub problems: &'a [RenderedQuestion],
    pub form_type: &'static str,
}

impl<'a> FormContext<'a> {
    pub fn new(google_script_url: &'a str, problems: &'a [RenderedQuestion]) -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE,
            google_script_url,
            problems,
            form_type: FORM_TYPE,
        }
    }

    pub fn with_page_title(mut self, page_title: &'a str) -> Self {
        self.page_title = page_title;
        self
    }
}

/// Renders named templates from a directory.
pub struct FormRenderer {
    env: Environment<'static>,
    template_dir: PathBuf,
}

impl FormRenderer {
    pub fn new<P: AsRef<Path>>(template_dir: P) -> Self {
        let template_dir = template_dir.as_ref().to_path_buf();

        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir.clone()));
        env.set_auto_escape_callback(auto_escape_for);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        Self { env, template_dir }
    }

    /// Render the named template with the form values.
    pub fn render(&self, name: &str, ctx: &FormContext<'_>) -> FormResult<String> {
        let template = self.env.get_template(name).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                FormError::TemplateNotFound {
                    name: name.to_string(),
                    dir: self.template_dir.clone(),
                }
            } else {
                FormError::Render(err)
            }
        })?;

        let html = template.render(ctx)?;
        debug!(template = name, bytes = html.len(), "rendered form");
        Ok(html)
    }
}

/// HTML escaping for html/xml templates, including `*.html.jinja2`.
fn auto_escape_for(name: &str) -> AutoEscape {
    let name = name
        .strip_suffix(".jinja2")
        .or_else(|| name.strip_suffix(".jinja"))
        .or_else(|| name.strip_suffix(".j2"))
        .unwrap_or(name);

    match name.rsplit('.').next() {
        Some("html" | "htm" | "xml") => AutoEscape::Html,
        _ => AutoEscape::None,
    }
}

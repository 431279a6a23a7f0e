use std::path::PathBuf;

use crate::render::DEFAULT_PAGE_TITLE;

/// Template and page settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory templates are loaded from
    pub template_dir: PathBuf,
    /// Template file name inside `template_dir`
    pub template_name: String,
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("./templates"),
            template_name: "mc_from_json.html.jinja2".to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `MC_FORM_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            template_dir: lookup("MC_FORM_TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.template_dir),
            template_name: lookup("MC_FORM_TEMPLATE_NAME").unwrap_or(default.template_name),
            page_title: lookup("MC_FORM_PAGE_TITLE").unwrap_or(default.page_title),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars = HashMap::from([
            ("MC_FORM_TEMPLATE_DIR", "/srv/templates"),
            ("MC_FORM_PAGE_TITLE", "Pilot"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.template_dir, PathBuf::from("/srv/templates"));
        assert_eq!(config.template_name, "mc_from_json.html.jinja2");
        assert_eq!(config.page_title, "Pilot");
    }
}

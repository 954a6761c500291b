use serde::Deserialize;

/// One showcased project. `preview` may be empty, in which case the entry is
/// listed on the projects page but skipped by the homepage carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
  pub title: String,
  pub website: String,
  #[serde(default)]
  pub preview: String,
}

static PROJECTS_JSON: &str = include_str!("../../assets/projects.json");

impl Project {
  /// Parses the project list embedded at build time.
  pub fn load_all() -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(PROJECTS_JSON)
  }
}

/// Only the entries that carry a preview image take part in the carousel.
pub fn with_previews(projects: Vec<Project>) -> Vec<Project> {
  projects.into_iter().filter(|p| !p.preview.is_empty()).collect()
}

/// Strips a leading `scheme://` (or a bare leading `//`) for display.
pub fn remove_https(url: &str) -> String {
  if let Some(idx) = url.find("://") {
    let scheme = &url[..idx];
    if !scheme.is_empty() && scheme.chars().all(|c| c.is_alphanumeric() || c == '_') {
      return url[idx + 3..].to_string();
    }
  }
  match url.strip_prefix("//") {
    Some(rest) => rest.to_string(),
    None => url.to_string(),
  }
}

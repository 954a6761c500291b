use dioxus::{logger::tracing::error, prelude::*};

use crate::components::carousel::ProjectCard;
use crate::utils::projects::Project;

/// Static grid of every project, preview or not. Target of the homepage's
/// "See more" link.
#[component]
pub fn Projects() -> Element {
  static CSS: Asset = asset!("assets/projects.css");

  let items = use_signal(|| match Project::load_all() {
    Ok(projects) => projects,
    Err(e) => {
      error!("failed to parse embedded project data: {e}");
      vec![]
    }
  });

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "projects-page",
      h1 { "All projects" },
      div {
        class: "project-grid",
        for item in items() {
          ProjectCard { project: item }
        }
      }
    }
  }
}

use dioxus::{logger::tracing::{error, info}, prelude::*};

use crate::Route;
use crate::components::carousel::ScrollingCarousel;
use crate::utils::projects::{with_previews, Project};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");

  // loaded once per mount and handed down explicitly; a parse failure
  // degrades to an empty showcase instead of taking the page down
  let items = use_signal(|| match Project::load_all() {
    Ok(projects) => {
      let shown = with_previews(projects);
      info!("loaded {} showcase projects", shown.len());
      shown
    },
    Err(e) => {
      error!("failed to parse embedded project data: {e}");
      vec![]
    }
  });

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      section {
        class: "hero",
        h1 { "Project Showcase" },
        p { "A rolling tour of the things we build. Scroll the page to speed the strip up, hover it to take a closer look." },
      },
      section {
        class: "project-section",
        div {
          class: "project-title",
          h2 {
            svg {
              class: "title-icon",
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              rect { x: "2", y: "5", width: "20", height: "12", rx: "2" }
              path { d: "M8 21h8" }
              path { d: "M12 17v4" }
            }
            "Some projects"
          }
          Link {
            class: "more-button",
            to: Route::Projects { },
            "See more"
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "16",
              height: "16",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path { d: "M9 18l6-6-6-6" }
            }
          }
        }
        div {
          style: "position: relative",
          div {
            style: "overflow: hidden",
            ScrollingCarousel { items: items() }
          }
          div { class: "gradient-box left-box" }
          div { class: "gradient-box right-box" }
        }
      }
    }
  }
}

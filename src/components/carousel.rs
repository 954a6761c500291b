use std::time::Duration;

use dioxus::{logger::tracing::info, prelude::*};

use crate::utils::{
  motion::{velocity_factor, CarouselMotion, ScrollVelocityTracker, Spring},
  projects::{remove_https, Project},
};

// spring constants for smoothing the raw page-scroll velocity
const SCROLL_SPRING_STIFFNESS: f64 = 400.0;
const SCROLL_SPRING_DAMPING: f64 = 50.0;

// frame pacing; real elapsed time is measured each iteration
const FRAME_SLEEP_MS: u64 = 16;

/// Infinitely-looping strip of project cards. Drifts leftward on its own,
/// speeds up with page scrolling, and pauses while the pointer hovers it.
///
/// `items` must already be filtered to entries with a preview image.
#[component]
pub fn ScrollingCarousel(items: Vec<Project>) -> Element {
  let item_count = items.len();

  let mut display_percent: Signal<f64> = use_signal(|| 6.0);
  let mut hovered: Signal<bool> = use_signal(|| false);

  // The frame loop lives in a task owned by this component's scope, so
  // dioxus drops it on unmount and no update can land afterwards. The
  // scroll and hover inputs only feed state read at the top of a frame.
  use_future(move || async move {
    if item_count == 0 {
      info!("carousel mounted with no items, skipping animation loop");
      return;
    }

    let window = web_sys::window().expect("window should exist in this context");
    let performance = window.performance().expect("performance should be available");

    let mut motion = CarouselMotion::new(item_count);
    let mut spring = Spring::new(SCROLL_SPRING_STIFFNESS, SCROLL_SPRING_DAMPING);
    let mut tracker = ScrollVelocityTracker::new(window.scroll_y().unwrap_or(0.0));
    let mut last_frame = performance.now();

    display_percent.set(motion.display_percent());

    loop {
      async_std::task::sleep(Duration::from_millis(FRAME_SLEEP_MS)).await;

      let now = performance.now();
      let delta_ms = now - last_frame;
      last_frame = now;

      // smoothed scroll velocity is fixed before any drift math runs
      let scroll_y = window.scroll_y().unwrap_or(0.0);
      let raw_velocity = tracker.sample(scroll_y, delta_ms / 1000.0);
      let smoothed = spring.step(raw_velocity, delta_ms / 1000.0);
      let factor = velocity_factor(smoothed);

      if hovered() {
        motion.pause();
      } else if motion.is_paused() {
        motion.resume();
      }

      motion.tick(delta_ms, factor);
      display_percent.set(motion.display_percent());
    }
  });

  let strip_width = item_count * 100;

  rsx! {
    div {
      class: "slider",
      style: "width: {strip_width}%",
      div {
        class: "slide-track",
        style: "transform: translateX({display_percent}%)",
        onmouseenter: move |_evt| hovered.set(true),
        onmouseleave: move |_evt| hovered.set(false),
        for item in items {
          ProjectCard { project: item }
        }
      }
    }
  }
}

/// One card of the strip: preview image, title, and the project's address
/// with the scheme stripped for display.
#[component]
pub fn ProjectCard(project: Project) -> Element {
  rsx! {
    div {
      class: "slide",
      a {
        href: "{project.website}",
        target: "_blank",
        if !project.preview.is_empty() {
          img {
            class: "slide-image",
            src: "{project.preview}",
            alt: "{project.title}",
            loading: "lazy",
          }
        }
        div {
          class: "slide-body",
          h2 { class: "slide-title", "{project.title}" }
          p { class: "slide-website", {remove_https(&project.website)} }
        }
      }
    }
  }
}

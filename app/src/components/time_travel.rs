//! Past View / Future View screens.
//!
//! Both travel directions share one screen parameterized by [`TravelKind`]:
//! year display with era badge, the year slider, a horizontal landmark
//! picker, the generate button, and the result section. A successful
//! generation is recorded in the shared travel history.

use chronolens_core::data::{LANDMARKS, landmark_by_id};
use chronolens_core::era::{future_era, past_era};
use chronolens_core::generate::{ImageClient, landmark_prompt};
use chronolens_types::TravelKind;
use dioxus::prelude::*;

use super::TimeSlider;
use super::toast::{ToastSeverity, use_toast};
use crate::state::{new_travel_record, use_time_explorer};

/// Slider bounds per travel direction.
const PAST_YEARS: (i32, i32) = (1000, 2024);
const FUTURE_YEARS: (i32, i32) = (2026, 2500);

#[component]
pub fn TravelScreen(kind: TravelKind) -> Element {
    let mut explorer = use_time_explorer();
    let client = use_context::<ImageClient>();
    let mut toast = use_toast();

    let mut selected_landmark = use_signal(|| LANDMARKS[0].id.to_string());
    let mut generating = use_signal(|| false);
    let mut generated = use_signal(|| None::<String>);

    let (min_year, max_year) = match kind {
        TravelKind::Past => PAST_YEARS,
        TravelKind::Future => FUTURE_YEARS,
    };
    // The shared year is global across screens; pin it into this screen's
    // range so the slider contract (year within bounds) holds.
    let year = explorer.selected_year().clamp(min_year, max_year);

    let era = match kind {
        TravelKind::Past => past_era(year),
        TravelKind::Future => future_era(year),
    };
    let is_past = kind == TravelKind::Past;
    let landmark =
        landmark_by_id(&selected_landmark()).unwrap_or(&LANDMARKS[0]);
    let landmark_id = landmark.id.to_string();
    let landmark_name = landmark.name;

    let (title, subtitle) = if is_past {
        ("Travel to the Past", "Explore history through time")
    } else {
        ("Journey to the Future", "Imagine tomorrow's world")
    };
    let year_icon = if is_past { "fa-solid fa-clock" } else { "fa-solid fa-bolt" };

    let on_generate = move |_| {
        let client = client.clone();
        let landmark_id = landmark_id.clone();
        spawn(async move {
            generating.set(true);
            generated.set(None);

            let Some(landmark) = landmark_by_id(&landmark_id) else {
                generating.set(false);
                return;
            };
            let prompt = landmark_prompt(landmark.name, year, kind);
            match client.generate(&prompt).await {
                Ok(image) => {
                    let uri = image.data_uri();
                    generated.set(Some(uri.clone()));
                    let record = new_travel_record(landmark, year, kind, uri);
                    if let Err(err) = explorer.add_to_history(record) {
                        tracing::warn!(error = %err, "failed to persist travel history");
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "image generation failed");
                    toast.show(
                        "Could not generate the time view. Please try again.",
                        ToastSeverity::Error,
                    );
                }
            }
            generating.set(false);
        });
    };

    let facts = if is_past { landmark.historical_facts } else { landmark.future_predictions };
    let facts_title = if is_past { "Historical Context" } else { "Future Outlook" };
    let theme = if is_past { "past" } else { "future" };
    let busy = generating();
    let result = generated();

    rsx! {
        div { class: "travel-screen {theme}",
            header { class: "screen-header",
                h1 { "{title}" }
                p { class: "subtitle", "{subtitle}" }
            }

            div { class: "year-display",
                i { class: "{year_icon}" }
                span { class: "year-text", "{year}" }
                span { class: "era-badge", "{era.era}" }
            }
            p { class: "era-description", "{era.description}" }

            TimeSlider {
                min_year,
                max_year,
                current_year: year,
                is_past,
                on_year_change: move |new_year| explorer.set_selected_year(new_year),
            }

            section { class: "landmark-section",
                h2 { class: "section-title", "Select Location" }
                div { class: "landmark-row",
                    for entry in LANDMARKS.iter() {
                        LandmarkCard {
                            landmark_id: entry.id.to_string(),
                            selected: selected_landmark() == entry.id,
                            on_select: move |id| selected_landmark.set(id),
                        }
                    }
                }
            }

            button {
                class: "btn btn-generate",
                disabled: busy,
                onclick: on_generate,
                if busy {
                    i { class: "fa-solid fa-spinner fa-spin" }
                    span { " Generating..." }
                } else {
                    i { class: "fa-solid fa-wand-magic-sparkles" }
                    span { " Generate Time View" }
                }
            }

            if let Some(ref uri) = result {
                {
                    let verb = if is_past { "might have appeared" } else { "might look" };
                    rsx! {
                        section { class: "result-section",
                            h3 { class: "result-title", "{landmark_name} in {year}" }
                            img { class: "generated-image", src: "{uri}" }
                            div { class: "info-card",
                                i { class: "fa-solid fa-circle-info" }
                                span {
                                    "This AI-generated visualization shows how \
                                     {landmark_name} {verb} in {year}."
                                }
                            }
                        }
                    }
                }
            }

            section { class: "facts-section",
                h2 { class: "section-title", "{facts_title}" }
                for fact in facts.iter() {
                    div { class: "fact-card",
                        i { class: "fa-solid fa-calendar" }
                        span { class: "fact-text", "{fact}" }
                    }
                }
            }
        }
    }
}

/// One card in the horizontal landmark picker.
#[component]
fn LandmarkCard(
    landmark_id: String,
    selected: bool,
    on_select: EventHandler<String>,
) -> Element {
    let Some(landmark) = landmark_by_id(&landmark_id) else {
        return rsx! {};
    };

    rsx! {
        button {
            class: if selected { "landmark-card selected" } else { "landmark-card" },
            onclick: move |_| on_select.call(landmark.id.to_string()),
            img { class: "landmark-image", src: "{landmark.image_url}" }
            div { class: "landmark-overlay",
                span { class: "landmark-name", "{landmark.name}" }
                span { class: "landmark-location", "{landmark.location}" }
            }
        }
    }
}

//! Landmark detail modal: description, rating, and an in-place generation
//! flow with its own year slider and past/future toggle.

use chronolens_core::era::{PRESENT_YEAR, future_era, past_era};
use chronolens_core::data::landmark_by_id;
use chronolens_core::generate::{ImageClient, landmark_prompt};
use chronolens_types::TravelKind;
use dioxus::prelude::*;

use super::TimeSlider;
use super::toast::{ToastSeverity, use_toast};
use crate::state::{new_travel_record, use_time_explorer};

#[component]
pub fn LandmarkDetail(landmark_id: String, on_close: EventHandler<()>) -> Element {
    let mut explorer = use_time_explorer();
    let client = use_context::<ImageClient>();
    let mut toast = use_toast();

    // The detail view keeps its own year so browsing here does not disturb
    // the year selected on the travel tabs.
    let mut view_mode = use_signal(|| TravelKind::Past);
    let mut selected_year = use_signal(|| PRESENT_YEAR);
    let mut generating = use_signal(|| false);
    let mut generated = use_signal(|| None::<String>);

    // Unknown ids render a minimal fallback instead of failing.
    let Some(landmark) = landmark_by_id(&landmark_id) else {
        return rsx! {
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
                div { class: "detail-panel not-found",
                    i { class: "fa-solid fa-map-pin" }
                    p { "Landmark not found" }
                }
            }
        };
    };

    let kind = view_mode();
    let is_past = kind == TravelKind::Past;
    let (min_year, max_year) = if is_past { (1000, 2024) } else { (2026, 2500) };
    let year = selected_year().clamp(min_year, max_year);
    let era = if is_past { past_era(year) } else { future_era(year) };

    let landmark_name = landmark.name;
    let on_generate = move |_| {
        let client = client.clone();
        spawn(async move {
            generating.set(true);
            generated.set(None);

            let prompt = landmark_prompt(landmark_name, year, kind);
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

    let busy = generating();
    let result = generated();
    let theme = if is_past { "past" } else { "future" };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div { class: "detail-panel {theme}", onclick: move |e| e.stop_propagation(),
                button {
                    class: "btn btn-close",
                    onclick: move |_| on_close.call(()),
                    i { class: "fa-solid fa-xmark" }
                }

                img { class: "detail-hero", src: "{landmark.image_url}" }
                div { class: "detail-body",
                    h2 { "{landmark.name}" }
                    p { class: "detail-location",
                        i { class: "fa-solid fa-location-dot" }
                        " {landmark.location}"
                    }
                    p { class: "detail-meta",
                        span { class: "era-badge", "{landmark.era}" }
                        span { class: "landmark-rating",
                            i { class: "fa-solid fa-star" }
                            " {landmark.rating:.1}"
                        }
                    }
                    p { class: "detail-description", "{landmark.description}" }

                    div { class: "mode-toggle",
                        button {
                            class: if is_past { "mode-button active" } else { "mode-button" },
                            onclick: move |_| view_mode.set(TravelKind::Past),
                            i { class: "fa-solid fa-clock-rotate-left" }
                            span { " Past" }
                        }
                        button {
                            class: if !is_past { "mode-button active" } else { "mode-button" },
                            onclick: move |_| view_mode.set(TravelKind::Future),
                            i { class: "fa-solid fa-compass" }
                            span { " Future" }
                        }
                    }

                    div { class: "year-display",
                        span { class: "year-text", "{year}" }
                        span { class: "era-badge", "{era.era}" }
                    }

                    TimeSlider {
                        min_year,
                        max_year,
                        current_year: year,
                        is_past,
                        on_year_change: move |new_year| selected_year.set(new_year),
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
                        img { class: "generated-image", src: "{uri}" }
                    }
                }
            }
        }
    }
}

//! My Trips tab: the saved travel history.

use chronolens_types::{TravelKind, TravelRecord};
use dioxus::prelude::*;

use super::toast::{ToastSeverity, use_toast};
use crate::state::use_time_explorer;

/// "Jan 5, 14:32" style stamp from epoch milliseconds.
fn format_created_at(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(when) => when.format("%b %-d, %H:%M").to_string(),
        None => String::new(),
    }
}

#[component]
pub fn TripsScreen() -> Element {
    let mut explorer = use_time_explorer();
    let mut toast = use_toast();
    // Clear-all asks for a second click instead of a blocking dialog.
    let mut confirm_clear = use_signal(|| false);

    let history = explorer.history();
    let past_count = history.iter().filter(|t| t.kind == TravelKind::Past).count();
    let future_count = history.len() - past_count;

    let on_clear = move |_| {
        if !confirm_clear() {
            confirm_clear.set(true);
            return;
        }
        confirm_clear.set(false);
        if let Err(err) = explorer.clear_history() {
            tracing::warn!(error = %err, "failed to persist cleared history");
            toast.show("History cleared, but saving failed.", ToastSeverity::Error);
        }
    };

    rsx! {
        div { class: "trips-screen",
            header { class: "screen-header row",
                div {
                    h1 { "My Time Travels" }
                    p { class: "subtitle", "Your journey through history" }
                }
                if !history.is_empty() {
                    button {
                        class: if confirm_clear() { "btn btn-clear confirm" } else { "btn btn-clear" },
                        onclick: on_clear,
                        if confirm_clear() { "Really clear all?" } else { "Clear All" }
                    }
                }
            }

            if history.is_empty() {
                div { class: "empty-state",
                    i { class: "fa-solid fa-clock" }
                    h3 { "No Time Travels Yet" }
                    p { "Start exploring the past and future to save your journeys here" }
                }
            } else {
                div { class: "trip-stats",
                    div { class: "stat-card",
                        span { class: "stat-number", "{history.len()}" }
                        span { class: "stat-label", "Total Trips" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-number", "{past_count}" }
                        span { class: "stat-label", "Past Visits" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-number", "{future_count}" }
                        span { class: "stat-label", "Future Visits" }
                    }
                }

                div { class: "trip-list",
                    for trip in history.iter() {
                        TripCard { key: "{trip.id}", trip: trip.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn TripCard(trip: TravelRecord) -> Element {
    let mut explorer = use_time_explorer();
    let mut toast = use_toast();

    let trip_id = trip.id.clone();
    let on_delete = move |_| {
        if let Err(err) = explorer.remove_from_history(&trip_id) {
            tracing::warn!(error = %err, "failed to persist history removal");
            toast.show("Trip removed, but saving failed.", ToastSeverity::Error);
        }
    };

    let kind_class = match trip.kind {
        TravelKind::Past => "trip-badge past",
        TravelKind::Future => "trip-badge future",
    };
    let when = format_created_at(trip.created_at);

    rsx! {
        div { class: "trip-card",
            img { class: "trip-image", src: "{trip.image_uri}" }
            div { class: "trip-content",
                div { class: "trip-header",
                    span { class: "{kind_class}", "{trip.kind.label()}" }
                    button {
                        class: "btn btn-delete",
                        onclick: on_delete,
                        i { class: "fa-solid fa-trash" }
                    }
                }
                div { class: "trip-info",
                    span { class: "trip-name", "{trip.landmark_name}" }
                    span { class: "trip-detail",
                        i { class: "fa-solid fa-clock" }
                        " Year {trip.year}"
                    }
                    span { class: "trip-detail",
                        i { class: "fa-solid fa-calendar" }
                        " {when}"
                    }
                }
            }
        }
    }
}

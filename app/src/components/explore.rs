//! Explore tab: searchable, filterable landmark grid.

use chronolens_core::data::{CATEGORIES, LANDMARKS, Landmark};
use dioxus::prelude::*;

use super::landmark_detail::LandmarkDetail;

/// Case-insensitive name/location match plus category chip filter.
fn matching_landmarks(query: &str, category: &str) -> Vec<&'static Landmark> {
    let query = query.to_lowercase();
    LANDMARKS
        .iter()
        .filter(|landmark| {
            let matches_search = query.is_empty()
                || landmark.name.to_lowercase().contains(&query)
                || landmark.location.to_lowercase().contains(&query);
            let matches_category = category == "All" || landmark.category == category;
            matches_search && matches_category
        })
        .collect()
}

#[component]
pub fn ExploreScreen() -> Element {
    let mut search_query = use_signal(String::new);
    let mut selected_category = use_signal(|| "All".to_string());
    let mut open_landmark = use_signal(|| None::<String>);

    let query = search_query();
    let category = selected_category();
    let filtered = matching_landmarks(&query, &category);

    rsx! {
        div { class: "explore-screen",
            header { class: "screen-header",
                h1 { "Landmarks Explorer" }
                p { class: "subtitle", "Discover iconic places through time" }
            }

            div { class: "search-box",
                i { class: "fa-solid fa-magnifying-glass" }
                input {
                    r#type: "text",
                    class: "search-input",
                    placeholder: "Search landmarks...",
                    value: "{query}",
                    oninput: move |e| search_query.set(e.value()),
                }
            }

            div { class: "category-row",
                for name in CATEGORIES.iter() {
                    {
                        let name = *name;
                        let is_selected = category == name;
                        rsx! {
                            button {
                                class: if is_selected { "category-chip selected" } else { "category-chip" },
                                onclick: move |_| selected_category.set(name.to_string()),
                                "{name}"
                            }
                        }
                    }
                }
            }

            if filtered.is_empty() {
                div { class: "empty-state",
                    i { class: "fa-solid fa-map-pin" }
                    p { "No landmarks match your search" }
                }
            } else {
                div { class: "landmark-grid",
                    for landmark in filtered {
                        {
                            let id = landmark.id;
                            rsx! {
                                button {
                                    key: "{id}",
                                    class: "landmark-tile",
                                    onclick: move |_| open_landmark.set(Some(id.to_string())),
                                    img { class: "landmark-image", src: "{landmark.image_url}" }
                                    div { class: "landmark-overlay",
                                        span { class: "landmark-name", "{landmark.name}" }
                                        span { class: "landmark-location",
                                            i { class: "fa-solid fa-location-dot" }
                                            " {landmark.location}"
                                        }
                                        span { class: "landmark-rating",
                                            i { class: "fa-solid fa-star" }
                                            " {landmark.rating:.1}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(id) = open_landmark() {
                LandmarkDetail {
                    landmark_id: id,
                    on_close: move |_| open_landmark.set(None),
                }
            }
        }
    }
}

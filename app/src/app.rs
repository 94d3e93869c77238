use chronolens_core::config::AppConfig;
use chronolens_core::generate::ImageClient;
use chronolens_types::TravelKind;
use dioxus::prelude::*;

use crate::components::{
    ExploreScreen, LearnScreen, Onboarding, PhotoLabScreen, ToastFrame, TravelScreen, TripsScreen,
    use_toast_provider,
};
use crate::state::use_time_explorer_provider;

static CSS: Asset = asset!("/assets/styles.css");

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Past,
    Future,
    Photo,
    Explore,
    Trips,
    Learn,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Past,
            Tab::Future,
            Tab::Photo,
            Tab::Explore,
            Tab::Trips,
            Tab::Learn,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Past => "Past View",
            Tab::Future => "Future View",
            Tab::Photo => "Photo",
            Tab::Explore => "Explore",
            Tab::Trips => "My Trips",
            Tab::Learn => "Learn",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Past => "fa-solid fa-clock",
            Tab::Future => "fa-solid fa-compass",
            Tab::Photo => "fa-solid fa-image",
            Tab::Explore => "fa-solid fa-map-location-dot",
            Tab::Trips => "fa-solid fa-bookmark",
            Tab::Learn => "fa-solid fa-book-open",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Component
// ─────────────────────────────────────────────────────────────────────────────

pub fn App() -> Element {
    let _explorer = use_time_explorer_provider();
    use_toast_provider();

    let mut config = use_signal(AppConfig::load);

    // One HTTP client for the whole app; screens grab it from context.
    use_context_provider(|| {
        let base_url = config.peek().toolkit_base_url.clone();
        ImageClient::with_base_url(base_url)
            .unwrap_or_else(|err| panic!("failed to initialize image client: {err}"))
    });

    let mut active_tab = use_signal(|| Tab::Past);
    let mut show_onboarding = use_signal(|| !config.peek().onboarding_completed);

    let current_tab = active_tab();
    let screen = match current_tab {
        Tab::Past => rsx! { TravelScreen { kind: TravelKind::Past } },
        Tab::Future => rsx! { TravelScreen { kind: TravelKind::Future } },
        Tab::Photo => rsx! { PhotoLabScreen {} },
        Tab::Explore => rsx! { ExploreScreen {} },
        Tab::Trips => rsx! { TripsScreen {} },
        Tab::Learn => rsx! { LearnScreen {} },
    };

    rsx! {
        link { rel: "stylesheet", href: CSS }
        link { rel: "stylesheet", href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" }
        main { class: "container",
            div { class: "screen", {screen} }

            nav { class: "tab-bar",
                for tab in Tab::all() {
                    {
                        let tab = *tab;
                        let is_active = tab == current_tab;
                        rsx! {
                            button {
                                class: if is_active { "tab-button active" } else { "tab-button" },
                                onclick: move |_| active_tab.set(tab),
                                i { class: "{tab.icon()}" }
                                span { class: "tab-label", "{tab.label()}" }
                            }
                        }
                    }
                }
            }

            if show_onboarding() {
                Onboarding {
                    on_complete: move |_| {
                        show_onboarding.set(false);
                        let mut updated = config();
                        updated.onboarding_completed = true;
                        if let Err(err) = updated.clone().save() {
                            tracing::warn!(error = %err, "failed to persist onboarding flag");
                        }
                        config.set(updated);
                    },
                }
            }

            ToastFrame {}
        }
    }
}

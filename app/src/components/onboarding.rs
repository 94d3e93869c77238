//! First-run onboarding overlay.
//!
//! Three intro steps; finishing fires `on_complete`, which the app root uses
//! to persist the completed flag.

use dioxus::prelude::*;

struct OnboardingStep {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        icon: "fa-solid fa-clock",
        title: "Travel Through Time",
        description: "Explore how cities and landmarks looked hundreds of years ago",
    },
    OnboardingStep {
        icon: "fa-solid fa-compass",
        title: "Glimpse the Future",
        description: "See AI-powered visions of how places might evolve in coming centuries",
    },
    OnboardingStep {
        icon: "fa-solid fa-camera",
        title: "Photo Time Machine",
        description: "Transform your own photos to see their past and future instantly",
    },
];

#[component]
pub fn Onboarding(on_complete: EventHandler<()>) -> Element {
    let mut current_step = use_signal(|| 0usize);

    let step_idx = current_step();
    let step = &STEPS[step_idx];
    let is_last = step_idx == STEPS.len() - 1;

    let on_next = move |_| {
        if is_last {
            on_complete.call(());
        } else {
            current_step.set(step_idx + 1);
        }
    };

    rsx! {
        div { class: "modal-backdrop onboarding",
            div { class: "onboarding-panel",
                div { class: "onboarding-icon",
                    i { class: "{step.icon}" }
                }
                h2 { "{step.title}" }
                p { class: "onboarding-description", "{step.description}" }

                div { class: "step-dots",
                    for (idx, _) in STEPS.iter().enumerate() {
                        div {
                            class: if idx == step_idx { "step-dot active" } else { "step-dot" },
                        }
                    }
                }

                button {
                    class: "btn btn-generate",
                    onclick: on_next,
                    if is_last { "Get Started" } else { "Next" }
                }

                if !is_last {
                    button {
                        class: "btn btn-skip",
                        onclick: move |_| on_complete.call(()),
                        "Skip"
                    }
                }
            }
        }
    }
}

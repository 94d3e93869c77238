//! Learn tab: Time Academy lessons and quizzes.

use chronolens_core::data::{LESSONS, QUIZZES};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LearnTab {
    Lessons,
    Quizzes,
}

/// Placeholder until quiz progress is wired up to scoring.
const USER_POINTS: u32 = 250;

#[component]
pub fn LearnScreen() -> Element {
    let mut selected_tab = use_signal(|| LearnTab::Lessons);
    let tab = selected_tab();

    rsx! {
        div { class: "learn-screen",
            header { class: "screen-header row",
                div {
                    h1 { "Time Academy" }
                    p { class: "subtitle", "Learn about past & future" }
                }
                div { class: "points-badge",
                    i { class: "fa-solid fa-award" }
                    span { "{USER_POINTS}" }
                }
            }

            div { class: "mode-toggle",
                button {
                    class: if tab == LearnTab::Lessons { "mode-button active" } else { "mode-button" },
                    onclick: move |_| selected_tab.set(LearnTab::Lessons),
                    i { class: "fa-solid fa-book-open" }
                    span { " Lessons" }
                }
                button {
                    class: if tab == LearnTab::Quizzes { "mode-button active" } else { "mode-button" },
                    onclick: move |_| selected_tab.set(LearnTab::Quizzes),
                    i { class: "fa-solid fa-brain" }
                    span { " Quizzes" }
                }
            }

            if tab == LearnTab::Lessons {
                div { class: "featured-card",
                    i { class: "fa-solid fa-lightbulb" }
                    div { class: "featured-content",
                        span { class: "featured-title", "Today's Discovery" }
                        span { class: "featured-text",
                            "How climate change will reshape coastal cities by 2100"
                        }
                    }
                }

                div { class: "lesson-list",
                    for lesson in LESSONS.iter() {
                        div { class: "lesson-card", key: "{lesson.id}",
                            div { class: "lesson-icon",
                                i { class: "fa-solid fa-book-open" }
                            }
                            div { class: "lesson-content",
                                span { class: "lesson-title", "{lesson.title}" }
                                span { class: "lesson-description", "{lesson.description}" }
                                div { class: "lesson-meta",
                                    span { class: "lesson-duration", "{lesson.duration}" }
                                    span { class: "difficulty-badge", "{lesson.difficulty}" }
                                }
                            }
                            i { class: "fa-solid fa-chevron-right" }
                        }
                    }
                }
            } else {
                div { class: "quiz-header",
                    h3 { "Test Your Knowledge" }
                    p { "Complete quizzes to earn points and unlock premium content" }
                }

                div { class: "quiz-list",
                    for quiz in QUIZZES.iter() {
                        {
                            let locked = quiz.locked;
                            rsx! {
                                div {
                                    key: "{quiz.id}",
                                    class: if locked { "quiz-card locked" } else { "quiz-card" },
                                    div { class: "quiz-icon",
                                        if locked {
                                            i { class: "fa-solid fa-lock" }
                                        } else {
                                            i { class: "fa-solid fa-brain" }
                                        }
                                    }
                                    div { class: "quiz-content",
                                        span { class: "quiz-title", "{quiz.title}" }
                                        span { class: "quiz-meta",
                                            "{quiz.questions} questions · {quiz.points} points"
                                        }
                                        if let Some(required) = quiz.required_points {
                                            span { class: "quiz-locked-hint",
                                                "Requires {required} points"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

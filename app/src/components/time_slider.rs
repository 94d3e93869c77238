//! Year range slider.
//!
//! A draggable thumb over a fixed-width track, mapping the drag position to
//! an integer year. The thumb follows the pointer live, but `on_year_change`
//! fires exactly once, at gesture release. While no gesture is active the
//! thumb position is derived from the `current_year` prop, so external year
//! changes sync into the control without echoing back through the callback.

use chronolens_core::slider::{DragGesture, YearScale};
use dioxus::prelude::*;

/// Fixed track width in pixels; must match the `.slider-track` CSS width.
const TRACK_WIDTH: f64 = 640.0;

#[component]
pub fn TimeSlider(
    min_year: i32,
    max_year: i32,
    current_year: i32,
    is_past: bool,
    on_year_change: EventHandler<i32>,
) -> Element {
    let scale = YearScale::new(min_year, max_year);

    // In-flight gesture, if any, plus the pointer x captured at press.
    let mut gesture = use_signal(|| None::<DragGesture>);
    let mut drag_origin_x = use_signal(|| 0.0f64);

    let thumb_offset = match *gesture.read() {
        Some(active) => active.offset(),
        None => scale.offset_for_year(current_year, TRACK_WIDTH),
    };
    let fill_pct = thumb_offset / TRACK_WIDTH * 100.0;
    let theme = if is_past { "past" } else { "future" };
    let dragging = gesture.read().is_some();

    rsx! {
        div { class: "time-slider",
            // While dragging, a full-window transparent layer captures the
            // pointer so the gesture survives leaving the thumb.
            if dragging {
                div {
                    class: "slider-drag-overlay",
                    onmousemove: move |e| {
                        let dx = e.client_coordinates().x - drag_origin_x();
                        if let Some(active) = gesture.write().as_mut() {
                            active.update(dx);
                        }
                    },
                    onmouseup: move |_| {
                        let finished = gesture.write().take();
                        if let Some(active) = finished {
                            on_year_change.call(active.release(&scale));
                        }
                    },
                }
            }

            div { class: "slider-track",
                div {
                    class: "slider-fill {theme}",
                    style: "width: {fill_pct}%;",
                }
                for year in scale.markers() {
                    {
                        let left = scale.offset_for_year(year, TRACK_WIDTH);
                        rsx! {
                            div {
                                key: "{year}",
                                class: "slider-marker",
                                style: "left: {left}px;",
                                span { class: "marker-label", "{year}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "slider-thumb {theme}",
                style: "left: {thumb_offset}px;",
                onmousedown: move |e| {
                    drag_origin_x.set(e.client_coordinates().x);
                    let base = scale.offset_for_year(current_year, TRACK_WIDTH);
                    gesture.set(Some(DragGesture::begin(base, TRACK_WIDTH)));
                },
                div { class: "slider-thumb-inner" }
            }
        }
    }
}

//! Photo tab: run canned time transformations over a user photo.
//!
//! The photo is loaded from a path the user types or pastes (native file
//! pickers and their permission flows are out of scope), encoded to base64,
//! and sent to the edit endpoint with one of the four fixed prompts.

use std::path::Path;

use chronolens_core::generate::{
    ImageClient, TransformKind, encode_photo, photo_mime_type,
};
use dioxus::prelude::*;

use super::toast::{ToastSeverity, use_toast};

/// A photo loaded into the lab: display URI plus the raw base64 payload the
/// edit endpoint wants.
#[derive(Clone, PartialEq)]
struct LoadedPhoto {
    data_uri: String,
    base64: String,
}

fn load_photo(path: &str) -> std::io::Result<LoadedPhoto> {
    let bytes = std::fs::read(path)?;
    let base64 = encode_photo(&bytes);
    let mime = photo_mime_type(Path::new(path));
    Ok(LoadedPhoto {
        data_uri: format!("data:{mime};base64,{base64}"),
        base64,
    })
}

#[component]
pub fn PhotoLabScreen() -> Element {
    let client = use_context::<ImageClient>();
    let mut toast = use_toast();

    let mut photo_path = use_signal(String::new);
    let mut original = use_signal(|| None::<LoadedPhoto>);
    let mut transformed = use_signal(|| None::<String>);
    let mut transforming = use_signal(|| false);

    let on_load = move |_| {
        let path = photo_path();
        if path.trim().is_empty() {
            return;
        }
        match load_photo(path.trim()) {
            Ok(photo) => {
                original.set(Some(photo));
                transformed.set(None);
            }
            Err(err) => {
                tracing::warn!(error = %err, path, "failed to load photo");
                toast.show("Could not read that photo file.", ToastSeverity::Error);
            }
        }
    };

    let on_transform = move |kind: TransformKind| {
        let client = client.clone();
        let Some(photo) = original() else { return };
        spawn(async move {
            transforming.set(true);
            transformed.set(None);

            match client.edit(kind.prompt(), &photo.base64).await {
                Ok(image) => transformed.set(Some(image.data_uri())),
                Err(err) => {
                    tracing::warn!(error = %err, "photo transform failed");
                    toast.show(
                        "Failed to transform image. Please try again.",
                        ToastSeverity::Error,
                    );
                }
            }
            transforming.set(false);
        });
    };

    let loaded = original();
    let result = transformed();
    let busy = transforming();

    rsx! {
        div { class: "photo-screen",
            header { class: "screen-header",
                h1 { "Photo Time Machine" }
                p { class: "subtitle", "Transform any photo through time" }
            }

            div { class: "photo-loader",
                input {
                    r#type: "text",
                    class: "path-input",
                    placeholder: "Path to a photo (.png / .jpg)...",
                    value: "{photo_path}",
                    oninput: move |e| photo_path.set(e.value()),
                }
                button {
                    class: "btn btn-load",
                    onclick: on_load,
                    i { class: "fa-solid fa-upload" }
                    span { " Load Photo" }
                }
            }

            if let Some(ref photo) = loaded {
                div { class: "photo-preview-row",
                    div { class: "photo-wrapper",
                        span { class: "photo-label", "Original" }
                        img { class: "photo-preview", src: "{photo.data_uri}" }
                    }
                    if busy {
                        div { class: "photo-wrapper",
                            span { class: "photo-label", "Processing..." }
                            div { class: "photo-loading",
                                i { class: "fa-solid fa-spinner fa-spin" }
                                p { "Transforming through time..." }
                            }
                        }
                    } else if let Some(ref uri) = result {
                        div { class: "photo-wrapper",
                            span { class: "photo-label", "Transformed" }
                            img { class: "photo-preview", src: "{uri}" }
                        }
                    }
                }

                section { class: "transform-section",
                    h2 { class: "section-title", "Choose Transformation" }
                    div { class: "transform-grid",
                        for kind in TransformKind::all() {
                            {
                                let kind = *kind;
                                let mut on_transform = on_transform.clone();
                                rsx! {
                                    button {
                                        class: "btn btn-transform",
                                        disabled: busy,
                                        onclick: move |_| on_transform(kind),
                                        "{kind.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "empty-state",
                    i { class: "fa-solid fa-image" }
                    h3 { "Load a photo to begin" }
                    p { "Works with portraits, landmarks, and locations" }
                }
            }
        }
    }
}

//! Transient notification banners.
//!
//! The original screens surfaced failures through blocking alert dialogs;
//! here they land as auto-dismissing toasts in a corner stack. A manager
//! lives in context so any screen can raise one.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Informational - short-lived
    Info,
    /// Failures the user should read - sticks around longer
    Error,
}

impl ToastSeverity {
    fn display_duration(self) -> Duration {
        match self {
            ToastSeverity::Info => Duration::from_secs(4),
            ToastSeverity::Error => Duration::from_secs(6),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastSeverity::Info => "fa-solid fa-circle-info",
            ToastSeverity::Error => "fa-solid fa-triangle-exclamation",
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// At most this many toasts are stacked; older ones are dropped first.
const MAX_TOASTS: usize = 4;

/// Handle for raising toasts. Access via [`use_toast`].
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Queue a toast; it auto-dismisses after its severity's duration.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts_signal = self.toasts;
        spawn(async move {
            tokio::time::sleep(severity.display_duration()).await;
            toasts_signal.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the toast manager at the app root, before any child that calls
/// [`use_toast`].
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders the active toast stack. Place once at the end of the main layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Info => "toast",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    span { class: "toast-icon",
                        i { class: "{toast.severity.icon()}" }
                    }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "✕"
                    }
                }
            }
        }
    }
}

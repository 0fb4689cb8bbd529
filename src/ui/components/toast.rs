use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use crate::util::generate_id;

const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Errors linger so they can be read.
    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Error => Duration::from_secs(9),
            ToastKind::Warning => Duration::from_secs(7),
            ToastKind::Info | ToastKind::Success => Duration::from_secs(5),
        }
    }

    /// Tailwind classes and leading glyph.
    fn style(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Info => ("border-sky-500/40 bg-sky-950/80 text-sky-100", "ℹ️"),
            ToastKind::Success => (
                "border-emerald-500/40 bg-emerald-950/80 text-emerald-100",
                "✅",
            ),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-950/80 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-950/80 text-rose-100", "⛔"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    debug!(kind = ?message.kind, text = %message.text, "toast");
    toasts.with_mut(|entries| push_bounded(entries, message));
}

fn dismiss_toast(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|entries| entries.retain(|toast| toast.id != id));
}

/// Oldest entries are dropped once the stack is full.
fn push_bounded(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    let overflow = (entries.len() + 1).saturating_sub(MAX_TOASTS);
    entries.drain(..overflow);
    entries.push(message);
}

/// Stack of notifications in the bottom-right corner.
#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    rsx! {
        ol {
            class: "pointer-events-none fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2",
            "aria-live": "polite",
            for message in entries {
                ToastCard { key: "{message.id}", message, toasts }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let id = message.id.clone();
    let lifetime = message.kind.lifetime();
    use_future(move || {
        let id = id.clone();
        async move {
            tokio::time::sleep(lifetime).await;
            dismiss_toast(toasts, &id);
        }
    });

    let (tone, icon) = message.kind.style();
    let id = message.id.clone();
    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-lg border px-3 py-2 text-sm shadow-lg {tone}",
            span { "{icon}" }
            p { class: "flex-1", "{message.text}" }
            button {
                class: "text-xs opacity-70 hover:opacity-100",
                title: "Dismiss",
                onclick: move |_| dismiss_toast(toasts, &id),
                "✕"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut entries = Vec::new();
        for index in 0..=MAX_TOASTS {
            push_bounded(&mut entries, ToastMessage::new(ToastKind::Info, format!("#{index}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries[0].text, "#1");
    }

    #[test]
    fn errors_outlive_info() {
        assert!(ToastKind::Error.lifetime() > ToastKind::Info.lifetime());
        assert!(ToastKind::Warning.lifetime() > ToastKind::Success.lifetime());
    }
}

use std::time::Duration;

use dioxus::prelude::*;
use tracing::warn;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
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

pub type Toasts = Signal<Vec<ToastMessage>>;

pub fn push_toast(mut toasts: Toasts, kind: ToastKind, message: impl Into<String>) {
    let message = ToastMessage::new(kind, message);
    if kind == ToastKind::Error {
        warn!(toast = %message.text, "error shown to user");
    }
    toasts.with_mut(|entries| push_bounded(entries, message));
}

/// Appends `message`, dropping the oldest entries beyond the visible limit.
fn push_bounded(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    entries.push(message);
    let overflow = entries.len().saturating_sub(MAX_VISIBLE_TOASTS);
    entries.drain(..overflow);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Toasts>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed right-4 top-20 flex flex-col items-end",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view: view.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Toasts) -> Element {
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg {view.theme}",
            span { class: "text-lg", "{view.icon}" }
            p { class: "text-sm font-medium", "{view.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = view.id.clone();
                    let mut toasts = toasts;
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "✕"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Success => ("border-emerald-500/40 bg-emerald-500/10 text-emerald-100", "✅"),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toasts_are_dropped() {
        let mut entries = Vec::new();
        for n in 0..6 {
            push_bounded(&mut entries, ToastMessage::new(ToastKind::Info, format!("t{n}")));
        }
        let texts: Vec<_> = entries.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn warnings_render_amber() {
        let view = ToastView::from(ToastMessage::new(ToastKind::Warning, "Dashboard unavailable"));
        assert!(view.theme.contains("amber"));
        assert_eq!(view.icon, "⚠️");
        assert_eq!(view.text, "Dashboard unavailable");
    }
}

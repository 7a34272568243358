use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{
        privacy::{COMPLIANCE_FRAMEWORKS, DELETION_CONTENTS, EXPORT_CONTENTS, PRIVACY_STORAGE_KEY},
        AppState, PrivacySetting, UserType,
    },
    infra::LocalStorage,
    ui::{
        components::toast::{push_toast, ToastKind, Toasts},
        theme,
    },
};

#[derive(Clone, Copy, PartialEq)]
enum PendingAction {
    Export,
    Delete,
}

#[component]
pub fn PrivacyPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();
    let storage = use_context::<LocalStorage>();
    let mut dialog = use_signal(|| None::<PendingAction>);

    let role = state.with(|st| st.user_type());
    let settings = state.with(|st| st.privacy.clone());
    let stored = state.with(|st| st.submitted.len());
    let location = storage
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable on this platform".to_string());

    let on_toggle = use_callback(move |setting: PrivacySetting| {
        let enabled = state.with_mut(|st| st.privacy.toggle(setting));
        let snapshot = state.with(|st| st.privacy.clone());
        match storage.set_json(PRIVACY_STORAGE_KEY, &snapshot) {
            Ok(()) => info!(setting = setting.title(), enabled, "privacy setting changed"),
            Err(err) => {
                warn!("failed to persist privacy settings: {err}");
                push_toast(toasts, ToastKind::Error, "Could not save privacy settings.");
            }
        }
    });

    let on_confirm = move |_| {
        let message = match dialog() {
            Some(PendingAction::Export) => {
                "Export requested. It will be sent to your registered email within 24 hours."
            }
            Some(PendingAction::Delete) => {
                "Deletion requested. Your account data will be removed within 30 days."
            }
            None => return,
        };
        dialog.set(None);
        push_toast(toasts, ToastKind::Info, message);
    };

    let retention_detail = if settings.data_retention {
        "being retained"
    } else {
        "set for 24-hour deletion"
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-3xl font-semibold text-slate-100", "Privacy & Data Control Center" }
                p { class: "mt-1 text-slate-400",
                    "AXIVAI is built with privacy-first principles. Control how your data is used and stored."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-3",
                section { class: "{theme::panel_solid()} space-y-4 p-6 lg:col-span-2",
                    h3 { class: "{theme::section_title()}", "🔒 Privacy Settings" }
                    for setting in PrivacySetting::ALL {
                        SettingRow {
                            key: "{setting.title()}",
                            setting,
                            enabled: settings.get(setting),
                            role,
                            on_toggle,
                        }
                    }
                }

                section { class: "{theme::panel_solid()} space-y-3 p-6",
                    h3 { class: "{theme::section_title()}", "🛡️ Compliance Status" }
                    for (name, summary) in COMPLIANCE_FRAMEWORKS {
                        div { key: "{name}", class: "rounded-lg border border-slate-800 px-3 py-2",
                            p { class: "text-sm font-semibold text-slate-100", "{name}" }
                            p { class: "text-xs {theme::text_muted()}", "{summary}" }
                        }
                    }
                }
            }

            section { class: "{theme::panel_solid()} p-6",
                h3 { class: "{theme::section_title()}", "Data Management" }
                div { class: "mt-4 grid gap-6 md:grid-cols-2",
                    div { class: "space-y-2",
                        p { class: "font-semibold text-slate-100", "📦 Export Your Data" }
                        p { class: "text-sm text-slate-400", "Download all your data including evaluations, settings, and activity history." }
                        button {
                            class: "{theme::btn_secondary(role)}",
                            onclick: move |_| dialog.set(Some(PendingAction::Export)),
                            "Request Data Export"
                        }
                    }
                    div { class: "space-y-2",
                        p { class: "font-semibold text-rose-300", "🗑️ Delete Account" }
                        p { class: "text-sm text-slate-400", "Permanently delete your account and all associated data. This action cannot be undone." }
                        button {
                            class: "{theme::btn_danger()}",
                            onclick: move |_| dialog.set(Some(PendingAction::Delete)),
                            "Delete Account"
                        }
                    }
                }
            }

            div { class: "{theme::info_banner()}",
                p { class: "font-semibold", "Current Data Retention Status" }
                p { "{settings.retention_status()}" }
                p { "Your evaluation data is currently {retention_detail}. You have {stored} evaluations stored in this session." }
                p { class: "mt-1 text-xs", "Local settings file: {location}" }
            }

            if let Some(action) = dialog() {
                div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
                    div { class: "w-full max-w-md {theme::panel_solid()} space-y-4 bg-slate-900 p-6",
                        if action == PendingAction::Export {
                            h3 { class: "text-lg font-semibold text-slate-100", "Data Export Request" }
                            p { class: "text-sm text-slate-300",
                                "Your data export will be prepared and sent to your registered email address within 24 hours. The export will include:"
                            }
                            ul { class: "list-disc pl-5 text-sm text-slate-400",
                                for line in EXPORT_CONTENTS {
                                    li { key: "{line}", "{line}" }
                                }
                            }
                        } else {
                            h3 { class: "text-lg font-semibold text-rose-300", "Delete Account" }
                            div { class: "{theme::error_banner()}", "This action is permanent and cannot be undone." }
                            p { class: "text-sm text-slate-300", "Deleting your account will permanently remove:" }
                            ul { class: "list-disc pl-5 text-sm text-slate-400",
                                for line in DELETION_CONTENTS {
                                    li { key: "{line}", "{line}" }
                                }
                            }
                        }
                        div { class: "flex justify-end gap-2",
                            button {
                                class: "{theme::btn_secondary(role)}",
                                onclick: move |_| dialog.set(None),
                                "Cancel"
                            }
                            if action == PendingAction::Export {
                                button { class: "{theme::btn_primary(role)}", onclick: on_confirm, "Confirm Export Request" }
                            } else {
                                button { class: "{theme::btn_danger()}", onclick: on_confirm, "Confirm Deletion" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingRow(
    setting: PrivacySetting,
    enabled: bool,
    role: UserType,
    on_toggle: EventHandler<PrivacySetting>,
) -> Element {
    let knob = if enabled { "translate-x-5" } else { "translate-x-0" };
    let track = if enabled {
        theme::btn_small_active(role)
    } else {
        "border border-slate-700 bg-slate-800"
    };

    rsx! {
        div { class: "flex items-start justify-between gap-4 border-b border-slate-800 pb-4",
            div {
                p { class: "font-semibold text-slate-100", "{setting.title()}" }
                p { class: "text-sm text-slate-400", "{setting.description()}" }
            }
            button {
                class: "relative h-6 w-11 shrink-0 rounded-full {track}",
                role: "switch",
                aria_checked: "{enabled}",
                onclick: move |_| on_toggle.call(setting),
                span { class: "absolute left-0.5 top-0.5 h-4 w-4 rounded-full bg-slate-100 transition {knob}" }
            }
        }
    }
}

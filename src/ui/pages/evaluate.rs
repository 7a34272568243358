//! Four-step evaluation form.

use dioxus::prelude::*;
use tracing::info;

use crate::{
    app::Route,
    domain::{AppState, EvaluationDraft, FormStep, LifecycleStage, UserType},
    infra::{ApiClient, ApiError},
    ui::{
        components::toast::{push_toast, ToastKind, Toasts},
        theme,
    },
};

const EVALUATION_FAILED_MESSAGE: &str = "Evaluation failed. Please try again.";

#[component]
pub fn EvaluatePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();
    let client = use_context::<ApiClient>();
    let nav = use_navigator();

    let mut draft = use_signal(EvaluationDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let role = state.with(|st| st.user_type());
    let current = draft();
    let step = current.step;

    let on_submit = move |_| {
        if busy() {
            return;
        }
        let request = match draft.with(|d| d.to_request()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let client = client.clone();
        let mut state = state;
        spawn(async move {
            match client.submit_evaluation(&request).await {
                Ok(result) => {
                    info!(id = %result.evaluation_id, verdict = %result.verdict, "evaluation received");
                    let id = result.evaluation_id.clone();
                    state.with_mut(|st| st.record_result(request.company_name.clone(), result));
                    push_toast(toasts, ToastKind::Success, format!("{} evaluated.", request.company_name));
                    draft.set(EvaluationDraft::default());
                    nav.push(Route::Results { id });
                }
                Err(ApiError::Domain(message)) => error.set(Some(message)),
                Err(other) => {
                    tracing::warn!("evaluation response unusable: {other}");
                    error.set(Some(EVALUATION_FAILED_MESSAGE.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6",
            h2 { class: "text-center text-3xl font-semibold text-slate-100", "Startup Evaluation" }

            ol { class: "grid grid-cols-4 gap-2",
                for candidate in FormStep::ALL {
                    li {
                        key: "{candidate.label()}",
                        class: if candidate == step { theme::btn_small_active(role) } else { theme::btn_small_inactive(role) },
                        "{candidate.index() + 1}. {candidate.label()}"
                    }
                }
            }

            section {
                class: "{theme::panel_border(role)} space-y-4 p-6",
                {match step {
                    FormStep::BasicInfo => rsx! {
                        Field {
                            label: "Company Name *",
                            value: current.company_name.clone(),
                            role,
                            on_input: move |v| draft.with_mut(|d| d.company_name = v),
                        }
                        div {
                            label { class: "{theme::label_class()}", "Lifecycle Stage" }
                            select {
                                class: "{theme::input_class(role)}",
                                value: "{current.stage.0}",
                                onchange: move |evt| {
                                    if let Ok(raw) = evt.value().parse::<u8>() {
                                        draft.with_mut(|d| d.stage = LifecycleStage(raw));
                                    }
                                },
                                for stage in LifecycleStage::ALL {
                                    option {
                                        key: "{stage.0}",
                                        value: "{stage.0}",
                                        selected: stage == current.stage,
                                        "{stage.option_label()}"
                                    }
                                }
                            }
                        }
                        Field {
                            label: "Company Description *",
                            value: current.description.clone(),
                            placeholder: "Describe your startup, what problem it solves, and your solution...",
                            rows: 4,
                            role,
                            on_input: move |v| draft.with_mut(|d| d.description = v),
                        }
                    },
                    FormStep::BusinessDetails => rsx! {
                        Field {
                            label: "Market Size (TAM/SAM/SOM)",
                            value: current.market_size.clone(),
                            placeholder: "e.g., $50B TAM, $5B SAM, $500M SOM",
                            role,
                            on_input: move |v| draft.with_mut(|d| d.market_size = v),
                        }
                        Field {
                            label: "Business Model",
                            value: current.business_model.clone(),
                            placeholder: "How do you make money? Subscription, marketplace, freemium...",
                            rows: 3,
                            role,
                            on_input: move |v| draft.with_mut(|d| d.business_model = v),
                        }
                        Field {
                            label: "Team Information",
                            value: current.team_info.clone(),
                            placeholder: "Key team members, their backgrounds, and relevant experience...",
                            rows: 3,
                            role,
                            on_input: move |v| draft.with_mut(|d| d.team_info = v),
                        }
                    },
                    FormStep::Financials => rsx! {
                        h3 { class: "{theme::section_title()}", "Financial Metrics (Optional)" }
                        div { class: "grid gap-4 sm:grid-cols-2",
                            Field {
                                label: "Annual Revenue ($)",
                                value: current.revenue.clone(),
                                placeholder: "0",
                                numeric: true,
                                role,
                                on_input: move |v| draft.with_mut(|d| d.revenue = v),
                            }
                            Field {
                                label: "Total Users/Customers",
                                value: current.users.clone(),
                                placeholder: "0",
                                numeric: true,
                                role,
                                on_input: move |v| draft.with_mut(|d| d.users = v),
                            }
                            Field {
                                label: "Monthly Growth Rate (%)",
                                value: current.growth_rate.clone(),
                                placeholder: "5",
                                numeric: true,
                                role,
                                on_input: move |v| draft.with_mut(|d| d.growth_rate = v),
                            }
                            Field {
                                label: "Monthly Burn Rate ($)",
                                value: current.burn_rate.clone(),
                                placeholder: "10000",
                                numeric: true,
                                role,
                                on_input: move |v| draft.with_mut(|d| d.burn_rate = v),
                            }
                        }
                    },
                    FormStep::Submit => rsx! {
                        div { class: "{theme::panel_solid()} space-y-1 p-4 text-sm text-slate-300",
                            p { span { class: "text-slate-500", "Company: " } "{current.company_name}" }
                            p { span { class: "text-slate-500", "Stage: " } "{current.stage.option_label()}" }
                        }
                        label {
                            class: "flex cursor-pointer items-center gap-3 text-sm text-slate-300",
                            input {
                                r#type: "checkbox",
                                checked: current.privacy_mode,
                                onchange: move |evt| draft.with_mut(|d| d.privacy_mode = evt.checked()),
                            }
                            "Privacy Mode (Data not retained after evaluation)"
                        }
                        if let Some(message) = error() {
                            div { class: "{theme::error_banner()}", "{message}" }
                        }
                    },
                }}
            }

            div { class: "flex justify-between",
                button {
                    class: "{theme::btn_secondary(role)}",
                    disabled: !current.can_go_back(),
                    onclick: move |_| draft.with_mut(|d| d.back()),
                    "Back"
                }
                if step.is_last() {
                    button {
                        class: "{theme::btn_primary(role)}",
                        disabled: busy() || !current.has_required_fields(),
                        onclick: on_submit,
                        if busy() { "Evaluating..." } else { "Submit for Evaluation" }
                    }
                } else {
                    button {
                        class: "{theme::btn_primary(role)}",
                        disabled: !current.can_advance(),
                        onclick: move |_| {
                            draft.with_mut(|d| {
                                d.advance();
                            });
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn Field(
    label: &'static str,
    value: String,
    #[props(default)] placeholder: &'static str,
    #[props(default)] rows: u8,
    #[props(default)] numeric: bool,
    role: UserType,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: "{theme::label_class()}", "{label}" }
            if rows > 0 {
                textarea {
                    class: "{theme::input_class(role)}",
                    rows: "{rows}",
                    placeholder,
                    value,
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    class: "{theme::input_class(role)}",
                    r#type: if numeric { "number" } else { "text" },
                    placeholder,
                    value,
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
        }
    }
}

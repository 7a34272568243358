use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{agent_display_name, percent_label, AppState, ExplainabilityLevel},
    ui::{
        components::{verdict_badge::verdict_theme, ScoreBar},
        theme,
    },
};

#[component]
pub fn ResultsPage(id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut level = use_signal(ExplainabilityLevel::default);

    let role = state.with(|st| st.user_type());
    let Some(entry) = state.with(|st| st.find_result(&id).cloned()) else {
        return rsx! {
            div { class: "mx-auto max-w-3xl space-y-4",
                div { class: "{theme::error_banner()}", "Evaluation result not found" }
                button {
                    class: "{theme::btn_secondary(role)}",
                    onclick: move |_| { nav.push(Route::Evaluate {}); },
                    "Start a new evaluation"
                }
            }
        };
    };

    let result = entry.result;
    let verdict = result.verdict;
    let agent_scores = result.ordered_agent_scores();
    let selected = level();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-3xl font-semibold text-slate-100", "Evaluation Results" }
                    p { class: "text-sm {theme::text_muted()}", "{entry.company_name} · {result.evaluation_id}" }
                }
                button {
                    class: "{theme::btn_secondary(role)}",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "Back to Dashboard"
                }
            }

            section { class: "rounded-xl border p-6 {verdict_theme(verdict)}",
                div { class: "flex items-center gap-3",
                    span { class: "text-3xl", "{verdict.icon()}" }
                    h3 { class: "flex-1 text-2xl font-semibold", "{verdict.title()}" }
                    span { class: "rounded-full border px-3 py-1 text-sm font-semibold", "{percent_label(result.overall_score)} Score" }
                }
                p { class: "mt-2 text-sm opacity-80", "{verdict.description()}" }
                p { class: "mt-4 text-slate-200", "{result.explanation}" }
            }

            section { class: "{theme::panel_solid()} p-6",
                h3 { class: "{theme::section_title()}", "Agent Breakdown" }
                div { class: "mt-4 space-y-3",
                    for (agent, score) in agent_scores {
                        ScoreBar { key: "{agent}", label: agent_display_name(&agent), score }
                    }
                }
            }

            section { class: "{theme::panel_solid()} p-6",
                h3 { class: "{theme::section_title()}", "Explainability Level" }
                div { class: "mt-3 flex gap-2",
                    for option in ExplainabilityLevel::ALL {
                        button {
                            key: "{option.label()}",
                            class: if option == selected { theme::btn_small_active(role) } else { theme::btn_small_inactive(role) },
                            onclick: move |_| level.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }

            if selected.shows_agent_analysis() && !result.detailed_scores.is_empty() {
                section { class: "space-y-3",
                    h3 { class: "{theme::section_title()}", "Detailed Agent Analysis" }
                    for analysis in result.detailed_scores.iter() {
                        div {
                            key: "{analysis.agent_name}",
                            class: "{theme::panel_solid()} space-y-2 p-4",
                            div { class: "flex items-center gap-3",
                                p { class: "flex-1 font-semibold text-slate-100", "{agent_display_name(&analysis.agent_name)}" }
                                span { class: "text-sm font-semibold text-slate-200", "{percent_label(analysis.score)}" }
                                span { class: "text-xs {theme::text_muted()}", "{percent_label(analysis.confidence)} confidence" }
                            }
                            p { class: "text-sm text-slate-300", "{analysis.reasoning}" }
                            if selected.shows_red_flags() && !analysis.red_flags.is_empty() {
                                div {
                                    p { class: "text-xs font-semibold uppercase text-rose-300", "🚩 Red Flags" }
                                    ul { class: "mt-1 list-disc pl-5 text-sm text-rose-200",
                                        for (i, flag) in analysis.red_flags.iter().enumerate() {
                                            li { key: "flag-{i}", "{flag}" }
                                        }
                                    }
                                }
                            }
                            if !analysis.recommendations.is_empty() {
                                div {
                                    p { class: "text-xs font-semibold uppercase {theme::text_primary(role)}", "💡 Recommendations" }
                                    ul { class: "mt-1 list-disc pl-5 text-sm text-slate-300",
                                        for (i, rec) in analysis.recommendations.iter().enumerate() {
                                            li { key: "rec-{i}", "{rec}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "{theme::panel_solid()} p-6",
                h3 { class: "{theme::section_title()}", "Top Recommendations" }
                if result.recommendations.is_empty() {
                    p { class: "mt-3 text-sm text-slate-400", "No recommendations were returned." }
                } else {
                    ul { class: "mt-3 space-y-2",
                        for (i, rec) in result.recommendations.iter().enumerate() {
                            li { key: "top-{i}", class: "flex gap-2 text-sm text-slate-300",
                                span { "💡" }
                                span { "{rec}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

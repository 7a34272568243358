use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{percent_label, AppState, DashboardData},
    infra::ApiClient,
    ui::{
        components::{
            toast::{push_toast, ToastKind, Toasts},
            KpiCard, ScoreBar, VerdictBadge,
        },
        theme,
    },
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let client = use_context::<ApiClient>();
    let toasts = use_context::<Toasts>();
    let nav = use_navigator();

    let dashboard = use_resource(move || {
        let client = client.clone();
        async move {
            let outcome = client.dashboard().await.map_err(|err| err.to_string());
            (outcome, client.preferred_base().await)
        }
    });

    use_effect(move || {
        if let Some((Err(_), _)) = &*dashboard.read() {
            push_toast(toasts, ToastKind::Warning, "Dashboard unavailable, showing this session only.");
        }
    });

    let role = state.with(|st| st.user_type());
    let greeting = state.with(|st| {
        st.session
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default()
    });

    let Some((outcome, connected_base)) = dashboard() else {
        return rsx! {
            div { class: "space-y-4",
                p { class: "{theme::section_title()}", "Loading dashboard..." }
                div { class: "h-1 w-full overflow-hidden rounded-full bg-slate-800",
                    div { class: "h-1 w-1/3 animate-pulse rounded-full bg-indigo-500" }
                }
            }
        };
    };

    // The dashboard call is often unavailable in demo mode; fall back to what
    // was submitted during this session.
    let (data, load_error) = match outcome {
        Ok(data) => (data, None),
        Err(message) => {
            let data = state.with(|st| DashboardData::from_session(&st.submitted, &st.tier()));
            (data, Some(message))
        }
    };
    let connection = match connected_base.as_deref() {
        Some("") => "API last answered from the app origin".to_string(),
        Some(base) => format!("API last answered from {base}"),
        None => "API not reached yet; running on local demo data".to_string(),
    };
    let usage = data.usage_stats.clone();
    let recent = data.recent_evaluations.clone();

    rsx! {
        div { class: "space-y-8",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-3xl font-semibold text-slate-100", "Welcome back, {greeting}" }
                    p { class: "mt-1 text-xs {theme::text_muted()}", "{connection}" }
                }
                button {
                    class: "{theme::btn_primary(role)}",
                    onclick: move |_| { nav.push(Route::Evaluate {}); },
                    "＋ New Evaluation"
                }
            }

            if let Some(message) = load_error {
                div { class: "{theme::warning_banner()}",
                    "Dashboard unavailable ({message}). Showing evaluations from this session."
                }
            }

            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard { title: "Total Evaluations".to_string(), value: data.evaluations_count.to_string(), icon: "📈", role }
                KpiCard { title: "This Month".to_string(), value: usage.reports_this_month.to_string(), icon: "🗓️", role }
                KpiCard { title: "Current Tier".to_string(), value: usage.tier_label(), icon: "⭐", role }
                KpiCard {
                    title: "Reports Left".to_string(),
                    value: usage.reports_left().to_string(),
                    icon: "📄",
                    description: usage.is_free().then(|| "Free tier: 3 reports per month".to_string()),
                    role,
                }
            }

            div { class: "grid gap-6 lg:grid-cols-3",
                section {
                    class: "{theme::panel_solid()} p-6 lg:col-span-2",
                    h3 { class: "{theme::section_title()}", "Recent Evaluation Scores" }
                    if recent.is_empty() {
                        p { class: "mt-3 text-sm text-slate-400", "No evaluations yet." }
                    } else {
                        div { class: "mt-4 space-y-3",
                            for entry in recent.iter() {
                                ScoreBar { key: "bar-{entry.id}", label: entry.short_name(), score: entry.score }
                            }
                        }
                    }
                }

                section {
                    class: "{theme::panel_solid()} p-6",
                    h3 { class: "{theme::section_title()}", "Recent Evaluations" }
                    if recent.is_empty() {
                        p { class: "mt-3 text-sm text-slate-400", "Start your first evaluation to see it here." }
                    } else {
                        ul { class: "mt-3 space-y-2",
                            for entry in recent {
                                li {
                                    key: "{entry.id}",
                                    class: "flex cursor-pointer items-center gap-3 rounded-lg border border-slate-800 bg-slate-900 px-3 py-2 hover:bg-slate-800",
                                    onclick: {
                                        let id = entry.id.clone();
                                        move |_| { nav.push(Route::Results { id: id.clone() }); }
                                    },
                                    span { class: "text-xl", "{entry.verdict.icon()}" }
                                    div { class: "flex-1",
                                        p { class: "text-sm font-semibold text-slate-100", "{entry.company_name}" }
                                        p { class: "text-xs {theme::text_muted()}", "{percent_label(entry.score)} · {entry.date_label()}" }
                                    }
                                    VerdictBadge { verdict: entry.verdict }
                                }
                            }
                        }
                    }
                }
            }

            if usage.show_usage_warning() {
                div { class: "{theme::warning_banner()}",
                    p { class: "font-semibold", "Usage Limit Warning" }
                    p { "You've used {usage.reports_this_month} of 3 free reports this month. Upgrade to Pro for unlimited evaluations." }
                }
            }
        }
    }
}

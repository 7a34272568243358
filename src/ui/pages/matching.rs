use dioxus::prelude::*;

use crate::{
    domain::{
        matching::{toggle_investor_bookmark, toggle_startup_bookmark},
        percent_label, AppState, InvestorMatch, LifecycleStage, MatchFilter, MatchTab,
        StartupMatch, UserType,
    },
    ui::theme,
};

const STAGE_FILTERS: [u8; 3] = [2, 3, 4];

const RECENT_ACTIVITY: [(&str, &str); 2] = [
    ("TechFlow AI viewed your profile", "2 hours ago"),
    ("New match: Green Capital Partners", "1 day ago"),
];

#[component]
pub fn MatchingPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut tab = use_signal(MatchTab::default);
    let mut filter = use_signal(MatchFilter::default);

    let role = state.with(|st| st.user_type());
    // Investors browse startups; everyone else browses investors.
    let sees_startups = role == UserType::Investor;
    let noun = if sees_startups { "Startup" } else { "Investor" };
    let current_tab = tab();
    let current_filter = filter();
    let only_bookmarked = current_tab == MatchTab::Bookmarked;

    let startups: Vec<StartupMatch> = state.with(|st| {
        st.startup_matches
            .iter()
            .filter(|s| current_filter.accepts_startup(s) && (!only_bookmarked || s.bookmarked))
            .cloned()
            .collect()
    });
    let investors: Vec<InvestorMatch> = state.with(|st| {
        st.investor_matches
            .iter()
            .filter(|i| current_filter.accepts_investor(i) && (!only_bookmarked || i.bookmarked))
            .cloned()
            .collect()
    });
    let empty = if sees_startups { startups.is_empty() } else { investors.is_empty() };

    let tabs = [
        (MatchTab::Matches, format!("{noun} Matches")),
        (MatchTab::Bookmarked, "Bookmarked".to_string()),
        (MatchTab::RecentActivity, "Recent Activity".to_string()),
    ];

    rsx! {
        div { class: "space-y-6",
            h2 { class: "text-3xl font-semibold text-slate-100", "{noun} Matching Hub" }

            div { class: "flex gap-2 border-b border-slate-800 pb-2",
                for (value, label) in tabs {
                    button {
                        key: "{label}",
                        class: "{theme::nav_button(role, value == current_tab)}",
                        onclick: move |_| tab.set(value),
                        "{label}"
                    }
                }
            }

            div { class: "grid gap-6 lg:grid-cols-4",
                aside { class: "{theme::panel_solid()} space-y-4 p-4",
                    h3 { class: "{theme::section_title()}", "Filters" }
                    div {
                        label { class: "{theme::label_class()}", "Stage" }
                        select {
                            class: "{theme::input_class(role)}",
                            onchange: move |evt| {
                                let stage = evt.value().parse::<u8>().ok().map(LifecycleStage);
                                filter.with_mut(|f| f.stage = stage);
                            },
                            option { value: "", selected: current_filter.stage.is_none(), "All Stages" }
                            for raw in STAGE_FILTERS {
                                option {
                                    key: "{raw}",
                                    value: "{raw}",
                                    selected: current_filter.stage == Some(LifecycleStage(raw)),
                                    "{LifecycleStage(raw).label()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Domain" }
                        input {
                            class: "{theme::input_class(role)}",
                            value: current_filter.domain.clone(),
                            oninput: move |evt| filter.with_mut(|f| f.domain = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Location" }
                        input {
                            class: "{theme::input_class(role)}",
                            value: current_filter.location.clone(),
                            oninput: move |evt| filter.with_mut(|f| f.location = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Minimum Match Score" }
                        div { class: "mt-1 flex gap-1 text-xl",
                            for star in 1..=5u8 {
                                button {
                                    key: "{star}",
                                    class: if star <= current_filter.min_stars { "text-amber-400" } else { "text-slate-700 hover:text-slate-500" },
                                    // Clicking the current rating clears it.
                                    onclick: move |_| filter.with_mut(|f| {
                                        f.min_stars = if f.min_stars == star { 0 } else { star };
                                    }),
                                    "★"
                                }
                            }
                        }
                    }
                }

                section { class: "space-y-4 lg:col-span-3",
                    if current_tab == MatchTab::RecentActivity {
                        h3 { class: "{theme::section_title()}", "Recent Activity" }
                        ul { class: "space-y-2",
                            for (headline, when) in RECENT_ACTIVITY {
                                li {
                                    key: "{headline}",
                                    class: "{theme::panel_solid()} flex items-center gap-3 p-3",
                                    Avatar { name: headline.to_string(), role }
                                    div {
                                        p { class: "text-sm text-slate-100", "{headline}" }
                                        p { class: "text-xs {theme::text_muted()}", "{when}" }
                                    }
                                }
                            }
                        }
                    } else {
                        if only_bookmarked {
                            h3 { class: "{theme::section_title()}", "Bookmarked {noun}s" }
                        }
                        if empty {
                            p { class: "text-sm text-slate-400", "No matches for the current filters." }
                        }
                        if sees_startups {
                            for startup in startups {
                                StartupCard {
                                    key: "{startup.id}",
                                    startup: startup.clone(),
                                    role,
                                    on_bookmark: move |id: String| {
                                        state.with_mut(|st| toggle_startup_bookmark(&mut st.startup_matches, &id));
                                    },
                                }
                            }
                        } else {
                            for investor in investors {
                                InvestorCard {
                                    key: "{investor.id}",
                                    investor: investor.clone(),
                                    role,
                                    on_bookmark: move |id: String| {
                                        state.with_mut(|st| toggle_investor_bookmark(&mut st.investor_matches, &id));
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StartupCard(startup: StartupMatch, role: UserType, on_bookmark: EventHandler<String>) -> Element {
    let id = startup.id.clone();
    rsx! {
        article { class: "{theme::panel_border(role)} space-y-3 p-5",
            div { class: "flex items-start justify-between gap-3",
                div { class: "flex items-center gap-3",
                    Avatar { name: startup.name.clone(), role }
                    div {
                        p { class: "text-lg font-semibold text-slate-100", "{startup.name}" }
                        p { class: "text-xs {theme::text_muted()}", "{startup.stage.label()} · {startup.location}" }
                    }
                }
                MatchChip { score: startup.match_score, bookmarked: startup.bookmarked, role, on_toggle: move |_| on_bookmark.call(id.clone()) }
            }
            p { class: "text-sm text-slate-300", "{startup.description}" }
            div { class: "flex flex-wrap gap-2",
                span { class: "{theme::btn_small_inactive(role)}", "{startup.domain}" }
                span { class: "{theme::btn_small_inactive(role)}", "Valuation: {startup.valuation}" }
            }
            ul { class: "list-disc pl-5 text-sm text-slate-400",
                for highlight in startup.highlights.iter() {
                    li { key: "{highlight}", "{highlight}" }
                }
            }
        }
    }
}

#[component]
fn InvestorCard(investor: InvestorMatch, role: UserType, on_bookmark: EventHandler<String>) -> Element {
    let id = investor.id.clone();
    let domains = investor.domains.join(", ");
    rsx! {
        article { class: "{theme::panel_border(role)} space-y-3 p-5",
            div { class: "flex items-start justify-between gap-3",
                div { class: "flex items-center gap-3",
                    Avatar { name: investor.name.clone(), role }
                    div {
                        p { class: "text-lg font-semibold text-slate-100", "{investor.name}" }
                        p { class: "text-xs {theme::text_muted()}", "{investor.kind} · {investor.portfolio_count} portfolio companies" }
                    }
                }
                MatchChip { score: investor.match_score, bookmarked: investor.bookmarked, role, on_toggle: move |_| on_bookmark.call(id.clone()) }
            }
            div { class: "space-y-1 text-sm text-slate-300",
                p { span { class: "font-semibold", "Focus Stages: " } "{investor.focus_label()}" }
                p { span { class: "font-semibold", "Domains: " } "{domains}" }
                p { span { class: "font-semibold", "Typical Check: " } "{investor.typical_check}" }
            }
        }
    }
}

#[component]
fn MatchChip(score: f64, bookmarked: bool, role: UserType, on_toggle: EventHandler<()>) -> Element {
    let bookmark_class = if bookmarked {
        theme::text_primary(role)
    } else {
        "text-slate-600 hover:text-slate-300"
    };
    rsx! {
        div { class: "flex items-center gap-2",
            span { class: "{theme::btn_small_active(role)}", "{percent_label(score)} match" }
            button {
                class: "text-xl {bookmark_class}",
                title: if bookmarked { "Remove bookmark" } else { "Bookmark" },
                onclick: move |_| on_toggle.call(()),
                if bookmarked { "★" } else { "☆" }
            }
        }
    }
}

#[component]
fn Avatar(name: String, role: UserType) -> Element {
    let initial = name.chars().next().map(|c| c.to_string()).unwrap_or_default();
    rsx! {
        span {
            class: "flex h-10 w-10 items-center justify-center rounded-full bg-slate-800 font-semibold {theme::text_primary(role)}",
            "{initial}"
        }
    }
}

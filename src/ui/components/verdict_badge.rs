use dioxus::prelude::*;

use crate::domain::Verdict;

pub fn verdict_theme(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Validate => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        Verdict::Conditional => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        Verdict::Pivot => "bg-orange-500/10 text-orange-300 border-orange-500/40",
        Verdict::Invalid => "bg-rose-500/10 text-rose-300 border-rose-500/40",
    }
}

#[component]
pub fn VerdictBadge(verdict: Verdict) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs font-medium {verdict_theme(verdict)}",
            "{verdict.icon()} {verdict.as_str().to_uppercase()}"
        }
    }
}

//! Role-specific theme helpers for consistent styling across pages.

use crate::domain::UserType;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(role: UserType) -> &'static str {
    match role {
        UserType::Founder => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:opacity-50",
        UserType::Investor => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400 disabled:opacity-50",
        UserType::Analyst => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:opacity-50",
    }
}

pub fn btn_secondary(_role: UserType) -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800 disabled:opacity-50"
}

pub fn btn_danger() -> &'static str {
    "rounded-lg border border-rose-500/40 px-4 py-2 text-sm font-semibold text-rose-200 hover:bg-rose-500/10"
}

pub fn btn_small_active(role: UserType) -> &'static str {
    match role {
        UserType::Founder => "rounded px-2 py-1 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40",
        UserType::Investor => "rounded px-2 py-1 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40",
        UserType::Analyst => "rounded px-2 py-1 text-xs font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40",
    }
}

pub fn btn_small_inactive(_role: UserType) -> &'static str {
    "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-slate-600 hover:text-slate-300"
}

pub fn nav_button(role: UserType, active: bool) -> &'static str {
    match (role, active) {
        (UserType::Founder, true) => "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300",
        (UserType::Investor, true) => "rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300",
        (UserType::Analyst, true) => "rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300",
        (_, false) => "rounded-lg border border-transparent px-4 py-2 text-slate-400 hover:border-slate-700 hover:bg-slate-900 hover:text-slate-200",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(role: UserType) -> &'static str {
    match role {
        UserType::Founder => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
        UserType::Investor => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        UserType::Analyst => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
    }
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel_border(role: UserType) -> &'static str {
    match role {
        UserType::Founder => "rounded-xl border border-indigo-800/50 bg-slate-900/40",
        UserType::Investor => "rounded-xl border border-emerald-800/50 bg-slate-900/40",
        UserType::Analyst => "rounded-xl border border-sky-800/50 bg-slate-900/40",
    }
}

pub fn panel_solid() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(role: UserType) -> &'static str {
    match role {
        UserType::Founder => "text-indigo-300",
        UserType::Investor => "text-emerald-300",
        UserType::Analyst => "text-sky-300",
    }
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}


// ============================================
// BANNERS
// ============================================

pub fn error_banner() -> &'static str {
    "rounded-lg border border-rose-500/40 bg-rose-500/10 px-4 py-3 text-sm text-rose-200"
}

pub fn warning_banner() -> &'static str {
    "rounded-lg border border-amber-500/40 bg-amber-500/10 px-4 py-3 text-sm text-amber-200"
}

pub fn info_banner() -> &'static str {
    "rounded-lg border border-sky-500/40 bg-sky-500/10 px-4 py-3 text-sm text-sky-200"
}

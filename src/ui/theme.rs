//! Workspace-specific theme helpers for consistent styling across pages.

use crate::domain::Workspace;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:opacity-50",
        Workspace::Sales => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400 disabled:opacity-50",
        Workspace::Finance => "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-amber-400 disabled:opacity-50",
        Workspace::None => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:opacity-50",
    }
}

pub fn btn_secondary(_workspace: Workspace) -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

pub fn btn_small_active(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "rounded px-2 py-1 text-xs font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40",
        Workspace::Sales => "rounded px-2 py-1 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40",
        Workspace::Finance => "rounded px-2 py-1 text-xs font-semibold bg-amber-500/20 text-amber-300 border border-amber-500/40",
        Workspace::None => "rounded px-2 py-1 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40",
    }
}

pub fn btn_small_inactive(_workspace: Workspace) -> &'static str {
    "rounded px-2 py-1 text-xs text-slate-400 border border-slate-700 hover:border-slate-500 hover:text-slate-200"
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
        Workspace::Sales => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Workspace::Finance => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-amber-500 focus:outline-none",
        Workspace::None => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
    }
}

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub fn panel_border(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "rounded-xl border border-sky-900/40 bg-slate-900/40",
        Workspace::Sales => "rounded-xl border border-emerald-900/40 bg-slate-900/40",
        Workspace::Finance => "rounded-xl border border-amber-900/40 bg-slate-900/40",
        Workspace::None => "rounded-xl border border-slate-800 bg-slate-900/40",
    }
}

pub fn table_container(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
        Workspace::Sales => "rounded-xl border border-emerald-900/40 bg-slate-900/40 overflow-hidden",
        Workspace::Finance => "rounded-xl border border-amber-900/40 bg-slate-900/40 overflow-hidden",
        Workspace::None => "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
        Workspace::Sales => "border-b border-emerald-900/40 bg-emerald-950/30 text-xs uppercase text-emerald-400/70",
        Workspace::Finance => "border-b border-amber-900/40 bg-amber-950/30 text-xs uppercase text-amber-400/70",
        Workspace::None => "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500",
    }
}

pub fn table_divider(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "divide-y divide-sky-900/30",
        Workspace::Sales => "divide-y divide-emerald-900/30",
        Workspace::Finance => "divide-y divide-amber-900/30",
        Workspace::None => "divide-y divide-slate-800",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_secondary(_workspace: Workspace) -> &'static str {
    "text-slate-300"
}

pub fn text_muted(_workspace: Workspace) -> &'static str {
    "text-slate-500"
}

pub fn label_class(_workspace: Workspace) -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn accent_text(workspace: Workspace) -> &'static str {
    match workspace {
        Workspace::Operations => "text-sky-300",
        Workspace::Sales => "text-emerald-300",
        Workspace::Finance => "text-amber-300",
        Workspace::None => "text-indigo-300",
    }
}

// ============================================
// NAVIGATION
// ============================================

pub fn nav_button(workspace: Workspace, active: bool) -> &'static str {
    match (workspace, active) {
        (Workspace::Operations, true) => "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300",
        (Workspace::Sales, true) => "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300",
        (Workspace::Finance, true) => "min-w-[5.5rem] rounded-lg border border-amber-500/60 bg-amber-500/15 px-4 py-2 font-semibold text-amber-300",
        (_, true) => "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300",
        (_, false) => "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200",
    }
}

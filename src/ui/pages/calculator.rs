//! Calculator page: principal input, best-offer card and the comparison table.

use dioxus::prelude::*;

use crate::{
    domain::{
        best_earnings, parse_principal, CalculatorEvent, CalculatorState, SortColumn,
        WITHHOLDING_TAX_RATE,
    },
    ui::{
        components::{
            earnings_table::format_earnings,
            toast::{push_toast, ToastKind, ToastMessage},
            EarningsTable, KpiCard, PrincipalInput,
        },
        theme,
    },
    util::config,
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let snapshot = state();
    let mut principal_input = use_signal(|| snapshot.principal.to_string());

    let rows = snapshot.rows();
    let best = best_earnings(&rows).cloned();
    let best_id = best.as_ref().map(|row| row.id);
    let best_value = best
        .as_ref()
        .map(|row| format_earnings(row.annual_earnings))
        .unwrap_or_else(|| "—".to_string());
    let best_caption = best.map(|row| format!("{} · {}", row.bank, row.kind));
    let tax_note = format!(
        "Earnings are net of {:.0}% withholding tax.",
        WITHHOLDING_TAX_RATE * 100.0
    );

    let on_principal = move |raw: String| {
        if let Err(err) = parse_principal(&raw) {
            tracing::debug!(input = %raw, error = %err, "rejected principal input");
            push_toast(toasts, ToastKind::Warning, err.to_string());
        }
        principal_input.set(raw.clone());
        let next = state().apply(CalculatorEvent::PrincipalEntered(raw));
        state.set(next);
    };

    let on_sort = move |column: SortColumn| {
        let next = state().apply(CalculatorEvent::ToggleSort(column));
        tracing::debug!(?column, direction = ?next.sort.direction, "sort toggled");
        state.set(next);
    };

    let on_reset = move |_| {
        let principal = config::active().default_principal;
        let next = state().apply(CalculatorEvent::Reset { principal });
        state.set(next);
        principal_input.set(principal.to_string());
        push_toast(toasts, ToastKind::Info, "Restored default principal and order.");
    };

    rsx! {
        section {
            class: theme::CARD,
            header {
                h2 { class: theme::CARD_TITLE, "Bank Interest Calculator" }
                p { class: theme::CARD_DESCRIPTION, "Compare interest rates and earnings between different banks" }
            }
            div { class: "calc-controls",
                PrincipalInput { value: principal_input(), on_input: on_principal }
                KpiCard {
                    title: "Best 1 Year Earnings",
                    value: best_value,
                    description: best_caption,
                }
                button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset" }
            }
            EarningsTable {
                rows,
                sort: snapshot.sort,
                best: best_id,
                on_sort,
            }
            p { class: "calc-footnote", "{tax_note}" }
        }
    }
}

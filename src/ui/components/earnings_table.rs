use dioxus::prelude::*;

use crate::domain::{BankId, ResultRow, SortColumn, SortState};
use crate::ui::theme;

#[component]
pub fn EarningsTable(
    rows: Vec<ResultRow>,
    sort: SortState,
    best: Option<BankId>,
    on_sort: EventHandler<SortColumn>,
) -> Element {
    rsx! {
        table {
            class: theme::TABLE,
            thead {
                tr {
                    th { class: theme::header_cell(false, false), "Bank" }
                    th { class: theme::header_cell(false, false), "Type" }
                    SortHeader { column: SortColumn::Interest, sort, on_sort }
                    SortHeader { column: SortColumn::Earnings, sort, on_sort }
                }
            }
            tbody {
                for row in rows {
                    EarningsRow { row, best }
                }
            }
        }
    }
}

#[component]
fn SortHeader(column: SortColumn, sort: SortState, on_sort: EventHandler<SortColumn>) -> Element {
    let direction = sort.direction_for(column);
    let class = theme::header_cell(true, direction.is_some());
    let indicator = theme::sort_indicator(direction);

    rsx! {
        th {
            class: "{class}",
            onclick: move |_| on_sort.call(column),
            "{column.label()}"
            span { class: "calc-sort-indicator", "{indicator}" }
        }
    }
}

#[component]
fn EarningsRow(row: ResultRow, best: Option<BankId>) -> Element {
    let highlight = best == Some(row.id);
    let rate = format_rate(row.interest_rate_percent);
    let earnings = format_earnings(row.annual_earnings);

    rsx! {
        tr {
            class: theme::row_class(highlight),
            td { class: "calc-td calc-td-bank", "{row.bank}" }
            td { class: "calc-td", "{row.kind}" }
            td { class: "calc-td calc-td-number", "{rate}" }
            td { class: "calc-td calc-td-number",
                "{earnings}"
                if highlight {
                    span { class: theme::BADGE_BEST, "Best" }
                }
            }
        }
    }
}

pub fn format_rate(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Two decimals, no grouping or currency symbol.
pub fn format_earnings(amount: f64) -> String {
    format!("{amount:.2}")
}

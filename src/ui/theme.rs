//! Class helpers so pages and components share one look.

use crate::domain::SortDirection;

pub const CARD: &str = "calc-card";
pub const CARD_TITLE: &str = "calc-card-title";
pub const CARD_DESCRIPTION: &str = "calc-card-description";
pub const LABEL: &str = "calc-label";
pub const INPUT: &str = "calc-input";
pub const TABLE: &str = "calc-table";
pub const BADGE_BEST: &str = "calc-badge calc-badge-best";
pub const BTN_SECONDARY: &str = "calc-btn calc-btn-secondary";

pub fn header_cell(sortable: bool, active: bool) -> &'static str {
    match (sortable, active) {
        (true, true) => "calc-th calc-th-sortable calc-th-active",
        (true, false) => "calc-th calc-th-sortable",
        (false, _) => "calc-th",
    }
}

pub fn row_class(highlight: bool) -> &'static str {
    if highlight {
        "calc-row calc-row-best"
    } else {
        "calc-row"
    }
}

/// Arrow drawn after a sortable header label.
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "⇅",
    }
}

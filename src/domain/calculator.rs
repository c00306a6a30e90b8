//! Earnings calculation and ordering of result rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::products::{BankId, BankProduct, PRODUCTS};

/// One row of the comparison table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: BankId,
    pub bank: String,
    pub kind: String,
    pub interest_rate_percent: f64,
    pub annual_earnings: f64,
}

impl ResultRow {
    pub fn for_product(product: &BankProduct, principal: f64) -> Self {
        Self {
            id: product.id,
            bank: product.bank.to_string(),
            kind: product.kind.label().to_string(),
            interest_rate_percent: product.annual_rate_percent,
            annual_earnings: product.annual_earnings(principal),
        }
    }

    fn sort_value(&self, column: SortColumn) -> f64 {
        match column {
            SortColumn::Interest => self.interest_rate_percent,
            SortColumn::Earnings => self.annual_earnings,
        }
    }
}

/// Sortable table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Interest,
    Earnings,
}

impl SortColumn {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Interest => "Interest Rate (%)",
            Self::Earnings => "1 Year Earnings",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current ordering of the table. `column: None` keeps declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the active column flips direction; any other column becomes
    /// active in descending order.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: self.column,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                column: Some(column),
                direction: SortDirection::Descending,
            }
        }
    }

    /// Direction shown on a column header, if that column drives the order.
    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        (self.column == Some(column)).then_some(self.direction)
    }
}

/// Compute one row per product for `principal`, ordered by `sort`.
pub fn calculate_results(principal: f64, sort: SortState) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = PRODUCTS
        .iter()
        .map(|product| ResultRow::for_product(product, principal))
        .collect();
    sort_rows(&mut rows, sort);
    rows
}

/// Stable sort; equal values keep their input order in both directions.
pub fn sort_rows(rows: &mut [ResultRow], sort: SortState) {
    let Some(column) = sort.column else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = a
            .sort_value(column)
            .partial_cmp(&b.sort_value(column))
            .unwrap_or(Ordering::Equal);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Row with the highest annual earnings. The first row wins a tie.
pub fn best_earnings(rows: &[ResultRow]) -> Option<&ResultRow> {
    rows.iter().fold(None, |best, row| match best {
        Some(current) if current.annual_earnings >= row.annual_earnings => Some(current),
        _ => Some(row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banks(rows: &[ResultRow]) -> Vec<&str> {
        rows.iter().map(|row| row.bank.as_str()).collect()
    }

    fn sorted(column: SortColumn, direction: SortDirection) -> SortState {
        SortState {
            column: Some(column),
            direction,
        }
    }

    #[test]
    fn test_unsorted_keeps_declaration_order() {
        for principal in [0.0, 1.0, 100_000.0, 5e8] {
            let rows = calculate_results(principal, SortState::default());
            assert_eq!(banks(&rows), vec!["SeaBank", "Own Bank", "TonikBank"]);
        }
    }

    #[test]
    fn test_unsorted_ignores_direction() {
        let state = SortState {
            column: None,
            direction: SortDirection::Ascending,
        };
        let rows = calculate_results(100_000.0, state);
        assert_eq!(banks(&rows), vec!["SeaBank", "Own Bank", "TonikBank"]);
    }

    #[test]
    fn test_interest_descending() {
        let rows = calculate_results(100_000.0, sorted(SortColumn::Interest, SortDirection::Descending));
        assert_eq!(banks(&rows), vec!["Own Bank", "TonikBank", "SeaBank"]);
        let rates: Vec<f64> = rows.iter().map(|r| r.interest_rate_percent).collect();
        assert_eq!(rates, vec![7.5, 4.55, 4.0]);
    }

    #[test]
    fn test_interest_ascending() {
        let rows = calculate_results(100_000.0, sorted(SortColumn::Interest, SortDirection::Ascending));
        assert_eq!(banks(&rows), vec!["SeaBank", "TonikBank", "Own Bank"]);
    }

    #[test]
    fn test_earnings_ascending() {
        let rows = calculate_results(100_000.0, sorted(SortColumn::Earnings, SortDirection::Ascending));
        assert_eq!(banks(&rows), vec!["SeaBank", "TonikBank", "Own Bank"]);
        let shown: Vec<String> = rows
            .iter()
            .map(|r| format!("{:.2}", r.annual_earnings))
            .collect();
        assert_eq!(shown, vec!["3200.00", "3640.00", "6000.00"]);
    }

    #[test]
    fn test_earnings_descending() {
        let rows = calculate_results(100_000.0, sorted(SortColumn::Earnings, SortDirection::Descending));
        assert_eq!(banks(&rows), vec!["Own Bank", "TonikBank", "SeaBank"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Every product earns exactly zero on a zero principal.
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let rows = calculate_results(0.0, sorted(SortColumn::Earnings, direction));
            assert_eq!(banks(&rows), vec!["SeaBank", "Own Bank", "TonikBank"]);
        }
    }

    #[test]
    fn test_sort_rows_stable_with_partial_tie() {
        let row = |bank: &str, rate: f64| ResultRow {
            id: BankId::SeaBank,
            bank: bank.to_string(),
            kind: "Time Deposit".to_string(),
            interest_rate_percent: rate,
            annual_earnings: 0.0,
        };
        let mut rows = vec![row("a", 5.0), row("b", 7.0), row("c", 5.0)];
        sort_rows(&mut rows, sorted(SortColumn::Interest, SortDirection::Descending));
        assert_eq!(banks(&rows), vec!["b", "a", "c"]);
        sort_rows(&mut rows, sorted(SortColumn::Interest, SortDirection::Ascending));
        assert_eq!(banks(&rows), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_toggle_same_column_twice_restores_direction() {
        let start = SortState::default().toggled(SortColumn::Interest);
        assert_eq!(start.direction, SortDirection::Descending);
        let once = start.toggled(SortColumn::Interest);
        assert_eq!(once.direction, SortDirection::Ascending);
        let twice = once.toggled(SortColumn::Interest);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_toggle_other_column_resets_to_descending() {
        let state = SortState::default()
            .toggled(SortColumn::Interest)
            .toggled(SortColumn::Interest);
        assert_eq!(state.direction, SortDirection::Ascending);
        let switched = state.toggled(SortColumn::Earnings);
        assert_eq!(switched, sorted(SortColumn::Earnings, SortDirection::Descending));
    }

    #[test]
    fn test_toggle_always_changes_state() {
        let mut state = SortState::default();
        for column in [
            SortColumn::Interest,
            SortColumn::Interest,
            SortColumn::Earnings,
            SortColumn::Earnings,
            SortColumn::Interest,
        ] {
            let next = state.toggled(column);
            assert_ne!(next, state);
            state = next;
        }
    }

    #[test]
    fn test_direction_for_header() {
        let state = sorted(SortColumn::Earnings, SortDirection::Ascending);
        assert_eq!(state.direction_for(SortColumn::Earnings), Some(SortDirection::Ascending));
        assert_eq!(state.direction_for(SortColumn::Interest), None);
        assert_eq!(SortState::default().direction_for(SortColumn::Interest), None);
    }

    #[test]
    fn test_best_earnings() {
        let rows = calculate_results(100_000.0, SortState::default());
        assert_eq!(best_earnings(&rows).map(|r| r.bank.as_str()), Some("Own Bank"));

        let zero = calculate_results(0.0, SortState::default());
        assert_eq!(best_earnings(&zero).map(|r| r.bank.as_str()), Some("SeaBank"));

        assert!(best_earnings(&[]).is_none());
    }
}

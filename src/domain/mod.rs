//! Interest calculation and table ordering live here.

pub mod calculator;
pub mod calculator_state;
pub mod products;

#[allow(unused_imports)]
pub use calculator::{
    best_earnings, calculate_results, sort_rows, ResultRow, SortColumn, SortDirection, SortState,
};
#[allow(unused_imports)]
pub use calculator_state::{
    coerce_principal, parse_principal, CalculatorEvent, CalculatorState, PrincipalError,
    DEFAULT_PRINCIPAL,
};
#[allow(unused_imports)]
pub use products::{AccountKind, BankId, BankProduct, PRODUCTS, WITHHOLDING_TAX_RATE};

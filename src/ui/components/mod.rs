pub mod earnings_table;
pub mod kpi_card;
pub mod principal_input;
pub mod toast;

pub use earnings_table::EarningsTable;
pub use kpi_card::KpiCard;
pub use principal_input::PrincipalInput;

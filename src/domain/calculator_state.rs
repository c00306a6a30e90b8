//! Session state of the calculator and the events that change it.

use super::calculator::{calculate_results, ResultRow, SortColumn, SortState};

/// Principal shown before the user types anything.
pub const DEFAULT_PRINCIPAL: f64 = 100_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorState {
    /// Always finite and `>= 0`.
    pub principal: f64,
    pub sort: SortState,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_principal(DEFAULT_PRINCIPAL)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CalculatorEvent {
    /// Raw text from the principal input.
    PrincipalEntered(String),
    ToggleSort(SortColumn),
    /// Back to `principal` in declaration order.
    Reset { principal: f64 },
}

impl CalculatorState {
    pub fn with_principal(principal: f64) -> Self {
        Self {
            principal: clamp_principal(principal),
            sort: SortState::default(),
        }
    }

    pub fn apply(self, event: CalculatorEvent) -> Self {
        match event {
            CalculatorEvent::PrincipalEntered(raw) => Self {
                principal: coerce_principal(&raw, self.principal),
                ..self
            },
            CalculatorEvent::ToggleSort(column) => Self {
                sort: self.sort.toggled(column),
                ..self
            },
            CalculatorEvent::Reset { principal } => Self::with_principal(principal),
        }
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        calculate_results(self.principal, self.sort)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrincipalError {
    #[error("principal must be a number, got {0:?}")]
    NotNumeric(String),
    #[error("principal must be a finite amount")]
    NotFinite,
    #[error("principal cannot be negative, using 0")]
    Negative,
}

/// Parse principal input. Blank input counts as zero.
pub fn parse_principal(raw: &str) -> Result<f64, PrincipalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PrincipalError::NotNumeric(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(PrincipalError::NotFinite);
    }
    if value < 0.0 {
        return Err(PrincipalError::Negative);
    }
    // "-0" parses to negative zero.
    Ok(value.abs())
}

/// Negative input clamps to zero; anything unparseable keeps `previous`.
pub fn coerce_principal(raw: &str, previous: f64) -> f64 {
    match parse_principal(raw) {
        Ok(value) => value,
        Err(PrincipalError::Negative) => 0.0,
        Err(PrincipalError::NotNumeric(_) | PrincipalError::NotFinite) => previous,
    }
}

fn clamp_principal(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

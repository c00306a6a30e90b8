//! The three bank products offered for comparison.

use serde::{Deserialize, Serialize};

/// Withholding tax applied to gross interest.
pub const WITHHOLDING_TAX_RATE: f64 = 0.20;

/// Identity of a bank product. Formulas dispatch on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankId {
    SeaBank,
    OwnBank,
    TonikBank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Savings,
    TimeDeposit,
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Savings Account",
            Self::TimeDeposit => "Time Deposit",
        }
    }
}

/// Static description of a bank product.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BankProduct {
    pub id: BankId,
    pub bank: &'static str,
    pub kind: AccountKind,
    pub annual_rate_percent: f64,
}

/// All products in declaration order. This order is the unsorted display order.
pub static PRODUCTS: [BankProduct; 3] = [
    BankProduct {
        id: BankId::SeaBank,
        bank: "SeaBank",
        kind: AccountKind::Savings,
        annual_rate_percent: 4.0,
    },
    BankProduct {
        id: BankId::OwnBank,
        bank: "Own Bank",
        kind: AccountKind::TimeDeposit,
        annual_rate_percent: 7.5,
    },
    BankProduct {
        id: BankId::TonikBank,
        bank: "TonikBank",
        kind: AccountKind::TimeDeposit,
        annual_rate_percent: 4.55,
    },
];

impl BankProduct {
    /// Gross interest before tax.
    ///
    /// SeaBank accrues daily, so its gross is a per-day amount. The time
    /// deposits return the full-term gross. The 360/360 and 365/365 day-count
    /// factors cancel but are kept so results match bit for bit.
    pub fn gross(&self, principal: f64) -> f64 {
        match self.id {
            BankId::SeaBank => principal * 0.04 / 365.0,
            BankId::OwnBank => principal * (0.075 / 360.0) * 360.0,
            BankId::TonikBank => principal * 0.0455 * 365.0 / 365.0,
        }
    }

    /// Withholding tax on [`BankProduct::gross`], same period.
    pub fn tax(&self, principal: f64) -> f64 {
        self.gross(principal) * WITHHOLDING_TAX_RATE
    }

    /// Net interest over one year.
    pub fn annual_earnings(&self, principal: f64) -> f64 {
        let net = self.gross(principal) - self.tax(principal);
        match self.id {
            BankId::SeaBank => net * 365.0,
            BankId::OwnBank | BankId::TonikBank => net,
        }
    }
}

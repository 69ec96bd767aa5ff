// ============================================================================
// Transaction Domain Model
// ============================================================================

use super::account::AccountId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of investment transaction produced by an entry slip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionType {
    /// Capital paid back by a security, reducing its cost basis
    ReturnOfCapital,
}

/// An investment income transaction across three accounts: the investment
/// account holding the security, the income account the value is booked
/// against and the cash account receiving the funds.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: Uuid,

    pub transaction_type: TransactionType,

    /// Booking date
    pub date: NaiveDate,

    /// Check or reference number, if any
    pub number: Option<String>,

    pub memo: String,

    /// Security the capital was returned on
    pub security: String,

    pub investment_account: AccountId,
    pub income_account: AccountId,
    pub cash_account: AccountId,

    /// Amount in the investment account's currency
    pub amount: Decimal,

    /// Amount booked in the income account's currency (negative)
    pub income_exchanged_amount: Decimal,

    /// Amount received in the cash account's currency
    pub account_exchanged_amount: Decimal,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// True if either side was converted to another currency.
    pub fn is_exchanged(&self) -> bool {
        self.income_exchanged_amount != -self.amount || self.account_exchanged_amount != self.amount
    }
}

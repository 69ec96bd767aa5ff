// ============================================================================
// Return of Capital Slip
// Entry form producing a return-of-capital transaction
// ============================================================================

use crate::domain::{Account, FieldConfig, Separators, Transaction, TransactionType};
use crate::engine::{DecimalField, ExchangePane};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Reasons a slip cannot produce a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlipError {
    /// No income account selected
    MissingIncomeAccount,
    /// No cash account selected
    MissingCashAccount,
    /// No security selected
    MissingSecurity,
    /// Amount is zero or negative
    NonPositiveAmount(Decimal),
    /// A conversion applies but no rate was entered
    MissingExchangeRate { currency: String },
}

impl fmt::Display for SlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlipError::MissingIncomeAccount => write!(f, "income account is required"),
            SlipError::MissingCashAccount => write!(f, "cash account is required"),
            SlipError::MissingSecurity => write!(f, "security is required"),
            SlipError::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {}", amount)
            },
            SlipError::MissingExchangeRate { currency } => {
                write!(f, "exchange rate to {} is required", currency)
            },
        }
    }
}

impl std::error::Error for SlipError {}

/// Return of capital entry form for one investment account.
///
/// The amount is entered in the investment account's currency. The income
/// and cash panes convert it when their accounts use another currency.
#[derive(Debug)]
pub struct ReturnOfCapitalSlip {
    account: Account,
    amount_field: DecimalField,
    income_pane: ExchangePane,
    cash_pane: ExchangePane,
    security: Option<String>,
    date: NaiveDate,
    memo: String,
    number: Option<String>,
}

impl ReturnOfCapitalSlip {
    pub fn new(account: Account, separators: Separators, date: NaiveDate) -> Self {
        let amount_field =
            DecimalField::with_separators(FieldConfig::currency(account.currency.scale), separators);

        let mut income_pane = ExchangePane::new(separators);
        income_pane.set_account(&account);
        let mut cash_pane = ExchangePane::new(separators);
        cash_pane.set_account(&account);

        Self {
            account,
            amount_field,
            income_pane,
            cash_pane,
            security: None,
            date,
            memo: String::new(),
            number: None,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        TransactionType::ReturnOfCapital
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn amount_field(&self) -> &DecimalField {
        &self.amount_field
    }

    pub fn amount_field_mut(&mut self) -> &mut DecimalField {
        &mut self.amount_field
    }

    pub fn income_pane_mut(&mut self) -> &mut ExchangePane {
        &mut self.income_pane
    }

    pub fn cash_pane_mut(&mut self) -> &mut ExchangePane {
        &mut self.cash_pane
    }

    pub fn set_security(&mut self, security: &str) {
        let security = security.trim();
        self.security = (!security.is_empty()).then(|| security.to_string());
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_memo(&mut self, memo: &str) {
        self.memo = memo.to_string();
    }

    pub fn set_number(&mut self, number: Option<&str>) {
        self.number = number
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
    }

    /// Build the transaction from the current form state
    ///
    /// The amount is read from the field text as currently entered.
    pub fn build_transaction(&self) -> Result<Transaction, SlipError> {
        let amount = self.amount_field.current_value();
        if amount <= Decimal::ZERO {
            return Err(SlipError::NonPositiveAmount(amount));
        }

        let security = self.security.clone().ok_or(SlipError::MissingSecurity)?;
        let income = self
            .income_pane
            .selected_account()
            .ok_or(SlipError::MissingIncomeAccount)?;
        let cash = self
            .cash_pane
            .selected_account()
            .ok_or(SlipError::MissingCashAccount)?;

        let mut income_exchanged_amount = -amount;
        if !income.same_currency(&self.account) {
            income_exchanged_amount = -Self::converted(&self.income_pane, income, amount)?;
        }

        let mut account_exchanged_amount = amount;
        if !cash.same_currency(&self.account) {
            account_exchanged_amount = Self::converted(&self.cash_pane, cash, amount)?;
        }

        let transaction = Transaction {
            id: Uuid::new_v4(),
            transaction_type: TransactionType::ReturnOfCapital,
            date: self.date,
            number: self.number.clone(),
            memo: self.memo.clone(),
            security,
            investment_account: self.account.id,
            income_account: income.id,
            cash_account: cash.id,
            amount,
            income_exchanged_amount,
            account_exchanged_amount,
            timestamp: Utc::now(),
        };

        tracing::debug!(
            id = %transaction.id,
            amount = %transaction.amount,
            exchanged = transaction.is_exchanged(),
            "Built return of capital transaction"
        );

        Ok(transaction)
    }

    fn converted(pane: &ExchangePane, target: &Account, amount: Decimal) -> Result<Decimal, SlipError> {
        if pane.exchange_rate().is_zero() {
            return Err(SlipError::MissingExchangeRate {
                currency: target.currency.code.clone(),
            });
        }
        Ok(pane.exchanged_amount(amount))
    }

    /// Reset the entry fields, keeping accounts and date
    pub fn clear_form(&mut self) {
        self.amount_field.set_decimal(Decimal::ZERO);
        self.security = None;
        self.memo.clear();
        self.number = None;
    }
}

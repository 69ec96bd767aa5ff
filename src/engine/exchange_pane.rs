// ============================================================================
// Exchange Pane
// Counter-account selection with optional currency conversion
// ============================================================================

use crate::domain::{Account, AccountId, Currency, FieldConfig, Separators};
use crate::engine::DecimalField;
use crate::numeric::round_to_scale;
use rust_decimal::Decimal;

/// Selects the counter account of a transaction and, when its currency
/// differs from the base currency, the exchange rate to convert with.
#[derive(Debug)]
pub struct ExchangePane {
    /// Currency amounts are entered in
    base_currency: Option<Currency>,
    /// Owning account, never offered as counter account
    excluded: Option<AccountId>,
    selected: Option<Account>,
    rate_field: DecimalField,
    details_showing: bool,
}

impl ExchangePane {
    pub fn new(separators: Separators) -> Self {
        Self {
            base_currency: None,
            excluded: None,
            selected: None,
            rate_field: DecimalField::with_separators(FieldConfig::exchange_rate(), separators),
            details_showing: false,
        }
    }

    /// Bind the owning account: its currency becomes the base currency and
    /// it can no longer be selected as counter account.
    pub fn set_account(&mut self, account: &Account) {
        self.base_currency = Some(account.currency.clone());
        self.excluded = Some(account.id);

        if self.selected.as_ref().is_some_and(|s| s.id == account.id) {
            self.selected = None;
        }
    }

    pub fn base_currency(&self) -> Option<&Currency> {
        self.base_currency.as_ref()
    }

    /// Select the counter account. Returns `false` for the owning account.
    pub fn set_selected_account(&mut self, account: Account) -> bool {
        if self.excluded == Some(account.id) {
            tracing::debug!(account = %account.name, "Owning account cannot be the counter account");
            return false;
        }
        self.selected = Some(account);
        if !self.exchange_visible() {
            self.details_showing = false;
        }
        true
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.selected.as_ref()
    }

    /// True when the exchange-rate controls must be shown: both currencies
    /// are known and differ.
    pub fn exchange_visible(&self) -> bool {
        match (&self.base_currency, &self.selected) {
            (Some(base), Some(selected)) => *base != selected.currency,
            _ => false,
        }
    }

    pub fn rate_field(&self) -> &DecimalField {
        &self.rate_field
    }

    pub fn rate_field_mut(&mut self) -> &mut DecimalField {
        &mut self.rate_field
    }

    /// Bound exchange rate, zero if none was entered
    pub fn exchange_rate(&self) -> Decimal {
        self.rate_field.decimal().unwrap_or(Decimal::ZERO)
    }

    pub fn set_exchange_rate(&mut self, rate: Decimal) {
        self.rate_field.set_decimal(rate);
    }

    /// Convert a base-currency amount into the counter account's currency.
    ///
    /// Without a conversion the amount is returned unchanged.
    pub fn exchanged_amount(&self, amount: Decimal) -> Decimal {
        let Some(selected) = self.selected.as_ref().filter(|_| self.exchange_visible()) else {
            return amount;
        };

        let converted = amount.checked_mul(self.exchange_rate()).unwrap_or_else(|| {
            tracing::warn!(%amount, "Exchange conversion overflowed");
            Decimal::ZERO
        });
        let scale = selected.currency.scale;
        round_to_scale(converted, scale, self.rate_field.config().rounding).unwrap_or(converted)
    }

    /// "1 USD = 0.92 EUR" for the current pair, if a conversion applies
    pub fn conversion_label(&self) -> Option<String> {
        if !self.exchange_visible() {
            return None;
        }
        let base = self.base_currency.as_ref()?;
        let target = &self.selected.as_ref()?.currency;
        Some(format!(
            "1 {} = {} {}",
            base.code,
            self.exchange_rate().normalize(),
            target.code
        ))
    }

    /// Show or hide the exchange details; returns whether they are showing.
    /// Details never show while no conversion applies.
    pub fn toggle_details(&mut self) -> bool {
        self.details_showing = !self.details_showing && self.exchange_visible();
        self.details_showing
    }

    pub fn is_details_showing(&self) -> bool {
        self.details_showing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn usd() -> Currency {
        Currency::new("USD", "$", 2)
    }

    fn jpy() -> Currency {
        Currency::new("JPY", "¥", 0)
    }

    #[test]
    fn test_same_currency_hides_exchange() {
        let owner = Account::new("Brokerage", usd());
        let mut pane = ExchangePane::new(Separators::default());
        pane.set_account(&owner);

        assert!(pane.set_selected_account(Account::new("Checking", usd())));
        assert!(!pane.exchange_visible());
        assert_eq!(pane.exchanged_amount(dec("10.00")), dec("10.00"));
        assert_eq!(pane.conversion_label(), None);
        assert!(!pane.toggle_details());
    }

    #[test]
    fn test_foreign_currency_converts() {
        let owner = Account::new("Brokerage", usd());
        let mut pane = ExchangePane::new(Separators::default());
        pane.set_account(&owner);
        pane.set_selected_account(Account::new("Tokyo", jpy()));
        pane.set_exchange_rate(dec("151.237"));

        assert!(pane.exchange_visible());
        assert_eq!(pane.exchanged_amount(dec("10.00")), dec("1512"));
        assert_eq!(pane.conversion_label().as_deref(), Some("1 USD = 151.237 JPY"));

        assert!(pane.toggle_details());
        assert!(!pane.toggle_details());
    }

    #[test]
    fn test_rate_entered_as_expression() {
        let owner = Account::new("Brokerage", usd());
        let mut pane = ExchangePane::new(Separators::default());
        pane.set_account(&owner);
        pane.set_selected_account(Account::new("Konto", Currency::new("EUR", "€", 2)));

        let field = pane.rate_field_mut();
        field.replace_text(0, 0, "1/1.25");
        field.commit();

        assert_eq!(pane.exchange_rate(), dec("0.8"));
        assert_eq!(pane.exchanged_amount(dec("100")), dec("80.00"));
    }

    #[test]
    fn test_owner_cannot_be_selected() {
        let owner = Account::new("Brokerage", usd());
        let mut pane = ExchangePane::new(Separators::default());
        pane.set_account(&owner);

        assert!(!pane.set_selected_account(owner.clone()));
        assert!(pane.selected_account().is_none());
    }

    #[test]
    fn test_rebinding_owner_clears_selection() {
        let first = Account::new("Brokerage", usd());
        let second = Account::new("Checking", usd());
        let mut pane = ExchangePane::new(Separators::default());
        pane.set_account(&first);
        pane.set_selected_account(second.clone());

        pane.set_account(&second);
        assert!(pane.selected_account().is_none());
        assert_eq!(pane.base_currency(), Some(&usd()));
    }
}

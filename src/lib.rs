// ============================================================================
// Decimal Entry Library
// Locale-aware decimal input with constrained arithmetic evaluation
// ============================================================================

//! # Decimal Entry
//!
//! A headless model of the decimal text field used throughout a personal
//! finance application, plus the entry forms built on it.
//!
//! ## Features
//!
//! - **Locale separators** resolved once per process, with the numeric
//!   keypad fix for comma-fraction locales
//! - **Keystroke filtering** against digits, sign, separators and operators
//! - **Arithmetic fallback** (`+ - * / ( )`) over exact decimals, never a
//!   general-purpose interpreter
//! - **Scale and rounding** applied to every value the field exposes
//! - **Entry models**: format preferences, currency exchange pane,
//!   return of capital slip
//!
//! ## Example
//!
//! ```rust
//! use decimal_entry::prelude::*;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let mut field = DecimalField::with_separators(FieldConfig::default(), Separators::for_locale("de-DE"))
//!     .with_listener(Arc::new(LoggingListener));
//!
//! field.focus_changed(true);
//! field.replace_text(0, 0, "1.000,5+2");
//! field.focus_changed(false);
//!
//! assert_eq!(field.decimal(), Some(Decimal::new(100250, 2)));
//! assert_eq!(field.text(), "1002,50");
//! ```

pub mod domain;
pub mod engine;
pub mod expr;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        install_process_separators, process_separators, Account, AccountId, AllowedChars,
        Currency, FieldConfig, FormatPreferences, Separators, Transaction, TransactionType,
    };
    pub use crate::engine::{
        create_from_config, ArithmeticEvaluator, DecimalEvaluator, DecimalField,
        DecimalFieldBuilder, EditOutcome, ExchangePane, FieldState, KeyCode,
        ReturnOfCapitalSlip, SlipError,
    };
    pub use crate::interfaces::{
        Evaluation, EvaluationSource, ExpressionEvaluator, FieldEvent, FieldListener,
        LoggingListener, NoOpListener, RecordingListener,
    };
    pub use crate::numeric::{DisplayFormat, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_end_to_end_entry() {
        let listener = Arc::new(RecordingListener::new());
        let mut field = DecimalFieldBuilder::currency(2)
            .locale("en_US.UTF-8")
            .build(listener.clone())
            .unwrap();

        // Type an expression with grouping, reject a stray letter, confirm
        field.focus_changed(true);
        for c in ["1", ",", "2", "0", "0", "-", "x", "2", "0", "0"] {
            field.replace_selection(c);
        }
        assert_eq!(field.text(), "1,200-200");
        field.key_pressed(KeyCode::Enter);

        assert_eq!(field.decimal(), Some(dec("1000.00")));
        assert_eq!(field.text(), "1000.00");
        assert_eq!(field.state(), FieldState::Evaluated);

        let events = listener.events();
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, FieldEvent::EditRejected { .. }))
                .count(),
            1
        );
        assert!(events.iter().any(|e| matches!(
            e,
            FieldEvent::Evaluated {
                source: EvaluationSource::Expression,
                ..
            }
        )));
    }

    #[test]
    fn test_field_feeds_return_of_capital() {
        let usd = Currency::new("USD", "$", 2);
        let eur = Currency::new("EUR", "€", 2);
        let brokerage = Account::new("Brokerage", usd.clone());

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let mut slip = ReturnOfCapitalSlip::new(brokerage.clone(), Separators::default(), date);
        slip.set_security("ACME");
        slip.income_pane_mut()
            .set_selected_account(Account::new("Dividends", usd));

        let cash = slip.cash_pane_mut();
        assert!(cash.set_selected_account(Account::new("Konto", eur)));
        assert!(cash.exchange_visible());
        cash.rate_field_mut().replace_text(0, 0, "0.92");
        cash.rate_field_mut().commit();

        slip.amount_field_mut().replace_text(0, 0, "50*3");

        let tx = slip.build_transaction().unwrap();
        assert_eq!(tx.investment_account, brokerage.id);
        assert_eq!(tx.amount, dec("150"));
        assert_eq!(tx.income_exchanged_amount, dec("-150"));
        assert_eq!(tx.account_exchanged_amount, dec("138.00"));

        let mut prefs = FormatPreferences::new();
        prefs.set_date_pattern(Some("dd.MM.yyyy"));
        assert_eq!(prefs.format_date(tx.date), "31.12.2024");
    }
}

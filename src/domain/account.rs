// ============================================================================
// Account Domain Model
// ============================================================================

use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

/// A currency and the number of minor-unit digits amounts carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    /// ISO 4217 code ("USD")
    pub code: String,
    /// Display symbol ("$")
    pub symbol: String,
    /// Fractional digits of an amount
    pub scale: u32,
}

impl Currency {
    pub fn new(code: &str, symbol: &str, scale: u32) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            scale,
        }
    }
}

// ============================================================================
// Account Entity
// ============================================================================

/// An account holding amounts in a single currency.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub currency: Currency,
}

impl Account {
    pub fn new(name: &str, currency: Currency) -> Self {
        Self {
            id: AccountId::new(),
            name: name.to_string(),
            currency,
        }
    }

    /// True if both accounts are denominated in the same currency.
    pub fn same_currency(&self, other: &Account) -> bool {
        self.currency == other.currency
    }
}

// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod account;
pub mod config;
pub mod locale;
pub mod preferences;
pub mod transaction;

pub use account::{Account, AccountId, Currency};
pub use config::{FieldConfig, DEFAULT_SCALE};
pub use locale::{
    install_process_separators, process_separators, AllowedChars, Separators, MATH_OPERATORS,
};
pub use preferences::{DatePattern, FormatPreferences};
pub use transaction::{Transaction, TransactionType};

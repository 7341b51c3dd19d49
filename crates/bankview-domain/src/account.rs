//! Domain model for customer deposit accounts.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A deposit account as reported by the backend.
///
/// The balance only ever changes through server-confirmed mutations; the
/// client never adjusts it optimistically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    /// Display string, unique per owner.
    pub account_number: String,
    pub account_type: AccountKind,
    pub balance: f64,
    pub interest_rate: f64,
    pub purpose: String,
    #[serde(default)]
    pub active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Enumerates the account products a customer can open.
pub enum AccountKind {
    Savings,
    Checking,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
        };
        f.write_str(label)
    }
}

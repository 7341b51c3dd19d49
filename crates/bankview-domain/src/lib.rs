//! bankview-domain
//!
//! Client-side record models for the banking dashboard: accounts,
//! transactions, loans, and security activity, plus the severity
//! taxonomy and derived metrics computed from them. Pure data, no IO.

pub mod account;
pub mod loan;
pub mod security;
pub mod severity;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use loan::{Loan, LoanStatus};
pub use security::SecurityActivity;
pub use severity::{activity_severity, Severity};
pub use transaction::{Transaction, TransactionCategory, TransactionKind, TransactionStatus};

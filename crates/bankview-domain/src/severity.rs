//! Maps record statuses onto the shared severity taxonomy.
//!
//! Every view colors and labels statuses through these lookups, so the
//! mapping is total: an unrecognized status degrades to [`Severity::Info`]
//! instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loan::LoanStatus;
use crate::transaction::{TransactionKind, TransactionStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Display severity of a record status.
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

impl LoanStatus {
    pub fn severity(self) -> Severity {
        match self {
            LoanStatus::Approved | LoanStatus::Active | LoanStatus::Completed => Severity::Success,
            LoanStatus::Pending => Severity::Warning,
            LoanStatus::Rejected | LoanStatus::Defaulted => Severity::Error,
            LoanStatus::Unknown => Severity::Info,
        }
    }
}

impl TransactionStatus {
    pub fn severity(self) -> Severity {
        match self {
            TransactionStatus::Completed => Severity::Success,
            TransactionStatus::Pending => Severity::Warning,
            TransactionStatus::Failed | TransactionStatus::Cancelled => Severity::Error,
            TransactionStatus::Unknown => Severity::Info,
        }
    }
}

impl TransactionKind {
    /// Tint used for the credit/debit badge next to an amount.
    pub fn severity(self) -> Severity {
        match self {
            TransactionKind::Deposit => Severity::Success,
            TransactionKind::Withdrawal => Severity::Error,
            TransactionKind::Transfer => Severity::Info,
        }
    }
}

/// Severity of a security activity outcome. Only the literal "Failed"
/// counts as an error; everything else renders as success.
pub fn activity_severity(outcome: &str) -> Severity {
    if outcome == "Failed" {
        Severity::Error
    } else {
        Severity::Success
    }
}

//! Domain model for customer loans and repayment metrics.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A loan as reported by the backend.
///
/// `remaining_payments` stays within `[0, term_months]` on well-formed
/// data and only decreases, one server-confirmed payment at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    /// Principal amount.
    pub amount: f64,
    pub term_months: u32,
    pub interest_rate: f64,
    pub purpose: String,
    pub status: LoanStatus,
    /// Set once the loan is approved.
    pub start_date: Option<NaiveDateTime>,
    pub next_payment_date: Option<NaiveDateTime>,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub remaining_payments: u32,
    pub created_at: NaiveDateTime,
}

impl Loan {
    /// Number of installments already paid.
    pub fn completed_payments(&self) -> u32 {
        self.term_months.saturating_sub(self.remaining_payments)
    }

    /// Repayment progress as a percentage of the term.
    ///
    /// A zero-month term yields 0. Out-of-range `remaining_payments`
    /// (greater than the term) is passed through rather than clamped;
    /// the sync layer flags such records when they arrive.
    pub fn progress_percent(&self) -> f64 {
        if self.term_months == 0 {
            return 0.0;
        }
        let completed = self.term_months as f64 - self.remaining_payments as f64;
        completed / self.term_months as f64 * 100.0
    }

    /// Whether the loan is being repaid and accepts payments.
    pub fn accepts_payments(&self) -> bool {
        matches!(self.status, LoanStatus::Approved | LoanStatus::Active)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Enumerates the lifecycle state of a loan.
///
/// A value this client does not recognize deserializes to `Unknown`
/// rather than failing the whole collection.
pub enum LoanStatus {
    Pending,
    Approved,
    Active,
    Completed,
    Rejected,
    Defaulted,
    #[serde(other)]
    Unknown,
}

impl LoanStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "PENDING" => LoanStatus::Pending,
            "APPROVED" => LoanStatus::Approved,
            "ACTIVE" => LoanStatus::Active,
            "COMPLETED" => LoanStatus::Completed,
            "REJECTED" => LoanStatus::Rejected,
            "DEFAULTED" => LoanStatus::Defaulted,
            _ => LoanStatus::Unknown,
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Approved => "Approved",
            LoanStatus::Active => "Active",
            LoanStatus::Completed => "Completed",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Defaulted => "Defaulted",
            LoanStatus::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

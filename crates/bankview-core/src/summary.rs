//! Display-ready aggregates for the dashboard tiles.

use bankview_domain::{Account, Loan};

/// Headline numbers derived from the fetched collections.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Sum of all account balances.
    pub total_balance: f64,
    pub active_loan_count: usize,
    /// Outstanding principal across approved and active loans.
    pub active_loan_amount: f64,
    /// Interest the accounts earn in a month at their current rates.
    pub monthly_interest_accrual: f64,
}

pub fn summarize(accounts: &[Account], loans: &[Loan]) -> DashboardSummary {
    let total_balance = accounts.iter().map(|account| account.balance).sum();
    let monthly_interest_accrual = accounts
        .iter()
        .map(|account| account.balance * account.interest_rate / 100.0 / 12.0)
        .sum();
    let mut active_loan_count = 0;
    let mut active_loan_amount = 0.0;
    for loan in loans.iter().filter(|loan| loan.accepts_payments()) {
        active_loan_count += 1;
        active_loan_amount += loan.amount;
    }
    DashboardSummary {
        total_balance,
        active_loan_count,
        active_loan_amount,
        monthly_interest_accrual,
    }
}

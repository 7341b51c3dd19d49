//! In-memory mirror of the customer's loans.

use std::sync::Arc;

use bankview_domain::Loan;

use crate::error::SyncResult;
use crate::gateway::{BankGateway, LoanApplication};
use crate::session::Session;
use crate::store::{require_token, StoreState};

/// Holds the last-fetched loan collection and submits loan mutations.
pub struct LoanStore {
    gateway: Arc<dyn BankGateway>,
    session: Arc<Session>,
    state: StoreState<Loan>,
}

impl LoanStore {
    pub fn new(gateway: Arc<dyn BankGateway>, session: Arc<Session>) -> Self {
        Self {
            gateway,
            session,
            state: StoreState::new(),
        }
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.state.records()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Fetches the current collection, replacing the held one.
    pub async fn refresh(&self) -> SyncResult<()> {
        self.state.clear_error();
        let _load = self.state.begin_load();
        match self.fetch().await {
            Ok(loans) => {
                tracing::debug!(count = loans.len(), "loans refreshed");
                flag_anomalies(&loans);
                self.state.replace(loans);
                Ok(())
            }
            Err(err) => {
                self.state.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Submits a loan application, then refreshes the collection.
    pub async fn apply(&self, request: &LoanApplication) -> SyncResult<()> {
        let _op = self.state.begin_mutation()?;
        match self.submit(request).await {
            Ok(()) => {
                // Refresh failures land in the error slot, not in the
                // application outcome.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.state.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Pays one installment on `loan_id`, then refreshes the collection.
    pub async fn make_payment(&self, loan_id: i64) -> SyncResult<()> {
        let _op = self.state.begin_mutation()?;
        match self.pay(loan_id).await {
            Ok(()) => {
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.state.record_failure(&err);
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> SyncResult<Vec<Loan>> {
        let token = require_token(&self.session)?;
        self.gateway.list_loans(&token).await
    }

    async fn submit(&self, request: &LoanApplication) -> SyncResult<()> {
        self.state.clear_error();
        let _load = self.state.begin_load();
        let token = require_token(&self.session)?;
        let loan = self.gateway.apply_for_loan(&token, request).await?;
        tracing::debug!(loan = loan.id, status = %loan.status, "loan application submitted");
        Ok(())
    }

    async fn pay(&self, loan_id: i64) -> SyncResult<()> {
        self.state.clear_error();
        let _load = self.state.begin_load();
        let token = require_token(&self.session)?;
        let loan = self.gateway.make_loan_payment(&token, loan_id).await?;
        tracing::debug!(
            loan = loan.id,
            remaining = loan.remaining_payments,
            "loan payment recorded"
        );
        Ok(())
    }
}

/// The backend guarantees `remaining_payments <= term_months`; a record
/// violating that is surfaced, not clamped.
fn flag_anomalies(loans: &[Loan]) {
    for loan in loans {
        if loan.remaining_payments > loan.term_months {
            tracing::warn!(
                loan = loan.id,
                remaining = loan.remaining_payments,
                term = loan.term_months,
                "remaining payments exceed the loan term"
            );
        }
    }
}

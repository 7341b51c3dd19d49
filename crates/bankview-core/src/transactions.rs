//! In-memory mirror of one account's transactions.

use std::sync::Arc;

use bankview_domain::Transaction;

use crate::error::SyncResult;
use crate::gateway::{BankGateway, CreateTransaction};
use crate::session::Session;
use crate::store::{require_token, StoreState};

/// Holds the last-fetched transactions of a single account, matching
/// the per-account listing endpoint.
pub struct TransactionStore {
    gateway: Arc<dyn BankGateway>,
    session: Arc<Session>,
    account_id: i64,
    state: StoreState<Transaction>,
}

impl TransactionStore {
    pub fn for_account(
        gateway: Arc<dyn BankGateway>,
        session: Arc<Session>,
        account_id: i64,
    ) -> Self {
        Self {
            gateway,
            session,
            account_id,
            state: StoreState::new(),
        }
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.records()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Fetches the account's transactions, replacing the held ones.
    pub async fn refresh(&self) -> SyncResult<()> {
        self.state.clear_error();
        let _load = self.state.begin_load();
        match self.fetch().await {
            Ok(transactions) => {
                tracing::debug!(
                    account = self.account_id,
                    count = transactions.len(),
                    "transactions refreshed"
                );
                self.state.replace(transactions);
                Ok(())
            }
            Err(err) => {
                self.state.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Records a new transaction, then refreshes the collection.
    pub async fn create(&self, request: &CreateTransaction) -> SyncResult<()> {
        let _op = self.state.begin_mutation()?;
        match self.submit(request).await {
            Ok(()) => {
                // Refresh failures land in the error slot, not in the
                // create outcome.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.state.record_failure(&err);
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> SyncResult<Vec<Transaction>> {
        let token = require_token(&self.session)?;
        self.gateway.list_transactions(&token, self.account_id).await
    }

    async fn submit(&self, request: &CreateTransaction) -> SyncResult<()> {
        self.state.clear_error();
        let _load = self.state.begin_load();
        let token = require_token(&self.session)?;
        let transaction = self.gateway.create_transaction(&token, request).await?;
        tracing::debug!(
            reference = %transaction.reference_number,
            "transaction created"
        );
        Ok(())
    }
}

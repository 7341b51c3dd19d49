//! In-memory mirror of the customer's accounts.

use std::sync::Arc;

use bankview_domain::Account;

use crate::error::{SyncError, SyncResult};
use crate::gateway::{BankGateway, CreateAccount};
use crate::session::Session;
use crate::store::{require_token, StoreState};

/// Holds the last-fetched account collection and submits account
/// mutations. The collection is replaced wholesale on every successful
/// refresh and left untouched on any failure.
pub struct AccountStore {
    gateway: Arc<dyn BankGateway>,
    session: Arc<Session>,
    state: StoreState<Account>,
}

impl AccountStore {
    pub fn new(gateway: Arc<dyn BankGateway>, session: Arc<Session>) -> Self {
        Self {
            gateway,
            session,
            state: StoreState::new(),
        }
    }

    pub fn accounts(&self) -> Vec<Account> {
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
            Ok(accounts) => {
                tracing::debug!(count = accounts.len(), "accounts refreshed");
                self.state.replace(accounts);
                Ok(())
            }
            Err(err) => {
                self.state.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Opens a new account, then refreshes the collection.
    pub async fn create(&self, request: &CreateAccount) -> SyncResult<()> {
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

    /// Moves funds between accounts.
    // TODO: wire to the transfer endpoint once the backend exposes one.
    pub fn transfer(&self, account_id: i64) -> SyncResult<()> {
        let err = SyncError::Unsupported(format!(
            "Transfers from account {account_id} are not available yet"
        ));
        self.state.record_failure(&err);
        Err(err)
    }

    /// Closes an account.
    // TODO: wire to the account deletion endpoint once the backend exposes one.
    pub fn close(&self, account_id: i64) -> SyncResult<()> {
        let err = SyncError::Unsupported(format!(
            "Closing account {account_id} is not available yet"
        ));
        self.state.record_failure(&err);
        Err(err)
    }

    async fn fetch(&self) -> SyncResult<Vec<Account>> {
        let token = require_token(&self.session)?;
        self.gateway.list_accounts(&token).await
    }

    async fn submit(&self, request: &CreateAccount) -> SyncResult<()> {
        self.state.clear_error();
        let _load = self.state.begin_load();
        let token = require_token(&self.session)?;
        let account = self.gateway.create_account(&token, request).await?;
        tracing::debug!(account = %account.account_number, "account created");
        Ok(())
    }
}

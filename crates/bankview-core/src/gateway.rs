//! Port to the remote banking API.
//!
//! One method per backend operation, each taking the bearer token
//! explicitly so a missing token provably never reaches the transport.
//! The HTTP adapter lives in `bankview-gateway-http`; tests substitute
//! in-memory implementations.

use async_trait::async_trait;
use serde::Serialize;

use bankview_domain::{
    Account, AccountKind, Loan, Transaction, TransactionCategory, TransactionKind,
};

use crate::error::SyncResult;

/// Payload for opening a new account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub account_type: AccountKind,
    pub initial_deposit: f64,
    pub purpose: String,
}

/// Payload for a loan application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub amount: f64,
    pub term_months: u32,
    pub purpose: String,
    pub employment_status: String,
    pub monthly_income: f64,
    pub collateral: String,
}

/// Payload for recording a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub account_id: i64,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: TransactionCategory,
    pub location: String,
}

/// Abstraction over the authenticated banking backend.
#[async_trait]
pub trait BankGateway: Send + Sync {
    async fn list_accounts(&self, token: &str) -> SyncResult<Vec<Account>>;
    async fn create_account(&self, token: &str, request: &CreateAccount) -> SyncResult<Account>;
    async fn list_loans(&self, token: &str) -> SyncResult<Vec<Loan>>;
    async fn apply_for_loan(&self, token: &str, request: &LoanApplication) -> SyncResult<Loan>;
    async fn make_loan_payment(&self, token: &str, loan_id: i64) -> SyncResult<Loan>;
    async fn list_transactions(&self, token: &str, account_id: i64) -> SyncResult<Vec<Transaction>>;
    async fn create_transaction(
        &self,
        token: &str,
        request: &CreateTransaction,
    ) -> SyncResult<Transaction>;
}

//! Reqwest-backed adapter for the banking API.
//!
//! Owns transport details only: bearer-token attachment, status and
//! transport error mapping, and decoding payloads into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use bankview_core::{
    BankGateway, CreateAccount, CreateTransaction, LoanApplication, SyncError, SyncResult,
};
use bankview_domain::{Account, Loan, Transaction};

use crate::config::ApiConfig;

const FETCH_ACCOUNTS: &str = "Failed to fetch accounts";
const CREATE_ACCOUNT: &str = "Failed to create account";
const FETCH_LOANS: &str = "Failed to fetch loans";
const APPLY_LOAN: &str = "Failed to apply for loan";
const MAKE_PAYMENT: &str = "Failed to make payment";
const FETCH_TRANSACTIONS: &str = "Failed to fetch transactions";
const CREATE_TRANSACTION: &str = "Failed to create transaction";

/// HTTP implementation of [`BankGateway`].
#[derive(Debug)]
pub struct HttpGateway {
    client: Client,
    base: Url,
}

impl HttpGateway {
    /// Builds an adapter from endpoint configuration.
    pub fn new(config: &ApiConfig) -> SyncResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|err| {
            SyncError::Network(format!("invalid API root `{}`: {err}", config.base_url))
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|err| SyncError::Network(err.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> SyncResult<Url> {
        self.base
            .join(path)
            .map_err(|err| SyncError::Network(format!("invalid endpoint `{path}`: {err}")))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        fallback: &'static str,
    ) -> SyncResult<Vec<T>> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(map_transport)?;
        let response = reject_failure(response, fallback).await?;
        let value = response
            .json::<Value>()
            .await
            .map_err(|err| SyncError::Decode(err.to_string()))?;
        decode_records(value)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
        fallback: &'static str,
    ) -> SyncResult<T> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(map_transport)?;
        let response = reject_failure(response, fallback).await?;
        response
            .json()
            .await
            .map_err(|err| SyncError::Decode(err.to_string()))
    }

    async fn post_empty<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        fallback: &'static str,
    ) -> SyncResult<T> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(map_transport)?;
        let response = reject_failure(response, fallback).await?;
        response
            .json()
            .await
            .map_err(|err| SyncError::Decode(err.to_string()))
    }
}

#[async_trait]
impl BankGateway for HttpGateway {
    async fn list_accounts(&self, token: &str) -> SyncResult<Vec<Account>> {
        self.get_list(token, "/api/accounts", FETCH_ACCOUNTS).await
    }

    async fn create_account(&self, token: &str, request: &CreateAccount) -> SyncResult<Account> {
        self.post_json(token, "/api/accounts", request, CREATE_ACCOUNT)
            .await
    }

    async fn list_loans(&self, token: &str) -> SyncResult<Vec<Loan>> {
        self.get_list(token, "/api/loans", FETCH_LOANS).await
    }

    async fn apply_for_loan(&self, token: &str, request: &LoanApplication) -> SyncResult<Loan> {
        self.post_json(token, "/api/loans/apply", request, APPLY_LOAN)
            .await
    }

    async fn make_loan_payment(&self, token: &str, loan_id: i64) -> SyncResult<Loan> {
        self.post_empty(token, &format!("/api/loans/{loan_id}/payment"), MAKE_PAYMENT)
            .await
    }

    async fn list_transactions(&self, token: &str, account_id: i64) -> SyncResult<Vec<Transaction>> {
        self.get_list(
            token,
            &format!("/api/transactions/account/{account_id}"),
            FETCH_TRANSACTIONS,
        )
        .await
    }

    async fn create_transaction(
        &self,
        token: &str,
        request: &CreateTransaction,
    ) -> SyncResult<Transaction> {
        self.post_json(token, "/api/transactions", request, CREATE_TRANSACTION)
            .await
    }
}

fn map_transport(error: reqwest::Error) -> SyncError {
    SyncError::Network(error.to_string())
}

async fn reject_failure(response: Response, fallback: &'static str) -> SyncResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.bytes().await.unwrap_or_default();
    let message = rejection_message(&body, fallback);
    tracing::debug!(status = status.as_u16(), %message, "request rejected");
    Err(SyncError::Rejected(message))
}

/// Prefers the body's `message` field; anything else falls back to the
/// per-operation generic message.
fn rejection_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// A payload that is valid JSON but not a sequence degrades to "no
/// records"; a sequence with an undecodable element is a decode error.
fn decode_records<T: DeserializeOwned>(value: Value) -> SyncResult<Vec<T>> {
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|err| SyncError::Decode(format!("malformed record in response: {err}"))),
        _ => Ok(Vec::new()),
    }
}

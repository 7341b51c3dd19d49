//! Dialog form state for each record mutation.
//!
//! Fields stay raw strings the way the browser form holds them; numeric
//! parsing happens once on submit. `is_complete` is the advisory gate
//! behind the submit control, `request` the authoritative parse.

use bankview_domain::{AccountKind, TransactionCategory, TransactionKind};

use crate::error::FormError;
use crate::gateway::{CreateAccount, CreateTransaction, LoanApplication};
use crate::workflow::RecordForm;

const DEFAULT_TRANSACTION_LOCATION: &str = "Online";

/// Form behind the "new account" dialog.
#[derive(Debug, Clone)]
pub struct AccountForm {
    pub account_type: AccountKind,
    pub initial_deposit: String,
    pub purpose: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            account_type: AccountKind::Savings,
            initial_deposit: String::new(),
            purpose: String::new(),
        }
    }
}

impl RecordForm for AccountForm {
    type Request = CreateAccount;

    fn is_complete(&self) -> bool {
        !self.initial_deposit.trim().is_empty() && !self.purpose.trim().is_empty()
    }

    fn request(&self) -> Result<CreateAccount, FormError> {
        Ok(CreateAccount {
            account_type: self.account_type,
            initial_deposit: parse_amount("Initial Deposit", &self.initial_deposit)?,
            purpose: required("Purpose", &self.purpose)?.to_string(),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form behind the loan application dialog.
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub amount: String,
    pub term_months: String,
    pub purpose: String,
    pub employment_status: String,
    pub monthly_income: String,
    pub collateral: String,
}

impl RecordForm for LoanForm {
    type Request = LoanApplication;

    fn is_complete(&self) -> bool {
        [
            &self.amount,
            &self.term_months,
            &self.purpose,
            &self.employment_status,
            &self.monthly_income,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    fn request(&self) -> Result<LoanApplication, FormError> {
        Ok(LoanApplication {
            amount: parse_amount("Loan Amount", &self.amount)?,
            term_months: parse_months("Term (Months)", &self.term_months)?,
            purpose: required("Purpose", &self.purpose)?.to_string(),
            employment_status: required("Employment Status", &self.employment_status)?.to_string(),
            monthly_income: parse_amount("Monthly Income", &self.monthly_income)?,
            collateral: self.collateral.trim().to_string(),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form behind the "new transaction" dialog, scoped to one account.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    account_id: i64,
    pub kind: Option<TransactionKind>,
    pub amount: String,
    pub description: String,
    pub category: Option<TransactionCategory>,
    pub location: String,
}

impl TransactionForm {
    pub fn for_account(account_id: i64) -> Self {
        Self {
            account_id,
            kind: None,
            amount: String::new(),
            description: String::new(),
            category: None,
            location: DEFAULT_TRANSACTION_LOCATION.to_string(),
        }
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }
}

impl RecordForm for TransactionForm {
    type Request = CreateTransaction;

    fn is_complete(&self) -> bool {
        self.kind.is_some() && self.category.is_some() && !self.amount.trim().is_empty()
    }

    fn request(&self) -> Result<CreateTransaction, FormError> {
        Ok(CreateTransaction {
            account_id: self.account_id,
            amount: parse_amount("Amount", &self.amount)?,
            description: self.description.trim().to_string(),
            kind: self.kind.ok_or(FormError::Missing("Transaction Type"))?,
            category: self.category.ok_or(FormError::Missing("Category"))?,
            location: required("Location", &self.location)
                .unwrap_or(DEFAULT_TRANSACTION_LOCATION)
                .to_string(),
        })
    }

    fn reset(&mut self) {
        *self = Self::for_account(self.account_id);
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_amount(field: &'static str, value: &str) -> Result<f64, FormError> {
    let parsed: f64 = required(field, value)?
        .parse()
        .map_err(|_| FormError::NotNumeric(field))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(FormError::NotNumeric(field))
    }
}

fn parse_months(field: &'static str, value: &str) -> Result<u32, FormError> {
    required(field, value)?
        .parse()
        .map_err(|_| FormError::NotNumeric(field))
}

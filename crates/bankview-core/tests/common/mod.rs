//! Shared test doubles for the store and workflow suites.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use bankview_core::{
    BankGateway, CreateAccount, CreateTransaction, LoanApplication, SyncError, SyncResult,
};
use bankview_domain::{
    Account, AccountKind, Loan, LoanStatus, Transaction, TransactionCategory, TransactionStatus,
};

/// In-memory gateway that records every call and can fail the next one.
#[derive(Default)]
pub struct MockGateway {
    pub accounts: Mutex<Vec<Account>>,
    pub loans: Mutex<Vec<Loan>>,
    pub transactions: Mutex<Vec<Transaction>>,
    next_failure: Mutex<Option<SyncError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let gateway = Self::new();
        *gateway.accounts.lock().unwrap() = accounts;
        gateway
    }

    pub fn with_loans(loans: Vec<Loan>) -> Self {
        let gateway = Self::new();
        *gateway.loans.lock().unwrap() = loans;
        gateway
    }

    pub fn fail_next_call(&self, error: SyncError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_log(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn note(&self, op: &'static str) -> SyncResult<()> {
        self.calls.lock().unwrap().push(op);
        match self.next_failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BankGateway for MockGateway {
    async fn list_accounts(&self, _token: &str) -> SyncResult<Vec<Account>> {
        self.note("list_accounts")?;
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn create_account(&self, _token: &str, request: &CreateAccount) -> SyncResult<Account> {
        self.note("create_account")?;
        let mut accounts = self.accounts.lock().unwrap();
        let account = Account {
            id: accounts.len() as i64 + 1,
            account_number: format!("ACC-1000000{}", accounts.len() + 1),
            account_type: request.account_type,
            balance: request.initial_deposit,
            interest_rate: 2.5,
            purpose: request.purpose.clone(),
            active: true,
            created_at: NaiveDateTime::default(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn list_loans(&self, _token: &str) -> SyncResult<Vec<Loan>> {
        self.note("list_loans")?;
        Ok(self.loans.lock().unwrap().clone())
    }

    async fn apply_for_loan(&self, _token: &str, request: &LoanApplication) -> SyncResult<Loan> {
        self.note("apply_for_loan")?;
        let mut loans = self.loans.lock().unwrap();
        let loan = Loan {
            id: loans.len() as i64 + 1,
            amount: request.amount,
            term_months: request.term_months,
            interest_rate: 5.0,
            purpose: request.purpose.clone(),
            status: LoanStatus::Pending,
            start_date: None,
            next_payment_date: None,
            monthly_payment: 0.0,
            total_interest: 0.0,
            remaining_payments: request.term_months,
            created_at: NaiveDateTime::default(),
        };
        loans.push(loan.clone());
        Ok(loan)
    }

    async fn make_loan_payment(&self, _token: &str, loan_id: i64) -> SyncResult<Loan> {
        self.note("make_loan_payment")?;
        let mut loans = self.loans.lock().unwrap();
        let loan = loans
            .iter_mut()
            .find(|loan| loan.id == loan_id)
            .ok_or_else(|| SyncError::Rejected("Loan not found".into()))?;
        loan.remaining_payments = loan.remaining_payments.saturating_sub(1);
        loan.status = if loan.remaining_payments == 0 {
            LoanStatus::Completed
        } else {
            LoanStatus::Active
        };
        Ok(loan.clone())
    }

    async fn list_transactions(&self, _token: &str, _account_id: i64) -> SyncResult<Vec<Transaction>> {
        self.note("list_transactions")?;
        Ok(self.transactions.lock().unwrap().clone())
    }

    async fn create_transaction(
        &self,
        _token: &str,
        request: &CreateTransaction,
    ) -> SyncResult<Transaction> {
        self.note("create_transaction")?;
        let mut transactions = self.transactions.lock().unwrap();
        let transaction = Transaction {
            id: transactions.len() as i64 + 1,
            account_number: format!("ACC-1000000{}", request.account_id),
            description: request.description.clone(),
            amount: request.amount,
            kind: request.kind,
            category: request.category,
            reference_number: format!("TXN-0000000{}", transactions.len() + 1),
            location: request.location.clone(),
            status: TransactionStatus::Completed,
            created_at: NaiveDateTime::default(),
        };
        transactions.push(transaction.clone());
        Ok(transaction)
    }
}

pub fn sample_account(id: i64, balance: f64) -> Account {
    Account {
        id,
        account_number: format!("ACC-1000000{id}"),
        account_type: AccountKind::Savings,
        balance,
        interest_rate: 2.5,
        purpose: "Savings".into(),
        active: true,
        created_at: NaiveDateTime::default(),
    }
}

pub fn sample_loan(id: i64, term_months: u32, remaining_payments: u32, status: LoanStatus) -> Loan {
    Loan {
        id,
        amount: 10_000.0,
        term_months,
        interest_rate: 5.0,
        purpose: "Car repair".into(),
        status,
        start_date: None,
        next_payment_date: None,
        monthly_payment: 856.07,
        total_interest: 272.84,
        remaining_payments,
        created_at: NaiveDateTime::default(),
    }
}

pub fn sample_transaction(id: i64, amount: f64) -> Transaction {
    Transaction {
        id,
        account_number: "ACC-10000001".into(),
        description: "Groceries".into(),
        amount,
        kind: bankview_domain::TransactionKind::Withdrawal,
        category: TransactionCategory::Cash,
        reference_number: format!("TXN-0000000{id}"),
        location: "Online".into(),
        status: TransactionStatus::Completed,
        created_at: NaiveDateTime::default(),
    }
}

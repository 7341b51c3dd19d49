//! Decoding checks against the backend's JSON shapes.

use bankview_domain::{
    Account, AccountKind, Loan, LoanStatus, Transaction, TransactionCategory, TransactionKind,
    TransactionStatus,
};

#[test]
fn account_decodes_from_backend_payload() {
    let payload = r#"{
        "id": 4,
        "accountNumber": "ACC-10000004",
        "accountType": "SAVINGS",
        "balance": 25001.25,
        "interestRate": 2.5,
        "purpose": "Emergency fund",
        "active": true,
        "createdAt": "2024-03-01T09:15:00"
    }"#;

    let account: Account = serde_json::from_str(payload).expect("account decodes");
    assert_eq!(account.account_number, "ACC-10000004");
    assert_eq!(account.account_type, AccountKind::Savings);
    assert_eq!(account.balance, 25001.25);
    assert!(account.active);
}

#[test]
fn transaction_decodes_type_and_category_fields() {
    let payload = r#"{
        "id": 17,
        "accountNumber": "ACC-10000004",
        "description": "Salary",
        "amount": 3200.0,
        "type": "DEPOSIT",
        "category": "INCOME",
        "referenceNumber": "TXN-48151623",
        "location": "Online",
        "status": "COMPLETED",
        "createdAt": "2024-03-15T16:00:00"
    }"#;

    let transaction: Transaction = serde_json::from_str(payload).expect("transaction decodes");
    assert_eq!(transaction.kind, TransactionKind::Deposit);
    assert_eq!(transaction.category, TransactionCategory::Income);
    assert_eq!(transaction.status, TransactionStatus::Completed);
    assert_eq!(transaction.reference_number, "TXN-48151623");
}

#[test]
fn loan_decodes_with_null_dates_while_pending() {
    let payload = r#"{
        "id": 2,
        "amount": 10000.0,
        "termMonths": 12,
        "interestRate": 5.0,
        "purpose": "Car repair",
        "status": "PENDING",
        "startDate": null,
        "nextPaymentDate": null,
        "monthlyPayment": 856.07,
        "totalInterest": 272.84,
        "remainingPayments": 12,
        "createdAt": "2024-02-20T11:00:00"
    }"#;

    let loan: Loan = serde_json::from_str(payload).expect("loan decodes");
    assert_eq!(loan.status, LoanStatus::Pending);
    assert!(loan.start_date.is_none());
    assert_eq!(loan.remaining_payments, 12);
    assert_eq!(loan.progress_percent(), 0.0);
}

#[test]
fn unrecognized_status_values_fall_back_to_unknown() {
    let payload = r#"{
        "id": 3,
        "amount": 5000.0,
        "termMonths": 24,
        "interestRate": 6.0,
        "purpose": "Boat",
        "status": "UNDER_REVIEW",
        "startDate": null,
        "nextPaymentDate": null,
        "monthlyPayment": 221.6,
        "totalInterest": 318.4,
        "remainingPayments": 24,
        "createdAt": "2024-02-20T11:00:00"
    }"#;

    let loan: Loan = serde_json::from_str(payload).expect("loan decodes despite odd status");
    assert_eq!(loan.status, LoanStatus::Unknown);
    assert_eq!(loan.status.severity(), bankview_domain::Severity::Info);
}

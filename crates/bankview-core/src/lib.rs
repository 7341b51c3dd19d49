//! bankview-core
//!
//! Record stores, mutation workflows, and derived summaries for the
//! banking dashboard. Depends on bankview-domain. No transport here;
//! the HTTP adapter lives in bankview-gateway-http.

pub mod accounts;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod loans;
pub mod session;
mod store;
pub mod summary;
pub mod transactions;
pub mod workflow;

pub use accounts::AccountStore;
pub use error::{FormError, SyncError, SyncResult, WorkflowError};
pub use forms::{AccountForm, LoanForm, TransactionForm};
pub use gateway::{BankGateway, CreateAccount, CreateTransaction, LoanApplication};
pub use loans::LoanStore;
pub use session::Session;
pub use summary::{summarize, DashboardSummary};
pub use transactions::TransactionStore;
pub use workflow::{
    submit_account, submit_loan_application, submit_transaction, DialogPhase, MutationDialog,
    RecordForm,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bankview_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("bankview tracing initialized.");
    });
}

//! Dialog state machine shared by every record mutation.
//!
//! A dialog moves `Closed → Open → Submitting` and resolves back to
//! `Closed` on success or `Open` with an error on failure. Each
//! submission carries a token so a resolution arriving for a superseded
//! submission is ignored rather than applied.

use uuid::Uuid;

use crate::accounts::AccountStore;
use crate::error::{FormError, SyncError, WorkflowError};
use crate::forms::{AccountForm, LoanForm, TransactionForm};
use crate::loans::LoanStore;
use crate::transactions::TransactionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Open,
    Submitting,
}

/// Form behind a mutation dialog.
pub trait RecordForm {
    type Request;

    /// All required fields present; gates the submit control.
    fn is_complete(&self) -> bool;

    /// Parses the raw fields into the wire payload.
    fn request(&self) -> Result<Self::Request, FormError>;

    /// Returns the fields to their initial values.
    fn reset(&mut self);
}

/// One open/validate/submit/refresh-or-error interaction cycle.
#[derive(Debug)]
pub struct MutationDialog<F> {
    phase: DialogPhase,
    form: F,
    error: Option<String>,
    submission: Option<Uuid>,
}

impl<F: RecordForm> MutationDialog<F> {
    pub fn new(form: F) -> Self {
        Self {
            phase: DialogPhase::Closed,
            form,
            error: None,
            submission: None,
        }
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DialogPhase::Closed)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Opens the dialog. Clears the previous error; field values are
    /// kept and only reset after a successful submission.
    pub fn open(&mut self) {
        if self.phase == DialogPhase::Closed {
            self.phase = DialogPhase::Open;
        }
        self.error = None;
    }

    /// Dismisses the dialog. An in-flight submission keeps running but
    /// its resolution is discarded as stale.
    pub fn cancel(&mut self) {
        self.phase = DialogPhase::Closed;
        self.submission = None;
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == DialogPhase::Open && self.form.is_complete()
    }

    /// Starts a submission: parses the form and claims the in-flight
    /// slot. A second call while one submission is pending is rejected.
    pub fn begin(&mut self) -> Result<(F::Request, Uuid), WorkflowError> {
        match self.phase {
            DialogPhase::Closed => return Err(WorkflowError::Closed),
            DialogPhase::Submitting => return Err(WorkflowError::Busy),
            DialogPhase::Open => {}
        }
        let request = self.form.request()?;
        let submission = Uuid::new_v4();
        self.phase = DialogPhase::Submitting;
        self.submission = Some(submission);
        self.error = None;
        Ok((request, submission))
    }

    /// Applies the outcome of the submission identified by `submission`.
    /// Stale tokens are ignored.
    pub fn resolve(&mut self, submission: Uuid, outcome: Result<(), SyncError>) {
        if self.submission != Some(submission) {
            return;
        }
        self.submission = None;
        match outcome {
            Ok(()) => {
                self.phase = DialogPhase::Closed;
                self.form.reset();
                self.error = None;
            }
            Err(err) => {
                self.phase = DialogPhase::Open;
                self.error = Some(err.to_string());
            }
        }
    }
}

impl<F: RecordForm + Default> Default for MutationDialog<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

/// Runs the account-creation cycle: begin, create, resolve.
pub async fn submit_account(
    dialog: &mut MutationDialog<AccountForm>,
    store: &AccountStore,
) -> Result<(), WorkflowError> {
    let (request, submission) = dialog.begin()?;
    let outcome = store.create(&request).await;
    dialog.resolve(submission, outcome);
    Ok(())
}

/// Runs the loan-application cycle: begin, apply, resolve.
pub async fn submit_loan_application(
    dialog: &mut MutationDialog<LoanForm>,
    store: &LoanStore,
) -> Result<(), WorkflowError> {
    let (request, submission) = dialog.begin()?;
    let outcome = store.apply(&request).await;
    dialog.resolve(submission, outcome);
    Ok(())
}

/// Runs the transaction-creation cycle: begin, create, resolve.
pub async fn submit_transaction(
    dialog: &mut MutationDialog<TransactionForm>,
    store: &TransactionStore,
) -> Result<(), WorkflowError> {
    let (request, submission) = dialog.begin()?;
    let outcome = store.create(&request).await;
    dialog.resolve(submission, outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct StubForm {
        value: String,
    }

    impl RecordForm for StubForm {
        type Request = String;

        fn is_complete(&self) -> bool {
            !self.value.is_empty()
        }

        fn request(&self) -> Result<String, FormError> {
            if self.value.is_empty() {
                Err(FormError::Missing("value"))
            } else {
                Ok(self.value.clone())
            }
        }

        fn reset(&mut self) {
            self.value.clear();
        }
    }

    fn open_dialog(value: &str) -> MutationDialog<StubForm> {
        let mut dialog = MutationDialog::<StubForm>::default();
        dialog.open();
        dialog.form_mut().value = value.to_string();
        dialog
    }

    #[test]
    fn opening_clears_the_error_but_keeps_fields() {
        let mut dialog = open_dialog("draft");
        let (_, submission) = dialog.begin().expect("begin");
        dialog.resolve(submission, Err(SyncError::Rejected("nope".into())));
        assert_eq!(dialog.error(), Some("nope"));

        dialog.cancel();
        dialog.open();
        assert!(dialog.error().is_none());
        assert_eq!(dialog.form().value, "draft");
    }

    #[test]
    fn submit_gate_tracks_form_completeness() {
        let mut dialog = MutationDialog::<StubForm>::default();
        assert!(!dialog.can_submit());
        dialog.open();
        assert!(!dialog.can_submit());
        dialog.form_mut().value = "ready".into();
        assert!(dialog.can_submit());
    }

    #[test]
    fn begin_rejects_a_second_submission_in_flight() {
        let mut dialog = open_dialog("ready");
        dialog.begin().expect("first begin");
        assert_eq!(dialog.begin().unwrap_err(), WorkflowError::Busy);
    }

    #[test]
    fn begin_requires_an_open_dialog() {
        let mut dialog = MutationDialog::<StubForm>::default();
        assert_eq!(dialog.begin().unwrap_err(), WorkflowError::Closed);
    }

    #[test]
    fn success_closes_and_resets_the_form() {
        let mut dialog = open_dialog("ready");
        let (_, submission) = dialog.begin().expect("begin");
        dialog.resolve(submission, Ok(()));
        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(dialog.form().value.is_empty());
        assert!(dialog.error().is_none());
    }

    #[test]
    fn failure_reopens_with_the_message_and_keeps_fields() {
        let mut dialog = open_dialog("ready");
        let (_, submission) = dialog.begin().expect("begin");
        dialog.resolve(submission, Err(SyncError::Rejected("Insufficient funds".into())));
        assert_eq!(dialog.phase(), DialogPhase::Open);
        assert_eq!(dialog.error(), Some("Insufficient funds"));
        assert_eq!(dialog.form().value, "ready");
    }

    #[test]
    fn stale_resolutions_are_ignored_after_cancel() {
        let mut dialog = open_dialog("ready");
        let (_, submission) = dialog.begin().expect("begin");
        dialog.cancel();
        dialog.resolve(submission, Err(SyncError::Rejected("late".into())));
        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(dialog.error().is_none());
    }
}

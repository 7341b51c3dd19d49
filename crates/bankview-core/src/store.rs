//! Shared plumbing for the per-kind record stores.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::error::{SyncError, SyncResult};
use crate::session::Session;

/// Collection, loading flag, and error slot held by every store.
pub(crate) struct StoreState<T> {
    records: RwLock<Vec<T>>,
    error: RwLock<Option<String>>,
    in_flight: AtomicUsize,
    mutating: AtomicBool,
}

impl<T: Clone> StoreState<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            error: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
            mutating: AtomicBool::new(false),
        }
    }

    pub fn records(&self) -> Vec<T> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the whole collection; fetched data is never merged.
    pub fn replace(&self, records: Vec<T>) {
        *self.records.write().unwrap_or_else(PoisonError::into_inner) = records;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn error(&self) -> Option<String> {
        self.error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_error(&self) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn record_failure(&self, error: &SyncError) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = Some(error.to_string());
    }

    /// Marks a call as in flight. The guard releases the flag on drop,
    /// including when the calling future is dropped mid-await, so the
    /// flag can never stick.
    pub fn begin_load(&self) -> LoadGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadGuard(&self.in_flight)
    }

    /// Claims the store's single mutation slot, rejecting a second
    /// mutation while one is still pending.
    pub fn begin_mutation(&self) -> SyncResult<MutationGuard<'_>> {
        if self
            .mutating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SyncError::Busy);
        }
        Ok(MutationGuard(&self.mutating))
    }
}

#[derive(Debug)]
pub(crate) struct LoadGuard<'a>(&'a AtomicUsize);

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub(crate) struct MutationGuard<'a>(&'a AtomicBool);

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub(crate) fn require_token(session: &Session) -> SyncResult<String> {
    session.token().ok_or(SyncError::MissingToken)
}

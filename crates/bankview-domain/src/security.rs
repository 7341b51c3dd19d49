//! Domain model for account security activity entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry in the recent security activity feed (logins, password
/// changes and the like). Display-only; the outcome string feeds the
/// severity classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityActivity {
    pub id: i64,
    /// What happened, e.g. "Login" or "Password Change".
    pub kind: String,
    pub device: String,
    pub location: String,
    pub time: NaiveDateTime,
    /// "Success" or "Failed" as reported by the audit trail.
    pub outcome: String,
}

impl SecurityActivity {
    pub fn failed(&self) -> bool {
        self.outcome == "Failed"
    }

    pub fn severity(&self) -> crate::severity::Severity {
        crate::severity::activity_severity(&self.outcome)
    }
}

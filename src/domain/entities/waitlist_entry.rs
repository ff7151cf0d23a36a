use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single signup, as stored and as returned by the listing endpoint.
///
/// Entries are immutable once the store has assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Name for display, with a missing name rendered as empty.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

//! In-memory mock implementation of the waitlist store.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Mirrors the Postgres contract: ids increase monotonically, email is unique,
/// listing is newest first. `set_unavailable` makes every call fail the way a
/// lost connection would.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    next_id: Mutex<i64>,
    unavailable: AtomicBool,
    schema_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with existing entries. Ids continue after the largest seeded id.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let max_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            entries: Mutex::new(entries),
            next_id: Mutex::new(max_id),
            ..Self::default()
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn ensure_schema(&self) -> AppResult<()> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }

    async fn insert(&self, email: &str, name: Option<&str>) -> AppResult<WaitlistEntry> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == email) {
            return Err(AppError::Duplicate);
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let entry = WaitlistEntry {
            id: *next_id,
            name: name.map(str::to_string),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.check_available()?;

        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_entry;

    #[tokio::test]
    async fn ids_are_monotonic_after_seed() {
        let repo = InMemoryWaitlistRepo::with_entries(vec![create_test_entry(|e| e.id = 10)]);
        let entry = repo.insert("new@x.com", None).await.unwrap();
        assert_eq!(entry.id, 11);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let repo = InMemoryWaitlistRepo::new();
        repo.insert("a@x.com", Some("Alice")).await.unwrap();
        let err = repo.insert("a@x.com", Some("Bob")).await.unwrap_err();
        assert!(matches!(err, AppError::Duplicate));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn unavailable_fails_every_operation() {
        let repo = InMemoryWaitlistRepo::new();
        repo.set_unavailable(true);
        assert!(repo.ensure_schema().await.is_err());
        assert!(repo.insert("a@x.com", None).await.is_err());
        assert!(repo.list_all().await.is_err());
        assert_eq!(repo.len(), 0);
    }
}

//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` backed by an
//! in-memory waitlist store and hands the store back for assertions.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@x.com".into()))
///     .build();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries));
        let waitlist_use_cases = WaitlistUseCases::new(repo.clone() as Arc<dyn WaitlistRepo>);

        let app_state = AppState {
            config: Arc::new(AppConfig::for_tests()),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        };
        (app_state, repo)
    }
}

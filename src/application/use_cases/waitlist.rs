use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email, normalize_name},
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const INVALID_EMAIL_MESSAGE: &str = "Valid email is required";

/// Storage port for waitlist entries.
///
/// Implementations own the uniqueness constraint on `email`: a second insert
/// with an existing email must fail with `AppError::Duplicate`, and transport
/// failures surface as `AppError::Database`.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Create the table and email index if they do not exist. Idempotent.
    async fn ensure_schema(&self) -> AppResult<()>;
    async fn insert(&self, email: &str, name: Option<&str>) -> AppResult<WaitlistEntry>;
    /// All entries, newest first (`id` breaks ties).
    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    schema: Arc<OnceCell<()>>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self {
            repo,
            schema: Arc::new(OnceCell::new()),
        }
    }

    /// Validate and store a new signup.
    ///
    /// Input is rejected before the store is touched. Duplicates come back from
    /// the store's constraint; there is no read-before-write check here.
    #[instrument(skip(self, request))]
    pub async fn join(&self, request: SignupRequest) -> AppResult<WaitlistEntry> {
        let email = match request.email.as_deref() {
            Some(email) if is_valid_email(email) => normalize_email(email),
            _ => return Err(AppError::InvalidInput(INVALID_EMAIL_MESSAGE.into())),
        };
        let name = normalize_name(request.name.as_deref());

        self.ensure_schema().await?;

        let entry = self.repo.insert(&email, name.as_deref()).await?;
        tracing::info!(entry_id = entry.id, "Waitlist signup stored");
        Ok(entry)
    }

    /// Every entry, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.ensure_schema().await?;
        let entries = self.repo.list_all().await?;
        tracing::debug!(count = entries.len(), "Fetched waitlist");
        Ok(entries)
    }

    /// Runs the store's schema setup once per process. A failed attempt leaves
    /// the cell empty so the next request tries again.
    async fn ensure_schema(&self) -> AppResult<()> {
        self.schema
            .get_or_try_init(|| async { self.repo.ensure_schema().await })
            .await?;
        Ok(())
    }
}

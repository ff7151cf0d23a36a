use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistDb {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<WaitlistDb> for WaitlistEntry {
    fn from(row: WaitlistDb) -> Self {
        WaitlistEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS waitlist (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(255) NOT NULL UNIQUE,
        name VARCHAR(255),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_EMAIL_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_waitlist_email ON waitlist(email)";

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        sqlx::query(CREATE_EMAIL_INDEX)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn insert(&self, email: &str, name: Option<&str>) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistDb>(
            r#"
                INSERT INTO waitlist (email, name)
                VALUES ($1, $2)
                RETURNING id, email, name, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rec.into())
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        let rows = sqlx::query_as::<_, WaitlistDb>(
            r#"
                SELECT id, email, name, created_at
                FROM waitlist
                ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(WaitlistEntry::from).collect())
    }
}

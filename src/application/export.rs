//! CSV export of a fetched waitlist.
//!
//! Pure formatting: callers hand over entries they already retrieved from the
//! listing endpoint and decide where the bytes go.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const CSV_HEADERS: [&str; 3] = ["Name", "Email", "Date Joined"];

const FILE_PREFIX: &str = "cashvault-waitlist";

/// Render entries as CSV: a header row, then one row per entry in the order
/// given. Fields are quoted when they contain separators, quotes or newlines.
pub fn render_csv(entries: &[WaitlistEntry]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADERS).map_err(csv_error)?;
    for entry in entries {
        writer
            .write_record([
                entry.display_name(),
                entry.email.as_str(),
                format_join_date(entry.created_at).as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV not UTF-8: {e}")))
}

/// en-US short date (`1/15/2025`), in UTC.
pub fn format_join_date(created_at: DateTime<Utc>) -> String {
    created_at.format("%-m/%-d/%Y").to_string()
}

/// `cashvault-waitlist-2025-01-15.csv`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("{FILE_PREFIX}-{}.csv", today.format("%Y-%m-%d"))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::Internal(format!("CSV write failed: {err}"))
}

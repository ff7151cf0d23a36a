//! Client side of the export: fetch the listing over HTTP, then write the CSV
//! locally. Mirrors what the dashboard's "Export CSV" button does in a browser.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::{
    adapters::http::routes::waitlist::ListWaitlistResponse,
    application::export::{export_file_name, render_csv},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::http_client::try_build_client,
};

const LIST_PATH: &str = "api/waitlist/list";

#[derive(Debug, Error)]
pub enum ExportClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Waitlist API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct WaitlistApiClient {
    http: Client,
    list_url: Url,
}

impl WaitlistApiClient {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: &Url) -> Result<Self, ExportClientError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http: try_build_client()?,
            list_url: base.join(LIST_PATH)?,
        })
    }

    pub fn list_url(&self) -> &Url {
        &self.list_url
    }

    /// Fetch all entries, newest first. A `success: false` body or a non-2xx
    /// status is an error; there is no partial result.
    pub async fn fetch_entries(&self) -> Result<Vec<WaitlistEntry>, ExportClientError> {
        let response = self.http.get(self.list_url.clone()).send().await?;
        let status = response.status();
        let body: Option<ListWaitlistResponse> = response.json().await.ok();

        match body {
            Some(ListWaitlistResponse {
                success: true,
                data: Some(entries),
                ..
            }) if status.is_success() => Ok(entries),
            Some(body) => Err(ExportClientError::Api {
                status: status.as_u16(),
                message: body
                    .error
                    .unwrap_or_else(|| "Failed to load waitlist data".to_string()),
            }),
            None => Err(ExportClientError::Api {
                status: status.as_u16(),
                message: "Unreadable response body".to_string(),
            }),
        }
    }
}

/// Write `entries` as `cashvault-waitlist-<today>.csv` under `dir`.
///
/// Returns `None` without touching the filesystem when there is nothing to
/// export.
pub fn write_export(
    dir: &Path,
    today: NaiveDate,
    entries: &[WaitlistEntry],
) -> Result<Option<PathBuf>, ExportClientError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let csv = render_csv(entries).map_err(|e| ExportClientError::Export(e.to_string()))?;
    let path = dir.join(export_file_name(today));
    std::fs::write(&path, csv).map_err(|source| ExportClientError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(Some(path))
}

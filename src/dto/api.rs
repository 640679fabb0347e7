//! Responses of the customer API as seen by the services.

use serde::Deserialize;

use crate::domain::SearchResult;

/// MIME type of the spreadsheets produced by the export endpoints.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Completed lookup request.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupResponse {
    /// `200` with a decoded payload.
    Found(SearchResult),
    /// Any other status, with the server-supplied `error` text when present.
    Rejected { status: u16, message: Option<String> },
}

/// Completed export request.
#[derive(Clone, Debug, PartialEq)]
pub enum FileResponse {
    /// `200` with the spreadsheet bytes.
    File(Vec<u8>),
    Rejected { status: u16 },
}

/// Body the lookup endpoint sends with a non-success status.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Extracts the `error` message from a rejection body, if it has one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty())
    }
}

/// A file handed to the page for download.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadFile {
    pub fn spreadsheet(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: XLSX_CONTENT_TYPE,
            bytes,
        }
    }
}

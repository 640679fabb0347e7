//! Seams between the workflow and its host: the customer API and the page.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::dto::api::{DownloadFile, FileResponse, LookupResponse};
use crate::services::errors::{DownloadError, TransportError};
use crate::view::Element;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Characters escaped when a document number is used as a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const LOYALTY_REPORT_PATH: &str = "/api/loyalty-report/";

pub fn lookup_path(document_number: &str) -> String {
    format!(
        "/api/customer/{}/",
        utf8_percent_encode(document_number, PATH_SEGMENT)
    )
}

pub fn export_customer_path(document_number: &str) -> String {
    format!(
        "/api/export-customer/{}/",
        utf8_percent_encode(document_number, PATH_SEGMENT)
    )
}

/// Client of the customer API.
///
/// Each call resolves to the HTTP outcome, or to a [`TransportError`] when no
/// usable response arrived. Futures are not `Send`: the browser runs them on
/// its single thread.
#[async_trait(?Send)]
pub trait CustomerApi {
    /// `GET /api/customer/{document_number}/`
    async fn lookup(&self, document_number: &str) -> Result<LookupResponse, TransportError>;

    /// `GET /api/export-customer/{document_number}/`
    async fn export_customer(&self, document_number: &str)
    -> Result<FileResponse, TransportError>;

    /// `GET /api/loyalty-report/`
    async fn loyalty_report(&self) -> Result<FileResponse, TransportError>;
}

/// The parts of the page the workflow touches.
pub trait Page {
    /// Handle of a shown overlay. Removing consumes it, so each overlay is
    /// removed at most once and only by its owner.
    type Overlay;

    fn show_overlay(&self, overlay: &Element) -> Self::Overlay;

    fn remove_overlay(&self, overlay: Self::Overlay);

    /// Replaces whatever the results region currently shows.
    fn replace_results(&self, content: &Element);

    fn reveal_results(&self);

    /// Modal notice to the user.
    fn alert(&self, message: &str);

    /// Pushes a file to the user's file system.
    fn download(&self, file: &DownloadFile) -> Result<(), DownloadError>;
}

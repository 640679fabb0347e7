//! Spreadsheet exports pushed to the user's file system.

use std::rc::Rc;

use chrono::{NaiveDate, Utc};

use crate::dto::api::{DownloadFile, FileResponse};
use crate::models::config::ClientConfig;
use crate::ports::{CustomerApi, Page};
use crate::services::errors::ExportError;

/// What an export command ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportStatus {
    Downloaded { file_name: String },
    /// The loyalty report had no qualifying customers (HTTP 404).
    NoQualifyingCustomers,
}

pub fn customer_file_name(document_number: &str) -> String {
    format!("cliente_{document_number}.xlsx")
}

pub fn loyalty_file_name(today: NaiveDate) -> String {
    format!("reporte_fidelizacion_{}.xlsx", today.format("%Y-%m"))
}

/// Export commands. Independent of any search state.
pub struct ExportTrigger<A, P> {
    api: Rc<A>,
    page: Rc<P>,
    config: Rc<ClientConfig>,
}

impl<A, P> ExportTrigger<A, P>
where
    A: CustomerApi,
    P: Page,
{
    pub fn new(api: Rc<A>, page: Rc<P>, config: Rc<ClientConfig>) -> Self {
        Self { api, page, config }
    }

    /// Downloads `cliente_<document_number>.xlsx`.
    ///
    /// Failures have already been logged and alerted when this returns `Err`.
    pub async fn export_customer(&self, document_number: &str) -> Result<ExportStatus, ExportError> {
        let outcome = self.try_export_customer(document_number).await;
        if let Err(err) = &outcome {
            log::error!("Failed to export customer {document_number:?}: {err}");
            self.page.alert(&self.config.messages.export_failed);
        }
        outcome
    }

    /// Downloads the loyalty report named after the current UTC month.
    pub async fn download_loyalty_report(&self) -> Result<ExportStatus, ExportError> {
        self.download_loyalty_report_on(Utc::now().date_naive()).await
    }

    /// Same as [`Self::download_loyalty_report`] with an explicit current date.
    pub async fn download_loyalty_report_on(
        &self,
        today: NaiveDate,
    ) -> Result<ExportStatus, ExportError> {
        let outcome = self.try_loyalty_report(today).await;
        match &outcome {
            Ok(ExportStatus::NoQualifyingCustomers) => {
                log::info!("Loyalty report has no qualifying customers");
                self.page.alert(&self.config.messages.loyalty_empty);
            }
            Ok(ExportStatus::Downloaded { .. }) => {}
            Err(err) => {
                log::error!("Failed to download loyalty report: {err}");
                self.page.alert(&self.config.messages.loyalty_failed);
            }
        }
        outcome
    }

    async fn try_export_customer(&self, document_number: &str) -> Result<ExportStatus, ExportError> {
        match self.api.export_customer(document_number).await? {
            FileResponse::File(bytes) => self.save(customer_file_name(document_number), bytes),
            FileResponse::Rejected { status } => Err(ExportError::Status(status)),
        }
    }

    async fn try_loyalty_report(&self, today: NaiveDate) -> Result<ExportStatus, ExportError> {
        match self.api.loyalty_report().await? {
            FileResponse::File(bytes) => self.save(loyalty_file_name(today), bytes),
            FileResponse::Rejected { status: 404 } => Ok(ExportStatus::NoQualifyingCustomers),
            FileResponse::Rejected { status } => Err(ExportError::Status(status)),
        }
    }

    fn save(&self, file_name: String, bytes: Vec<u8>) -> Result<ExportStatus, ExportError> {
        let file = DownloadFile::spreadsheet(file_name, bytes);
        self.page.download(&file)?;
        log::info!("Downloaded {} ({} bytes)", file.file_name, file.bytes.len());
        Ok(ExportStatus::Downloaded {
            file_name: file.file_name,
        })
    }
}

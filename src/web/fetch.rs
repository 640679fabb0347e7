//! `fetch`-backed client of the customer API.

use async_trait::async_trait;
use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dto::api::{ApiErrorBody, FileResponse, LookupResponse};
use crate::ports::{CustomerApi, LOYALTY_REPORT_PATH, export_customer_path, lookup_path};
use crate::services::errors::TransportError;
use crate::web::js_message;

pub struct FetchApi {
    base: String,
}

impl FetchApi {
    /// `base` is prepended to every API path; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get(&self, path: &str) -> Result<Response, TransportError> {
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("no window available".to_string()))?;
        let url = format!("{}{}", self.base, path);

        let value = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(network)?;
        value.dyn_into::<Response>().map_err(network)
    }

    async fn file(&self, path: &str) -> Result<FileResponse, TransportError> {
        let response = self.get(path).await?;
        if !response.ok() {
            return Ok(FileResponse::Rejected {
                status: response.status(),
            });
        }

        let buffer = JsFuture::from(response.array_buffer().map_err(network)?)
            .await
            .map_err(network)?;
        Ok(FileResponse::File(Uint8Array::new(&buffer).to_vec()))
    }
}

#[async_trait(?Send)]
impl CustomerApi for FetchApi {
    async fn lookup(&self, document_number: &str) -> Result<LookupResponse, TransportError> {
        let response = self.get(&lookup_path(document_number)).await?;
        let body = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Ok(LookupResponse::Rejected {
                status: response.status(),
                message: ApiErrorBody::message_from(&body),
            });
        }

        serde_json::from_str(&body)
            .map(LookupResponse::Found)
            .map_err(|err| TransportError::Decode(err.to_string()))
    }

    async fn export_customer(&self, document_number: &str) -> Result<FileResponse, TransportError> {
        self.file(&export_customer_path(document_number)).await
    }

    async fn loyalty_report(&self) -> Result<FileResponse, TransportError> {
        self.file(LOYALTY_REPORT_PATH).await
    }
}

fn network(value: JsValue) -> TransportError {
    TransportError::Network(js_message(&value))
}

//! Test doubles for the API and page ports.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use mockall::mock;

use crate::dto::api::{DownloadFile, FileResponse, LookupResponse};
use crate::ports::{CustomerApi, Page};
use crate::services::errors::{DownloadError, TransportError};
use crate::view::Element;

mock! {
    pub CustomerApi {}

    #[async_trait(?Send)]
    impl CustomerApi for CustomerApi {
        async fn lookup(&self, document_number: &str) -> Result<LookupResponse, TransportError>;
        async fn export_customer(
            &self,
            document_number: &str,
        ) -> Result<FileResponse, TransportError>;
        async fn loyalty_report(&self) -> Result<FileResponse, TransportError>;
    }
}

/// Something the workflow did to the page.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    OverlayShown(u32),
    OverlayRemoved(u32),
    Results(Element),
    Revealed,
    Alert(String),
    Downloaded(DownloadFile),
}

/// Overlay handle of [`RecordingPage`].
#[derive(Debug, PartialEq, Eq)]
pub struct OverlayTicket(u32);

/// Page that records every effect instead of touching a DOM.
#[derive(Debug, Default)]
pub struct RecordingPage {
    events: RefCell<Vec<PageEvent>>,
    next_overlay: Cell<u32>,
    download_failure: Option<String>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose download primitive always fails with `message`.
    pub fn failing_downloads(message: impl Into<String>) -> Self {
        Self {
            download_failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn overlays_shown(&self) -> usize {
        self.count(|event| matches!(event, PageEvent::OverlayShown(_)))
    }

    pub fn overlays_removed(&self) -> usize {
        self.count(|event| matches!(event, PageEvent::OverlayRemoved(_)))
    }

    /// Overlays shown and not yet removed.
    ///
    /// Panics when more removals than overlays were recorded.
    pub fn open_overlays(&self) -> usize {
        let (shown, removed) = (self.overlays_shown(), self.overlays_removed());
        match shown.checked_sub(removed) {
            Some(open) => open,
            None => panic!("{removed} overlay removals recorded for {shown} shown overlays"),
        }
    }

    /// Content the results region shows now, if anything was rendered.
    pub fn current_results(&self) -> Option<Element> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            PageEvent::Results(content) => Some(content.clone()),
            _ => None,
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|event| matches!(event, PageEvent::Revealed))
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PageEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> Vec<DownloadFile> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PageEvent::Downloaded(file) => Some(file.clone()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&PageEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }

    fn record(&self, event: PageEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Page for RecordingPage {
    type Overlay = OverlayTicket;

    fn show_overlay(&self, _overlay: &Element) -> OverlayTicket {
        let id = self.next_overlay.get();
        self.next_overlay.set(id + 1);
        self.record(PageEvent::OverlayShown(id));
        OverlayTicket(id)
    }

    fn remove_overlay(&self, overlay: OverlayTicket) {
        self.record(PageEvent::OverlayRemoved(overlay.0));
    }

    fn replace_results(&self, content: &Element) {
        self.record(PageEvent::Results(content.clone()));
    }

    fn reveal_results(&self) {
        self.record(PageEvent::Revealed);
    }

    fn alert(&self, message: &str) {
        self.record(PageEvent::Alert(message.to_string()));
    }

    fn download(&self, file: &DownloadFile) -> Result<(), DownloadError> {
        if let Some(message) = &self.download_failure {
            return Err(DownloadError::Browser(message.clone()));
        }
        self.record(PageEvent::Downloaded(file.clone()));
        Ok(())
    }
}

//! Search form flow: overlay, lookup, render, overlay removal.

use std::rc::Rc;

use crate::domain::SearchResult;
use crate::dto::api::LookupResponse;
use crate::models::config::ClientConfig;
use crate::ports::{CustomerApi, Page};
use crate::services::errors::SearchError;
use crate::view;

/// Runs one lookup per form submission and renders its outcome.
///
/// Submissions are independent: nothing is de-duplicated or cancelled, and
/// when requests overlap the one that completes last owns the results region.
pub struct SearchController<A, P> {
    api: Rc<A>,
    page: Rc<P>,
    config: Rc<ClientConfig>,
}

impl<A, P> SearchController<A, P>
where
    A: CustomerApi,
    P: Page,
{
    pub fn new(api: Rc<A>, page: Rc<P>, config: Rc<ClientConfig>) -> Self {
        Self { api, page, config }
    }

    /// Looks up `document_number` and renders the listing, the "no results"
    /// placeholder or an error banner.
    ///
    /// Returns the number of rendered customers, or the error that was
    /// presented. The loading overlay is removed in every case.
    pub async fn search(&self, document_number: &str) -> Result<usize, SearchError> {
        let overlay = self
            .page
            .show_overlay(&view::loading_overlay(&self.config.messages));

        let outcome = self.lookup(document_number).await;
        self.present(document_number, &outcome);

        self.page.remove_overlay(overlay);
        outcome.map(|result| result.customers.len())
    }

    async fn lookup(&self, document_number: &str) -> Result<SearchResult, SearchError> {
        match self.api.lookup(document_number).await? {
            LookupResponse::Found(result) if result.is_empty() => Err(SearchError::NoResults),
            LookupResponse::Found(result) => Ok(result),
            LookupResponse::Rejected { status, message } => {
                log::warn!("Lookup for {document_number:?} rejected with status {status}");
                Err(SearchError::Lookup(
                    message.unwrap_or_else(|| self.config.messages.lookup_failed.clone()),
                ))
            }
        }
    }

    fn present(&self, document_number: &str, outcome: &Result<SearchResult, SearchError>) {
        let messages = &self.config.messages;
        let content = match outcome {
            Ok(result) => view::results_listing(result, &self.config.locale, messages),
            Err(SearchError::NoResults) => {
                log::info!("No customers match {document_number:?}");
                view::no_results(messages)
            }
            Err(err) => {
                log::error!("Failed to look up {document_number:?}: {err}");
                view::error_banner(&err.to_string())
            }
        };

        self.page.replace_results(&content);
        self.page.reveal_results();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use futures::executor::block_on;

    use super::*;
    use crate::dto::api::FileResponse;
    use crate::ports::mock::{MockCustomerApi, RecordingPage};
    use crate::services::errors::TransportError;

    fn controller(
        api: MockCustomerApi,
    ) -> (
        SearchController<MockCustomerApi, RecordingPage>,
        Rc<RecordingPage>,
    ) {
        let page = Rc::new(RecordingPage::new());
        let controller = SearchController::new(
            Rc::new(api),
            Rc::clone(&page),
            Rc::new(ClientConfig::default()),
        );
        (controller, page)
    }

    fn found(payload: &str) -> LookupResponse {
        LookupResponse::Found(serde_json::from_str(payload).unwrap())
    }

    fn rendered_role(page: &RecordingPage) -> Option<String> {
        page.current_results()
            .and_then(|content| content.attribute("data-role").map(str::to_string))
    }

    #[test]
    fn renders_listing_and_reveals_results() {
        let mut api = MockCustomerApi::new();
        api.expect_lookup().times(1).returning(|document_number| {
            assert_eq!(document_number.to_string(), "12345678");
            Ok(found(
                r#"{"customers": [{"id": 1, "document_number": "12345678"}],
                    "purchases_by_customer": {"1": [{"purchase_date": "2024-01-05",
                        "total_amount": 150000,
                        "items": [{"product_name": "Widget", "quantity": 2}]}]}}"#,
            ))
        });
        let (controller, page) = controller(api);

        assert_eq!(block_on(controller.search("12345678")), Ok(1));

        let results = page.current_results().unwrap();
        assert_eq!(results.find_by_role("customer").len(), 1);
        let row = results.find_by_role("purchase-row")[0].text_content();
        assert!(row.contains("$150,000"));
        assert!(row.contains("Widget (2)"));
        assert!(page.is_revealed());
        assert_eq!(page.overlays_shown(), 1);
        assert_eq!(page.open_overlays(), 0);
    }

    #[test]
    fn empty_result_shows_placeholder_not_banner() {
        let mut api = MockCustomerApi::new();
        api.expect_lookup()
            .returning(|_| Ok(found(r#"{"customers": [], "purchases_by_customer": {}}"#)));
        let (controller, page) = controller(api);

        assert_eq!(block_on(controller.search("000")), Err(SearchError::NoResults));

        assert_eq!(rendered_role(&page).as_deref(), Some("no-results"));
        assert!(page.current_results().unwrap().find_by_tag("table").is_empty());
        assert_eq!(page.open_overlays(), 0);
    }

    #[test]
    fn rejection_shows_server_message() {
        let mut api = MockCustomerApi::new();
        api.expect_lookup().returning(|_| {
            Ok(LookupResponse::Rejected {
                status: 404,
                message: Some("No se encontraron clientes".to_string()),
            })
        });
        let (controller, page) = controller(api);

        let outcome = block_on(controller.search("999"));

        assert_eq!(
            outcome,
            Err(SearchError::Lookup("No se encontraron clientes".to_string()))
        );
        let banner = page.current_results().unwrap();
        assert_eq!(banner.attribute("data-role"), Some("error-banner"));
        assert_eq!(banner.text_content(), "No se encontraron clientes");
        assert_eq!(page.open_overlays(), 0);
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let mut api = MockCustomerApi::new();
        api.expect_lookup().returning(|_| {
            Ok(LookupResponse::Rejected {
                status: 500,
                message: None,
            })
        });
        let (controller, page) = controller(api);

        let _ = block_on(controller.search("1"));

        assert_eq!(
            page.current_results().unwrap().text_content(),
            "Error al buscar cliente"
        );
    }

    #[test]
    fn transport_failure_shows_banner_and_removes_overlay() {
        let mut api = MockCustomerApi::new();
        api.expect_lookup()
            .returning(|_| Err(TransportError::Network("Failed to fetch".to_string())));
        let (controller, page) = controller(api);

        let outcome = block_on(controller.search("1"));

        assert!(matches!(outcome, Err(SearchError::Transport(_))));
        assert_eq!(rendered_role(&page).as_deref(), Some("error-banner"));
        assert_eq!(page.current_results().unwrap().text_content(), "Failed to fetch");
        assert_eq!(page.overlays_shown(), page.overlays_removed());
    }

    #[test]
    fn overlay_is_up_only_while_the_request_is_in_flight() {
        let (sender, receiver) = oneshot::channel();
        let page = Rc::new(RecordingPage::new());
        let controller = SearchController::new(
            Rc::new(QueuedApi::new(vec![receiver])),
            Rc::clone(&page),
            Rc::new(ClientConfig::default()),
        );

        let mut search = Box::pin(controller.search("1"));
        assert!(search.as_mut().now_or_never().is_none());
        assert_eq!(page.open_overlays(), 1);
        assert!(page.current_results().is_none());

        sender.send(Ok(found(r#"{"customers": [{"id": 1}]}"#))).unwrap();
        assert_eq!(block_on(search), Ok(1));
        assert_eq!(page.open_overlays(), 0);
    }

    #[test]
    fn overlapping_searches_last_completion_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let page = Rc::new(RecordingPage::new());
        let controller = SearchController::new(
            Rc::new(QueuedApi::new(vec![first_rx, second_rx])),
            Rc::clone(&page),
            Rc::new(ClientConfig::default()),
        );

        // The second request resolves first; the first one fails afterwards.
        second_tx
            .send(Ok(found(r#"{"customers": [{"id": 2}, {"id": 3}]}"#)))
            .unwrap();
        let release_first = async move {
            first_tx
                .send(Ok(LookupResponse::Rejected {
                    status: 500,
                    message: Some("caído".to_string()),
                }))
                .unwrap();
        };

        let (first, second, ()) = block_on(async {
            futures::join!(controller.search("1"), controller.search("2"), release_first)
        });

        assert_eq!(first, Err(SearchError::Lookup("caído".to_string())));
        assert_eq!(second, Ok(2));
        assert_eq!(rendered_role(&page).as_deref(), Some("error-banner"));
        assert_eq!(page.overlays_shown(), 2);
        assert_eq!(page.open_overlays(), 0);
    }

    /// API whose lookups resolve when the test says so, in call order.
    struct QueuedApi {
        pending: RefCell<VecDeque<oneshot::Receiver<Result<LookupResponse, TransportError>>>>,
    }

    impl QueuedApi {
        fn new(pending: Vec<oneshot::Receiver<Result<LookupResponse, TransportError>>>) -> Self {
            Self {
                pending: RefCell::new(pending.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl CustomerApi for QueuedApi {
        async fn lookup(&self, _document_number: &str) -> Result<LookupResponse, TransportError> {
            let receiver = self.pending.borrow_mut().pop_front();
            match receiver {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(TransportError::Network("dropped".to_string()))),
                None => Err(TransportError::Network("unexpected lookup".to_string())),
            }
        }

        async fn export_customer(&self, _: &str) -> Result<FileResponse, TransportError> {
            unreachable!("search never exports")
        }

        async fn loyalty_report(&self) -> Result<FileResponse, TransportError> {
            unreachable!("search never exports")
        }
    }
}

#![cfg(all(target_arch = "wasm32", feature = "web"))]

use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Event, EventInit, HtmlElement};

use customer_lookup::dto::api::{DownloadFile, FileResponse, LookupResponse};
use customer_lookup::models::config::Messages;
use customer_lookup::ports::{CustomerApi, Page};
use customer_lookup::view::{Element, error_banner, loading_overlay, no_results};
use customer_lookup::web::{DomPage, FetchApi, start};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// Appends a hidden `#results` region to the body.
fn results_region() -> web_sys::Element {
    let results = document().create_element("div").unwrap();
    results.set_id("results");
    results.set_class_name("hidden");
    body().append_child(&results).unwrap();
    results
}

fn first_role(results: &web_sys::Element) -> Option<String> {
    results
        .first_element_child()
        .and_then(|child| child.get_attribute("data-role"))
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn replace_results_swaps_region_children_and_reveal_unhides() {
    let results = results_region();
    let page = DomPage::new(document(), results.clone());

    page.replace_results(&no_results(&Messages::default()));
    page.replace_results(&error_banner("Cliente no encontrado"));

    assert_eq!(results.child_element_count(), 1);
    assert_eq!(first_role(&results).as_deref(), Some("error-banner"));
    assert_eq!(
        results.text_content().unwrap().trim(),
        "Cliente no encontrado"
    );
    assert!(results.class_list().contains("hidden"));

    page.reveal_results();
    assert!(!results.class_list().contains("hidden"));

    results.remove();
}

#[wasm_bindgen_test]
fn overlay_is_attached_to_body_and_removed_again() {
    let page = DomPage::new(document(), results_region());
    let before = body().child_element_count();

    let overlay = page.show_overlay(&loading_overlay(&Messages::default()));
    assert_eq!(body().child_element_count(), before + 1);
    assert!(
        body()
            .query_selector(r#"[data-role="loading-overlay"]"#)
            .unwrap()
            .is_some()
    );

    page.remove_overlay(overlay);
    assert_eq!(body().child_element_count(), before);
    assert!(
        body()
            .query_selector(r#"[data-role="loading-overlay"]"#)
            .unwrap()
            .is_none()
    );
}

#[wasm_bindgen_test]
fn overlays_are_removed_independently() {
    let page = DomPage::new(document(), results_region());
    let before = body().child_element_count();
    let overlay = loading_overlay(&Messages::default());

    let first = page.show_overlay(&overlay);
    let second = page.show_overlay(&overlay);
    page.remove_overlay(first);
    assert_eq!(body().child_element_count(), before + 1);

    page.remove_overlay(second);
    assert_eq!(body().child_element_count(), before);
}

#[wasm_bindgen_test]
fn download_leaves_no_anchor_behind() {
    let page = DomPage::new(document(), results_region());
    let before = body().child_element_count();
    let file = DownloadFile::spreadsheet("cliente_12345678.xlsx", vec![0x50, 0x4b, 0x03, 0x04]);

    assert_eq!(page.download(&file), Ok(()));

    assert_eq!(body().child_element_count(), before);
    assert!(body().query_selector("a[download]").unwrap().is_none());
}

#[wasm_bindgen_test]
fn materialized_nodes_keep_attributes_and_text() {
    let results = results_region();
    let page = DomPage::new(document(), results.clone());

    page.replace_results(
        &Element::new("button")
            .attr("data-action", "export-customer")
            .attr("data-document-number", "12345678")
            .text("Exportar"),
    );

    let button = results.query_selector("button").unwrap().unwrap();
    assert_eq!(
        button.get_attribute("data-document-number").as_deref(),
        Some("12345678")
    );
    assert_eq!(button.text_content().as_deref(), Some("Exportar"));

    results.remove();
}

// The test server answers unknown paths with 404.
#[wasm_bindgen_test]
async fn non_success_lookup_is_rejected_with_status() {
    let api = FetchApi::new("");

    let response = api.lookup("12345678").await.unwrap();

    assert!(matches!(
        response,
        LookupResponse::Rejected { status: 404, .. }
    ));
}

#[wasm_bindgen_test]
async fn missing_loyalty_report_is_rejected_with_not_found() {
    let api = FetchApi::new("");

    let response = api.loyalty_report().await.unwrap();

    assert_eq!(response, FileResponse::Rejected { status: 404 });
}

#[wasm_bindgen_test]
async fn unreachable_api_is_a_transport_error() {
    let api = FetchApi::new("http://127.0.0.1:9");

    assert!(api.export_customer("12345678").await.is_err());
}

#[wasm_bindgen_test]
async fn start_prevents_form_submission_and_runs_the_search() {
    let root = document().create_element("div").unwrap();
    root.set_inner_html(
        r#"<form id="searchForm"><input id="documentNumber" type="text" value="12345678"></form>
           <div id="results" class="hidden"></div>"#,
    );
    body().append_child(&root).unwrap();
    start(root.clone()).unwrap();

    let form = root.query_selector("#searchForm").unwrap().unwrap();
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    let not_cancelled = form.dispatch_event(&submit).unwrap();
    assert!(!not_cancelled);
    assert!(submit.default_prevented());

    let results = root.query_selector("#results").unwrap().unwrap();
    for _ in 0..50 {
        if !results.class_list().contains("hidden") {
            break;
        }
        sleep(20).await;
    }
    assert!(!results.class_list().contains("hidden"));
    assert_eq!(first_role(&results).as_deref(), Some("error-banner"));
    assert!(
        body()
            .query_selector(r#"[data-role="loading-overlay"]"#)
            .unwrap()
            .is_none()
    );

    root.remove();
}

#[wasm_bindgen_test]
fn start_reports_a_missing_form() {
    let root = document().create_element("div").unwrap();

    assert!(start(root).is_err());
}

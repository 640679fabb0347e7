//! DOM-backed page: results region, overlay, alert and blob downloads.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use crate::dto::api::DownloadFile;
use crate::ports::Page;
use crate::services::errors::DownloadError;
use crate::view::{Element, Node};
use crate::web::js_message;

pub struct DomPage {
    document: Document,
    results: web_sys::Element,
}

impl DomPage {
    pub fn new(document: Document, results: web_sys::Element) -> Self {
        Self { document, results }
    }

    fn materialize(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(element) => Ok(self.build(element)?.into()),
        }
    }

    fn build(&self, element: &Element) -> Result<web_sys::Element, JsValue> {
        let built = self.document.create_element(element.tag())?;
        for (name, value) in element.attributes() {
            built.set_attribute(name, value)?;
        }
        for child in element.child_nodes() {
            built.append_child(&self.materialize(child)?)?;
        }
        Ok(built)
    }

    fn body(&self) -> Result<web_sys::HtmlElement, JsValue> {
        self.document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))
    }

    fn trigger_download(&self, file: &DownloadFile) -> Result<(), JsValue> {
        let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

        let url = Url::create_object_url_with_blob(&blob)?;
        let anchor: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        anchor.set_href(&url);
        anchor.set_download(&file.file_name);

        self.body()?.append_child(&anchor)?;
        anchor.click();
        Url::revoke_object_url(&url)?;
        anchor.remove();
        Ok(())
    }
}

impl Page for DomPage {
    /// `None` when the overlay could not be attached.
    type Overlay = Option<web_sys::Element>;

    fn show_overlay(&self, overlay: &Element) -> Self::Overlay {
        let attached = self.build(overlay).and_then(|node| {
            self.body()?.append_child(&node)?;
            Ok(node)
        });
        match attached {
            Ok(node) => Some(node),
            Err(err) => {
                log::warn!("Failed to show loading overlay: {}", js_message(&err));
                None
            }
        }
    }

    fn remove_overlay(&self, overlay: Self::Overlay) {
        if let Some(node) = overlay {
            node.remove();
        }
    }

    fn replace_results(&self, content: &Element) {
        self.results.set_text_content(None);
        let appended = self
            .build(content)
            .and_then(|node| self.results.append_child(&node));
        if let Err(err) = appended {
            log::error!("Failed to render results: {}", js_message(&err));
        }
    }

    fn reveal_results(&self) {
        if let Err(err) = self.results.class_list().remove_1("hidden") {
            log::warn!("Failed to reveal results: {}", js_message(&err));
        }
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("Could not show alert: {message}");
        }
    }

    fn download(&self, file: &DownloadFile) -> Result<(), DownloadError> {
        self.trigger_download(file)
            .map_err(|err| DownloadError::Browser(js_message(&err)))
    }
}

//! Renders lookup outcomes into the results region.

use crate::domain::SearchResult;
use crate::domain::customer::Customer;
use crate::domain::purchase::Purchase;
use crate::models::config::{LocaleConfig, Messages};
use crate::view::format::{format_amount, format_date};
use crate::view::node::Element;

pub const EXPORT_CUSTOMER_ACTION: &str = "export-customer";
pub const LOYALTY_REPORT_ACTION: &str = "loyalty-report";

const HEADER_CELL_CLASS: &str =
    "px-6 py-3 bg-gray-50 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

/// Listing with one block per customer, in the order received.
///
/// Zero customers render the "no results" placeholder instead.
pub fn results_listing(result: &SearchResult, locale: &LocaleConfig, messages: &Messages) -> Element {
    if result.is_empty() {
        return no_results(messages);
    }

    Element::new("div")
        .class("space-y-6")
        .role("results")
        .child(
            Element::new("h2")
                .class("text-2xl font-bold mb-4")
                .text("Resultados de la búsqueda"),
        )
        .children(
            result
                .customers
                .iter()
                .map(|customer| customer_block(customer, result.purchases_for(customer), locale)),
        )
}

pub fn no_results(messages: &Messages) -> Element {
    Element::new("div")
        .class("text-center py-8 text-gray-500")
        .role("no-results")
        .text(messages.no_results.as_str())
}

pub fn error_banner(message: &str) -> Element {
    Element::new("div")
        .class("bg-red-50 border-l-4 border-red-500 p-4")
        .role("error-banner")
        .attr("role", "alert")
        .child(
            Element::new("p")
                .class("text-sm text-red-700")
                .text(message),
        )
}

/// Full-viewport overlay shown while a lookup is in flight.
pub fn loading_overlay(messages: &Messages) -> Element {
    Element::new("div")
        .class("fixed top-0 left-0 w-full h-full flex items-center justify-center bg-black bg-opacity-50")
        .role("loading-overlay")
        .child(
            Element::new("div")
                .class("bg-white p-4 rounded-lg shadow-lg")
                .child(
                    Element::new("div")
                        .class("animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"),
                )
                .child(Element::new("p").class("mt-2").text(messages.searching.as_str())),
        )
}

fn customer_block(customer: &Customer, purchases: &[Purchase], locale: &LocaleConfig) -> Element {
    Element::new("div")
        .class("border rounded-lg p-6 mb-6 shadow-sm")
        .role("customer")
        .attr("data-customer-id", customer.id.to_string())
        .child(
            Element::new("div")
                .class("border-b pb-4")
                .child(
                    Element::new("h3")
                        .class("text-xl font-bold mb-4")
                        .text("Información del Cliente"),
                )
                .child(
                    Element::new("div")
                        .class("grid grid-cols-2 gap-4")
                        .child(field("Documento", customer.document_label()))
                        .child(field("Nombre", customer.full_name()))
                        .child(field("Email", customer.email.as_str()))
                        .child(field("Teléfono", customer.phone.as_str())),
                ),
        )
        .child(purchases_section(purchases, locale))
        .child(
            Element::new("div")
                .class("flex justify-end space-x-4 mt-6")
                .child(
                    Element::new("button")
                        .attr("type", "button")
                        .class("bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600 transition-colors")
                        .attr("data-action", EXPORT_CUSTOMER_ACTION)
                        .attr("data-document-number", customer.document_number.as_str())
                        .text("Exportar Datos"),
                ),
        )
}

fn field(label: &str, value: impl Into<String>) -> Element {
    Element::new("div")
        .child(Element::new("p").class("text-gray-600").text(label))
        .child(Element::new("p").class("font-medium").text(value))
}

fn purchases_section(purchases: &[Purchase], locale: &LocaleConfig) -> Element {
    let head = Element::new("thead").child(
        Element::new("tr").children(
            ["Fecha", "Total", "Productos"]
                .into_iter()
                .map(|title| Element::new("th").class(HEADER_CELL_CLASS).text(title)),
        ),
    );

    let body = Element::new("tbody")
        .class("bg-white divide-y divide-gray-200")
        .children(purchases.iter().map(|purchase| purchase_row(purchase, locale)));

    Element::new("div")
        .class("mt-4")
        .child(
            Element::new("h3")
                .class("text-lg font-bold mb-4")
                .text("Compras Recientes"),
        )
        .child(
            Element::new("div").class("overflow-x-auto").child(
                Element::new("table")
                    .class("min-w-full divide-y divide-gray-200")
                    .child(head)
                    .child(body),
            ),
        )
}

fn purchase_row(purchase: &Purchase, locale: &LocaleConfig) -> Element {
    Element::new("tr")
        .role("purchase-row")
        .child(
            Element::new("td")
                .class("px-6 py-4 whitespace-nowrap")
                .text(format_date(&purchase.purchase_date, locale)),
        )
        .child(
            Element::new("td")
                .class("px-6 py-4 whitespace-nowrap")
                .text(format_amount(purchase.total_amount, locale)),
        )
        .child(
            Element::new("td").class("px-6 py-4").child(
                Element::new("ul")
                    .class("list-disc list-inside")
                    .children(purchase.items.iter().map(|item| Element::new("li").text(item.label()))),
            ),
        )
}

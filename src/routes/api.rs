use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::upstream::UpstreamApi;

/// Relays `/api/*` to the customer API so the browser stays same-origin.
#[get("/api/{tail:.*}")]
pub async fn forward_api(req: HttpRequest, upstream: web::Data<UpstreamApi>) -> impl Responder {
    // Raw path keeps the client's percent-encoding intact.
    let path = req.uri().path();

    let response = match upstream.forward(path, req.query_string()).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("Failed to reach customer API for {path}: {err}");
            return HttpResponse::BadGateway().finish();
        }
    };

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = HttpResponse::build(status);
    if let Some(content_type) = response.content_type {
        builder.insert_header((header::CONTENT_TYPE, content_type));
    }
    if let Some(disposition) = response.content_disposition {
        builder.insert_header((header::CONTENT_DISPOSITION, disposition));
    }
    builder.body(response.body)
}

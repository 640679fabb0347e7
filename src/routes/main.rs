use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::routes::render_template;
use crate::view::results::LOYALTY_REPORT_ACTION;

/// Search page. The browser workflow reads its settings from `data-config`.
#[get("/")]
pub async fn show_index(
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let client_config = match serde_json::to_string(&server_config.client) {
        Ok(json) => json,
        Err(err) => {
            log::error!("Failed to serialize client config: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("client_config", &client_config);
    context.insert("loyalty_action", LOYALTY_REPORT_ACTION);

    render_template(&tera, "search.html", &context)
}

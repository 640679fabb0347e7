#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod ports;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod view;

#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod upstream;

#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::routes::api::forward_api;
    use crate::routes::main::show_index;
    use crate::upstream::UpstreamApi;

    /// Builds and runs the Actix-Web page host using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let upstream = UpstreamApi::new(&server_config.api_url)
            .map_err(|e| std::io::Error::other(format!("Failed to set up customer API: {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving search page on {}:{}, forwarding /api to {}",
            bind_address.0,
            bind_address.1,
            server_config.api_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .service(forward_api)
                .service(show_index)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(upstream.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

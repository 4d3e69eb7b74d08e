mod config;
mod error;
mod pipeline;
mod services;

#[cfg(test)]
mod tests;

use crate::config::ServerConfig;
use crate::pipeline::Orchestrator;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::parse();
    let url = config.url();

    let orchestrator = Orchestrator::from_config(&config).map_err(std::io::Error::other)?;
    let orchestrator = web::Data::new(orchestrator);

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!(
        "Server running at {} (model {}, compiler {} at {})",
        url, config.model, config.compiler, config.compile_url
    );

    let body_limit = config.body_limit;
    HttpServer::new(move || {
        App::new()
            .app_data(services::json_config(body_limit))
            .app_data(orchestrator.clone())
            .service(services::generate::configure_routes())
            .service(services::meta::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

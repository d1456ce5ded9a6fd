use std::net::TcpListener;

use actix_cors::Cors;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::{events, films, news, newsletter, sponsors, status, submissions, updates};
use crate::error::json_error_handler;
use crate::repo::Repo;

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, repo: Repo) -> anyhow::Result<Server> {
    // Wrap application data
    let repo = web::Data::new(repo);

    // Start the server
    let server = HttpServer::new(move || {
        let json_config = web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(repo.clone())
            .app_data(json_config)
            .configure(status::configure)
            .service(
                web::scope("/api")
                    .service(films::scope())
                    .service(submissions::scope())
                    .service(events::scope())
                    .service(news::scope())
                    .service(sponsors::scope())
                    .service(updates::scope())
                    .service(newsletter::scope()),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}

use actix_web::{get, web, HttpResponse, Responder};

use serde::Serialize;

use crate::repo::Repo;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_LEN: usize = 80;

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

/// Static liveness message
#[tracing::instrument(name = "Index")]
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(Message {
        message: "St. Martin IFF API is running",
    })
}

/// Backend and document store status, as reported by `GET /test`
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl StatusReport {
    /// Check the store by listing its collections.
    /// Failures are reported in the body, never raised.
    pub async fn probe(repo: &Repo) -> Self {
        let database_url = if repo.location_configured() {
            "Set"
        } else {
            "Not Set"
        };

        let mut report = Self {
            backend: "Running".into(),
            database: "Not Available".into(),
            database_url: database_url.into(),
            database_name: None,
            connection_status: "Not Connected".into(),
            collections: Vec::new(),
        };

        let Some(store) = repo.store() else {
            return report;
        };
        report.database_name = Some(store.name().to_string());

        match store.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_COLLECTIONS);
                report.database = "Connected & Working".into();
                report.connection_status = "Connected".into();
                report.collections = collections;
            }
            Err(error) => {
                tracing::warn!(error.cause_chain = ?error, "Document store check failed");
                report.database = format!("Connected but Error: {}", truncate(&error.to_string()));
                report.connection_status = "Unreachable".into();
            }
        }

        report
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_LEN).collect()
}

/// Status probe endpoint, always answers 200
#[tracing::instrument(name = "Status probe", skip(repo))]
#[get("/test")]
async fn probe(repo: web::Data<Repo>) -> impl Responder {
    HttpResponse::Ok().json(StatusReport::probe(&repo).await)
}

/// Liveness and status endpoints, mounted at the root
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(probe);
}

use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewEvent, Record};
use crate::repo::{Filter, Repo};

#[derive(Debug, Deserialize)]
pub struct EventQuery {
    event_type: Option<String>,
}

impl From<EventQuery> for Filter {
    fn from(query: EventQuery) -> Self {
        // Stored under `type`
        Filter::new().equals("type", query.event_type)
    }
}

#[tracing::instrument(name = "Create a new event", skip(repo, payload))]
#[post("")]
async fn create(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let event: NewEvent = payload.into_inner().try_into()?;

    let id = repo.insert(&event).await?;

    Ok(HttpResponse::Created().json(Created::new(id)))
}

#[tracing::instrument(name = "List events", skip(repo))]
#[get("")]
async fn list(repo: web::Data<Repo>, query: web::Query<EventQuery>) -> impl Responder {
    let events = repo.query(NewEvent::COLLECTION, query.into_inner().into()).await;

    HttpResponse::Ok().json(events)
}

/// Program events API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/events").service(create).service(list)
}

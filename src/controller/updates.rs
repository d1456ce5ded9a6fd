use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewUpdate, Record};
use crate::repo::{Filter, Repo};

#[derive(Debug, Deserialize)]
pub struct UpdateQuery {
    category: Option<String>,
}

impl From<UpdateQuery> for Filter {
    fn from(query: UpdateQuery) -> Self {
        Filter::new().equals("category", query.category)
    }
}

/// Post a filmmaker-hub update
#[tracing::instrument(name = "Create a new update", skip(repo, payload))]
#[post("")]
async fn create(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let update: NewUpdate = payload.into_inner().try_into()?;

    let id = repo.insert(&update).await?;

    Ok(HttpResponse::Created().json(Created::new(id)))
}

#[tracing::instrument(name = "List updates", skip(repo))]
#[get("")]
async fn list(repo: web::Data<Repo>, query: web::Query<UpdateQuery>) -> impl Responder {
    let updates = repo.query(NewUpdate::COLLECTION, query.into_inner().into()).await;

    HttpResponse::Ok().json(updates)
}

/// Filmmaker-hub updates API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/updates").service(create).service(list)
}

use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewSponsor, Record};
use crate::repo::{Filter, Repo};

#[derive(Debug, Deserialize)]
pub struct SponsorQuery {
    tier: Option<String>,
}

impl From<SponsorQuery> for Filter {
    fn from(query: SponsorQuery) -> Self {
        Filter::new().equals("tier", query.tier)
    }
}

#[tracing::instrument(name = "Create a new sponsor", skip(repo, payload))]
#[post("")]
async fn create(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let sponsor: NewSponsor = payload.into_inner().try_into()?;

    let id = repo.insert(&sponsor).await?;

    Ok(HttpResponse::Created().json(Created::new(id)))
}

#[tracing::instrument(name = "List sponsors", skip(repo))]
#[get("")]
async fn list(repo: web::Data<Repo>, query: web::Query<SponsorQuery>) -> impl Responder {
    let sponsors = repo
        .query(NewSponsor::COLLECTION, query.into_inner().into())
        .await;

    HttpResponse::Ok().json(sponsors)
}

/// Sponsors API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/sponsors").service(create).service(list)
}

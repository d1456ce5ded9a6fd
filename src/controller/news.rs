use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewNewsItem, Record};
use crate::repo::{Filter, Repo};

#[tracing::instrument(name = "Create a news item", skip(repo, payload))]
#[post("")]
async fn create(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let item: NewNewsItem = payload.into_inner().try_into()?;

    let id = repo.insert(&item).await?;

    Ok(HttpResponse::Created().json(Created::new(id)))
}

#[tracing::instrument(name = "List news", skip(repo))]
#[get("")]
async fn list(repo: web::Data<Repo>) -> impl Responder {
    let news = repo.query(NewNewsItem::COLLECTION, Filter::new()).await;

    HttpResponse::Ok().json(news)
}

/// News API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/news").service(create).service(list)
}

use actix_web::dev::HttpServiceFactory;
use actix_web::{post, web, HttpResponse, Responder};

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewNewsletterSubscription};
use crate::repo::Repo;

/// Subscribe an address to the festival newsletter
#[tracing::instrument(name = "Subscribe to the newsletter", skip(repo, payload))]
#[post("")]
async fn subscribe(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let subscription: NewNewsletterSubscription = payload.into_inner().try_into()?;

    let id = repo.insert(&subscription).await?;

    Ok(HttpResponse::Created().json(Created::new(id)))
}

/// Newsletter API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/newsletter").service(subscribe)
}

use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewFilm, Record};
use crate::repo::{Filter, Repo};

/// Query parameters accepted when listing films
#[derive(Debug, Deserialize)]
pub struct FilmQuery {
    genre: Option<String>,
    country: Option<String>,
    category: Option<String>,
}

impl From<FilmQuery> for Filter {
    fn from(query: FilmQuery) -> Self {
        Filter::new()
            .equals("genre", query.genre)
            .equals("country", query.country)
            .equals("category", query.category)
    }
}

/// Create endpoint for new films
#[tracing::instrument(name = "Create a new film", skip(repo, payload))]
#[post("")]
async fn create(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let film: NewFilm = payload.into_inner().try_into()?;

    let id = repo.insert(&film).await?;

    Ok(HttpResponse::Created().json(Created::new(id)))
}

/// List films, optionally filtered by genre, country and category
#[tracing::instrument(name = "List films", skip(repo))]
#[get("")]
async fn list(repo: web::Data<Repo>, query: web::Query<FilmQuery>) -> impl Responder {
    let films = repo.query(NewFilm::COLLECTION, query.into_inner().into()).await;

    HttpResponse::Ok().json(films)
}

/// Films API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/films").service(create).service(list)
}

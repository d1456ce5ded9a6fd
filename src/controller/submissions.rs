use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::domain::Payload;
use crate::error::RestResult;
use crate::model::{Created, NewSubmission, Record};
use crate::repo::{Filter, Repo};

#[derive(Debug, Deserialize)]
pub struct SubmissionQuery {
    status: Option<String>,
}

impl From<SubmissionQuery> for Filter {
    fn from(query: SubmissionQuery) -> Self {
        Filter::new().equals("status", query.status)
    }
}

/// Submit a film to the festival.
/// The response echoes the submission's status.
#[tracing::instrument(name = "Create a new submission", skip(repo, payload))]
#[post("")]
async fn create(repo: web::Data<Repo>, payload: web::Json<Payload>) -> RestResult<impl Responder> {
    let submission: NewSubmission = payload.into_inner().try_into()?;

    let id = repo.insert(&submission).await?;

    Ok(HttpResponse::Created().json(Created::with_status(id, submission.status)))
}

#[tracing::instrument(name = "List submissions", skip(repo))]
#[get("")]
async fn list(repo: web::Data<Repo>, query: web::Query<SubmissionQuery>) -> impl Responder {
    let submissions = repo
        .query(NewSubmission::COLLECTION, query.into_inner().into())
        .await;

    HttpResponse::Ok().json(submissions)
}

/// Submissions API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/submissions").service(create).service(list)
}

use crate::content_client::ContentClient;
use crate::domain::PitchCard;
use crate::submission::Toast;
use crate::utils::e500;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use anyhow::Context as _;
use tera::{Context, Tera};

/// The `QueryParams` struct defines the query parameters we *expect* to see. Extraction only fails
/// on malformed query strings: `query` is optional.
#[derive(serde::Deserialize)]
pub struct QueryParams {
    query: Option<String>,
}

#[tracing::instrument(
    name = "List pitches",
    skip(params, content_client, templates),
    fields(query = ?params.query)
)]
pub async fn home(
    params: web::Query<QueryParams>,
    content_client: web::Data<ContentClient>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    // `?query=` is what the search form sends when the input is left empty.
    let query = params.0.query.filter(|q| !q.trim().is_empty());

    let pitches = content_client
        .fetch_pitches(query.as_deref())
        .await
        .context("Failed to fetch pitches from the content API")
        .map_err(e500)?;
    let cards: Vec<PitchCard> = pitches.iter().map(PitchCard::from).collect();

    let mut context = Context::new();
    context.insert("toasts", &Vec::<Toast>::new());
    context.insert("query", query.as_deref().unwrap_or_default());
    context.insert("cards", &cards);
    let html_body = templates
        .render("home.html", &context)
        .context("Error rendering home html")
        .map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html_body))
}

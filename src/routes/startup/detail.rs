use crate::content_client::ContentClient;
use crate::domain::PitchCard;
use crate::submission::Toast;
use crate::utils::e500;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use anyhow::Context as _;
use tera::{Context, Tera};

#[tracing::instrument(
    name = "Show a pitch",
    skip(path, flash_messages, content_client, templates),
    fields(pitch_id = %path.as_str())
)]
pub async fn pitch_detail(
    path: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    content_client: web::Data<ContentClient>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let pitch_id = path.into_inner();
    let pitch = match content_client
        .fetch_pitch(&pitch_id)
        .await
        .context("Failed to fetch a pitch from the content API")
        .map_err(e500)?
    {
        Some(pitch) => pitch,
        None => return Ok(HttpResponse::NotFound().finish()),
    };

    let toasts: Vec<Toast> = flash_messages
        .iter()
        .map(|m| match m.level() {
            Level::Error | Level::Warning => Toast::error(m.content()),
            _ => Toast::success(m.content()),
        })
        .collect();

    let mut context = Context::new();
    context.insert("toasts", &toasts);
    context.insert("card", &PitchCard::from(&pitch.summary));
    context.insert("pitch", &pitch.pitch);
    let html_body = templates
        .render("pitch_detail.html", &context)
        .context("Error rendering pitch_detail html")
        .map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html_body))
}

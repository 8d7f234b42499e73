mod detail;
mod get;
mod post;

pub use detail::pitch_detail;
pub use get::pitch_form;
pub use post::submit_pitch;

use crate::submission::PitchForm;
use crate::utils::e500;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use anyhow::Context as _;
use tera::{Context, Tera};

/// Draw `form` as it currently stands: draft values, field errors, notification, button state.
fn render_form(
    templates: &Tera,
    form: &PitchForm,
    status: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let mut context = Context::new();
    context.insert("form_id", &form.form_id().to_string());
    context.insert("draft", form.draft());
    context.insert("errors", form.errors());
    context.insert("state", form.state());
    context.insert("toasts", &form.notification().into_iter().collect::<Vec<_>>());
    context.insert("is_pending", &form.is_submit_disabled());

    let html_body = templates
        .render("pitch_form.html", &context)
        .context("Error rendering pitch_form html")
        .map_err(e500)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html_body))
}

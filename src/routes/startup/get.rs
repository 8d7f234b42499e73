use super::render_form;
use crate::in_flight::FormId;
use crate::submission::PitchForm;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use tera::Tera;

/// Every visit hands out a fresh form, with its own id.
pub async fn pitch_form(templates: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    let form = PitchForm::new(FormId::generate());
    render_form(&templates, &form, StatusCode::OK)
}

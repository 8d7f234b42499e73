use super::render_form;
use crate::content_client::ContentClient;
use crate::domain::PitchFormData;
use crate::in_flight::{FormId, InFlightSubmissions};
use crate::submission::{PitchForm, SubmitError};
use crate::utils::{e400, see_other};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use tera::Tera;

#[derive(serde::Deserialize)]
pub struct FormData {
    form_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    pitch: String,
}

/// A failed submission answers with the form itself, filled with what was submitted, so that
/// nothing the user typed is lost. A successful one redirects to the new pitch.
#[tracing::instrument(
    name = "Submit a startup pitch",
    skip(form, content_client, in_flight, templates),
    fields(pitch_title = %form.title)
)]
pub async fn submit_pitch(
    form: web::Form<FormData>,
    content_client: web::Data<ContentClient>,
    in_flight: web::Data<InFlightSubmissions>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    // We must destructure the form to avoid upsetting the borrow-checker
    let FormData {
        form_id,
        title,
        description,
        category,
        link,
        pitch,
    } = form.0;
    let form_id: FormId = form_id.try_into().map_err(e400)?;
    let form_data = PitchFormData {
        title,
        description,
        category,
        link,
    };
    let mut pitch_form = PitchForm::new(form_id);

    let Some(_in_flight_guard) = in_flight.try_begin(form_id) else {
        tracing::warn!(%form_id, "Refusing a duplicate submission");
        pitch_form.refuse_duplicate(form_data, pitch);
        return render_form(&templates, &pitch_form, StatusCode::CONFLICT);
    };

    match pitch_form.submit(form_data, pitch, &content_client).await {
        Ok(pitch_id) => {
            if let Some(toast) = pitch_form.notification() {
                FlashMessage::success(toast.description.clone()).send();
            }
            Ok(see_other(&format!(
                "/startup/{}",
                urlencoding::encode(&pitch_id)
            )))
        }
        Err(SubmitError::ValidationFailed { .. }) => {
            render_form(&templates, &pitch_form, StatusCode::BAD_REQUEST)
        }
        Err(SubmitError::OperationFailed { .. }) => {
            render_form(&templates, &pitch_form, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

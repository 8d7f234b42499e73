//! The submission form of a pitch, modelled as a small state machine.
//!
//! ```text
//! INITIAL ──submit──▶ SUBMITTING ──┬──▶ SUCCESS           (terminal, the user is redirected)
//!                                  ├──▶ VALIDATION_ERROR  (editable again, field errors shown)
//!                                  └──▶ UNEXPECTED_ERROR  (editable again, generic message)
//! ```
//!
//! Failures are values: `submit` returns a [`SubmitError`] instead of leaving the caller to guess
//! which kind of failure it is looking at.
use crate::content_client::{ContentClient, CreatePitchResponse};
use crate::domain::{NewPitch, PitchFormData, ValidationErrorSet};
use crate::in_flight::FormId;

pub const PITCH_CREATED: &str = "Your startup pitch has been created successfully";
pub const CHECK_YOUR_INPUTS: &str = "Please check your inputs and try again";
pub const VALIDATION_FAILED: &str = "Validation failed";
pub const UNEXPECTED_ERROR: &str = "An unexpected error has occurred";
pub const ALREADY_SUBMITTING: &str =
    "This pitch is already being submitted. Check the listing before sending it again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormStatus {
    Initial,
    Submitting,
    Success,
    ValidationError,
    UnexpectedError,
}

/// The state carried from one submission of a form to the next.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ActionState {
    pub status: FormStatus,
    pub error: String,
}

impl Default for ActionState {
    fn default() -> Self {
        Self {
            status: FormStatus::Initial,
            error: String::new(),
        }
    }
}

/// What the user sees in the inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PitchDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: String,
    pub pitch: String,
}

impl PitchDraft {
    fn submitted(form_data: &PitchFormData, pitch: &str) -> Self {
        Self {
            title: form_data.title.clone(),
            description: form_data.description.clone(),
            category: form_data.category.clone(),
            link: form_data.link.clone(),
            pitch: pitch.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A short-lived notification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The content API was not contacted.
    #[error("Validation failed")]
    ValidationFailed { field_errors: ValidationErrorSet },
    /// The values were fine, creating the pitch was not.
    #[error("{message}")]
    OperationFailed { message: String },
}

/// One submission form and everything it shows to the user.
#[derive(Debug)]
pub struct PitchForm {
    form_id: FormId,
    draft: PitchDraft,
    errors: ValidationErrorSet,
    state: ActionState,
    notification: Option<Toast>,
    is_pending: bool,
}

impl PitchForm {
    pub fn new(form_id: FormId) -> Self {
        Self {
            form_id,
            draft: PitchDraft::default(),
            errors: ValidationErrorSet::default(),
            state: ActionState::default(),
            notification: None,
            is_pending: false,
        }
    }

    pub fn form_id(&self) -> FormId {
        self.form_id
    }

    pub fn draft(&self) -> &PitchDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// Only set by terminal transitions.
    pub fn notification(&self) -> Option<&Toast> {
        self.notification.as_ref()
    }

    /// The submit button is disabled exactly while a submission is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.is_pending
    }

    /// Validate the form and, if it holds up, create the pitch.
    ///
    /// `pitch` is the long-form markdown, which lives in its own editor rather than among the
    /// plain inputs. Returns the identifier of the new pitch.
    #[tracing::instrument(
        name = "Submit a pitch",
        skip(self, form_data, pitch, content_client),
        fields(form_id = %self.form_id)
    )]
    pub async fn submit(
        &mut self,
        form_data: PitchFormData,
        pitch: String,
        content_client: &ContentClient,
    ) -> Result<String, SubmitError> {
        self.is_pending = true;
        self.state.status = FormStatus::Submitting;
        self.notification = None;

        let outcome = self.validate_and_create(form_data, pitch, content_client).await;

        self.is_pending = false;
        outcome
    }

    /// Answer a submission refused because the same form is already being submitted by another
    /// request. This request ends here: the form stays editable and the submit button enabled.
    pub fn refuse_duplicate(&mut self, form_data: PitchFormData, pitch: String) {
        self.draft = PitchDraft::submitted(&form_data, &pitch);
        self.is_pending = false;
        self.notification = Some(Toast::error(ALREADY_SUBMITTING));
    }

    async fn validate_and_create(
        &mut self,
        form_data: PitchFormData,
        pitch: String,
        content_client: &ContentClient,
    ) -> Result<String, SubmitError> {
        // Whatever happens next, the inputs show exactly what was just submitted.
        self.draft = PitchDraft::submitted(&form_data, &pitch);

        let new_pitch = match NewPitch::parse(&form_data, &pitch) {
            Ok(new_pitch) => new_pitch,
            Err(field_errors) => return Err(self.reject(field_errors)),
        };
        self.errors = ValidationErrorSet::default();

        match content_client.create_pitch(&new_pitch).await {
            Ok(CreatePitchResponse::Success { id }) => {
                self.state = ActionState {
                    status: FormStatus::Success,
                    error: String::new(),
                };
                self.notification = Some(Toast::success(PITCH_CREATED));
                tracing::info!(pitch_id = %id, "A new pitch has been created");
                Ok(id)
            }
            Ok(CreatePitchResponse::Error { error }) => {
                Err(self.fail(anyhow::anyhow!(error).context("The content API refused the pitch")))
            }
            Err(e) => Err(self.fail(
                anyhow::Error::new(e).context("Failed to reach the content API to create a pitch"),
            )),
        }
    }

    fn reject(&mut self, field_errors: ValidationErrorSet) -> SubmitError {
        let invalid_fields: Vec<_> = field_errors.fields().collect();
        tracing::warn!(?invalid_fields, "The submitted pitch is invalid");
        self.errors = field_errors.clone();
        self.state = ActionState {
            status: FormStatus::ValidationError,
            error: VALIDATION_FAILED.into(),
        };
        self.notification = Some(Toast::error(CHECK_YOUR_INPUTS));
        SubmitError::ValidationFailed { field_errors }
    }

    fn fail(&mut self, error: anyhow::Error) -> SubmitError {
        tracing::error!(
            error.cause_chain = ?error,
            error.message = %error,
            "Failed to create a pitch"
        );
        self.state = ActionState {
            status: FormStatus::UnexpectedError,
            error: UNEXPECTED_ERROR.into(),
        };
        self.notification = Some(Toast::error(UNEXPECTED_ERROR));
        SubmitError::OperationFailed {
            message: UNEXPECTED_ERROR.into(),
        }
    }
}

mod new_pitch;
mod pitch_field;
mod pitch_summary;
mod validation_errors;

pub use new_pitch::{NewPitch, PitchFormData};
pub use pitch_field::{PitchField, RequiredText};
pub use pitch_summary::{Author, PitchCard, PitchDetail, PitchSummary};
pub use validation_errors::ValidationErrorSet;

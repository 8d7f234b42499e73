use crate::domain::{PitchField, RequiredText, ValidationErrorSet};

/// The four plain inputs of the submission form, exactly as the browser sent them.
///
/// A missing input deserializes to an empty string: it has to surface as a "required" message
/// next to the field, not as a rejected request.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PitchFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub link: String,
}

/// A pitch that is ready to be handed over to the content API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NewPitch {
    pub title: RequiredText,
    pub description: RequiredText,
    pub category: RequiredText,
    pub link: RequiredText,
    pub pitch: RequiredText,
}

impl NewPitch {
    /// Check every field against the submission schema.
    ///
    /// All fields are checked, so the returned set holds a message for each invalid one, not
    /// just the first we stumbled upon.
    pub fn parse(form: &PitchFormData, pitch: &str) -> Result<NewPitch, ValidationErrorSet> {
        let mut errors = ValidationErrorSet::default();
        let title = required(&mut errors, PitchField::Title, &form.title);
        let description = required(&mut errors, PitchField::Description, &form.description);
        let category = required(&mut errors, PitchField::Category, &form.category);
        let link = required(&mut errors, PitchField::Link, &form.link);
        let pitch = required(&mut errors, PitchField::Pitch, pitch);

        match (title, description, category, link, pitch) {
            (Some(title), Some(description), Some(category), Some(link), Some(pitch)) => {
                Ok(NewPitch {
                    title,
                    description,
                    category,
                    link,
                    pitch,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required(errors: &mut ValidationErrorSet, field: PitchField, value: &str) -> Option<RequiredText> {
    match RequiredText::parse(field, value.to_owned()) {
        Ok(text) => Some(text),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

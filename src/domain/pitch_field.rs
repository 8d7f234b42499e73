use std::fmt;

/// The editable fields of the submission form, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PitchField {
    Title,
    Description,
    Category,
    Link,
    Pitch,
}

impl PitchField {
    pub const ALL: [PitchField; 5] = [
        PitchField::Title,
        PitchField::Description,
        PitchField::Category,
        PitchField::Link,
        PitchField::Pitch,
    ];

    /// The `name` of the matching form input.
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchField::Title => "title",
            PitchField::Description => "description",
            PitchField::Category => "category",
            PitchField::Link => "link",
            PitchField::Pitch => "pitch",
        }
    }

    /// What the user sees next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            PitchField::Title => "Title",
            PitchField::Description => "Description",
            PitchField::Category => "Category",
            PitchField::Link => "Image URL",
            PitchField::Pitch => "Pitch",
        }
    }
}

impl fmt::Display for PitchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form value that passed the "required" check: it contains at least one character that is not
/// whitespace.
///
/// The only way to get one is through [`RequiredText::parse`], so a `NewPitch` built out of
/// `RequiredText`s cannot carry an empty field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RequiredText(String);

impl RequiredText {
    /// Returns the user's input untouched if it is not blank, the message to show next to
    /// `field` otherwise.
    pub fn parse(field: PitchField, s: String) -> Result<RequiredText, String> {
        if s.trim().is_empty() {
            Err(format!("{} is required", field.label()))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use crate::domain::PitchField;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// Field name to the first error message reported for it.
///
/// A failed validation produces a brand new set which replaces the previous one. Sets are never
/// merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrorSet(BTreeMap<PitchField, String>);

impl ValidationErrorSet {
    /// Record `message` for `field`, unless the field already has one.
    pub fn add(&mut self, field: PitchField, message: String) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: PitchField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = PitchField> + '_ {
        self.0.keys().copied()
    }
}

/// Templates look errors up by input name (`errors.title`). Every field is present, fields without
/// an error map to an empty string.
impl serde::Serialize for ValidationErrorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(PitchField::ALL.len()))?;
        for field in PitchField::ALL {
            map.serialize_entry(field.as_str(), self.get(field).unwrap_or_default())?;
        }
        map.end()
    }
}

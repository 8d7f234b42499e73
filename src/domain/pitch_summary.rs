use chrono::{DateTime, Utc};
use serde_aux::field_attributes::deserialize_string_from_number;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Author {
    // The content API is not consistent about identifiers: some are numbers, some are strings.
    #[serde(rename = "_id", deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    pub name: String,
}

/// A pitch as listed on the home page. Owned by the content API: we only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PitchSummary {
    #[serde(rename = "_id", deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub views: u64,
    pub author: Author,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PitchDetail {
    #[serde(flatten)]
    pub summary: PitchSummary,
    /// Long-form markdown.
    #[serde(default)]
    pub pitch: String,
}

/// What a template needs to draw a pitch card.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PitchCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Searching for the card's category.
    pub category_href: String,
    pub image: String,
    pub views: u64,
    pub author_name: String,
    pub created_at: String,
}

impl From<&PitchSummary> for PitchCard {
    fn from(pitch: &PitchSummary) -> Self {
        Self {
            id: pitch.id.clone(),
            title: pitch.title.clone(),
            description: pitch.description.clone(),
            category: pitch.category.clone(),
            category_href: format!("/?query={}", urlencoding::encode(&pitch.category)),
            image: pitch.image.clone(),
            views: pitch.views,
            author_name: pitch.author.name.clone(),
            created_at: pitch.created_at.format("%B %-d, %Y").to_string(),
        }
    }
}

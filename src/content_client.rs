use crate::domain::{NewPitch, PitchDetail, PitchSummary};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_string_from_number;
use std::time::Duration;

/// HTTP client for the content API, where pitches are stored and searched.
///
/// `reqwest::Client` keeps a connection pool under the hood: we build one when the application
/// starts and share it across all requests instead of paying for a new TLS handshake every time.
#[derive(Debug)]
pub struct ContentClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

/// What the content API answers to a create request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "status")]
pub enum CreatePitchResponse {
    #[serde(rename = "SUCCESS")]
    Success {
        #[serde(rename = "_id", deserialize_with = "deserialize_string_from_number")]
        id: String,
    },
    #[serde(rename = "ERROR")]
    Error { error: String },
}

impl ContentClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }

    /// Pitches matching `query`, or every pitch when there is no query. Matching is up to the
    /// content API.
    #[tracing::instrument(name = "Fetch pitches from the content API", skip(self))]
    pub async fn fetch_pitches(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<PitchSummary>, reqwest::Error> {
        let url = format!("{}/pitches", self.base_url);
        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(self.authorization_token.expose_secret());
        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }
        request
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<PitchSummary>>()
            .await
    }

    /// `Ok(None)` if the content API does not know about `id`.
    #[tracing::instrument(name = "Fetch a pitch from the content API", skip(self))]
    pub async fn fetch_pitch(&self, id: &str) -> Result<Option<PitchDetail>, reqwest::Error> {
        let url = format!("{}/pitches/{}", self.base_url, urlencoding::encode(id));
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let pitch = response.error_for_status()?.json::<PitchDetail>().await?;
        Ok(Some(pitch))
    }

    /// A non-2xx status is an `Err`. A 2xx answer can still be a `CreatePitchResponse::Error`:
    /// the content API reports refused documents in the body.
    #[tracing::instrument(
        name = "Create a pitch through the content API",
        skip(self, pitch),
        fields(pitch_title = %pitch.title.as_ref())
    )]
    pub async fn create_pitch(
        &self,
        pitch: &NewPitch,
    ) -> Result<CreatePitchResponse, reqwest::Error> {
        let url = format!("{}/pitches", self.base_url);
        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(pitch)
            .send()
            .await?
            .error_for_status()?
            .json::<CreatePitchResponse>()
            .await
    }
}

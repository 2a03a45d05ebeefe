use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::LoadError;
use crate::model::raw::RawApiResponse;
use crate::repository::traits::PayloadSource;

pub const DEFAULT_ENDPOINT: &str = "https://3snet.co/js_test/api.json";

pub struct HttpPayloadSource {
    client: Client,
    endpoint: String,
}

impl HttpPayloadSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LoadError::Transport)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl PayloadSource for HttpPayloadSource {
    fn fetch(&self) -> Result<RawApiResponse, LoadError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(LoadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().map_err(LoadError::Transport)?;
        debug!(bytes = body.len(), endpoint = %self.endpoint, "received payload");
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::client::source::VolumeSource;
use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::error::{VolumesError, VolumesResult};
use crate::logging::log_debug;
use crate::models::{Team, Volume};

pub struct ApiClient {
    client: reqwest::Client,
    api_url: Url,
}

impl ApiClient {
    pub fn new(api_url: &str, token: Option<&str>) -> VolumesResult<Self> {
        let api_url = Url::parse(api_url.trim())
            .map_err(|e| VolumesError::ConfigError(format!("invalid API URL '{}': {}", api_url, e)))?;
        if api_url.cannot_be_a_base() {
            return Err(VolumesError::ConfigError(format!("invalid API URL '{}'", api_url)));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| VolumesError::ConfigError("invalid token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, api_url })
    }

    /// Build `<api_url>/api/v1/<segments...>`, escaping each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "v1"]).extend(segments);
        }
        url
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> VolumesResult<T> {
        log_debug(&format!("GET {}", url));

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| VolumesError::FetchFailure(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(unexpected_response(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| VolumesError::FetchFailure(format!("invalid response from {}: {}", url, e)))
    }
}

/// Error for a non-2xx reply. Status and body are always kept; a 401 also
/// gets a hint on how to log in.
pub fn unexpected_response(status: StatusCode, body: &str) -> VolumesError {
    let mut message = format!("Unexpected Response\nStatus: {}\nBody:\n{}", status, body);
    if status == StatusCode::UNAUTHORIZED {
        message.push_str("\nnot authorized. run 'volumes auth --token <TOKEN>' to log in");
    }
    VolumesError::FetchFailure(message)
}

#[async_trait]
impl VolumeSource for ApiClient {
    async fn list_teams(&self) -> VolumesResult<Vec<Team>> {
        self.get_json(self.endpoint(&["teams"])).await
    }

    async fn list_volumes(&self, team: &str) -> VolumesResult<Vec<Volume>> {
        self.get_json(self.endpoint(&["teams", team, "volumes"])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = ApiClient::new("https://ci.example.com", Some("token")).unwrap();
        assert_eq!(
            client.endpoint(&["teams", "main", "volumes"]).as_str(),
            "https://ci.example.com/api/v1/teams/main/volumes"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_escapes_team() {
        let client = ApiClient::new("https://ci.example.com/concourse/", None).unwrap();
        assert_eq!(
            client.endpoint(&["teams", "a team/x", "volumes"]).as_str(),
            "https://ci.example.com/concourse/api/v1/teams/a%20team%2Fx/volumes"
        );
    }

    #[test]
    fn test_server_error_keeps_status_and_body() {
        let error = unexpected_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            error.to_string(),
            "Unexpected Response\nStatus: 500 Internal Server Error\nBody:\nboom"
        );
    }

    #[test]
    fn test_unauthorized_keeps_status_and_body() {
        let message = unexpected_response(StatusCode::UNAUTHORIZED, "token expired").to_string();
        assert!(message.starts_with("Unexpected Response\nStatus: 401 Unauthorized\nBody:\ntoken expired"));
        assert!(message.contains("volumes auth"));
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        assert!(matches!(
            ApiClient::new("not a url", None),
            Err(VolumesError::ConfigError(_))
        ));
    }
}

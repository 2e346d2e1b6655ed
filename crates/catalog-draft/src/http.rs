//! HTTP Catalog Client
//!
//! `reqwest` implementation of [`CatalogApi`] with bearer-token auth.

use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::api::{ApiError, ApiResult, CatalogApi, LIST_PATH, RESET_DEFAULTS_PATH, SAVE_PATH};
use crate::model::ServiceItem;
use crate::wire::{ApiEnvelope, SaveCatalogRequest};

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn token(&self) -> ApiResult<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("no token stored, please log in again".to_string()))
    }

    /// Send with auth and hand back status plus raw body
    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<(u16, String)> {
        let token = self.token()?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        log::debug!("[HTTP] {} ({} bytes)", status, body.len());
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_service_items(&self) -> ApiResult<Vec<ServiceItem>> {
        let (status, body) = self.send(self.client.get(self.url(LIST_PATH))).await?;
        let envelope: ApiEnvelope<Vec<ServiceItem>> = read_envelope(status, &body)?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }

    async fn save_service_items(&self, request: &SaveCatalogRequest) -> ApiResult<()> {
        let builder = self.client.post(self.url(SAVE_PATH)).json(request);
        let (status, body) = self.send(builder).await?;
        read_envelope::<IgnoredAny>(status, &body).map(|_| ())
    }

    async fn reset_defaults(&self) -> ApiResult<()> {
        let (status, body) = self.send(self.client.post(self.url(RESET_DEFAULTS_PATH))).await?;
        read_reset_outcome(status, &body)
    }
}

/// Map status and body to an envelope, treating `success: false` as a rejection
pub(crate) fn read_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<ApiEnvelope<T>> {
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized(
            server_message(body).unwrap_or_else(|| "session expired, please log in again".to_string()),
        ));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Rejected {
            status,
            message: server_message(body).unwrap_or_else(|| fallback_message(body)),
        });
    }
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            status,
            message: envelope.message.clone().unwrap_or_else(|| "request was not successful".to_string()),
        });
    }
    Ok(envelope)
}

/// Reset-defaults answers 201 Created with any body; other statuses carry an envelope
pub(crate) fn read_reset_outcome(status: u16, body: &str) -> ApiResult<()> {
    if status == 201 {
        return Ok(());
    }
    read_envelope::<IgnoredAny>(status, body).map(|_| ())
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiEnvelope<IgnoredAny>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|m| !m.is_empty())
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_envelope_success() {
        let body = r#"{"success": true, "data": [{"id": 1, "title": "Plumbing"}]}"#;
        let envelope = read_envelope::<Vec<ServiceItem>>(200, body).unwrap();
        assert_eq!(envelope.data.unwrap()[0].title, "Plumbing");
    }

    #[test]
    fn test_read_envelope_unauthorized() {
        let err = read_envelope::<IgnoredAny>(401, r#"{"message": "Token expired"}"#).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized("Token expired".to_string()));
    }

    #[test]
    fn test_read_envelope_server_error_uses_raw_body() {
        let err = read_envelope::<IgnoredAny>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 502, message: "Bad Gateway".to_string() });
    }

    #[test]
    fn test_read_envelope_success_false() {
        let err = read_envelope::<IgnoredAny>(200, r#"{"success": false, "message": "Duplicate title"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 200, message: "Duplicate title".to_string() });
    }

    #[test]
    fn test_read_envelope_garbage() {
        let err = read_envelope::<IgnoredAny>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_reset_created_ignores_body() {
        assert_eq!(read_reset_outcome(201, "Created"), Ok(()));
        assert_eq!(read_reset_outcome(201, ""), Ok(()));
    }

    #[test]
    fn test_reset_other_statuses_need_envelope() {
        assert_eq!(read_reset_outcome(200, r#"{"success": true}"#), Ok(()));
        assert!(matches!(read_reset_outcome(200, "Created"), Err(ApiError::Decode(_))));
        assert_eq!(
            read_reset_outcome(500, r#"{"success": false, "message": "seed failed"}"#),
            Err(ApiError::Rejected { status: 500, message: "seed failed".to_string() })
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpCatalogApi::new("https://api.manong.ph/v1/", None);
        assert_eq!(api.url(LIST_PATH), "https://api.manong.ph/v1/service-items");
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_sending() {
        let api = HttpCatalogApi::new("http://127.0.0.1:9", None);
        let err = api.list_service_items().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}

use dotenv::dotenv;
use reqwest::Client;
use std::env;
use thiserror::Error;
use tracing::{debug, warn};

use super::endpoints::{
    GeminiAvailableModel, GenerateContentRequest, GenerateContentResponse, Provider,
    GEMINI_BASE_URL, GEMINI_MODELS,
};
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("API error {status}: {error_body}")]
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

const ERROR_BODY_LIMIT: usize = 100;

/// Condenses an error response for logs: the `error` field of a JSON body, or
/// the tag-stripped text of an HTML page cut to a short prefix.
pub fn summarize_error_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("error") {
            Some(serde_json::Value::String(message)) => return message.clone(),
            Some(serde_json::Value::Object(obj)) => {
                if let Some(message) = obj.get("message").and_then(|m| m.as_str()) {
                    return message.to_string();
                }
                return serde_json::Value::Object(obj.clone()).to_string();
            }
            _ => {}
        }
    }

    let mut stripped = String::with_capacity(body.len());
    let mut in_tag = false;
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(c),
            _ => {}
        }
    }
    stripped.trim().chars().take(ERROR_BODY_LIMIT).collect()
}

impl Provider {
    pub fn gemini(api_key_env_var_name: &str, model: &str, timeout: std::time::Duration) -> Self {
        dotenv().ok();
        Self::Gemini {
            api_key: api_key_env_var_name.to_string(),
            model: model.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn get_available_models(&self) -> Vec<GeminiAvailableModel> {
        match self {
            Provider::Gemini { .. } => GEMINI_MODELS.to_vec(),
        }
    }

    pub async fn call_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiConnectionError> {
        match self {
            Provider::Gemini {
                api_key: api_key_env_var_name,
                model,
                base_url,
                timeout,
            } => {
                dotenv().ok();
                let actual_api_key = env::var(api_key_env_var_name)
                    .map_err(|_| ApiConnectionError::MissingApiKey(api_key_env_var_name.clone()))?;

                let client = Client::builder().timeout(*timeout).build()?;
                let url = format!("{}/{}:generateContent", base_url, model);
                debug!(%url, "calling generateContent");

                let response = client
                    .post(&url)
                    .query(&[("key", actual_api_key.as_str())])
                    .json(request)
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to read error body".to_string());
                    let error_body = summarize_error_body(&body);
                    warn!(%status, %error_body, "generateContent failed");
                    return Err(ApiConnectionError::ApiError { status, error_body });
                }

                let parsed = response.json::<GenerateContentResponse>().await?;
                if let Some(error) = &parsed.error {
                    return Err(ApiConnectionError::ApiError {
                        status,
                        error_body: error.message.clone(),
                    });
                }
                Ok(parsed)
            }
        }
    }
}

/// Thin client around the configured generative provider.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    provider: Provider,
}

impl GeminiClient {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Provider::gemini(
            &config.gemini_api_key_env,
            &config.gemini_model,
            config.request_timeout,
        ))
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Sends a prompt with one JPEG image and returns the first text part, if any.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        base64_jpeg: &str,
    ) -> Result<Option<String>, ApiConnectionError> {
        use super::endpoints::Part;

        let request =
            GenerateContentRequest::user(vec![Part::text(prompt), Part::jpeg(base64_jpeg)]);
        let response = self.provider.call_generate_content(&request).await?;
        Ok(response.first_text().map(str::to_string))
    }
}

use base64::{engine::general_purpose, Engine as _};
use tracing::{info, warn};

use super::{recipe_from_ai_text, ImportError};
use crate::api_connection::GeminiClient;
use crate::recipe::Recipe;

pub const EXTRACTION_PROMPT: &str = "Extract the recipe from this image. \
    Return valid JSON with these keys: \"name\" (string), \
    \"ingredients\" (single string with newlines), \
    \"instructions\" (single string with newlines). \
    If no recipe is found, return null.";

/// Sends a JPEG photo to the extraction model and converts its answer into a recipe.
pub async fn extract_recipe_from_image(
    image_bytes: &[u8],
    client: &GeminiClient,
    source: &str,
) -> Result<Recipe, ImportError> {
    let encoded = general_purpose::STANDARD.encode(image_bytes);
    info!(size_kb = image_bytes.len() as f64 / 1024.0, "sending image for recipe extraction");

    let text = client
        .generate_with_image(EXTRACTION_PROMPT, &encoded)
        .await?
        .ok_or_else(|| {
            warn!("extraction returned no text");
            ImportError::EmptyResponse
        })?;

    recipe_from_ai_text(&text, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_connection::endpoints::Provider;
    use crate::api_connection::ApiConnectionError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_api_key_is_reported_before_any_request() {
        let client = GeminiClient::new(Provider::gemini(
            "THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_PANTRY",
            "gemini-2.5-flash",
            Duration::from_secs(1),
        ));
        let result = extract_recipe_from_image(&[0xFF, 0xD8, 0xFF], &client, "test").await;
        match result {
            Err(ImportError::Api(ApiConnectionError::MissingApiKey(name))) => {
                assert_eq!(name, "THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_PANTRY")
            }
            other => panic!("expected missing key error, got {:?}", other),
        }
    }

    #[test]
    fn test_prompt_requests_expected_keys() {
        for key in ["\"name\"", "\"ingredients\"", "\"instructions\"", "return null"] {
            assert!(EXTRACTION_PROMPT.contains(key), "prompt missing {}", key);
        }
    }
}

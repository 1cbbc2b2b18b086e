//! Gemini image generation client
//!
//! Implements the ImageGenPort trait against the `generateContent` REST endpoint.

use async_trait::async_trait;
use merchmagic_domain::{ImageData, DEFAULT_MIME_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{
    safety_categories, ImageGenError, ImageGenPort, ImageRequest, ImageResult, SafetyRating,
};

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default image model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-image";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini image API
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ImageGenPort for GeminiClient {
    async fn generate(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError> {
        let has_reference = request.reference.is_some();
        let body = build_request(&request);

        tracing::debug!(
            model = %self.model,
            has_reference,
            instruction_len = request.instruction.len(),
            "Sending image generation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageGenError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let error = error_from_body(status.as_u16(), &error_text);
            tracing::warn!(
                model = %self.model,
                status = status.as_u16(),
                error = %error,
                "Image service returned an error status"
            );
            return Err(error);
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ImageGenError::InvalidResponse(e.to_string()))?;

        let image = extract_image(api_response)?;
        tracing::debug!(model = %self.model, mime_type = image.mime_type(), "Image generated");
        Ok(ImageResult { image })
    }
}

fn build_request(request: &ImageRequest) -> GenerateContentRequest {
    let mut parts = vec![
        RequestPart::InlineData {
            inline_data: InlineData::from(&request.source),
        },
        RequestPart::Text {
            text: request.instruction.clone(),
        },
    ];
    if let Some(reference) = &request.reference {
        parts.push(RequestPart::InlineData {
            inline_data: InlineData::from(reference),
        });
    }

    GenerateContentRequest {
        contents: vec![RequestContent { parts }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string()],
            image_config: request.aspect_ratio.clone().map(|aspect_ratio| ImageConfig {
                aspect_ratio,
            }),
        },
    }
}

/// Map an error response body to an `ImageGenError`.
fn error_from_body(status: u16, body: &str) -> ImageGenError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| body.to_string());
    ImageGenError::from_status(status, message)
}

fn extract_image(response: GenerateContentResponse) -> Result<ImageData, ImageGenError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ImageGenError::NoCandidates)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        let ratings: Vec<SafetyRating> = candidate
            .safety_ratings
            .into_iter()
            .map(|r| SafetyRating::new(r.category, r.probability))
            .collect();
        return Err(ImageGenError::SafetyBlocked {
            categories: safety_categories(&ratings),
        });
    }

    let inline = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|part| part.inline_data)
        .ok_or(ImageGenError::NoImage)?;

    let mime_type = inline
        .mime_type
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
    ImageData::from_base64(mime_type, inline.data)
        .map_err(|e| ImageGenError::InvalidResponse(e.to_string()))
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    data: String,
}

impl From<&ImageData> for InlineData {
    fn from(image: &ImageData) -> Self {
        Self {
            mime_type: Some(image.mime_type().to_string()),
            data: image.base64().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<WireSafetyRating>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[allow(dead_code)]
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct WireSafetyRating {
    category: String,
    probability: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    fn logo() -> ImageData {
        ImageData::from_bytes("image/png", b"logo")
    }

    #[test]
    fn request_puts_source_before_instruction_and_reference_last() {
        let request = ImageRequest::new(logo(), "put it on a mug")
            .with_reference(ImageData::from_bytes("image/jpeg", b"bg"));
        let body = serde_json::to_value(build_request(&request)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], logo().base64());
        assert_eq!(parts[1]["text"], "put it on a mug");
        assert_eq!(parts[2]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        assert_eq!(body["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn request_without_reference_has_two_parts() {
        let body = serde_json::to_value(build_request(&ImageRequest::new(logo(), "x"))).unwrap();
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn extracts_first_inline_image() {
        let image = ImageData::from_bytes("image/png", b"render");
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Here is your mockup" },
                    { "inlineData": { "mimeType": "image/png", "data": image.base64() } }
                ]},
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(extract_image(response).unwrap(), image);
    }

    #[test]
    fn missing_candidates_is_an_error() {
        let response = parse(json!({ "candidates": [] }));
        assert_eq!(extract_image(response), Err(ImageGenError::NoCandidates));
        assert_eq!(
            extract_image(GenerateContentResponse::default()),
            Err(ImageGenError::NoCandidates)
        );
    }

    #[test]
    fn text_only_response_has_no_image() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I cannot do that" }] } }]
        }));
        assert_eq!(extract_image(response), Err(ImageGenError::NoImage));
    }

    #[test]
    fn safety_finish_reason_reports_categories() {
        let response = parse(json!({
            "candidates": [{
                "finishReason": "SAFETY",
                "safetyRatings": [
                    { "category": "HARM_CATEGORY_HARASSMENT", "probability": "NEGLIGIBLE" },
                    { "category": "HARM_CATEGORY_VIOLENCE", "probability": "HIGH" }
                ]
            }]
        }));
        let err = extract_image(response).unwrap_err();
        assert_eq!(
            err,
            ImageGenError::SafetyBlocked {
                categories: vec!["Violence".to_string()]
            }
        );
        assert_eq!(err.to_string(), "Blocked due to potential issues: Violence.");
    }

    #[test]
    fn error_body_message_drives_credential_detection() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_from_body(400, body), ImageGenError::InvalidCredential);
        assert_eq!(error_from_body(400, "not json"), ImageGenError::BadRequest);
        assert_eq!(error_from_body(429, ""), ImageGenError::RateLimited);
    }

    #[test]
    fn endpoint_uses_model_path() {
        let client = GeminiClient::new(
            "https://example.test/",
            DEFAULT_GEMINI_MODEL,
            "key",
            Duration::from_secs(5),
        );
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the MyMemory translation service.
//!
//! One request per translation cycle: a GET against the public `/get`
//! endpoint with the text and a `source|target` langpair. The service
//! answers JSON with the translated string under `responseData`. Failures
//! are mapped into the [`TranslateError`] taxonomy; the caller decides what
//! the user sees.

use crate::error::TranslateError;
use serde::Deserialize;

/// Base URL of the MyMemory translation endpoint.
const ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Languages of a single translation request, as BCP-47 tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: &'static str,
    pub target: &'static str,
}

impl LanguagePair {
    /// Renders the pair in the `source|target` form the service expects.
    #[must_use]
    pub fn to_query_value(self) -> String {
        format!("{}|{}", self.source, self.target)
    }
}

/// Top-level MyMemory response body. Only the field we consume is modeled.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Extracts the translated string from a raw response body.
fn parse_body(body: &str) -> Result<String, TranslateError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
    Ok(response.response_data.translated_text)
}

/// Performs one translation request.
///
/// Percent-encoding of the text is handled by reqwest's query
/// serialization. Any non-2xx status is a failure; no retry.
///
/// # Errors
///
/// Returns a [`TranslateError`] for transport failures, non-2xx statuses,
/// and bodies that do not match the documented shape.
pub async fn translate(
    text: String,
    languages: LanguagePair,
) -> Result<String, TranslateError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("iced_tradutor/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TranslateError::Network(e.to_string()))?;

    let response = client
        .get(ENDPOINT)
        .query(&[
            ("q", text.as_str()),
            ("langpair", languages.to_query_value().as_str()),
        ])
        .send()
        .await
        .map_err(|e| TranslateError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TranslateError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| TranslateError::Network(e.to_string()))?;

    parse_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_pair_renders_pipe_separated() {
        let pair = LanguagePair {
            source: "pt-BR",
            target: "en-US",
        };
        assert_eq!(pair.to_query_value(), "pt-BR|en-US");
    }

    #[test]
    fn parse_body_extracts_translated_text() {
        let body = r#"{
            "responseData": { "translatedText": "Hello", "match": 1 },
            "responseStatus": 200
        }"#;
        assert_eq!(parse_body(body).unwrap(), "Hello");
    }

    #[test]
    fn parse_body_rejects_missing_field() {
        let body = r#"{ "responseData": {} }"#;
        match parse_body(body) {
            Err(TranslateError::MalformedResponse(msg)) => {
                assert!(msg.contains("translatedText"));
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn parse_body_rejects_non_json() {
        let body = "<html>service unavailable</html>";
        assert!(matches!(
            parse_body(body),
            Err(TranslateError::MalformedResponse(_))
        ));
    }
}

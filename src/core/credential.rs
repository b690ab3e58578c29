//! Identity token decoding
//!
//! The identity provider hands back a signed JWT. The site only needs the
//! claims for display, so the payload segment is decoded without any
//! signature verification.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Standard alphabet, padding optional, trailing bits tolerated (matches `atob`)
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Payload delivered to the credential callback by the identity SDK
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialResponse {
    pub credential: String,
}

/// Claims decoded from an identity token.
///
/// Any JSON object is accepted. The four display fields are picked out only
/// when they hold strings; everything else stays in `claims` untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct UserProfile {
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
    /// Every other claim, kept verbatim
    pub claims: Map<String, Value>,
}

impl From<Map<String, Value>> for UserProfile {
    fn from(mut claims: Map<String, Value>) -> Self {
        Self {
            name: take_string(&mut claims, "name"),
            given_name: take_string(&mut claims, "given_name"),
            email: take_string(&mut claims, "email"),
            picture: take_string(&mut claims, "picture"),
            claims,
        }
    }
}

/// Remove `key` from `claims` if it holds a string; other values are left in place
fn take_string(claims: &mut Map<String, Value>, key: &str) -> Option<String> {
    match claims.get(key) {
        Some(Value::String(_)) => match claims.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        },
        _ => None,
    }
}

impl UserProfile {
    /// Short name for compact UI: given name, then full name, then email
    pub fn short_name(&self) -> &str {
        self.given_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or_default()
    }

    /// Full name, falling back to the short name
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.short_name())
    }
}

/// Reasons a credential could not be decoded
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not a JSON claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims of a `header.payload.signature` token
pub fn decode_credential(token: &str) -> Result<UserProfile, DecodeError> {
    let payload = token.split('.').nth(1).ok_or(DecodeError::MissingPayload)?;

    let standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = LENIENT_BASE64.decode(standard)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    fn token_for(payload: &str) -> String {
        format!(
            "eyJhbGciOiJSUzI1NiJ9.{}.c2lnbmF0dXJl",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    // ========================================================================
    // Successful decoding
    // ========================================================================

    #[test]
    fn test_decode_name_only() {
        let profile = decode_credential(&token_for(r#"{"name":"Ola Nordmann"}"#)).unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ola Nordmann"));
        assert!(profile.given_name.is_none());
        assert!(profile.claims.is_empty());
    }

    #[test]
    fn test_decode_google_claims() {
        let payload = r#"{
            "iss": "https://accounts.google.com",
            "sub": "1234567890",
            "email": "kari@example.no",
            "email_verified": true,
            "name": "Kari Nordmann",
            "given_name": "Kari",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
        }"#;
        let profile = decode_credential(&token_for(payload)).unwrap();

        assert_eq!(profile.given_name.as_deref(), Some("Kari"));
        assert_eq!(profile.email.as_deref(), Some("kari@example.no"));
        assert_eq!(
            profile.picture.as_deref(),
            Some("https://lh3.googleusercontent.com/a/photo.jpg")
        );
        assert_eq!(profile.claims.get("sub"), Some(&Value::from("1234567890")));
        assert_eq!(profile.claims.get("email_verified"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_decode_multibyte_utf8() {
        let profile = decode_credential(&token_for(r#"{"name":"Åse Ødegård"}"#)).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Åse Ødegård"));
    }

    #[test]
    fn test_decode_url_safe_characters() {
        // "~~~" and "???" encode to "fn5-" and "Pz8_" in the URL-safe alphabet
        let payload = r#"{"name":"~~~???"}"#;
        let encoded = URL_SAFE_NO_PAD.encode(payload);
        assert!(encoded.contains('-') || encoded.contains('_'));

        let profile = decode_credential(&token_for(payload)).unwrap();
        assert_eq!(profile.name.as_deref(), Some("~~~???"));
    }

    #[test]
    fn test_decode_padded_payload() {
        let token = format!("h.{}.s", URL_SAFE.encode(r#"{"name":"Ola"}"#));
        let profile = decode_credential(&token).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ola"));
    }

    #[test]
    fn test_two_segments_are_enough() {
        let token = format!("header.{}", URL_SAFE_NO_PAD.encode(r#"{"name":"Ola"}"#));
        assert!(decode_credential(&token).is_ok());
    }

    // ========================================================================
    // Malformed tokens
    // ========================================================================

    #[test]
    fn test_single_segment_is_rejected() {
        assert!(matches!(
            decode_credential("not-a-jwt"),
            Err(DecodeError::MissingPayload)
        ));
        assert!(matches!(
            decode_credential(""),
            Err(DecodeError::MissingPayload)
        ));
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        assert!(matches!(
            decode_credential("header.!!!!.sig"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]));
        assert!(matches!(decode_credential(&token), Err(DecodeError::Utf8(_))));
    }

    #[test]
    fn test_non_json_payload_is_rejected() {
        assert!(matches!(
            decode_credential(&token_for("hello world")),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(matches!(
            decode_credential("header..sig"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(decode_credential(&token_for("42")).is_err());
        assert!(decode_credential(&token_for(r#"["Ola"]"#)).is_err());
    }

    // ========================================================================
    // Claims of unexpected types
    // ========================================================================

    #[test]
    fn test_non_string_name_is_accepted() {
        let profile = decode_credential(&token_for(r#"{"name":7}"#)).unwrap();

        assert!(profile.name.is_none());
        assert_eq!(profile.claims.get("name"), Some(&Value::from(7)));
    }

    #[test]
    fn test_non_string_picture_keeps_other_fields() {
        let profile = decode_credential(&token_for(r#"{"name":"Ola","picture":false}"#)).unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ola"));
        assert!(profile.picture.is_none());
        assert_eq!(profile.claims.get("picture"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_array_email_is_accepted() {
        let profile = decode_credential(&token_for(r#"{"email":["a@b.no"]}"#)).unwrap();

        assert!(profile.email.is_none());
        assert_eq!(profile.short_name(), "");
        assert!(profile.claims.get("email").is_some_and(Value::is_array));
    }

    #[test]
    fn test_null_given_name_is_accepted() {
        let profile =
            decode_credential(&token_for(r#"{"name":"Kari Nordmann","given_name":null}"#)).unwrap();
        assert_eq!(profile.short_name(), "Kari Nordmann");
    }

    // ========================================================================
    // Profile helpers
    // ========================================================================

    #[test]
    fn test_short_name_prefers_given_name() {
        let profile =
            decode_credential(&token_for(r#"{"name":"Kari Nordmann","given_name":"Kari"}"#))
                .unwrap();
        assert_eq!(profile.short_name(), "Kari");
        assert_eq!(profile.display_name(), "Kari Nordmann");
    }

    #[test]
    fn test_short_name_falls_back_to_email() {
        let profile = decode_credential(&token_for(r#"{"email":"kari@example.no"}"#)).unwrap();
        assert_eq!(profile.short_name(), "kari@example.no");
        assert_eq!(profile.display_name(), "kari@example.no");
    }

    #[test]
    fn test_credential_response_deserializes() {
        let response: CredentialResponse =
            serde_json::from_str(r#"{"credential":"a.b.c","select_by":"btn"}"#).unwrap();
        assert_eq!(response.credential, "a.b.c");
    }
}

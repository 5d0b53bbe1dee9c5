use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /register`, sent as JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub city_name: String,
}

/// Body of `POST /token`, sent form-urlencoded as an OAuth2 password grant.
/// The backend reads the email from the `username` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful registration. The backend echoes the stored user without
/// the password; only `first_name` is required here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// User returned by `GET /me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city_name: String,
}

/// `{ "detail": ... }` body. Used as the success body of the subscription
/// endpoints and as the error body of every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: Value,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    /// Human-readable form of `detail`.
    ///
    /// Plain strings are returned verbatim. Validation failures arrive as a
    /// list of `{ "msg": ... }` objects, whose messages are joined with `; `.
    /// Anything else falls back to compact JSON.
    pub fn text(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();

                if messages.is_empty() {
                    self.detail.to_string()
                } else {
                    messages.join("; ")
                }
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_detail_is_verbatim() {
        let body: DetailResponse =
            serde_json::from_value(json!({ "detail": "Email already registered" })).unwrap();
        assert_eq!(body.text(), "Email already registered");
    }

    #[test]
    fn validation_detail_joins_messages() {
        let body: DetailResponse = serde_json::from_value(json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
                { "loc": ["body", "city_name"], "msg": "field required", "type": "value_error.missing" }
            ]
        }))
        .unwrap();

        assert_eq!(
            body.text(),
            "value is not a valid email address; field required"
        );
    }

    #[test]
    fn other_detail_falls_back_to_json() {
        let body: DetailResponse = serde_json::from_value(json!({ "detail": { "code": 7 } })).unwrap();
        assert_eq!(body.text(), r#"{"code":7}"#);
    }

    #[test]
    fn new_detail_serializes_as_string() {
        let body = DetailResponse::new("Successfully unsubscribed");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "detail": "Successfully unsubscribed" })
        );
        assert_eq!(body.text(), "Successfully unsubscribed");
    }

    #[test]
    fn missing_detail_is_rejected() {
        assert!(serde_json::from_value::<DetailResponse>(json!({ "message": "nope" })).is_err());
    }

    #[test]
    fn register_request_uses_snake_case_fields() {
        let request = RegisterRequest {
            first_name: "Ana".into(),
            last_name: "Lima".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
            city_name: "Berlin".into(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "first_name": "Ana",
                "last_name": "Lima",
                "email": "ana@example.com",
                "password": "secret",
                "city_name": "Berlin"
            })
        );
    }

    #[test]
    fn register_response_tolerates_extra_and_missing_fields() {
        let body: RegisterResponse =
            serde_json::from_value(json!({ "first_name": "Ana", "is_subscribed": true })).unwrap();
        assert_eq!(body.first_name, "Ana");
        assert_eq!(body.email, None);
    }
}

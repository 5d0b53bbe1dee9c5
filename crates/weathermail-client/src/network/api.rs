use serde::{de::DeserializeOwned, Serialize};
use weathermail_protocol::DetailResponse;

use super::transport::{ApiRequest, ApiResponse, Body, Method, Transport};
use super::ApiError;

pub async fn get<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    send(transport, Method::Get, url, Body::Empty, token).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(
    transport: &dyn Transport,
    url: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
    send(transport, Method::Post, url, Body::Json(body), token).await
}

pub async fn post_form<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
    fields: Vec<(String, String)>,
) -> Result<T, ApiError> {
    send(transport, Method::Post, url, Body::Form(fields), None).await
}

pub async fn post_empty<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    send(transport, Method::Post, url, Body::Empty, token).await
}

async fn send<T: DeserializeOwned>(
    transport: &dyn Transport,
    method: Method,
    url: &str,
    body: Body,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let request = ApiRequest {
        method,
        url: url.to_string(),
        bearer: token.map(str::to_string),
        body,
    };

    let response = transport
        .send(request)
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    decode(response)
}

/// Success bodies must parse as `T`, failure bodies as `{ "detail": ... }`.
/// A body that does not parse is reported like a transport failure.
pub fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        let error: DetailResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        return Err(ApiError::Application {
            status: response.status,
            detail: error.text(),
        });
    }

    serde_json::from_str(&response.body).map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weathermail_protocol::TokenResponse;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn decodes_success_body() {
        let token: TokenResponse =
            decode(response(200, r#"{"access_token":"abc123","token_type":"bearer"}"#)).unwrap();
        assert_eq!(token.access_token, "abc123");
    }

    #[test]
    fn error_body_becomes_application_error() {
        let err = decode::<TokenResponse>(response(401, r#"{"detail":"Invalid credentials"}"#))
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Application {
                status: 401,
                detail: "Invalid credentials".to_string(),
            }
        );
    }

    #[test]
    fn unparseable_error_body_is_a_transport_error() {
        let err = decode::<TokenResponse>(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn unexpected_success_shape_is_a_transport_error() {
        let err = decode::<TokenResponse>(response(200, r#"{"token":"abc"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Transport(msg) if msg.contains("access_token")));
    }
}

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::model::error::ApiError,
    model::api::{ErrorDto, ValidationErrorDto},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let (status, body) = send(Method::Get, url, None).await?;
    parse_response(status, &body)
}

pub async fn post<B: Serialize, T: DeserializeOwned>(url: &str, payload: &B) -> Result<T, ApiError> {
    let (status, body) = send(Method::Post, url, Some(serialize_json(payload)?)).await?;
    parse_response(status, &body)
}

pub async fn put<B: Serialize, T: DeserializeOwned>(url: &str, payload: &B) -> Result<T, ApiError> {
    let (status, body) = send(Method::Put, url, Some(serialize_json(payload)?)).await?;
    parse_response(status, &body)
}

/// Sends a DELETE request, expecting an empty success response.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    let (status, body) = send(Method::Delete, url, None).await?;
    parse_empty_response(status, &body)
}

/// Parses a JSON success body, or turns an error status into an `ApiError`.
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_str::<T>(body).map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from_body(status, body))
    }
}

pub fn parse_empty_response(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from_body(status, body))
    }
}

/// Reads either error shape the API returns: `{"error":{..}}` or `{"errors":[..]}`.
fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(body) {
        error_dto.error.message
    } else if let Ok(validation) = serde_json::from_str::<ValidationErrorDto>(body) {
        validation
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join(". ")
    } else if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    };

    ApiError {
        status: status as u64,
        message,
    }
}

/// Serialize a payload to JSON string
fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

#[cfg(feature = "web")]
async fn send(method: Method, url: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
    use reqwasm::http::Request;

    use crate::client::api::token;

    let mut request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };

    if let Some(token) = token::load() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    if let Some(body) = body {
        request = request.header("Content-Type", "application/json").body(body);
    }

    let response = request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Ok((status, text))
}

#[cfg(not(feature = "web"))]
async fn send(
    _method: Method,
    _url: &str,
    _body: Option<String>,
) -> Result<(u16, String), ApiError> {
    Err(ApiError {
        status: 503,
        message: "Requests can only be sent from the browser".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::band::BandDto;

    #[test]
    fn reads_error_message() {
        let body = r#"{"error":{"message":"You are not a member of this band","status":403}}"#;

        let err = parse_empty_response(403, body).unwrap_err();

        assert_eq!(err.status, 403);
        assert_eq!(err.message, "You are not a member of this band");
    }

    #[test]
    fn joins_validation_messages() {
        let body = r#"{"errors":[{"field":"email","message":"Please include a valid email"},{"field":"password","message":"Password must be at least 6 characters"}]}"#;

        let err = parse_response::<BandDto>(400, body).unwrap_err();

        assert_eq!(
            err.message,
            "Please include a valid email. Password must be at least 6 characters"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = parse_empty_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.message, "Bad Gateway");

        let err = parse_empty_response(500, "").unwrap_err();
        assert_eq!(err.message, "Unknown error");
    }
}

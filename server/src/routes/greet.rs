//! Greeting routes — the endpoint behind the form, plus a fixed hello probe.
//!
//! ERROR HANDLING
//! ==============
//! Input failures are reported as plain-text 400 responses; the client reads
//! error bodies verbatim, so the body carries the user-facing reason.

#[cfg(test)]
#[path = "greet_test.rs"]
mod greet_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum GreetError {
    #[error("name alanı gerekli.")]
    NameRequired,
}

impl IntoResponse for GreetError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NameRequired => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

/// Request payload for `POST /api/greet`. Missing fields default to empty so
/// validation, not deserialization, decides the rejection message.
#[derive(Debug, Default, Deserialize)]
pub struct GreetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
}

#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub message: String,
}

/// Build the greeting from trimmed fields; requires a non-empty name.
/// An empty surname leaves no trailing space.
fn build_greeting(name: &str, surname: &str) -> Result<String, GreetError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GreetError::NameRequired);
    }
    Ok(format!("Selam {name} {}", surname.trim()).trim_end().to_owned())
}

/// `POST /api/greet` — greet the submitted name.
pub async fn greet(
    Json(request): Json<GreetRequest>,
) -> Result<Json<GreetResponse>, GreetError> {
    let message = build_greeting(&request.name, &request.surname)?;
    tracing::info!(%message, "greeting issued");
    Ok(Json(GreetResponse { message }))
}

/// `GET /api/hello` — fixed greeting used as a smoke probe.
pub async fn hello() -> Json<GreetResponse> {
    Json(GreetResponse { message: "Hello, world!".to_owned() })
}

//! REST API helper for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` whose `Err` carries the failure's textual
//! description: the response body for a non-2xx status, or the underlying
//! error's description for network and decode failures. The caller decides
//! how to present it.

#![allow(clippy::unused_async)]

use super::types::GreetRequest;
#[cfg(feature = "hydrate")]
use super::types::GreetResponse;

#[cfg(feature = "hydrate")]
const GREET_ENDPOINT: &str = "/api/greet";

/// Submit a greeting via `POST /api/greet` and return the server's message.
///
/// A non-2xx response is reported with its body read as plain text; no JSON
/// parsing is attempted on error bodies.
///
/// # Errors
///
/// Returns the failure's textual description if the request cannot be built
/// or sent, the server responds with a non-2xx status, or the success body
/// cannot be decoded.
pub async fn send_greeting(request: &GreetRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GREET_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(resp.text().await.map_err(|e| e.to_string())?);
        }
        let body: GreetResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

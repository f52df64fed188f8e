//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's `/api/greet` payloads so serde round-trips
//! stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/greet`. Both fields carry the trimmed
/// form values; `surname` may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetRequest {
    pub name: String,
    pub surname: String,
}

/// Success body returned by `POST /api/greet`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetResponse {
    pub message: String,
}

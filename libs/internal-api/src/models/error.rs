/*
 * Device Connect
 *
 * Internal API for managing persistent device connections. Intended for use by the web GUI.
 *
 * The version of the OpenAPI document: 1
 * Contact: support@mender.io
 */

use crate::models;
use serde::{Deserialize, Serialize};

/// Error : Error descriptor.
#[serde_with::skip_serializing_none]
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Error {
    /// Description of the error.
    #[serde(rename = "error")]
    pub error: String,
    /// Request ID (same as in X-MEN-RequestID header).
    #[serde(rename = "request_id")]
    pub request_id: Option<String>,
}

impl Error {
    /// Error descriptor.
    pub fn new(error: String) -> Error {
        Error {
            error,
            request_id: None,
        }
    }
}

/*
 * Device Connect
 *
 * Internal API for managing persistent device connections. Intended for use by the web GUI.
 *
 * The version of the OpenAPI document: 1
 * Contact: support@mender.io
 */

#![allow(clippy::too_many_arguments)]

pub mod models;

/// Title of the API document.
pub const API_TITLE: &str = "Device Connect";

/// Version of the API document the models were written against.
pub const API_VERSION: &str = "1";

/// Default location of the internal API.
pub const BASE_PATH: &str = "http://localhost/api/internal/v1/deviceconnect";

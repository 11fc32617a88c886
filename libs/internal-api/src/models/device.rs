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

/// Device : Device to provision for a tenant.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Device ID.
    #[serde(rename = "device_id")]
    pub device_id: String,
}

impl Device {
    /// Device to provision for a tenant.
    pub fn new(device_id: String) -> Device {
        Device { device_id }
    }
}

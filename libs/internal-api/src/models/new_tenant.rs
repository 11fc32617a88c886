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

/// NewTenant : New tenant descriptor.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTenant {
    /// ID of new tenant.
    #[serde(rename = "tenant_id")]
    pub tenant_id: String,
}

impl NewTenant {
    /// New tenant descriptor.
    pub fn new(tenant_id: String) -> NewTenant {
        NewTenant { tenant_id }
    }
}

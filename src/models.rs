use serde::{Deserialize, Serialize};

use crate::model::role::Role;

/// Session token claims, shared by the dashboard login and the backend's
/// bearer check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
    pub jti: String,
}

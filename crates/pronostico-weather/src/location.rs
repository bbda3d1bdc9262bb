//! Location source.
//!
//! Device positioning is not reachable from this build, so the position
//! comes from configuration. The interface keeps the permission-then-query
//! shape of a platform location service, and a missing configuration is
//! reported the same way a refused permission prompt would be.

use crate::error::LocationError;

/// Geographic position reported by the location source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of the location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Ask for permission to read the position.
pub async fn request_permission(configured: Option<Position>) -> Permission {
    if configured.is_some() {
        Permission::Granted
    } else {
        Permission::Denied
    }
}

/// Current position of the device.
pub async fn current_position(configured: Option<Position>) -> Result<Position, LocationError> {
    match configured {
        Some(position) => {
            tracing::info!(
                "Using configured position {:.4}, {:.4}",
                position.latitude,
                position.longitude
            );
            Ok(position)
        }
        None => Err(LocationError::PermissionDenied),
    }
}

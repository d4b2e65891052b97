//! Device location state machine.
//!
//! Wraps the platform geolocation capability as observable state:
//! `NotDetermined → Requesting → {WhenInUse/Always, Denied/Restricted}`,
//! then `location_updated` fixes stream in last-fix-wins order while
//! updates are running. The provider is the sole mutator of its own state;
//! everything else reads it through the accessors.

use gurume_core::Coordinate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Permission was denied or restricted by the platform. Terminal; the
    /// provider never re-requests on its own.
    #[error("location permission denied or restricted")]
    NotAuthorized,

    /// The platform reported a failure while updating. Updates halt until
    /// explicitly restarted.
    #[error("location update failed: {0}")]
    UpdateFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Requesting,
    WhenInUse,
    Always,
    Denied,
    Restricted,
}

impl AuthorizationStatus {
    #[must_use]
    pub fn is_authorized(self) -> bool {
        matches!(self, AuthorizationStatus::WhenInUse | AuthorizationStatus::Always)
    }
}

/// Observable location state fed by platform callbacks.
#[derive(Debug)]
pub struct LocationProvider {
    status: AuthorizationStatus,
    coordinate: Option<Coordinate>,
    last_error: Option<LocationError>,
    updating: bool,
}

impl Default for LocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: AuthorizationStatus::NotDetermined,
            coordinate: None,
            last_error: None,
            updating: false,
        }
    }

    /// Asks the platform for when-in-use permission.
    ///
    /// Only meaningful before the first determination; denial is terminal
    /// and is not re-requested.
    pub fn request_permission(&mut self) {
        if self.status == AuthorizationStatus::NotDetermined {
            self.status = AuthorizationStatus::Requesting;
        }
    }

    /// Platform callback: the authorization status changed.
    ///
    /// Grants start updates immediately; denial or restriction stops them
    /// and records [`LocationError::NotAuthorized`].
    pub fn authorization_changed(&mut self, status: AuthorizationStatus) {
        self.status = status;
        self.last_error = None;

        if status.is_authorized() {
            self.updating = true;
        } else {
            self.updating = false;
            if matches!(
                status,
                AuthorizationStatus::Denied | AuthorizationStatus::Restricted
            ) {
                self.last_error = Some(LocationError::NotAuthorized);
            }
        }
    }

    /// Platform callback: a new fix arrived. Last fix wins; no history.
    ///
    /// Ignored unless authorized with updates running.
    pub fn location_updated(&mut self, coordinate: Coordinate) {
        if self.status.is_authorized() && self.updating {
            self.coordinate = Some(coordinate);
        }
    }

    /// Platform callback: updating failed. Records the error and halts
    /// updates until [`LocationProvider::start_updates`] is called again.
    pub fn update_failed(&mut self, reason: impl Into<String>) {
        self.last_error = Some(LocationError::UpdateFailed(reason.into()));
        self.updating = false;
    }

    /// Resumes updates; a no-op unless authorized.
    pub fn start_updates(&mut self) {
        if self.status.is_authorized() {
            self.updating = true;
            self.last_error = None;
        }
    }

    pub fn stop_updates(&mut self) {
        self.updating = false;
    }

    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    #[must_use]
    pub fn status(&self) -> AuthorizationStatus {
        self.status
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&LocationError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.status.is_authorized()
    }
}

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::platform::Platform;

pub const POSITION_TIMEOUT: Duration = Duration::from_secs(10);
pub const POSITION_MAXIMUM_AGE: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached position a provider may hand back.
    pub maximum_age: Duration,
}

impl PositionOptions {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            enable_high_accuracy: platform.wants_high_accuracy(),
            timeout: POSITION_TIMEOUT,
            maximum_age: POSITION_MAXIMUM_AGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Zero is how a missing fix shows up, so it is treated as absent.
    pub fn is_usable(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude != 0.0
            && self.longitude != 0.0
    }

    /// `"<lat>,<lng>"`
    pub fn to_location_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub coords: Coordinates,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("timed out waiting for position")]
    Timeout,
}

/// Source of the device's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self, options: &PositionOptions) -> Result<Position, LocationError>;
}

/// Always reports the same coordinates. Used when the caller already knows
/// where it is.
#[derive(Clone, Copy, Debug)]
pub struct StaticLocationProvider {
    coords: Coordinates,
}

impl StaticLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Position, LocationError> {
        Ok(Position {
            coords: self.coords,
            timestamp: Utc::now(),
        })
    }
}

/// Fallback for hosts with no positioning hardware.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableLocationProvider;

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Position, LocationError> {
        Err(LocationError::PositionUnavailable(
            "no location provider configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_platform() {
        let android = PositionOptions::for_platform(Platform::Android);
        assert!(android.enable_high_accuracy);
        assert_eq!(android.timeout, Duration::from_secs(10));
        assert_eq!(android.maximum_age, Duration::from_secs(1));

        let ios = PositionOptions::for_platform(Platform::Ios);
        assert!(!ios.enable_high_accuracy);
    }

    #[test]
    fn zero_or_non_finite_coordinates_are_unusable() {
        let usable = |latitude, longitude| Coordinates { latitude, longitude }.is_usable();

        assert!(usable(40.7128, -74.006));
        assert!(!usable(0.0, -74.006));
        assert!(!usable(40.7128, 0.0));
        assert!(!usable(f64::NAN, 1.0));
        assert!(!usable(1.0, f64::INFINITY));
    }

    #[test]
    fn location_param_joins_with_comma() {
        let coords = Coordinates {
            latitude: 40.7128,
            longitude: -74.006,
        };

        assert_eq!(coords.to_location_param(), "40.7128,-74.006");
    }

    #[tokio::test]
    async fn static_provider_returns_fixed_coordinates() {
        let provider = StaticLocationProvider::new(1.5, 2.5);

        let position = provider
            .current_position(&PositionOptions::for_platform(Platform::Other))
            .await
            .unwrap();

        assert_eq!(position.coords.latitude, 1.5);
        assert_eq!(position.coords.longitude, 2.5);
    }

    #[tokio::test]
    async fn unavailable_provider_fails() {
        let result = UnavailableLocationProvider
            .current_position(&PositionOptions::for_platform(Platform::Other))
            .await;

        assert!(matches!(result, Err(LocationError::PositionUnavailable(_))));
    }
}

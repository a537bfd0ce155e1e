//! Core data types: stored items, proximity queries, and their validation.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::error::{ProxibenchError, Result};

/// A stored geographic point.
///
/// Identity is `id`; coordinates are degrees with lat ∈ [-90, 90] and
/// lng ∈ [-180, 180]. Items are created by seeding and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    /// Optional human-readable label, e.g. a seed tag or place name.
    #[serde(default)]
    pub label: Option<String>,
}

impl Item {
    pub fn new(id: i64, lat: f64, lng: f64) -> Self {
        Self {
            id,
            lat,
            lng,
            label: None,
        }
    }

    pub fn with_label(id: i64, lat: f64, lng: f64, label: impl Into<String>) -> Self {
        Self {
            id,
            lat,
            lng,
            label: Some(label.into()),
        }
    }

    /// The item's position as a `geo::Point` (x = lng, y = lat).
    pub fn position(&self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

/// A circular proximity query: all items within `radius_meters` of `center`.
///
/// Transient value, validated before any store round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Query center (x = lng, y = lat).
    pub center: Point,
    pub radius_meters: f64,
}

impl Query {
    pub fn new(center: Point, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    /// Convenience constructor taking latitude first, matching how
    /// coordinates are usually written.
    pub fn from_lat_lng(lat: f64, lng: f64, radius_meters: f64) -> Self {
        Self::new(Point::new(lng, lat), radius_meters)
    }

    /// Reject malformed queries before any trial runs.
    ///
    /// The radius must be finite and positive; the center must be finite and
    /// within the lat/lng domain.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(ProxibenchError::InvalidInput(format!(
                "radius must be positive and finite, got {}",
                self.radius_meters
            )));
        }

        let (lng, lat) = (self.center.x(), self.center.y());
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ProxibenchError::InvalidInput(
                "query center coordinates must be finite".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ProxibenchError::InvalidInput(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ProxibenchError::InvalidInput(format!(
                "longitude {} out of range [-180, 180]",
                lng
            )));
        }

        Ok(())
    }
}

#![forbid(unsafe_code)]

//! Row metadata: places and locations.

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarLocation {
    latitude: f64,
    longitude: f64,
}

impl CarLocation {
    /// Create a location from latitude and longitude in degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A location the host can pin on its map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    location: CarLocation,
}

impl Place {
    /// Create a place at the given location with the host's default marker.
    #[must_use]
    pub fn new(location: CarLocation) -> Self {
        Self { location }
    }

    /// The place's location.
    #[must_use]
    pub fn location(&self) -> CarLocation {
        self.location
    }
}

/// Extra data attached to a row.
///
/// Place metadata is the only kind the host currently renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Metadata {
    Place(Place),
}

impl Metadata {
    /// Create place metadata from a location.
    #[must_use]
    pub fn place(location: CarLocation) -> Self {
        Self::Place(Place::new(location))
    }

    /// The place, if this is place metadata.
    #[must_use]
    pub fn as_place(&self) -> Option<&Place> {
        match self {
            Self::Place(place) => Some(place),
        }
    }
}

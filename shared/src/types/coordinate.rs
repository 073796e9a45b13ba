//! Geographic coordinate value and its persisted record.

use serde::{Deserialize, Serialize};

/// Coordinate for location-based features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Calculate distance to another coordinate (in meters)
    /// Using Haversine formula
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

/// Persisted coordinate record round-tripping through [`Coordinate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateData {
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinateData {
    /// Creates a record from raw components
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The coordinate value this record persists
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl From<Coordinate> for CoordinateData {
    fn from(location: Coordinate) -> Self {
        Self::new(location.latitude, location.longitude)
    }
}

impl From<CoordinateData> for Coordinate {
    fn from(data: CoordinateData) -> Self {
        data.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_distance() {
        // San Francisco to Los Angeles (approximately 559 km)
        let sf = Coordinate::new(37.7749, -122.4194);
        let la = Coordinate::new(34.0522, -118.2437);

        let distance_km = sf.distance_to(&la) / 1000.0;
        assert!((distance_km - 559.0).abs() < 10.0);
    }

    #[test]
    fn test_record_round_trip() {
        let data = CoordinateData::new(55.7558, 37.6173);
        let location = data.location();
        let back = CoordinateData::from(location);

        assert!((back.latitude - data.latitude).abs() < 1e-9);
        assert!((back.longitude - data.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_serde_round_trip() {
        let data = CoordinateData::new(-33.8688, 151.2093);
        let json = serde_json::to_string(&data).unwrap();
        let decoded: CoordinateData = serde_json::from_str(&json).unwrap();

        assert!((decoded.latitude - data.latitude).abs() < 1e-9);
        assert!((decoded.longitude - data.longitude).abs() < 1e-9);
    }
}

use crate::error::DirectoryError;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, DirectoryError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DirectoryError::InvalidLocation(format!("latitude {} out of range", lat)));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(DirectoryError::InvalidLocation(format!("longitude {} out of range", lng)));
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Two decimal places, as shown to clients.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

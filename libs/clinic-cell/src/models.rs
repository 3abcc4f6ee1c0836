use serde::{Deserialize, Serialize};

use shared_models::Clinic;

/// Ordering applied to a clinic listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Nearest first. Requires a user location.
    Distance,
    /// Highest rating first, ties broken by review count.
    Rating,
    /// Promoted clinics first, then priority level, then rating.
    Promoted,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicListQuery {
    pub governorate: Option<String>,
    pub user_lat: Option<f64>,
    pub user_lng: Option<f64>,
    pub radius_km: Option<f64>,
    pub mode: Option<RankingMode>,
    pub promoted_first: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: Option<f64>,
    pub limit: Option<usize>,
}

/// A clinic as returned by directory listings, with the distance from the
/// caller when a location was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicListing {
    #[serde(flatten)]
    pub clinic: Clinic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

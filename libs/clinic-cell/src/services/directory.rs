use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{ClinicDirectory, ClinicStore};
use shared_models::{BookingSettingsUpdate, Clinic};

use crate::error::DirectoryError;
use crate::models::{ClinicListQuery, ClinicListing, NearbyQuery, RankingMode};
use crate::services::geo::{round_km, GeoPoint};

const DEFAULT_LIMIT: usize = 10;

pub struct DirectoryService {
    store: Arc<dyn ClinicStore>,
    config: Arc<AppConfig>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn ClinicStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// Active clinics, optionally narrowed by governorate and radius, ranked by `mode`.
    ///
    /// Without a mode the listing is ranked by distance when a location is
    /// given and by promotion otherwise.
    pub async fn list_clinics(&self, query: ClinicListQuery) -> Result<Vec<ClinicListing>, DirectoryError> {
        debug!("Listing clinics with filters: {:?}", query);

        let origin = match (query.user_lat, query.user_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)?),
            (None, None) => None,
            _ => {
                return Err(DirectoryError::InvalidLocation(
                    "user_lat and user_lng must be given together".to_string(),
                ))
            }
        };

        let mode = query.mode.unwrap_or(if origin.is_some() {
            RankingMode::Distance
        } else {
            RankingMode::Promoted
        });
        if mode == RankingMode::Distance && origin.is_none() {
            return Err(DirectoryError::InvalidLocation(
                "distance ranking requires user_lat and user_lng".to_string(),
            ));
        }

        let radius = query.radius_km.map(validate_radius).transpose()?;

        let mut listings: Vec<ClinicListing> = self
            .active_clinics()
            .await?
            .into_iter()
            .filter(|clinic| match &query.governorate {
                Some(governorate) => clinic.governorate.eq_ignore_ascii_case(governorate.trim()),
                None => true,
            })
            .map(|clinic| with_distance(clinic, origin.as_ref()))
            .filter(|listing| within_radius(listing, radius))
            .collect();

        rank(&mut listings, mode, query.promoted_first.unwrap_or(false));
        listings.truncate(self.effective_limit(query.limit));

        Ok(listings)
    }

    /// Active clinics within the radius around `(lat, lng)`, nearest first.
    pub async fn nearby_clinics(&self, query: NearbyQuery) -> Result<Vec<ClinicListing>, DirectoryError> {
        debug!("Finding clinics near {}, {}", query.lat, query.lng);

        let origin = GeoPoint::new(query.lat, query.lng)?;
        let radius = validate_radius(query.radius_km.unwrap_or(self.config.nearby_default_radius_km))?;

        let mut listings: Vec<ClinicListing> = self
            .active_clinics()
            .await?
            .into_iter()
            .map(|clinic| with_distance(clinic, Some(&origin)))
            .filter(|listing| within_radius(listing, Some(radius)))
            .collect();

        rank(&mut listings, RankingMode::Distance, false);
        listings.truncate(self.effective_limit(query.limit));

        debug!("Found {} clinics within {} km", listings.len(), radius);
        Ok(listings)
    }

    pub async fn get_clinic(&self, clinic_id: Uuid) -> Result<Clinic, DirectoryError> {
        debug!("Fetching clinic {}", clinic_id);

        self.store
            .get_clinic(clinic_id)
            .await?
            .ok_or(DirectoryError::ClinicNotFound(clinic_id))
    }

    /// Active clinics in a governorate (case-insensitive), best rated first.
    pub async fn clinics_by_governorate(&self, governorate: &str) -> Result<Vec<Clinic>, DirectoryError> {
        debug!("Listing clinics in governorate {}", governorate);

        let wanted = governorate.trim();
        let mut clinics: Vec<Clinic> = self
            .active_clinics()
            .await?
            .into_iter()
            .filter(|clinic| clinic.governorate.eq_ignore_ascii_case(wanted))
            .collect();
        clinics.sort_by(by_rating);

        Ok(clinics)
    }

    /// Applies a partial booking-settings update after validating it.
    pub async fn update_booking_settings(
        &self,
        clinic_id: Uuid,
        settings: BookingSettingsUpdate,
    ) -> Result<Clinic, DirectoryError> {
        debug!("Updating booking settings for clinic {}", clinic_id);

        validate_settings(&settings)?;

        let clinic = self
            .store
            .update_clinic_booking_settings(clinic_id, settings)
            .await?
            .ok_or(DirectoryError::ClinicNotFound(clinic_id))?;

        info!(
            "Booking settings updated for clinic {} (online booking {})",
            clinic_id,
            if clinic.online_booking_enabled { "enabled" } else { "disabled" }
        );
        Ok(clinic)
    }

    async fn active_clinics(&self) -> Result<Vec<Clinic>, DirectoryError> {
        let clinics = self.store.list_clinics().await?;
        Ok(clinics.into_iter().filter(|c| c.is_active).collect())
    }

    fn effective_limit(&self, requested: Option<usize>) -> usize {
        let max = self.config.nearby_max_results.max(1);
        requested.unwrap_or(DEFAULT_LIMIT).clamp(1, max)
    }
}

fn validate_radius(radius_km: f64) -> Result<f64, DirectoryError> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(radius_km)
    } else {
        Err(DirectoryError::InvalidLocation(format!(
            "radius_km must be positive, got {}",
            radius_km
        )))
    }
}

fn with_distance(clinic: Clinic, origin: Option<&GeoPoint>) -> ClinicListing {
    let distance_km = origin.map(|origin| {
        round_km(origin.distance_km(&GeoPoint {
            lat: clinic.latitude,
            lng: clinic.longitude,
        }))
    });
    ClinicListing { clinic, distance_km }
}

fn within_radius(listing: &ClinicListing, radius_km: Option<f64>) -> bool {
    match (listing.distance_km, radius_km) {
        (Some(distance), Some(radius)) => distance <= radius,
        _ => true,
    }
}

fn by_rating(a: &Clinic, b: &Clinic) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| b.review_count.cmp(&a.review_count))
}

fn by_distance(a: &ClinicListing, b: &ClinicListing) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn rank(listings: &mut [ClinicListing], mode: RankingMode, promoted_first: bool) {
    match mode {
        RankingMode::Distance => listings.sort_by(|a, b| {
            let promotion = if promoted_first {
                b.clinic.is_promoted.cmp(&a.clinic.is_promoted)
            } else {
                Ordering::Equal
            };
            promotion.then_with(|| by_distance(a, b))
        }),
        RankingMode::Rating => listings.sort_by(|a, b| by_rating(&a.clinic, &b.clinic)),
        RankingMode::Promoted => listings.sort_by(|a, b| {
            b.clinic
                .is_promoted
                .cmp(&a.clinic.is_promoted)
                .then_with(|| b.clinic.priority_level.cmp(&a.clinic.priority_level))
                .then_with(|| by_rating(&a.clinic, &b.clinic))
        }),
    }
}

/// A slot can be at most one whole day long.
const MAX_SLOT_DURATION_MINUTES: u32 = 24 * 60;

fn validate_settings(settings: &BookingSettingsUpdate) -> Result<(), DirectoryError> {
    if settings.is_empty() {
        return Err(DirectoryError::InvalidSettings("no booking settings supplied".to_string()));
    }

    if let Some(duration) = settings.time_slot_duration {
        if duration == 0 || duration > MAX_SLOT_DURATION_MINUTES {
            return Err(DirectoryError::InvalidSettings(format!(
                "time_slot_duration must be between 1 and {} minutes",
                MAX_SLOT_DURATION_MINUTES
            )));
        }
    }

    if let Some(hours) = &settings.working_hours {
        for (day, schedule) in hours {
            if schedule.is_open && schedule.open > schedule.close {
                return Err(DirectoryError::InvalidSettings(format!(
                    "{} opens at {} after closing at {}",
                    day, schedule.open, schedule.close
                )));
            }
        }
    }

    if let Some(breaks) = &settings.break_times {
        if let Some(bad) = breaks.iter().find(|b| b.start >= b.end) {
            return Err(DirectoryError::InvalidSettings(format!(
                "break {}-{} must end after it starts",
                bad.start, bad.end
            )));
        }
    }

    Ok(())
}

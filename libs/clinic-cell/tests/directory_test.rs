use std::sync::Arc;

use assert_matches::assert_matches;
use clinic_cell::{ClinicListQuery, DirectoryError, DirectoryService, NearbyQuery, RankingMode};
use shared_database::InMemoryStore;
use shared_models::{BookingSettingsUpdate, DayOfWeek, DaySchedule, WorkingHours};
use shared_utils::test_utils::{clock, store_with, TestClinic, TestConfig};
use uuid::Uuid;

// Central Baghdad.
const USER_LAT: f64 = 33.3152;
const USER_LNG: f64 = 44.3661;

fn service(store: Arc<InMemoryStore>) -> DirectoryService {
    DirectoryService::new(store, TestConfig::default().to_arc())
}

fn directory_store() -> Arc<InMemoryStore> {
    store_with(vec![
        TestClinic::new()
            .name("Karrada Smile")
            .location(33.3050, 44.4290)
            .rating(4.8, 120)
            .promoted(2)
            .build(),
        TestClinic::new()
            .name("Mansour Dental")
            .location(33.3250, 44.3450)
            .rating(4.6, 300)
            .build(),
        TestClinic::new()
            .name("Basra Care")
            .governorate("Basra")
            .location(30.5085, 47.7804)
            .rating(4.9, 40)
            .build(),
        TestClinic::new()
            .name("Closed Down")
            .location(33.3152, 44.3661)
            .inactive()
            .build(),
    ])
}

fn names(listings: &[clinic_cell::ClinicListing]) -> Vec<&str> {
    listings.iter().map(|l| l.clinic.name.as_str()).collect()
}

#[tokio::test]
async fn test_list_hides_inactive_and_ranks_promoted_first() {
    let listings = service(directory_store())
        .list_clinics(ClinicListQuery::default())
        .await
        .unwrap();

    assert_eq!(names(&listings), vec!["Karrada Smile", "Basra Care", "Mansour Dental"]);
    assert!(listings.iter().all(|l| l.distance_km.is_none()));
}

#[tokio::test]
async fn test_list_by_rating() {
    let listings = service(directory_store())
        .list_clinics(ClinicListQuery {
            mode: Some(RankingMode::Rating),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(names(&listings), vec!["Basra Care", "Karrada Smile", "Mansour Dental"]);
}

#[tokio::test]
async fn test_list_with_location_ranks_by_distance_within_radius() {
    let listings = service(directory_store())
        .list_clinics(ClinicListQuery {
            user_lat: Some(USER_LAT),
            user_lng: Some(USER_LNG),
            radius_km: Some(20.0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(names(&listings), vec!["Mansour Dental", "Karrada Smile"]);
    let nearest = listings[0].distance_km.unwrap();
    assert!((2.0..2.5).contains(&nearest));
}

#[tokio::test]
async fn test_distance_mode_with_promoted_first() {
    let listings = service(directory_store())
        .list_clinics(ClinicListQuery {
            user_lat: Some(USER_LAT),
            user_lng: Some(USER_LNG),
            mode: Some(RankingMode::Distance),
            promoted_first: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(names(&listings), vec!["Karrada Smile", "Mansour Dental", "Basra Care"]);
}

#[tokio::test]
async fn test_list_filters_governorate_case_insensitively() {
    let listings = service(directory_store())
        .list_clinics(ClinicListQuery {
            governorate: Some("basra".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(names(&listings), vec!["Basra Care"]);
}

#[tokio::test]
async fn test_list_respects_limit() {
    let listings = service(directory_store())
        .list_clinics(ClinicListQuery {
            limit: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(listings.len(), 1);
}

#[tokio::test]
async fn test_list_rejects_half_a_location() {
    let result = service(directory_store())
        .list_clinics(ClinicListQuery {
            user_lat: Some(USER_LAT),
            ..Default::default()
        })
        .await;
    assert_matches!(result, Err(DirectoryError::InvalidLocation(_)));

    let result = service(directory_store())
        .list_clinics(ClinicListQuery {
            mode: Some(RankingMode::Distance),
            ..Default::default()
        })
        .await;
    assert_matches!(result, Err(DirectoryError::InvalidLocation(_)));
}

#[tokio::test]
async fn test_nearby_uses_default_radius() {
    let listings = service(directory_store())
        .nearby_clinics(NearbyQuery {
            lat: USER_LAT,
            lng: USER_LNG,
            radius_km: None,
            limit: None,
        })
        .await
        .unwrap();

    // Basra is roughly 450 km away, outside the 50 km default.
    assert_eq!(names(&listings), vec!["Mansour Dental", "Karrada Smile"]);
}

#[tokio::test]
async fn test_nearby_rejects_non_positive_radius() {
    let result = service(directory_store())
        .nearby_clinics(NearbyQuery {
            lat: USER_LAT,
            lng: USER_LNG,
            radius_km: Some(0.0),
            limit: None,
        })
        .await;

    assert_matches!(result, Err(DirectoryError::InvalidLocation(_)));
}

#[tokio::test]
async fn test_get_missing_clinic() {
    let missing = Uuid::new_v4();
    let result = service(directory_store()).get_clinic(missing).await;
    assert_matches!(result, Err(DirectoryError::ClinicNotFound(id)) if id == missing);
}

#[tokio::test]
async fn test_by_governorate_sorted_by_rating() {
    let clinics = service(directory_store())
        .clinics_by_governorate("Baghdad")
        .await
        .unwrap();

    let names: Vec<_> = clinics.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Karrada Smile", "Mansour Dental"]);
}

#[tokio::test]
async fn test_update_booking_settings_is_partial() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);

    let updated = service(store)
        .update_booking_settings(
            clinic.id,
            BookingSettingsUpdate {
                time_slot_duration: Some(20),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.time_slot_duration, 20);
    assert_eq!(updated.break_times, clinic.break_times);
    assert_eq!(updated.working_hours, clinic.working_hours);
    assert!(updated.online_booking_enabled);
}

#[tokio::test]
async fn test_update_booking_settings_replaces_hours() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);
    let mut hours = WorkingHours::new();
    hours.insert(DayOfWeek::Sunday, DaySchedule::open(clock("10:00"), clock("16:00")));

    let updated = service(store.clone())
        .update_booking_settings(
            clinic.id,
            BookingSettingsUpdate {
                working_hours: Some(hours.clone()),
                online_booking_enabled: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.working_hours, hours);
    assert!(!updated.online_booking_enabled);

    let fetched = service(store).get_clinic(clinic.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_booking_settings_for_missing_clinic() {
    let result = service(store_with(vec![]))
        .update_booking_settings(
            Uuid::new_v4(),
            BookingSettingsUpdate {
                online_booking_enabled: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert_matches!(result, Err(DirectoryError::ClinicNotFound(_)));
}

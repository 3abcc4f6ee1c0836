//! Demo records loaded when `SEED_DEMO_DATA` is on.

use chrono::NaiveDate;
use uuid::Uuid;

use shared_models::finance::{
    FinancialRecord, PartyType, PaymentMethod, RecordStatus, RecordType, RelatedParty,
};
use shared_models::lab::{
    LabOrder, LabOrderStatus, LabOrderType, LabSpecifications, Laboratory, OrderPriority,
    PaymentStatus, PriceRange,
};
use shared_models::inventory::{InventoryCategory, InventoryItem, StockStatus};
use shared_models::plan::{PhaseStatus, PlanPhase, PlanStatus, TreatmentPlan};
use shared_models::staff::{StaffMember, StaffRole, StaffStatus};
use shared_models::{
    Appointment, AppointmentSource, AppointmentStatus, BreakTime, Clinic, ClockTime, DayOfWeek,
    DaySchedule, Patient, PatientPriority, PatientStatus, Treatment, TreatmentStatus, WorkingHours,
};

use crate::memory::StoreSeed;

pub const BAGHDAD_DENTAL_CENTER_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0001_4000_8000_0000_0000_0001);
pub const AL_MANSOUR_CLINIC_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0001_4000_8000_0000_0000_0002);

pub const PATIENT_AHMED_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0002_4000_8000_0000_0000_0001);
pub const PATIENT_FATIMA_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0002_4000_8000_0000_0000_0002);
pub const PRECISION_LAB_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0003_4000_8000_0000_0000_0001);
pub const GOLDEN_LAB_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0003_4000_8000_0000_0000_0002);
pub const CROWN_PLAN_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0004_4000_8000_0000_0000_0001);
pub const CROWN_ORDER_ID: Uuid = Uuid::from_u128(0x5f1c_0a7e_0005_4000_8000_0000_0000_0001);

fn time(hour: u32, minute: u32) -> ClockTime {
    ClockTime::new(hour, minute).unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Sunday–Thursday on `weekday_hours`, Friday closed, Saturday on `saturday_hours`.
pub fn week_schedule(weekday_hours: (ClockTime, ClockTime), saturday_hours: (ClockTime, ClockTime)) -> WorkingHours {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            let schedule = match day {
                DayOfWeek::Friday => DaySchedule::closed(),
                DayOfWeek::Saturday => DaySchedule::open(saturday_hours.0, saturday_hours.1),
                _ => DaySchedule::open(weekday_hours.0, weekday_hours.1),
            };
            (day, schedule)
        })
        .collect()
}

pub fn demo_clinics() -> Vec<Clinic> {
    vec![
        Clinic {
            id: BAGHDAD_DENTAL_CENTER_ID,
            name: "Baghdad Dental Center".to_string(),
            name_ar: "مركز بغداد لطب الأسنان".to_string(),
            address: "Karrada, Baghdad".to_string(),
            city: "Baghdad".to_string(),
            governorate: "Baghdad".to_string(),
            phone: "+964 770 123 4567".to_string(),
            email: Some("info@baghdaddental.iq".to_string()),
            latitude: 33.3050,
            longitude: 44.4290,
            rating: 4.8,
            review_count: 126,
            is_promoted: true,
            priority_level: 2,
            is_active: true,
            is_verified: true,
            doctor_id: "doc1".to_string(),
            doctor_name: "Dr. Sara Ahmed".to_string(),
            specializations: vec![
                "Endodontics".to_string(),
                "Teeth Cleaning".to_string(),
                "Cosmetic Fillings".to_string(),
            ],
            online_booking_enabled: true,
            booking_link: format!("/simplified-booking/{}", BAGHDAD_DENTAL_CENTER_ID),
            working_hours: week_schedule((time(9, 0), time(18, 0)), (time(10, 0), time(14, 0))),
            time_slot_duration: 30,
            break_times: vec![BreakTime { start: time(12, 0), end: time(13, 0) }],
            accepted_treatments: vec![
                "Teeth Cleaning".to_string(),
                "Dental Filling".to_string(),
                "General Checkup".to_string(),
            ],
        },
        Clinic {
            id: AL_MANSOUR_CLINIC_ID,
            name: "Al-Mansour Dental Clinic".to_string(),
            name_ar: "عيادة المنصور لطب الأسنان".to_string(),
            address: "Al-Mansour, Baghdad".to_string(),
            city: "Baghdad".to_string(),
            governorate: "Baghdad".to_string(),
            phone: "+964 750 222 3333".to_string(),
            email: Some("info@mansour-dental.iq".to_string()),
            latitude: 33.3250,
            longitude: 44.3450,
            rating: 4.6,
            review_count: 84,
            is_promoted: false,
            priority_level: 0,
            is_active: true,
            is_verified: true,
            doctor_id: "doc2".to_string(),
            doctor_name: "Dr. Ahmed Mohammed".to_string(),
            specializations: vec!["Oral Surgery".to_string(), "Dental Implants".to_string()],
            online_booking_enabled: true,
            booking_link: format!("/simplified-booking/{}", AL_MANSOUR_CLINIC_ID),
            working_hours: week_schedule((time(8, 0), time(17, 0)), (time(9, 0), time(13, 0))),
            time_slot_duration: 45,
            break_times: vec![BreakTime { start: time(11, 30), end: time(12, 30) }],
            accepted_treatments: vec![
                "Oral Surgery".to_string(),
                "Dental Implants".to_string(),
                "Tooth Extraction".to_string(),
            ],
        },
    ]
}

pub fn demo_treatments() -> Vec<Treatment> {
    vec![
        Treatment {
            id: Uuid::from_u128(0x5f1c_0a7e_0006_4000_8000_0000_0000_0001),
            name: "Teeth Cleaning".to_string(),
            description: "Full cleaning and tartar removal".to_string(),
            duration: 45,
            price: 50_000,
            category: "preventive".to_string(),
            status: TreatmentStatus::Active,
        },
        Treatment {
            id: Uuid::from_u128(0x5f1c_0a7e_0006_4000_8000_0000_0000_0002),
            name: "Dental Filling".to_string(),
            description: "Composite (white) filling".to_string(),
            duration: 60,
            price: 75_000,
            category: "restorative".to_string(),
            status: TreatmentStatus::Active,
        },
    ]
}

fn demo_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: PATIENT_AHMED_ID,
            name: "Ahmed Mohammed Al-Taie".to_string(),
            age: 28,
            phone: "+964 770 123 4567".to_string(),
            email: "ahmed.taie@email.com".to_string(),
            address: "Karrada, Baghdad".to_string(),
            last_visit: date(2024, 1, 15),
            next_appointment: Some(date(2024, 1, 22)),
            treatment: "Teeth Cleaning".to_string(),
            status: PatientStatus::Active,
            priority: PatientPriority::Normal,
            total_visits: 8,
            total_spent: 750_000,
            notes: "Regular patient, no known allergies".to_string(),
            medical_history: vec!["Caries".to_string(), "Mild gingivitis".to_string()],
        },
        Patient {
            id: PATIENT_FATIMA_ID,
            name: "Fatima Ali Al-Saad".to_string(),
            age: 35,
            phone: "+964 750 987 6543".to_string(),
            email: "fatima.saad@email.com".to_string(),
            address: "Al-Mansour, Baghdad".to_string(),
            last_visit: date(2024, 1, 14),
            next_appointment: Some(date(2024, 1, 20)),
            treatment: "Molar Filling".to_string(),
            status: PatientStatus::InTreatment,
            priority: PatientPriority::High,
            total_visits: 12,
            total_spent: 1_250_000,
            notes: "Needs periodic follow-up, penicillin allergy".to_string(),
            medical_history: vec![
                "Advanced caries".to_string(),
                "Previous fillings".to_string(),
                "Orthodontics".to_string(),
            ],
        },
    ]
}

fn demo_appointments() -> Vec<Appointment> {
    vec![Appointment {
        id: Uuid::from_u128(0x5f1c_0a7e_0007_4000_8000_0000_0000_0001),
        clinic_id: Some(BAGHDAD_DENTAL_CENTER_ID),
        patient_id: PATIENT_AHMED_ID,
        patient_name: "Ahmed Mohammed Al-Taie".to_string(),
        date: date(2024, 1, 22),
        time: time(10, 0),
        duration: 60,
        treatment: "Teeth Cleaning".to_string(),
        doctor_id: "doc1".to_string(),
        doctor_name: "Dr. Sara Ahmed".to_string(),
        status: AppointmentStatus::Scheduled,
        source: AppointmentSource::Manual,
        notes: None,
        reminder: true,
        patient_phone: None,
        patient_email: None,
    }]
}

fn demo_laboratories() -> Vec<Laboratory> {
    vec![
        Laboratory {
            id: PRECISION_LAB_ID,
            name: "Precision Dental Lab".to_string(),
            address: "Jadriya Street, Baghdad".to_string(),
            phone: "+964 770 111 3333".to_string(),
            email: Some("info@precision-lab.com".to_string()),
            specialties: vec![
                "Ceramic restorations".to_string(),
                "Dentures".to_string(),
                "Zirconia crowns".to_string(),
                "Orthodontics".to_string(),
            ],
            working_hours: "08:00-18:00".to_string(),
            is_active: true,
            average_delivery_time: 5,
            quality_rating: 4.8,
            price_range: PriceRange::Medium,
        },
        Laboratory {
            id: GOLDEN_LAB_ID,
            name: "Golden Excellence Lab".to_string(),
            address: "Karrada Street, Baghdad".to_string(),
            phone: "+964 750 222 4444".to_string(),
            email: Some("orders@golden-excellence.com".to_string()),
            specialties: vec![
                "Gold restorations".to_string(),
                "Porcelain crowns".to_string(),
                "Fixed bridges".to_string(),
            ],
            working_hours: "09:00-19:00".to_string(),
            is_active: true,
            average_delivery_time: 7,
            quality_rating: 4.9,
            price_range: PriceRange::High,
        },
    ]
}

fn demo_lab_orders() -> Vec<LabOrder> {
    vec![
        LabOrder {
            id: CROWN_ORDER_ID,
            patient_id: PATIENT_AHMED_ID,
            patient_name: "Ahmed Mohammed Al-Taie".to_string(),
            laboratory_id: PRECISION_LAB_ID,
            laboratory_name: "Precision Dental Lab".to_string(),
            treatment_plan_id: Some(CROWN_PLAN_ID),
            order_type: LabOrderType::Crown,
            description: "Ceramic crown, upper right molar".to_string(),
            specifications: LabSpecifications {
                material: Some("Zirconia ceramic".to_string()),
                color: Some("A2".to_string()),
                size: None,
                quantity: Some(1),
                special_instructions: Some("Match natural tooth shade".to_string()),
            },
            status: LabOrderStatus::InProgress,
            order_date: date(2024, 1, 18),
            expected_delivery_date: date(2024, 1, 23),
            actual_delivery_date: None,
            cost: 200_000,
            is_paid: false,
            payment_status: PaymentStatus::Pending,
            doctor_notes: None,
            lab_notes: None,
            priority: OrderPriority::Normal,
            follow_up_required: true,
            installation_appointment_id: None,
        },
        LabOrder {
            id: Uuid::from_u128(0x5f1c_0a7e_0005_4000_8000_0000_0000_0002),
            patient_id: PATIENT_FATIMA_ID,
            patient_name: "Fatima Ali Al-Saad".to_string(),
            laboratory_id: GOLDEN_LAB_ID,
            laboratory_name: "Golden Excellence Lab".to_string(),
            treatment_plan_id: None,
            order_type: LabOrderType::Prosthetics,
            description: "Partial upper denture".to_string(),
            specifications: LabSpecifications {
                material: Some("Reinforced acrylic".to_string()),
                color: Some("Natural".to_string()),
                size: None,
                quantity: Some(1),
                special_instructions: None,
            },
            status: LabOrderStatus::Ready,
            order_date: date(2024, 1, 12),
            expected_delivery_date: date(2024, 1, 19),
            actual_delivery_date: Some(date(2024, 1, 19)),
            cost: 350_000,
            is_paid: true,
            payment_status: PaymentStatus::Paid,
            doctor_notes: None,
            lab_notes: None,
            priority: OrderPriority::Normal,
            follow_up_required: true,
            installation_appointment_id: None,
        },
    ]
}

fn demo_treatment_plans() -> Vec<TreatmentPlan> {
    vec![TreatmentPlan {
        id: CROWN_PLAN_ID,
        patient_id: PATIENT_AHMED_ID,
        patient_name: "Ahmed Mohammed Al-Taie".to_string(),
        doctor_id: "doc1".to_string(),
        doctor_name: "Dr. Sara Ahmed".to_string(),
        title: "Posterior teeth treatment plan".to_string(),
        description: "Root canal and zirconia crown for the upper molar".to_string(),
        phases: vec![
            PlanPhase {
                id: Uuid::from_u128(0x5f1c_0a7e_0008_4000_8000_0000_0000_0001),
                title: "Root canal".to_string(),
                description: "Root canal treatment, upper right molar".to_string(),
                estimated_duration: 7,
                cost: 120_000,
                status: PhaseStatus::Completed,
                requires_lab: false,
                lab_order_id: None,
                appointments: vec![],
            },
            PlanPhase {
                id: Uuid::from_u128(0x5f1c_0a7e_0008_4000_8000_0000_0000_0002),
                title: "Crown preparation and fitting".to_string(),
                description: "Prepare tooth, take impression, fit zirconia crown".to_string(),
                estimated_duration: 14,
                cost: 200_000,
                status: PhaseStatus::InProgress,
                requires_lab: true,
                lab_order_id: Some(CROWN_ORDER_ID),
                appointments: vec![],
            },
        ],
        total_cost: 320_000,
        estimated_duration: 21,
        status: PlanStatus::InProgress,
        created_date: date(2024, 1, 15),
        approved_date: Some(date(2024, 1, 15)),
        completed_date: None,
        notes: None,
    }]
}

fn demo_financial_records() -> Vec<FinancialRecord> {
    vec![FinancialRecord {
        id: Uuid::from_u128(0x5f1c_0a7e_0009_4000_8000_0000_0000_0001),
        record_type: RecordType::Income,
        amount: 50_000,
        description: "Teeth cleaning".to_string(),
        category: "medical_services".to_string(),
        date: date(2024, 1, 15),
        related_to: Some(RelatedParty {
            party_type: PartyType::Patient,
            id: PATIENT_AHMED_ID,
            name: "Ahmed Mohammed Al-Taie".to_string(),
        }),
        payment_method: PaymentMethod::Cash,
        status: RecordStatus::Completed,
    }]
}

#[allow(clippy::too_many_arguments)]
fn staff_member(
    id: &str,
    name: &str,
    role: StaffRole,
    phone: &str,
    email: &str,
    specialization: &str,
    status: StaffStatus,
    permissions: &[&str],
) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        phone: phone.to_string(),
        email: email.to_string(),
        specialization: Some(specialization.to_string()),
        schedule: Default::default(),
        status,
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

fn demo_staff() -> Vec<StaffMember> {
    const CLINICAL: &[&str] = &["view_patients", "edit_patients", "manage_appointments"];
    vec![
        staff_member("doc1", "Dr. Sara Ahmed", StaffRole::Doctor, "+964 770 111 2222", "dr.sara@clinic.com", "Endodontics", StaffStatus::Active, CLINICAL),
        staff_member("doc2", "Dr. Ahmed Mohammed", StaffRole::Doctor, "+964 750 222 3333", "dr.ahmed@clinic.com", "Oral Surgery", StaffStatus::Active, CLINICAL),
        staff_member("nurse1", "Fatima Ali", StaffRole::Assistant, "+964 770 333 4444", "fatima.ali@clinic.com", "General Care", StaffStatus::Active, &["view_patients", "assist_treatment"]),
        staff_member("doc3", "Ali Hassan", StaffRole::Doctor, "+964 750 444 5555", "ali.hassan@clinic.com", "Orthodontics", StaffStatus::OnLeave, CLINICAL),
        staff_member("receptionist1", "Zainab Mahmoud", StaffRole::Receptionist, "+964 770 555 6666", "zainab.mahmoud@clinic.com", "Customer Service", StaffStatus::Active, &["view_patients", "manage_appointments"]),
        staff_member("assist1", "Mohammed Karim", StaffRole::Assistant, "+964 750 666 7777", "mohammed.karim@clinic.com", "Medical Imaging", StaffStatus::Active, &["view_patients", "manage_equipment"]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn stock_item(
    n: u128,
    name: &str,
    category: InventoryCategory,
    (current_stock, min_stock, max_stock): (u32, u32, u32),
    unit: &str,
    price: i64,
    supplier: &str,
    expiry_date: Option<NaiveDate>,
    status: StockStatus,
) -> InventoryItem {
    InventoryItem {
        id: Uuid::from_u128(0x5f1c_0a7e_000a_4000_8000_0000_0000_0000 + n),
        name: name.to_string(),
        category,
        current_stock,
        min_stock,
        max_stock,
        unit: unit.to_string(),
        price,
        supplier: Some(supplier.to_string()),
        expiry_date,
        status,
    }
}

fn demo_inventory() -> Vec<InventoryItem> {
    use InventoryCategory::*;
    use StockStatus::*;
    vec![
        stock_item(1, "Local anaesthetic", Medicine, (5, 10, 50), "ampoule", 25_000, "United Pharmaceuticals", Some(date(2024, 6, 15)), LowStock),
        stock_item(2, "Medical gloves", Supplies, (150, 100, 500), "box", 15_000, "Medical Supplies Co.", Some(date(2025, 12, 31)), InStock),
        stock_item(3, "Dental examination mirror", Equipment, (2, 5, 20), "piece", 45_000, "Medical Instruments Co.", None, LowStock),
        stock_item(4, "Cosmetic filling material", Medicine, (25, 15, 100), "tube", 120_000, "Cosmetic Materials Co.", Some(date(2024, 8, 30)), InStock),
        stock_item(5, "Pain relief tablets", Medicine, (80, 30, 200), "pack", 8_000, "United Pharmaceuticals", Some(date(2024, 9, 15)), InStock),
        stock_item(6, "Injection needles", Supplies, (200, 150, 500), "bundle", 12_000, "Medical Supplies Co.", Some(date(2025, 6, 30)), InStock),
        stock_item(7, "Medicated toothpaste", Medicine, (0, 20, 100), "tube", 5_000, "Dental Care Co.", None, OutOfStock),
        stock_item(8, "Surgical masks", Supplies, (5, 50, 300), "box", 10_000, "Medical Supplies Co.", Some(date(2025, 3, 15)), LowStock),
    ]
}

pub fn demo_seed() -> StoreSeed {
    StoreSeed {
        clinics: demo_clinics(),
        treatments: demo_treatments(),
        appointments: demo_appointments(),
        patients: demo_patients(),
        laboratories: demo_laboratories(),
        lab_orders: demo_lab_orders(),
        treatment_plans: demo_treatment_plans(),
        financial_records: demo_financial_records(),
        staff: demo_staff(),
        inventory: demo_inventory(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_is_consistent() {
        let seed = demo_seed();
        assert_eq!(seed.clinics.len(), 2);
        for clinic in &seed.clinics {
            assert!(clinic.time_slot_duration > 0);
            for schedule in clinic.working_hours.values().filter(|s| s.is_open) {
                assert!(schedule.open <= schedule.close);
            }
        }
        assert!(seed.clinics.iter().all(|c| seed.staff.iter().any(|s| s.id == c.doctor_id)));
        assert_eq!(seed.inventory.iter().filter(|i| i.needs_restock()).count(), 4);
        let plan = &seed.treatment_plans[0];
        assert_eq!(plan.total_cost, plan.phases.iter().map(|p| p.cost).sum::<i64>());
    }

    #[test]
    fn test_week_schedule_closes_friday() {
        let hours = week_schedule((time(9, 0), time(18, 0)), (time(10, 0), time(14, 0)));
        assert_eq!(hours.len(), 7);
        assert!(!hours[&DayOfWeek::Friday].is_open);
        assert_eq!(hours[&DayOfWeek::Saturday].close.to_string(), "14:00");
    }
}

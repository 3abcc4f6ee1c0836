use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{BackOfficeStore, ClinicStore, PatientStore};
use shared_models::finance::{
    FinancialRecord, PartyType, PaymentMethod, RecordStatus, RecordType, RelatedParty,
    LAB_EXPENSE_CATEGORY,
};
use shared_models::lab::{
    LabOrder, LabOrderStatus, Laboratory, OrderPriority, PaymentStatus, PriceRange,
};

use crate::error::BackOfficeError;
use crate::models::{CreateLabOrderRequest, CreateLaboratoryRequest, UpdateLabOrderStatusRequest};

pub struct LabOrderService {
    store: Arc<dyn ClinicStore>,
}

impl LabOrderService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn list_laboratories(&self) -> Result<Vec<Laboratory>, BackOfficeError> {
        Ok(self.store.list_laboratories().await?)
    }

    pub async fn add_laboratory(&self, request: CreateLaboratoryRequest) -> Result<Laboratory, BackOfficeError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(BackOfficeError::ValidationError("laboratory name is required".to_string()));
        }
        if request.phone.trim().is_empty() {
            return Err(BackOfficeError::ValidationError("laboratory phone is required".to_string()));
        }
        if !(0.0..=5.0).contains(&request.quality_rating) {
            return Err(BackOfficeError::ValidationError(
                "quality_rating must be between 0 and 5".to_string(),
            ));
        }

        let laboratory = Laboratory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: request.address,
            phone: request.phone.trim().to_string(),
            email: request.email,
            specialties: request.specialties,
            working_hours: request.working_hours,
            is_active: request.is_active,
            average_delivery_time: request.average_delivery_time,
            quality_rating: request.quality_rating,
            price_range: request.price_range.unwrap_or(PriceRange::Medium),
        };

        let laboratory = self.store.insert_laboratory(laboratory).await?;
        info!("Added laboratory {} ({})", laboratory.name, laboratory.id);
        Ok(laboratory)
    }

    pub async fn list_lab_orders(&self) -> Result<Vec<LabOrder>, BackOfficeError> {
        Ok(self.store.list_lab_orders().await?)
    }

    pub async fn get_lab_order(&self, order_id: Uuid) -> Result<LabOrder, BackOfficeError> {
        self.store
            .get_lab_order(order_id)
            .await?
            .ok_or(BackOfficeError::LabOrderNotFound(order_id))
    }

    pub async fn lab_orders_for_patient(&self, patient_id: Uuid) -> Result<Vec<LabOrder>, BackOfficeError> {
        let orders = self.store.list_lab_orders().await?;
        Ok(orders.into_iter().filter(|o| o.patient_id == patient_id).collect())
    }

    /// Places an order with a laboratory and books its cost as a laboratory
    /// expense, completed if already paid and pending otherwise.
    pub async fn create_lab_order(
        &self,
        request: CreateLabOrderRequest,
        today: NaiveDate,
    ) -> Result<LabOrder, BackOfficeError> {
        debug!(
            "Creating lab order for patient {} at laboratory {}",
            request.patient_id, request.laboratory_id
        );

        if request.description.trim().is_empty() {
            return Err(BackOfficeError::ValidationError("description is required".to_string()));
        }
        if request.cost < 0 {
            return Err(BackOfficeError::ValidationError("cost must not be negative".to_string()));
        }

        let patient = self
            .store
            .get_patient(request.patient_id)
            .await?
            .ok_or(BackOfficeError::PatientNotFound(request.patient_id))?;
        let laboratory = self
            .store
            .get_laboratory(request.laboratory_id)
            .await?
            .ok_or(BackOfficeError::LaboratoryNotFound(request.laboratory_id))?;

        let order_date = request.order_date.unwrap_or(today);
        let expected_delivery_date = match request.expected_delivery_date {
            Some(date) => date,
            None => order_date
                .checked_add_days(Days::new(laboratory.average_delivery_time.into()))
                .unwrap_or(order_date),
        };
        if expected_delivery_date < order_date {
            return Err(BackOfficeError::ValidationError(
                "expected_delivery_date is before order_date".to_string(),
            ));
        }

        let order = LabOrder {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            patient_name: patient.name.clone(),
            laboratory_id: laboratory.id,
            laboratory_name: laboratory.name,
            treatment_plan_id: request.treatment_plan_id,
            order_type: request.order_type,
            description: request.description.trim().to_string(),
            specifications: request.specifications,
            status: LabOrderStatus::Ordered,
            order_date,
            expected_delivery_date,
            actual_delivery_date: None,
            cost: request.cost,
            is_paid: request.is_paid,
            payment_status: if request.is_paid { PaymentStatus::Paid } else { PaymentStatus::Pending },
            doctor_notes: request.doctor_notes,
            lab_notes: None,
            priority: request.priority.unwrap_or(OrderPriority::Normal),
            follow_up_required: request.follow_up_required,
            installation_appointment_id: None,
        };

        let expense = FinancialRecord {
            id: Uuid::new_v4(),
            record_type: RecordType::Expense,
            amount: order.cost,
            description: format!("Lab order: {}", order.description),
            category: LAB_EXPENSE_CATEGORY.to_string(),
            date: order.order_date,
            related_to: Some(RelatedParty {
                party_type: PartyType::Patient,
                id: patient.id,
                name: patient.name,
            }),
            payment_method: PaymentMethod::Transfer,
            status: if order.is_paid { RecordStatus::Completed } else { RecordStatus::Pending },
        };

        let order = self.store.insert_lab_order(order, expense).await?;
        info!("Lab order {} placed with {}", order.id, order.laboratory_name);
        Ok(order)
    }

    /// Moves an order to a new status. Installed and cancelled orders are final;
    /// reaching `delivered` stamps the delivery date when none is given.
    pub async fn update_lab_order_status(
        &self,
        order_id: Uuid,
        request: UpdateLabOrderStatusRequest,
        today: NaiveDate,
    ) -> Result<LabOrder, BackOfficeError> {
        let mut order = self.get_lab_order(order_id).await?;

        if order.status.is_terminal() && order.status != request.status {
            return Err(BackOfficeError::InvalidTransition {
                from: order.status.to_string(),
                to: request.status.to_string(),
            });
        }

        order.status = request.status;
        if let Some(notes) = request.lab_notes {
            order.lab_notes = Some(notes);
        }
        if let Some(date) = request.actual_delivery_date {
            order.actual_delivery_date = Some(date);
        } else if order.status == LabOrderStatus::Delivered && order.actual_delivery_date.is_none() {
            order.actual_delivery_date = Some(today);
        }

        let order = self
            .store
            .save_lab_order(order)
            .await?
            .ok_or(BackOfficeError::LabOrderNotFound(order_id))?;
        info!("Lab order {} is now {}", order.id, order.status);
        Ok(order)
    }
}

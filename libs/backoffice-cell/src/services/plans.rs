use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{BackOfficeStore, ClinicStore, PatientStore};
use shared_models::plan::{PhaseStatus, PlanPhase, PlanStatus, TreatmentPlan};

use crate::error::BackOfficeError;
use crate::models::CreateTreatmentPlanRequest;

pub struct TreatmentPlanService {
    store: Arc<dyn ClinicStore>,
}

impl TreatmentPlanService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn list_treatment_plans(&self) -> Result<Vec<TreatmentPlan>, BackOfficeError> {
        Ok(self.store.list_treatment_plans().await?)
    }

    pub async fn get_treatment_plan(&self, plan_id: Uuid) -> Result<TreatmentPlan, BackOfficeError> {
        self.store
            .get_treatment_plan(plan_id)
            .await?
            .ok_or(BackOfficeError::PlanNotFound(plan_id))
    }

    pub async fn plans_for_patient(&self, patient_id: Uuid) -> Result<Vec<TreatmentPlan>, BackOfficeError> {
        let plans = self.store.list_treatment_plans().await?;
        Ok(plans.into_iter().filter(|p| p.patient_id == patient_id).collect())
    }

    /// Creates a draft plan. Total cost is the sum of phase costs.
    pub async fn create_treatment_plan(
        &self,
        request: CreateTreatmentPlanRequest,
        today: NaiveDate,
    ) -> Result<TreatmentPlan, BackOfficeError> {
        debug!("Creating treatment plan {:?} for patient {}", request.title, request.patient_id);

        if request.title.trim().is_empty() {
            return Err(BackOfficeError::ValidationError("title is required".to_string()));
        }
        if request.phases.is_empty() {
            return Err(BackOfficeError::ValidationError("a plan needs at least one phase".to_string()));
        }
        if request.phases.iter().any(|phase| phase.cost < 0) {
            return Err(BackOfficeError::ValidationError("phase cost must not be negative".to_string()));
        }

        let patient = self
            .store
            .get_patient(request.patient_id)
            .await?
            .ok_or(BackOfficeError::PatientNotFound(request.patient_id))?;

        let phases: Vec<PlanPhase> = request
            .phases
            .into_iter()
            .map(|phase| PlanPhase {
                id: Uuid::new_v4(),
                title: phase.title,
                description: phase.description,
                estimated_duration: phase.estimated_duration,
                cost: phase.cost,
                status: PhaseStatus::Pending,
                requires_lab: phase.requires_lab,
                lab_order_id: None,
                appointments: Vec::new(),
            })
            .collect();

        let total_cost = phases.iter().map(|p| p.cost).sum();
        let estimated_duration = request
            .estimated_duration
            .unwrap_or_else(|| phases.iter().map(|p| p.estimated_duration).sum());

        let plan = TreatmentPlan {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            patient_name: patient.name,
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name,
            title: request.title.trim().to_string(),
            description: request.description,
            phases,
            total_cost,
            estimated_duration,
            status: PlanStatus::Draft,
            created_date: today,
            approved_date: None,
            completed_date: None,
            notes: request.notes,
        };

        let plan = self.store.insert_treatment_plan(plan).await?;
        info!("Treatment plan {} created, total cost {}", plan.id, plan.total_cost);
        Ok(plan)
    }

    pub async fn update_plan_status(
        &self,
        plan_id: Uuid,
        status: PlanStatus,
        today: NaiveDate,
    ) -> Result<TreatmentPlan, BackOfficeError> {
        let mut plan = self.get_treatment_plan(plan_id).await?;

        if !plan.status.can_transition_to(&status) {
            return Err(BackOfficeError::InvalidTransition {
                from: plan.status.to_string(),
                to: status.to_string(),
            });
        }

        plan.status = status;
        match status {
            PlanStatus::Approved => plan.approved_date = Some(today),
            PlanStatus::Completed => plan.completed_date = Some(today),
            _ => {}
        }

        let plan = self
            .store
            .save_treatment_plan(plan)
            .await?
            .ok_or(BackOfficeError::PlanNotFound(plan_id))?;
        info!("Treatment plan {} is now {}", plan.id, plan.status);
        Ok(plan)
    }
}

pub mod memory;
pub mod seed;
pub mod store;

pub use memory::{InMemoryStore, StoreSeed};
pub use store::{
    AppointmentStore, BackOfficeStore, ClinicDirectory, ClinicStore, PatientStore, StoreError,
    StoreResult, TreatmentCatalog,
};

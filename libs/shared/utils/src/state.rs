use std::sync::Arc;

use tracing::info;

use shared_config::AppConfig;
use shared_database::{seed, ClinicStore, InMemoryStore, StoreSeed};

/// Shared handler state: configuration plus the injected clinic store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn ClinicStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn ClinicStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Builds state over an in-memory store, seeded with demo records when configured.
    pub fn in_memory(config: AppConfig) -> Self {
        let seed = if config.seed_demo_data {
            info!("Seeding in-memory store with demo clinic data");
            seed::demo_seed()
        } else {
            StoreSeed::default()
        };

        Self::new(config, Arc::new(InMemoryStore::from_seed(seed)))
    }
}

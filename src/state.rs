use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::store::PetStore;
use crate::services::{PetService, ToyService};

/// Shared handler state, built once at startup from the resolved configuration
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pets: PetService,
    pub toys: ToyService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn PetStore>) -> Self {
        Self {
            pets: PetService::new(store.clone()),
            toys: ToyService::new(store, config.toys.clone()),
            config: Arc::new(config),
        }
    }
}

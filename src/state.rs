use crate::analysis::AnalysisController;
use crate::charts::{RenderRegistry, SpecSurface};
use crate::config::Config;
use crate::errors::StoreError;
use crate::generator::SampleGenerator;
use crate::history::HistoryStore;
use crate::storage::FileStore;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type Controller = AnalysisController<FileStore, StdRng, SpecSurface>;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<Controller>>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    /// Opens the store and draws the initial charts.
    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = FileStore::open(&config.data_path).await?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let history = HistoryStore::new(store, SampleGenerator::new(rng));
        let mut controller =
            AnalysisController::new(history, RenderRegistry::new(SpecSurface::default()));
        controller.init().await?;
        Ok(Self::new(controller))
    }
}

use crate::errors::StoreError;
use crate::generator::SampleGenerator;
use crate::models::DailySample;
use crate::storage::KeyValueStore;
use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, warn};

pub const HISTORY_KEY: &str = "la_samples";
pub const HISTORY_CAPACITY: usize = 90;
pub const SEED_DAYS: usize = 7;

/// Bounded chronological log of samples, persisted as one JSON blob.
#[derive(Debug)]
pub struct HistoryStore<S, R> {
    store: S,
    generator: SampleGenerator<R>,
    capacity: usize,
    seed_days: usize,
}

impl<S, R> HistoryStore<S, R>
where
    S: KeyValueStore,
    R: Rng + Send,
{
    pub fn new(store: S, generator: SampleGenerator<R>) -> Self {
        Self {
            store,
            generator,
            capacity: HISTORY_CAPACITY,
            seed_days: SEED_DAYS,
        }
    }

    pub fn with_limits(mut self, capacity: usize, seed_days: usize) -> Self {
        self.capacity = capacity.max(1);
        self.seed_days = seed_days;
        self
    }

    /// `None` when nothing was saved yet or the blob no longer parses.
    pub async fn load(&self) -> Result<Option<Vec<DailySample>>, StoreError> {
        let Some(raw) = self.store.get(HISTORY_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(samples) => Ok(Some(samples)),
            Err(err) => {
                warn!("discarding unreadable history: {err}");
                Ok(None)
            }
        }
    }

    /// Loads the log (seeding it when absent), applies `mutation`, trims to
    /// capacity and writes the whole log back.
    pub async fn transact<F>(&mut self, mutation: F) -> Result<Vec<DailySample>, StoreError>
    where
        F: FnOnce(&mut Vec<DailySample>),
    {
        let mut samples = match self.load().await? {
            Some(samples) => samples,
            None => {
                info!(days = self.seed_days, "seeding empty history");
                self.generate(self.seed_days)
            }
        };

        mutation(&mut samples);

        if samples.len() > self.capacity {
            let overflow = samples.len() - self.capacity;
            samples.drain(..overflow);
            debug!(evicted = overflow, "history trimmed to capacity");
        }

        self.write(&samples).await?;
        Ok(samples)
    }

    pub async fn save(&mut self, sample: DailySample) -> Result<Vec<DailySample>, StoreError> {
        self.transact(|samples| samples.push(sample)).await
    }

    pub async fn reset(&mut self) -> Result<(), StoreError> {
        self.store.remove(HISTORY_KEY).await?;
        info!("history cleared");
        Ok(())
    }

    /// Replaces whatever is stored with `days` generated samples.
    pub async fn seed(&mut self, days: usize) -> Result<Vec<DailySample>, StoreError> {
        let mut samples = self.generate(days);
        if samples.len() > self.capacity {
            samples.drain(..samples.len() - self.capacity);
        }
        self.write(&samples).await?;
        Ok(samples)
    }

    /// Last `days` samples. Without a stored log this is generated data that
    /// is not persisted.
    pub async fn trailing(&mut self, days: usize) -> Result<Vec<DailySample>, StoreError> {
        let samples = match self.load().await? {
            Some(samples) => samples,
            None => self.generate(days),
        };
        let start = samples.len().saturating_sub(days);
        Ok(samples[start..].to_vec())
    }

    fn generate(&mut self, days: usize) -> Vec<DailySample> {
        self.generator.generate(days, Utc::now().date_naive())
    }

    async fn write(&mut self, samples: &[DailySample]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(samples)?;
        self.store.set(HISTORY_KEY, payload).await
    }
}

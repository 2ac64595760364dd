//! Dashboard loading coordinator
//!
//! Populates and keeps current one render generation of plant
//! summaries: one plant-list fetch, then one independent status
//! fetch per plant, with the generation's barrier converting the
//! per-plant completions into a single `still_loading` flag.
//!
//! Per-plant fetches resolve in any order; each resolution touches
//! only its own summary and the shared barrier. A stale completion
//! (its generation superseded by a refetch, logout, or an
//! unauthorized abort) is dropped before it mutates anything.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use sp_core::ports::PlantApiPort;
use sp_core::transport::AuthOutcome;
use sp_core::{classify_moisture, PlantRecord, PlantSummary};

use crate::failure::FailureDispatcher;

use super::generation::{Generation, GenerationId};

/// Sentinel for "no live generation"; real ids start at 1.
const NO_GENERATION: GenerationId = 0;

enum RenderPhase {
    /// Plant-list fetch in flight; summaries do not exist yet.
    FetchingList,

    /// Summaries created, per-plant fetches running or settled.
    Ready(Arc<Generation>),
}

pub struct DashboardCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn PlantApiPort>,
    failures: Arc<FailureDispatcher>,
    current: Mutex<Option<RenderPhase>>,
    /// Id of the generation allowed to mutate shared state.
    live: AtomicU64,
    /// Highest id handed out so far. Doubles as the supersession
    /// watermark: any load whose id is below it yields.
    next_id: AtomicU64,
}

impl DashboardCoordinator {
    pub fn new(api: Arc<dyn PlantApiPort>, failures: Arc<FailureDispatcher>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                failures,
                current: Mutex::new(None),
                live: AtomicU64::new(NO_GENERATION),
                next_id: AtomicU64::new(NO_GENERATION),
            }),
        }
    }

    /// Loads a fresh dashboard render generation for `user_id`.
    ///
    /// Returns the ordered summaries as created (condition unknown,
    /// not loaded); their per-plant status fetches run concurrently
    /// afterwards and are observable through [`Self::summaries`] and
    /// [`Self::still_loading`]. On a list-fetch failure the shared
    /// failure dispatcher reacts and the dashboard stays empty.
    #[tracing::instrument(name = "usecase.dashboard.load", skip(self))]
    pub async fn load_dashboard(&self, user_id: &str) -> Vec<PlantSummary> {
        let inner = &self.inner;
        let id = inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        {
            // `live` and `current` only change together, under the
            // `current` lock. `next_id` is the handover watermark: a
            // load or logout that allocated a later id fences this
            // one out before it starts.
            let mut current = inner.current.lock().await;
            if inner.next_id.load(Ordering::Acquire) > id {
                debug!("render generation superseded before its list fetch started");
                return Vec::new();
            }
            inner.live.store(id, Ordering::Release);
            *current = Some(RenderPhase::FetchingList);
        }

        let records = match inner.api.fetch_plant_list(user_id).await {
            Ok(records) => records,
            Err(error) => {
                inner.failures.dispatch(&error).await;
                inner.discard_if_live(id).await;
                return Vec::new();
            }
        };
        let summaries: Vec<PlantSummary> =
            records.iter().cloned().map(PlantSummary::new).collect();
        let generation = Arc::new(Generation::new(id, summaries.clone()));
        {
            // Re-checked under the lock: a load or logout that took
            // over while the list was in flight must not be clobbered
            // by this generation's late arrival.
            let mut current = inner.current.lock().await;
            if !inner.is_live(id) {
                debug!("render generation superseded while the plant list was in flight");
                return Vec::new();
            }
            *current = Some(RenderPhase::Ready(Arc::clone(&generation)));
        }
        info!(generation = id, plants = records.len(), "plant list resolved");

        for (index, record) in records.into_iter().enumerate() {
            let inner = Arc::clone(inner);
            let generation = Arc::clone(&generation);
            tokio::spawn(async move {
                inner.resolve_plant(generation, index, record).await;
            });
        }
        summaries
    }

    /// True until the list fetch and every per-plant fetch of the
    /// current generation have settled. An empty or discarded
    /// dashboard is not loading.
    pub async fn still_loading(&self) -> bool {
        match &*self.inner.current.lock().await {
            Some(RenderPhase::FetchingList) => true,
            Some(RenderPhase::Ready(generation)) => !generation.barrier.is_settled(),
            None => false,
        }
    }

    /// Read-only snapshot of the current generation's summaries, in
    /// plant-list order.
    pub async fn summaries(&self) -> Vec<PlantSummary> {
        match &*self.inner.current.lock().await {
            Some(RenderPhase::Ready(generation)) => generation.summaries.lock().await.clone(),
            _ => Vec::new(),
        }
    }

    /// Discards the current render generation (view teardown or
    /// logout). Fetches still in flight become stale and settle
    /// without mutating anything.
    pub async fn invalidate(&self) {
        self.inner.invalidate().await;
    }
}

impl Inner {
    fn is_live(&self, id: GenerationId) -> bool {
        self.live.load(Ordering::Acquire) == id
    }

    async fn invalidate(&self) {
        let mut current = self.current.lock().await;
        // Burning an id fences out loads requested before this point.
        self.next_id.fetch_add(1, Ordering::AcqRel);
        self.live.store(NO_GENERATION, Ordering::Release);
        *current = None;
    }

    /// Clears the current phase unless a newer load already took
    /// over. The compare-exchange makes the check and the takedown
    /// one step; a plain load-then-store would let a load that lands
    /// in between get torn down by a stale failure.
    async fn discard_if_live(&self, id: GenerationId) {
        let mut current = self.current.lock().await;
        if self
            .live
            .compare_exchange(id, NO_GENERATION, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            *current = None;
        }
    }

    #[tracing::instrument(
        name = "usecase.dashboard.resolve_plant",
        skip(self, generation, record),
        fields(generation = generation.id, sensor_id = %record.sensor_id)
    )]
    async fn resolve_plant(&self, generation: Arc<Generation>, index: usize, record: PlantRecord) {
        let result = self
            .api
            .fetch_plant_reading(&record.sensor_id, &record.device_id)
            .await;

        if !self.is_live(generation.id) {
            debug!("render generation superseded, dropping reading");
            return;
        }

        match result {
            Ok(reading) => {
                let condition = classify_moisture(reading.moisture_level);
                let mut summaries = generation.summaries.lock().await;
                if let Some(summary) = summaries.get_mut(index) {
                    summary.resolve(condition);
                }
                drop(summaries);
                generation.barrier.signal_one();
            }
            Err(error) => match error.auth_outcome() {
                AuthOutcome::Unauthorized => {
                    // One 401 abandons the whole dashboard; the CAS
                    // keeps concurrent 401 completions from clearing
                    // or redirecting twice.
                    if generation.try_abort() {
                        self.failures.dispatch(&error).await;
                        self.discard_if_live(generation.id).await;
                    }
                }
                AuthOutcome::Other => {
                    // One plant's transient failure never blocks the
                    // rest: report, settle the summary as-is, count it.
                    self.failures.dispatch(&error).await;
                    let mut summaries = generation.summaries.lock().await;
                    if let Some(summary) = summaries.get_mut(index) {
                        summary.settle_without_reading();
                    }
                    drop(summaries);
                    generation.barrier.signal_one();
                }
            },
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use sp_core::{FetchBarrier, PlantSummary};

pub(crate) type GenerationId = u64;

/// State owned by one dashboard load.
///
/// Summaries and barrier live and die with the generation: a refetch
/// or teardown supersedes it wholesale, and late fetch completions
/// check currency with the coordinator before touching any of this.
#[derive(Debug)]
pub(crate) struct Generation {
    pub id: GenerationId,
    pub summaries: Mutex<Vec<PlantSummary>>,
    pub barrier: FetchBarrier,
    aborted: AtomicBool,
}

impl Generation {
    pub fn new(id: GenerationId, summaries: Vec<PlantSummary>) -> Self {
        let barrier = FetchBarrier::new(summaries.len());
        Self {
            id,
            summaries: Mutex::new(summaries),
            barrier,
            aborted: AtomicBool::new(false),
        }
    }

    /// First caller wins. Gates the clear-and-redirect reaction so
    /// concurrent 401 completions abandon the dashboard exactly once.
    pub fn try_abort(&self) -> bool {
        self.aborted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

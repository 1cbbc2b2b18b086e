//! Generate suite use case - renders every catalog product for the current logo.
//!
//! A batch publishes one queued record per product, then runs a fixed pool of
//! workers that pull ids from a shared FIFO until it is empty. At most
//! `concurrency` image requests are outstanding at any time.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use merchmagic_domain::{product_catalog, BatchId, ImageData, MockupId, MockupSuite, ProductTemplate};
use tokio::task::JoinSet;

use crate::entities::{LogoSlot, MockupStore};
use crate::infrastructure::ports::{ImageGenPort, ImageRequest};

/// Counts reported once every worker has exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BatchSummary {
    pub batch_id: BatchId,
    pub total: usize,
    pub ready: usize,
    pub errors: usize,
}

pub struct GenerateSuite {
    mockups: Arc<MockupStore>,
    logo: Arc<LogoSlot>,
    image_gen: Arc<dyn ImageGenPort>,
    catalog: Vec<ProductTemplate>,
    concurrency: usize,
    running: Arc<AtomicBool>,
}

impl GenerateSuite {
    pub fn new(
        mockups: Arc<MockupStore>,
        logo: Arc<LogoSlot>,
        image_gen: Arc<dyn ImageGenPort>,
        concurrency: usize,
    ) -> Self {
        Self {
            mockups,
            logo,
            image_gen,
            catalog: product_catalog(),
            concurrency: concurrency.max(1),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the product catalog used for new batches.
    pub fn with_catalog(mut self, catalog: Vec<ProductTemplate>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Publish a fresh job set and hand back the run that will process it.
    ///
    /// Returns `None` without touching any state when no logo is loaded or a
    /// batch is already running.
    pub fn begin(&self) -> Option<BatchRun> {
        let Some(logo) = self.logo.get() else {
            tracing::debug!("Batch not started: no logo uploaded");
            return None;
        };

        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Batch not started: a batch is already running");
            return None;
        }
        let guard = RunningGuard(self.running.clone());

        let suite = MockupSuite::from_catalog(&self.catalog);
        let batch_id = suite.batch_id.unwrap_or_default();
        let queue: VecDeque<MockupId> = suite.ids().into();
        let total = queue.len();
        self.mockups.replace_all(suite);

        tracing::info!(
            batch_id = %batch_id,
            total,
            concurrency = self.concurrency,
            "Batch started"
        );

        Some(BatchRun {
            batch_id,
            concurrency: self.concurrency,
            worker: Arc::new(Worker {
                batch_id,
                logo,
                queue: Mutex::new(queue),
                mockups: self.mockups.clone(),
                image_gen: self.image_gen.clone(),
            }),
            _guard: guard,
        })
    }

    /// Start a batch and wait for it to finish.
    pub async fn execute(&self) -> Option<BatchSummary> {
        let run = self.begin()?;
        Some(run.run().await)
    }
}

/// Clears the running flag however the run ends.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A published batch waiting for its workers.
pub struct BatchRun {
    batch_id: BatchId,
    concurrency: usize,
    worker: Arc<Worker>,
    _guard: RunningGuard,
}

impl BatchRun {
    pub fn batch_id(&self) -> BatchId {
        self.batch_id
    }

    /// Run exactly `concurrency` workers until the queue drains.
    pub async fn run(self) -> BatchSummary {
        let mut workers = JoinSet::new();
        for index in 0..self.concurrency {
            let worker = self.worker.clone();
            workers.spawn(async move { worker.drain(index).await });
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!(batch_id = %self.batch_id, error = %e, "Generation worker aborted");
            }
        }

        let stats = self.worker.mockups.stats();
        tracing::info!(
            batch_id = %self.batch_id,
            ready = stats.ready,
            errors = stats.errors,
            "Batch finished"
        );

        BatchSummary {
            batch_id: self.batch_id,
            total: stats.total,
            ready: stats.ready,
            errors: stats.errors,
        }
    }
}

struct Worker {
    batch_id: BatchId,
    logo: ImageData,
    queue: Mutex<VecDeque<MockupId>>,
    mockups: Arc<MockupStore>,
    image_gen: Arc<dyn ImageGenPort>,
}

impl Worker {
    fn next(&self) -> Option<MockupId> {
        match self.queue.lock() {
            Ok(mut queue) => queue.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        }
    }

    async fn drain(&self, index: usize) {
        while let Some(id) = self.next() {
            self.process(index, id).await;
        }
        tracing::debug!(batch_id = %self.batch_id, worker = index, "Worker idle, queue drained");
    }

    // Failures stay on the record; they never stop the worker.
    async fn process(&self, index: usize, id: MockupId) {
        let mockup = match self.mockups.update(id, |m| {
            m.start_generating()?;
            Ok(m.clone())
        }) {
            Ok(mockup) => mockup,
            Err(e) => {
                tracing::warn!(batch_id = %self.batch_id, mockup_id = %id, error = %e, "Skipping mockup");
                return;
            }
        };

        tracing::debug!(
            batch_id = %self.batch_id,
            worker = index,
            mockup_id = %id,
            product = %mockup.product,
            "Generating mockup"
        );

        let request = ImageRequest::new(self.logo.clone(), mockup.original_instruction());
        let outcome = match self.image_gen.generate(request).await {
            Ok(result) => self.mockups.update(id, |m| m.complete(&result.image)),
            Err(e) => {
                tracing::warn!(
                    batch_id = %self.batch_id,
                    mockup_id = %id,
                    product = %mockup.product,
                    safety = e.is_safety(),
                    error = %e,
                    "Mockup generation failed"
                );
                self.mockups.update(id, |m| m.fail())
            }
        };

        if let Err(e) = outcome {
            tracing::warn!(batch_id = %self.batch_id, mockup_id = %id, error = %e, "Failed to record generation result");
        }
    }
}

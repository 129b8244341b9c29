//! Serial generation queue
//!
//! Jobs run one at a time in submission order. Each submitter gets its own
//! result back, and a failing job never blocks the jobs queued behind it.

use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::FutureExt;
use shared::{GeneratedResult, GenerationOptions, JobId};
use tokio::sync::{Mutex, oneshot};
use tracing::{debug, info, warn};

use crate::error::{ForgeError, ForgeResult};
use crate::traits::Generator;

/// A submitted unit of work waiting for its turn
pub struct QueueJob {
    pub id: JobId,
    pub options: GenerationOptions,
    reply: oneshot::Sender<ForgeResult<GeneratedResult>>,
}

struct Inner<G> {
    generator: G,
    pending: Mutex<VecDeque<QueueJob>>,
    draining: AtomicBool,
}

/// FIFO queue with at most one generation in flight
pub struct ForgeQueue<G: Generator + 'static> {
    inner: Arc<Inner<G>>,
}

impl<G: Generator + 'static> Clone for ForgeQueue<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Generator + 'static> ForgeQueue<G> {
    pub fn new(generator: G) -> Self {
        Self {
            inner: Arc::new(Inner {
                generator,
                pending: Mutex::new(VecDeque::new()),
                draining: AtomicBool::new(false),
            }),
        }
    }

    /// Enqueue `options` and wait for this job's own result
    pub async fn submit(&self, options: GenerationOptions) -> ForgeResult<GeneratedResult> {
        let (reply, rx) = oneshot::channel();
        let id = JobId::new();
        debug!("Queued {} job {}", options.endpoint(), id);

        self.inner
            .pending
            .lock()
            .await
            .push_back(QueueJob { id, options, reply });
        Inner::kick(&self.inner);

        rx.await.map_err(|_| ForgeError::QueueClosed)?
    }

    /// Jobs waiting, not counting the one in flight
    pub async fn pending_len(&self) -> usize {
        self.inner.pending.lock().await.len()
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Acquire)
    }
}

impl<G: Generator + 'static> Inner<G> {
    /// Start a drain task unless one is already running
    fn kick(inner: &Arc<Self>) {
        if inner
            .draining
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            let inner = Arc::clone(inner);
            tokio::spawn(async move { inner.drain().await });
        }
    }

    async fn drain(self: Arc<Self>) {
        loop {
            while let Some(job) = self.next_job().await {
                self.run(job).await;
            }

            self.draining.store(false, Ordering::Release);

            // A submit may have landed between the empty pop and the store
            if self.pending.lock().await.is_empty() {
                return;
            }
            if self
                .draining
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return;
            }
        }
    }

    async fn next_job(&self) -> Option<QueueJob> {
        self.pending.lock().await.pop_front()
    }

    async fn run(&self, job: QueueJob) {
        let QueueJob { id, options, reply } = job;
        let endpoint = options.endpoint();

        let outcome = AssertUnwindSafe(self.generator.generate(options))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                Err(ForgeError::Internal {
                    message: format!("{endpoint} generation panicked"),
                })
            });

        match &outcome {
            Ok(_) => info!("✅ Job {} ({}) completed", id, endpoint),
            Err(e) => warn!("❌ Job {} ({}) failed: {}", id, endpoint, e),
        }

        if reply.send(outcome).is_err() {
            debug!("Submitter for job {} went away before the result arrived", id);
        }
    }
}

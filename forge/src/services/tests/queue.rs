//! Tests for the serial generation queue

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use tokio::sync::Mutex;

use shared::{GeneratedResult, GenerationOptions, Names};
use super::common::{names_options, TEST_TIMEOUT};
use crate::error::{ForgeError, ForgeResult};
use crate::services::queue::ForgeQueue;
use crate::traits::{Generator, MockGenerator};

/// Records the order jobs start in and the peak number running at once
#[derive(Default)]
struct RecordingGenerator {
    started: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    delay: Duration,
}

impl RecordingGenerator {
    fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }
}

fn label(options: &GenerationOptions) -> String {
    match options {
        GenerationOptions::Names(names) => names.category.clone(),
        other => other.endpoint().to_string(),
    }
}

#[async_trait]
impl Generator for Arc<RecordingGenerator> {
    async fn generate(&self, options: GenerationOptions) -> ForgeResult<GeneratedResult> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let job = label(&options);
        self.started.lock().await.push(job.clone());
        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if job.starts_with("fail") {
            return Err(ForgeError::Generation {
                message: format!("{job} refused"),
            });
        }
        Ok(GeneratedResult::Names(Names { names: vec![job] }))
    }
}

fn job(name: &str) -> GenerationOptions {
    names_options(name).into()
}

fn names_of(result: &ForgeResult<GeneratedResult>) -> Vec<String> {
    result
        .as_ref()
        .ok()
        .and_then(|r| r.as_names())
        .map(|n| n.names.clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_jobs_run_one_at_a_time_in_order() {
    let generator = Arc::new(RecordingGenerator::with_delay(Duration::from_millis(10)));
    let queue = ForgeQueue::new(Arc::clone(&generator));

    let labels: Vec<String> = (0..5).map(|i| format!("job-{i}")).collect();
    let submissions = labels.iter().map(|l| queue.submit(job(l)));
    let results = tokio::time::timeout(TEST_TIMEOUT, join_all(submissions)).await.unwrap();

    assert_eq!(*generator.started.lock().await, labels);
    assert_eq!(generator.peak.load(Ordering::SeqCst), 1);
    for (result, label) in results.iter().zip(&labels) {
        assert_eq!(names_of(result), vec![label.clone()]);
    }
    assert_eq!(queue.pending_len().await, 0);
}

#[tokio::test]
async fn test_failure_does_not_block_later_jobs() {
    let generator = Arc::new(RecordingGenerator::with_delay(Duration::from_millis(5)));
    let queue = ForgeQueue::new(Arc::clone(&generator));

    let (first, failed, last) = tokio::time::timeout(
        TEST_TIMEOUT,
        futures_util::future::join3(
            queue.submit(job("first")),
            queue.submit(job("fail-middle")),
            queue.submit(job("last")),
        ),
    )
    .await
    .unwrap();

    assert_eq!(names_of(&first), vec!["first".to_string()]);
    assert_eq!(failed.unwrap_err().to_string(), "fail-middle refused");
    assert_eq!(names_of(&last), vec!["last".to_string()]);
}

#[tokio::test]
async fn test_each_submitter_gets_its_own_result() {
    let mut generator = MockGenerator::new();
    generator.expect_generate().times(2).returning(|options| match options {
        GenerationOptions::Names(names) => Ok(GeneratedResult::Names(Names {
            names: vec![names.category.to_uppercase()],
        })),
        _ => Err(ForgeError::Internal {
            message: "unexpected".to_string(),
        }),
    });
    let queue = ForgeQueue::new(generator);

    let (a, b) = tokio::join!(queue.submit(job("elf")), queue.submit(job("dwarf")));

    assert_eq!(names_of(&a), vec!["ELF".to_string()]);
    assert_eq!(names_of(&b), vec!["DWARF".to_string()]);
}

struct PanicOnce;

#[async_trait]
impl Generator for PanicOnce {
    async fn generate(&self, options: GenerationOptions) -> ForgeResult<GeneratedResult> {
        if label(&options) == "boom" {
            panic!("generator blew up");
        }
        Ok(GeneratedResult::Names(Names { names: vec![label(&options)] }))
    }
}

#[tokio::test]
async fn test_panicking_job_becomes_internal_error() {
    let queue = ForgeQueue::new(PanicOnce);

    let (boom, after) = tokio::join!(queue.submit(job("boom")), queue.submit(job("after")));

    assert!(matches!(boom, Err(ForgeError::Internal { .. })));
    assert_eq!(names_of(&after), vec!["after".to_string()]);
}

#[tokio::test]
async fn test_queue_restarts_after_going_idle() {
    let generator = Arc::new(RecordingGenerator::default());
    let queue = ForgeQueue::new(Arc::clone(&generator));

    assert!(queue.submit(job("one")).await.is_ok());
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(queue.submit(job("two")).await.is_ok());

    assert_eq!(*generator.started.lock().await, vec!["one".to_string(), "two".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submitters_across_threads() {
    let generator = Arc::new(RecordingGenerator::with_delay(Duration::from_millis(1)));
    let queue = ForgeQueue::new(Arc::clone(&generator));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let queue = queue.clone();
            tokio::spawn(async move { queue.submit(job(&format!("job-{i}"))).await })
        })
        .collect();

    let mut resolved = 0;
    for handle in handles {
        let result = tokio::time::timeout(TEST_TIMEOUT, handle).await.unwrap().unwrap();
        assert!(result.is_ok());
        resolved += 1;
    }

    assert_eq!(resolved, 20);
    assert_eq!(generator.started.lock().await.len(), 20);
    assert_eq!(generator.peak.load(Ordering::SeqCst), 1);
    assert_eq!(queue.pending_len().await, 0);
}

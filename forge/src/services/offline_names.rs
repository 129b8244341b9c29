//! Offline name generation from the bundled weighted word list

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::{ForgeError, ForgeResult};
use crate::traits::DatasetLoader;
use crate::types::{NameEntry, NamePosition, OfflineDataset, TypeLabel};

/// Redraws allowed per pick before a duplicate name is accepted
pub const MAX_DEDUP_RETRIES: usize = 10;

const BUNDLED_NAMES: &str = include_str!("../../data/names.json");

/// Process-wide sampler over the bundled dataset
static GLOBAL: OnceLock<Arc<OfflineNames>> = OnceLock::new();

/// Loads the dataset compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDataset;

#[async_trait]
impl DatasetLoader for BundledDataset {
    async fn load(&self) -> ForgeResult<OfflineDataset> {
        serde_json::from_str(BUNDLED_NAMES).map_err(ForgeError::data_unavailable)
    }
}

/// Loads a dataset from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetLoader for FileDataset {
    async fn load(&self) -> ForgeResult<OfflineDataset> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ForgeError::data_unavailable(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&raw).map_err(ForgeError::data_unavailable)
    }
}

/// First and last name candidates for one type
#[derive(Debug, Clone, Default)]
pub struct NameBucket {
    pub first: Vec<NameEntry>,
    pub last: Vec<NameEntry>,
}

impl NameBucket {
    fn push(&mut self, entry: NameEntry) {
        match entry.position {
            NamePosition::First => self.first.push(entry),
            NamePosition::Last => self.last.push(entry),
        }
    }

    pub fn list(&self, position: NamePosition) -> &[NameEntry] {
        match position {
            NamePosition::First => &self.first,
            NamePosition::Last => &self.last,
        }
    }
}

/// Dataset indexed by lower-cased type, plus a bucket holding every entry
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    buckets: HashMap<String, NameBucket>,
    global: NameBucket,
    types: Vec<TypeLabel>,
}

impl NameIndex {
    pub fn build(dataset: OfflineDataset) -> Self {
        let mut index = NameIndex {
            types: dataset.types,
            ..Default::default()
        };

        for entry in dataset.names {
            index
                .buckets
                .entry(entry.category.to_lowercase())
                .or_default()
                .push(entry.clone());
            index.global.push(entry);
        }

        index
    }

    pub fn bucket(&self, type_key: &str) -> Option<&NameBucket> {
        self.buckets.get(&type_key.to_lowercase())
    }

    pub fn global(&self) -> &NameBucket {
        &self.global
    }

    pub fn types(&self) -> &[TypeLabel] {
        &self.types
    }

    /// First-position candidates for a type, narrowed by gender when that
    /// leaves at least one candidate
    pub fn candidates(&self, type_key: &str, gender: Option<&str>) -> Vec<&NameEntry> {
        let base = match self.bucket(type_key) {
            Some(bucket) if !bucket.first.is_empty() => &bucket.first,
            _ => &self.global.first,
        };

        if let Some(gender) = gender.filter(|g| !g.is_empty()) {
            let filtered: Vec<&NameEntry> = base
                .iter()
                .filter(|entry| entry.gender.eq_ignore_ascii_case(gender))
                .collect();
            if !filtered.is_empty() {
                return filtered;
            }
        }

        base.iter().collect()
    }

    pub fn sample<R: Rng + ?Sized>(&self, type_key: &str, gender: Option<&str>, count: usize, rng: &mut R) -> Vec<String> {
        let pool = self.candidates(type_key, gender);
        pick_weighted(&pool, count, rng)
            .into_iter()
            .map(|entry| entry.text.clone())
            .collect()
    }
}

fn draw_one<'a, R: Rng + ?Sized>(pool: &[&'a NameEntry], rng: &mut R) -> Option<&'a NameEntry> {
    match pool.choose_weighted(rng, |entry| entry.weight) {
        Ok(entry) => Some(*entry),
        // All-zero or invalid weights: every candidate is equally likely
        Err(_) => pool.choose(rng).copied(),
    }
}

/// Draw `count` entries with probability proportional to weight.
///
/// A draw whose text is already in the result is repeated, at most
/// [`MAX_DEDUP_RETRIES`] times, after which the duplicate is kept. Small
/// pools can therefore yield repeated names. An empty pool yields nothing.
pub fn pick_weighted<'a, R: Rng + ?Sized>(pool: &[&'a NameEntry], count: usize, rng: &mut R) -> Vec<&'a NameEntry> {
    let mut result: Vec<&NameEntry> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut tries = 0;
        let picked = loop {
            let Some(candidate) = draw_one(pool, rng) else {
                return result;
            };
            let duplicate = result.iter().any(|entry| entry.text == candidate.text);
            if duplicate && tries < MAX_DEDUP_RETRIES {
                tries += 1;
                continue;
            }
            break candidate;
        };
        result.push(picked);
    }

    result
}

/// Lazily indexed offline names sampler
pub struct OfflineNames {
    loader: Box<dyn DatasetLoader>,
    index: OnceCell<NameIndex>,
}

impl OfflineNames {
    pub fn new(loader: impl DatasetLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            index: OnceCell::new(),
        }
    }

    /// Sampler over the dataset compiled into the binary
    pub fn bundled() -> Self {
        Self::new(BundledDataset)
    }

    /// Shared bundled sampler; the dataset is loaded at most once per process
    pub fn global() -> Arc<OfflineNames> {
        GLOBAL.get_or_init(|| Arc::new(OfflineNames::bundled())).clone()
    }

    /// Index, loading the dataset on first use. Concurrent first callers
    /// wait on a single load. A failed load is retried on the next call.
    pub async fn index(&self) -> ForgeResult<&NameIndex> {
        self.index
            .get_or_try_init(|| async {
                let dataset = self.loader.load().await?;
                info!(
                    "📚 Loaded offline names dataset: {} names, {} types",
                    dataset.names.len(),
                    dataset.types.len()
                );
                Ok::<_, ForgeError>(NameIndex::build(dataset))
            })
            .await
    }

    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    /// Type labels declared by the dataset
    pub async fn types(&self) -> ForgeResult<Vec<TypeLabel>> {
        Ok(self.index().await?.types().to_vec())
    }

    /// Sample `count` first names for `type_key`
    pub async fn sample(&self, type_key: &str, gender: Option<&str>, count: usize) -> ForgeResult<Vec<String>> {
        let index = self.index().await?;
        let names = index.sample(type_key, gender, count, &mut rand::thread_rng());
        debug!("Sampled {} offline name(s) for type '{}'", names.len(), type_key);
        Ok(names)
    }

    /// Same as [`OfflineNames::sample`] but drawing from the given generator
    pub async fn sample_with_rng<R: Rng + Send + ?Sized>(
        &self,
        type_key: &str,
        gender: Option<&str>,
        count: usize,
        rng: &mut R,
    ) -> ForgeResult<Vec<String>> {
        Ok(self.index().await?.sample(type_key, gender, count, rng))
    }
}

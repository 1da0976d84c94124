//! Persistence for trainer state.
//!
//! The core library is pure; everything durable goes through the
//! [`KvStore`] abstraction here. Values are opaque strings (serialized
//! JSON), keyed by the fixed names [`WORDS_KEY`] and [`PROGRESS_KEY`].
//! [`JsonFileStore`] keeps the whole map in one JSON file under the
//! platform data directory and rewrites it on every `set`.

use std::collections::BTreeMap;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use mnemo_core::config::{Config, user_data_dir};
use mnemo_core::{Progress, WordBank};
use tracing::warn;

/// Store key holding the serialized [`WordBank`].
pub const WORDS_KEY: &str = "words";

/// Store key holding the serialized [`Progress`].
pub const PROGRESS_KEY: &str = "progress";

/// File name of the JSON store inside the data directory.
const STORE_FILE: &str = "trainer.json";

/// A string-to-string key-value store.
pub trait KvStore {
    /// The stored value for a key, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Store a value under a key, persisting it durably.
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

/// A [`KvStore`] backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: Utf8PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty one if the file does
    /// not exist. A corrupt file is logged and treated as empty rather
    /// than crashing the trainer.
    pub fn open<P: AsRef<Utf8Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(path.as_std_path()) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path, error = %e, "store file is corrupt; starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e).with_context(|| format!("failed to read {path}")),
        };
        Ok(Self { path, entries })
    }

    /// Open the store in its configured location: `data_dir` from the
    /// config if set, the platform data directory otherwise.
    pub fn open_default(config: &Config) -> anyhow::Result<Self> {
        let dir = config
            .data_dir
            .clone()
            .or_else(user_data_dir)
            .context("could not determine a data directory")?;
        Self::open(dir.join(STORE_FILE))
    }

    /// Where this store persists to.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent.as_std_path())
                .with_context(|| format!("failed to create {parent}"))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(self.path.as_std_path(), raw)
            .with_context(|| format!("failed to write {}", self.path))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }
}

/// Load the word bank, falling back to an empty bank on a missing or
/// corrupt value.
pub fn load_bank(store: &impl KvStore) -> WordBank {
    load_or_default(store, WORDS_KEY)
}

/// Persist the word bank.
pub fn save_bank(store: &mut impl KvStore, bank: &WordBank) -> anyhow::Result<()> {
    store.set(WORDS_KEY, serde_json::to_string(bank)?)
}

/// Load practice progress, falling back to empty on a missing or corrupt
/// value.
pub fn load_progress(store: &impl KvStore) -> Progress {
    load_or_default(store, PROGRESS_KEY)
}

/// Persist practice progress.
pub fn save_progress(store: &mut impl KvStore, progress: &Progress) -> anyhow::Result<()> {
    store.set(PROGRESS_KEY, serde_json::to_string(progress)?)
}

fn load_or_default<T: serde::de::DeserializeOwned + Default>(
    store: &impl KvStore,
    key: &str,
) -> T {
    store.get(key).map_or_else(T::default, |raw| {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "stored value is corrupt; starting empty");
            T::default()
        })
    })
}

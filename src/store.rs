//! Answer persistence.
//!
//! The in-memory [`AnswerMap`] is mirrored to a single durable key through
//! the injected [`Storage`] trait. Between explicit saves the two copies may
//! diverge; a save always writes the whole map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Mapping from question id to answer text. Absent key means empty answer.
pub type AnswerMap = BTreeMap<String, String>;

/// Durable key-value slot holding one serialized answer map.
///
/// Injected so tests can substitute an in-memory fake for the journal file.
pub trait Storage {
    /// Read the prior payload, `None` if nothing was ever saved
    fn load(&self) -> Result<Option<String>>;

    /// Replace the payload under the single journal key
    fn save(&self, payload: &str) -> Result<()>;
}

/// File-backed storage: one JSON file, parent directory created on save
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory storage for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payload: std::cell::RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw payload last saved, if any
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// In-memory answer map backed by durable storage
#[derive(Debug)]
pub struct AnswerStore<S: Storage> {
    answers: AnswerMap,
    storage: S,
}

impl<S: Storage> AnswerStore<S> {
    /// Initialize from storage.
    ///
    /// A missing or malformed payload yields an empty map; malformed input
    /// is logged and swallowed, never surfaced to the caller.
    pub fn load(storage: S) -> Self {
        let answers = match storage.load() {
            Ok(Some(payload)) => match serde_json::from_str::<AnswerMap>(&payload) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("discarding malformed journal payload: {e}");
                    AnswerMap::new()
                }
            },
            Ok(None) => AnswerMap::new(),
            Err(e) => {
                tracing::warn!("could not read journal storage: {e}");
                AnswerMap::new()
            }
        };
        Self { answers, storage }
    }

    /// Answer text for a question, empty if unset
    pub fn get(&self, id: &str) -> &str {
        self.answers.get(id).map(String::as_str).unwrap_or("")
    }

    /// Update the in-memory map only; nothing is persisted
    pub fn set(&mut self, id: &str, value: &str) {
        self.answers.insert(id.to_string(), value.to_string());
    }

    /// Serialize the full map and replace the durable payload
    pub fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.answers)?;
        self.storage.save(&payload)?;
        tracing::debug!(answers = self.answers.len(), "journal persisted");
        Ok(())
    }

    /// The complete in-memory map
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable set of chat ids subscribed to daily updates.
///
/// The file is a JSON array of integers, read in full at startup and rewritten
/// in full on every mutation. Persistence is best effort: a failed write is
/// logged and the in-memory state stays authoritative until the next save.
/// Single-process, single-writer; all mutation is serialized by the bot loop.
pub struct SubscriberStore {
    path: PathBuf,
    subscribers: HashSet<i64>,
}

impl SubscriberStore {
    /// Loads the store from `path`. A missing file yields an empty set; an
    /// unreadable or unparseable file also yields an empty set, logged, never fatal.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let subscribers = read_subscribers(&path);
        Self { path, subscribers }
    }

    /// Returns true if the id was newly added. Persists on change.
    pub fn add(&mut self, id: i64) -> bool {
        let added = self.subscribers.insert(id);
        if added {
            self.save();
        }
        added
    }

    /// Returns true if the id was present and removed. Persists on change.
    pub fn remove(&mut self, id: i64) -> bool {
        let removed = self.subscribers.remove(&id);
        if removed {
            self.save();
        }
        removed
    }

    pub fn contains(&self, id: i64) -> bool {
        self.subscribers.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Copy of the current set, safe to iterate while the live set mutates.
    pub fn snapshot(&self) -> Vec<i64> {
        self.subscribers.iter().copied().collect()
    }

    fn save(&self) {
        let ids: Vec<i64> = self.subscribers.iter().copied().collect();
        let result = serde_json::to_vec(&ids)
            .map_err(std::io::Error::other)
            .and_then(|bytes| fs::write(&self.path, bytes));

        match result {
            Ok(()) => {
                tracing::info!(
                    "Saved {} subscribers to {}",
                    ids.len(),
                    self.path.display()
                );
            }
            Err(err) => {
                tracing::error!(
                    "Error saving subscribers to {}: {}",
                    self.path.display(),
                    err
                );
            }
        }
    }
}

fn read_subscribers(path: &Path) -> HashSet<i64> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No subscriber file at {}, starting empty", path.display());
            return HashSet::new();
        }
        Err(err) => {
            tracing::error!("Error loading subscribers from {}: {}", path.display(), err);
            return HashSet::new();
        }
    };

    match serde_json::from_slice::<Vec<i64>>(&bytes) {
        Ok(ids) => {
            let subscribers: HashSet<i64> = ids.into_iter().collect();
            tracing::info!(
                "Loaded {} subscribers from {}",
                subscribers.len(),
                path.display()
            );
            subscribers
        }
        Err(err) => {
            tracing::error!("Error parsing subscribers from {}: {}", path.display(), err);
            HashSet::new()
        }
    }
}

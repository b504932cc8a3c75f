use crate::core::{Result, StoreError, Task, TaskFilter};
use crate::storage::LocalStorage;
use chrono::Utc;
use log::{debug, warn};

/// Storage key for the serialized task collection
pub const TASKS_KEY: &str = "Current_Tasks";

/// Task store
///
/// Owns the ordered task collection and keeps it in lockstep with its
/// serialized form: every mutation is immediately followed by a full
/// write of the collection. The in-memory sequence therefore always
/// equals what was last successfully persisted.
pub struct TaskStore<S: LocalStorage> {
    storage: S,
    tasks: Vec<Task>,
    next_id: u64,
    recovered: bool,
}

impl<S: LocalStorage> TaskStore<S> {
    /// Open the store, loading the persisted collection
    ///
    /// An absent key leaves the collection empty. An unreadable payload
    /// is recoverable: the store falls back to the empty collection and
    /// logs a diagnostic instead of failing the page; `recovered()`
    /// reports that this happened.
    pub fn open(storage: S) -> Result<Self> {
        let mut store = Self {
            storage,
            tasks: Vec::new(),
            next_id: 0,
            recovered: false,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<()> {
        if let Some(raw) = self.storage.get_item(TASKS_KEY)? {
            match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => self.tasks = tasks,
                Err(err) => {
                    let fault = StoreError::Corrupted {
                        key: TASKS_KEY.to_string(),
                        detail: err.to_string(),
                    };
                    warn!("discarding unreadable task data: {fault}");
                    self.recovered = true;
                }
            }
        }
        self.next_id = self.tasks.iter().map(|t| t.id + 1).max().unwrap_or(0);
        Ok(())
    }

    /// Serialize the whole collection and write it out unconditionally
    pub fn save(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.tasks)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;
        self.storage.set_item(TASKS_KEY, &payload)?;
        debug!("synchronization complete");
        Ok(())
    }

    /// Create a task from raw form values
    ///
    /// Title and description must be non-empty after trimming and the
    /// priority must name a known variant; otherwise nothing is appended
    /// or persisted and a validation failure is returned. On success the
    /// record is appended, the collection saved, and the new record
    /// returned.
    pub fn create(&mut self, title: &str, description: &str, priority: &str) -> Result<Task> {
        let title = title.trim();
        let description = description.trim();
        let priority = priority.trim();
        if title.is_empty() || description.is_empty() || priority.is_empty() {
            return Err(StoreError::Validation(
                "You can't leave the form empty".to_string(),
            ));
        }
        let priority = priority.parse()?;

        let task = Task {
            id: self.allocate_id(),
            title: title.to_string(),
            description: description.to_string(),
            priority,
        };
        self.tasks.push(task.clone());
        if let Err(err) = self.save() {
            self.tasks.pop();
            return Err(err);
        }
        Ok(task)
    }

    /// Remove the task at `position`
    ///
    /// Later records shift down by one, so callers must not cache
    /// positions across a delete. An invalid position is a no-op
    /// reported as an error.
    pub fn delete(&mut self, position: usize) -> Result<Task> {
        if position >= self.tasks.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.tasks.len(),
            });
        }
        let removed = self.tasks.remove(position);
        if let Err(err) = self.save() {
            self.tasks.insert(position, removed);
            return Err(err);
        }
        Ok(removed)
    }

    /// Non-mutating view of the tasks matching `criterion`, in original order
    pub fn filter(&self, criterion: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| criterion.matches(task))
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether opening the store discarded an unreadable persisted payload
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    // Ids are seeded from the wall clock, preserving the shape of ids in
    // previously persisted collections, but always advance strictly past
    // every id already handed out - two creations in the same clock tick
    // get consecutive ids, never equal ones.
    fn allocate_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.next_id);
        self.next_id = id + 1;
        id
    }
}

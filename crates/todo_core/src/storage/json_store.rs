use crate::error::AppError;
use crate::model::{Task, TaskId};
use crate::storage::KeyValueStore;
use log::{info, warn};
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "listaDeTarefas";

/// Reads and writes the whole task collection under one storage entry.
#[derive(Debug)]
pub struct TaskPersistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskPersistence<S> {
    pub fn new<K: Into<String>>(store: S, key: K) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Missing or unreadable data loads as an empty collection.
    pub fn load(&self) -> Vec<Task> {
        let content = match self.store.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                info!("event=tasks_load module=storage status=empty key={}", self.key);
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=storage status=fallback key={} error_code={} error={}",
                    self.key,
                    err.code(),
                    err.message()
                );
                return Vec::new();
            }
        };

        match decode_tasks(&content) {
            Ok(tasks) => {
                let tasks = drop_duplicate_ids(tasks);
                info!(
                    "event=tasks_load module=storage status=ok key={} count={}",
                    self.key,
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=storage status=fallback key={} error_code={} error={}",
                    self.key,
                    err.code(),
                    err.message()
                );
                Vec::new()
            }
        }
    }

    pub fn save(&mut self, tasks: &[Task]) -> Result<(), AppError> {
        let content = encode_tasks(tasks)?;
        self.store.set(&self.key, &content)
    }
}

pub fn encode_tasks(tasks: &[Task]) -> Result<String, AppError> {
    Ok(serde_json::to_string(tasks)?)
}

pub fn decode_tasks(content: &str) -> Result<Vec<Task>, AppError> {
    Ok(serde_json::from_str(content)?)
}

fn drop_duplicate_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen: HashSet<TaskId> = HashSet::with_capacity(tasks.len());
    let mut kept = Vec::with_capacity(tasks.len());
    for task in tasks {
        if seen.insert(task.id) {
            kept.push(task);
        } else {
            warn!(
                "event=tasks_load module=storage status=repaired duplicate_id={}",
                task.id
            );
        }
    }
    kept
}

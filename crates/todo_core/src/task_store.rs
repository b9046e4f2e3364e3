use crate::error::AppError;
use crate::model::{Clock, IdGenerator, SystemClock, Task, TaskId};
use crate::storage::{KeyValueStore, TaskPersistence};
use log::{debug, error, info};

/// The in-memory task list. Every change is written through to storage
/// before the mutating call returns.
#[derive(Debug)]
pub struct TaskStore<S: KeyValueStore, C: Clock = SystemClock> {
    tasks: Vec<Task>,
    persistence: TaskPersistence<S>,
    ids: IdGenerator<C>,
}

impl<S: KeyValueStore> TaskStore<S, SystemClock> {
    pub fn new(persistence: TaskPersistence<S>) -> Self {
        Self::with_clock(persistence, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    pub fn with_clock(persistence: TaskPersistence<S>, clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            persistence,
            ids: IdGenerator::new(clock),
        }
    }

    pub fn initialize(&mut self, loaded: Vec<Task>) {
        for task in &loaded {
            self.ids.observe(task.id);
        }
        self.tasks = loaded;
        debug!(
            "event=store_init module=task_store count={}",
            self.tasks.len()
        );
    }

    pub fn load_from_storage(&mut self) {
        let loaded = self.persistence.load();
        self.initialize(loaded);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    /// Returns `None` without touching anything when `name` is blank.
    pub fn add(&mut self, name: &str) -> Option<Task> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            debug!("event=task_add module=task_store status=rejected reason=blank_name");
            return None;
        }

        let tasks = &self.tasks;
        let id = self.ids.next_id(|id| tasks.iter().any(|task| task.id == id));
        let task = Task::new(id, trimmed);
        self.tasks.push(task.clone());
        self.persist("add");
        info!("event=task_add module=task_store status=ok id={}", task.id);

        Some(task)
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_remove module=task_store status=not_found id={id}");
            return false;
        };

        self.tasks.remove(index);
        self.persist("remove");
        info!("event=task_remove module=task_store status=ok id={id}");
        true
    }

    pub fn toggle_completed(&mut self, id: TaskId, completed: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle module=task_store status=not_found id={id}");
            return false;
        };

        task.completed = completed;
        self.persist("toggle");
        info!("event=task_toggle module=task_store status=ok id={id} completed={completed}");
        true
    }

    fn persist(&mut self, operation: &str) {
        if let Err(err) = self.persistence.save(&self.tasks) {
            log_persist_failure(operation, &err);
        }
    }
}

fn log_persist_failure(operation: &str, err: &AppError) {
    error!(
        "event=persist_failed module=task_store operation={} error_code={} error={}",
        operation,
        err.code(),
        err.message()
    );
}

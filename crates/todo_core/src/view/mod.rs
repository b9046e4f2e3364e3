//! Projection of the task list onto a displayed list.
//!
//! The renderer never keeps state of its own: every call to [`render`]
//! rebuilds the surface from the tasks it is given.

mod memory;

pub use memory::MemoryListSurface;

use crate::error::AppError;
use crate::model::{Task, TaskId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub completed_class: String,
    pub remove_class: String,
    pub remove_label: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            completed_class: "completed".to_string(),
            remove_class: "remover-task".to_string(),
            remove_label: "Remover tarefa".to_string(),
        }
    }
}

/// Everything one displayed entry shows, derived from a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemModel {
    pub id: TaskId,
    pub text: String,
    pub checked: bool,
    pub classes: Vec<String>,
    pub remove_label: String,
    pub remove_class: String,
}

impl ItemModel {
    pub fn from_task(task: &Task, config: &ViewConfig) -> Self {
        let classes = if task.completed {
            vec![config.completed_class.clone()]
        } else {
            Vec::new()
        };

        Self {
            id: task.id,
            text: task.name.clone(),
            checked: task.completed,
            classes,
            remove_label: config.remove_label.clone(),
            remove_class: config.remove_class.clone(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|value| value == class)
    }
}

/// The displayed list a host draws into.
pub trait ListSurface {
    fn clear(&mut self) -> Result<(), AppError>;

    fn append_item(&mut self, item: &ItemModel) -> Result<(), AppError>;

    /// Flips the completed marker of one displayed entry in place.
    fn set_completed_marker(
        &mut self,
        id: TaskId,
        completed: bool,
        config: &ViewConfig,
    ) -> Result<(), AppError>;
}

pub fn render<V: ListSurface + ?Sized>(
    surface: &mut V,
    tasks: &[Task],
    config: &ViewConfig,
) -> Result<(), AppError> {
    surface.clear()?;
    for task in tasks {
        surface.append_item(&ItemModel::from_task(task, config))?;
    }
    Ok(())
}

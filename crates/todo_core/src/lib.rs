pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod task_store;
pub mod view;

pub use controller::{Controller, InputField, Outcome, UiEvent};
pub use error::AppError;
pub use model::{Task, TaskId};
pub use task_store::TaskStore;

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::model::{Task, TaskId};

    #[test]
    fn task_has_required_fields() {
        let task = Task {
            id: TaskId(1),
            name: "demo".to_string(),
            completed: false,
        };

        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.name, "demo");
        assert!(!task.completed);
    }

    #[test]
    fn app_error_exposes_code() {
        let err = AppError::invalid_input("missing name");
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(err.message(), "missing name");
        assert_eq!(err.to_string(), "invalid_input - missing name");
    }
}

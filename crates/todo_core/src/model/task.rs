use crate::model::TaskId;
use serde::{Deserialize, Serialize};

/// One entry of the task list.
///
/// `nome` and `concluida` are the field names older saves used; they are
/// accepted on read and never written. A record carrying both spellings of
/// one field (`name` with `nome`, or `completed` with `concluida`) is
/// rejected as a duplicate field, which makes the whole saved list unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "concluida", default)]
    pub completed: bool,
}

impl Task {
    pub fn new<N: Into<String>>(id: TaskId, name: N) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Task;
    use crate::model::TaskId;

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new(TaskId(7), "demo");

        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.name, "demo");
        assert!(!task.completed);
    }

    #[test]
    fn serializes_with_canonical_field_names() {
        let task = Task {
            id: TaskId(1_700_000_000_000),
            name: "demo".to_string(),
            completed: true,
        };

        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": 1_700_000_000_000_i64, "name": "demo", "completed": true })
        );
    }

    #[test]
    fn reads_legacy_field_names() {
        let content = r#"{ "nome": "comprar pao", "concluida": true, "id": 1700000000000 }"#;

        let task: Task = serde_json::from_str(content).unwrap();

        assert_eq!(task.id, TaskId(1_700_000_000_000));
        assert_eq!(task.name, "comprar pao");
        assert!(task.completed);
    }

    #[test]
    fn record_with_both_name_spellings_is_rejected() {
        let content = r#"{ "id": 1, "nome": "a", "name": "a", "concluida": false }"#;

        let err = serde_json::from_str::<Task>(content).unwrap_err();

        assert!(err.to_string().contains("duplicate field"));
    }
}

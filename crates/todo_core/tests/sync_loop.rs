use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use todo_core::controller::{Controller, InputField, Outcome, UiEvent};
use todo_core::model::{Clock, Task, TaskId};
use todo_core::storage::{MemoryStore, TaskPersistence};
use todo_core::task_store::TaskStore;
use todo_core::view::{MemoryListSurface, ViewConfig};

const KEY: &str = "listaDeTarefas";

#[derive(Clone)]
struct StepClock(Rc<Cell<i64>>);

impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        let now = self.0.get();
        // Advances slower than ids are handed out, so same-tick adds happen.
        self.0.set(now + 1);
        now / 2
    }
}

struct TextBox(String);

impl InputField for TextBox {
    fn value(&self) -> String {
        self.0.clone()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(usize),
    RemoveUnknown,
    Toggle(usize, bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof!["[a-z ]{0,8}", Just(String::new()), Just("   ".to_string())]
            .prop_map(Op::Add),
        (0..8usize).prop_map(Op::Remove),
        Just(Op::RemoveUnknown),
        (0..8usize, any::<bool>()).prop_map(|(index, checked)| Op::Toggle(index, checked)),
    ]
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (any::<i64>(), any::<String>(), any::<bool>()).prop_map(|(id, name, completed)| Task {
        id: TaskId(id),
        name,
        completed,
    })
}

fn new_controller() -> Controller<MemoryStore, MemoryListSurface, StepClock> {
    let clock = StepClock(Rc::new(Cell::new(0)));
    let store = TaskStore::with_clock(TaskPersistence::new(MemoryStore::new(), KEY), clock);
    Controller::new(store, MemoryListSurface::default(), ViewConfig::default())
}

fn apply(controller: &mut Controller<MemoryStore, MemoryListSurface, StepClock>, op: &Op) {
    let mut input = TextBox(String::new());
    let event = match op {
        Op::Add(name) => {
            input.0 = name.clone();
            UiEvent::Submit
        }
        Op::Remove(index) => match controller.store().tasks().get(*index) {
            Some(task) => UiEvent::Remove { id: task.id },
            None => return,
        },
        Op::RemoveUnknown => UiEvent::Remove { id: TaskId(-7) },
        Op::Toggle(index, checked) => match controller.store().tasks().get(*index) {
            Some(task) => UiEvent::Toggle {
                id: task.id,
                checked: *checked,
            },
            None => return,
        },
    };
    controller.dispatch(event, &mut input).unwrap();
}

proptest! {
    #[test]
    fn prop_save_then_load_round_trips(tasks in proptest::collection::vec(task_strategy(), 0..12)) {
        let mut seen = HashSet::new();
        let tasks: Vec<Task> = tasks.into_iter().filter(|task| seen.insert(task.id)).collect();
        let mut persistence = TaskPersistence::new(MemoryStore::new(), KEY);

        persistence.save(&tasks).unwrap();

        prop_assert_eq!(persistence.load(), tasks);
    }

    #[test]
    fn prop_list_view_and_storage_agree(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut controller = new_controller();
        controller.start().unwrap();

        for op in &ops {
            apply(&mut controller, op);

            let tasks = controller.store().tasks();
            let items = controller.surface().items();
            prop_assert_eq!(items.len(), tasks.len());
            for (item, task) in items.iter().zip(tasks) {
                prop_assert_eq!(item.id, task.id);
                prop_assert_eq!(item.checked, task.completed);
                prop_assert_eq!(item.has_class("completed"), task.completed);
                prop_assert_eq!(&item.text, &task.name);
            }

            prop_assert_eq!(controller.store().persistence().load(), tasks.to_vec());

            let ids: HashSet<TaskId> = tasks.iter().map(|task| task.id).collect();
            prop_assert_eq!(ids.len(), tasks.len());
            prop_assert!(tasks.iter().all(|task| !task.name.trim().is_empty()));
        }
    }
}

#[test]
fn reload_restores_the_previous_session() {
    let mut first = new_controller();
    first.start().unwrap();
    let mut input = TextBox("pay rent".to_string());
    first.dispatch(UiEvent::Submit, &mut input).unwrap();
    input.0 = "call mom".to_string();
    first.dispatch(UiEvent::Submit, &mut input).unwrap();
    let id = first.store().tasks()[0].id;
    first
        .dispatch(UiEvent::Toggle { id, checked: true }, &mut input)
        .unwrap();

    let saved = first.store().persistence().store().clone();
    let clock = StepClock(Rc::new(Cell::new(0)));
    let store = TaskStore::with_clock(TaskPersistence::new(saved, KEY), clock);
    let mut second = Controller::new(store, MemoryListSurface::default(), ViewConfig::default());
    second.start().unwrap();

    assert_eq!(second.store().tasks(), first.store().tasks());
    assert_eq!(second.surface().items(), first.surface().items());
}

#[test]
fn remove_twice_is_exact() {
    let mut controller = new_controller();
    controller.start().unwrap();
    let mut input = TextBox("a".to_string());
    controller.dispatch(UiEvent::Submit, &mut input).unwrap();
    input.0 = "b".to_string();
    controller.dispatch(UiEvent::Submit, &mut input).unwrap();
    let first_id = controller.store().tasks()[0].id;

    controller
        .dispatch(UiEvent::Remove { id: first_id }, &mut input)
        .unwrap();
    let outcome = controller
        .dispatch(UiEvent::Remove { id: first_id }, &mut input)
        .unwrap();

    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(controller.store().len(), 1);
    assert_eq!(controller.store().tasks()[0].name, "b");
    assert_eq!(controller.surface().items().len(), 1);
}

#[test]
fn corrupt_storage_starts_empty_and_recovers_on_first_add() {
    let clock = StepClock(Rc::new(Cell::new(0)));
    let store = TaskStore::with_clock(
        TaskPersistence::new(MemoryStore::with_entry(KEY, "not json"), KEY),
        clock,
    );
    let mut controller = Controller::new(store, MemoryListSurface::default(), ViewConfig::default());

    controller.start().unwrap();
    assert!(controller.surface().items().is_empty());

    let mut input = TextBox("fresh".to_string());
    controller.dispatch(UiEvent::Submit, &mut input).unwrap();

    assert_eq!(controller.store().persistence().load().len(), 1);
}

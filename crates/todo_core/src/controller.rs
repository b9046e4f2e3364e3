use crate::error::AppError;
use crate::model::{Clock, SystemClock, TaskId};
use crate::storage::KeyValueStore;
use crate::task_store::TaskStore;
use crate::view::{ListSurface, ViewConfig, render};
use log::debug;

/// Kinds of user-facing controls the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Submit,
    Remove,
    Toggle,
}

/// Which listener fired: the add button's click, or a click/change
/// bubbling up to the list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    AddClick,
    ListClick,
    ListChange,
}

/// What the host could read off the element an event landed on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    pub classes: Vec<String>,
    pub input_type: Option<String>,
    pub checked: bool,
    /// The owning item's id as the host found it, unparsed.
    pub item_id: Option<String>,
}

impl TargetInfo {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|value| value == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit,
    Remove { id: TaskId },
    Toggle { id: TaskId, checked: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    MarkerUpdated,
    Ignored,
}

/// The text box new tasks are typed into.
pub trait InputField {
    fn value(&self) -> String;

    fn clear(&mut self);
}

impl Control {
    pub fn for_event(kind: EventKind, target: &TargetInfo, config: &ViewConfig) -> Option<Self> {
        match kind {
            EventKind::AddClick => Some(Self::Submit),
            EventKind::ListClick if target.has_class(&config.remove_class) => Some(Self::Remove),
            EventKind::ListChange if target.input_type.as_deref() == Some("checkbox") => {
                Some(Self::Toggle)
            }
            _ => None,
        }
    }
}

/// Turns a raw host event into a [`UiEvent`]. Item controls that cannot be
/// tied to a task resolve to `None`.
pub fn resolve_event(kind: EventKind, target: &TargetInfo, config: &ViewConfig) -> Option<UiEvent> {
    match Control::for_event(kind, target, config)? {
        Control::Submit => Some(UiEvent::Submit),
        Control::Remove => item_id(Control::Remove, target).map(|id| UiEvent::Remove { id }),
        Control::Toggle => item_id(Control::Toggle, target).map(|id| UiEvent::Toggle {
            id,
            checked: target.checked,
        }),
    }
}

fn item_id(control: Control, target: &TargetInfo) -> Option<TaskId> {
    match target.item_id.as_deref()?.parse::<TaskId>() {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(
                "event=resolve_target module=controller status=ignored control={control:?} error={}",
                err.message()
            );
            None
        }
    }
}

pub struct Controller<S: KeyValueStore, V: ListSurface, C: Clock = SystemClock> {
    store: TaskStore<S, C>,
    surface: V,
    view: ViewConfig,
}

impl<S: KeyValueStore, V: ListSurface, C: Clock> Controller<S, V, C> {
    pub fn new(store: TaskStore<S, C>, surface: V, view: ViewConfig) -> Self {
        Self {
            store,
            surface,
            view,
        }
    }

    pub fn store(&self) -> &TaskStore<S, C> {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn view_config(&self) -> &ViewConfig {
        &self.view
    }

    /// Loads persisted tasks and draws them.
    pub fn start(&mut self) -> Result<(), AppError> {
        self.store.load_from_storage();
        self.refresh()
    }

    pub fn refresh(&mut self) -> Result<(), AppError> {
        render(&mut self.surface, self.store.tasks(), &self.view)
    }

    pub fn dispatch(
        &mut self,
        event: UiEvent,
        input: &mut dyn InputField,
    ) -> Result<Outcome, AppError> {
        match event {
            UiEvent::Submit => self.on_submit(input),
            UiEvent::Remove { id } => self.on_remove(id),
            UiEvent::Toggle { id, checked } => self.on_toggle(id, checked),
        }
    }

    fn on_submit(&mut self, input: &mut dyn InputField) -> Result<Outcome, AppError> {
        if self.store.add(&input.value()).is_none() {
            return Ok(Outcome::Ignored);
        }

        input.clear();
        self.refresh()?;
        Ok(Outcome::Rendered)
    }

    fn on_remove(&mut self, id: TaskId) -> Result<Outcome, AppError> {
        self.store.remove(id);
        self.refresh()?;
        Ok(Outcome::Rendered)
    }

    fn on_toggle(&mut self, id: TaskId, checked: bool) -> Result<Outcome, AppError> {
        if !self.store.toggle_completed(id, checked) {
            return Ok(Outcome::Ignored);
        }

        self.surface.set_completed_marker(id, checked, &self.view)?;
        Ok(Outcome::MarkerUpdated)
    }
}

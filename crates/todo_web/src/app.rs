use crate::dom::{DomInput, DomListSurface, query, target_info};
use crate::js_error;
use crate::storage::LocalStorage;
use log::error;
use std::cell::RefCell;
use std::rc::Rc;
use todo_core::config::Config;
use todo_core::controller::{Controller, EventKind, Outcome, TargetInfo, UiEvent, resolve_event};
use todo_core::error::AppError;
use todo_core::storage::TaskPersistence;
use todo_core::task_store::TaskStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub type WebController = Controller<LocalStorage, DomListSurface>;

/// Application root: owns the controller and the task input.
pub struct App {
    controller: WebController,
    input: DomInput,
}

impl App {
    /// Builds the app against the page, draws the saved tasks and hooks up
    /// the listeners. Listeners live as long as the page.
    pub fn mount(window: &Window, document: &Document, config: Config) -> Result<(), AppError> {
        let list = query(document, &config.selectors.list)?;
        let input = DomInput::from_element(query(document, &config.selectors.input)?)?;
        let add_button = query(document, &config.selectors.add_button)?;

        let persistence = TaskPersistence::new(LocalStorage::from_window(window), config.storage_key);
        let store = TaskStore::new(persistence);
        let surface = DomListSurface::new(document.clone(), list.clone());
        let mut controller = Controller::new(store, surface, config.view);
        controller.start()?;

        let app = Rc::new(RefCell::new(Self { controller, input }));
        bind_submit(&app, &add_button)?;
        bind_list(&app, &list, "click", EventKind::ListClick)?;
        bind_list(&app, &list, "change", EventKind::ListChange)?;
        Ok(())
    }

    pub fn handle(&mut self, event: UiEvent) -> Outcome {
        match self.controller.dispatch(event, &mut self.input) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    "event=dispatch module=web status=failed error_code={} error={}",
                    err.code(),
                    err.message()
                );
                Outcome::Ignored
            }
        }
    }

    fn handle_target(&mut self, kind: EventKind, target: &TargetInfo) {
        if let Some(event) = resolve_event(kind, target, self.controller.view_config()) {
            self.handle(event);
        }
    }
}

fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), AppError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn bind_submit(app: &Rc<RefCell<App>>, add_button: &Element) -> Result<(), AppError> {
    let app = Rc::clone(app);
    listen(add_button, "click", move |_event| {
        app.borrow_mut()
            .handle_target(EventKind::AddClick, &TargetInfo::default());
    })
}

fn bind_list(
    app: &Rc<RefCell<App>>,
    list: &Element,
    event_type: &str,
    kind: EventKind,
) -> Result<(), AppError> {
    let app = Rc::clone(app);
    listen(list, event_type, move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        app.borrow_mut().handle_target(kind, &target_info(&target));
    })
}

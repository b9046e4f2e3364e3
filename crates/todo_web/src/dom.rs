use crate::js_error;
use todo_core::controller::{InputField, TargetInfo};
use todo_core::error::AppError;
use todo_core::model::TaskId;
use todo_core::view::{ItemModel, ListSurface, ViewConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

pub const ITEM_ID_ATTRIBUTE: &str = "data-id";

pub fn query(document: &Document, selector: &str) -> Result<Element, AppError> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| AppError::invalid_data(format!("no element matches `{selector}`")))
}

/// The `<ul>` (or any container) holding one `<li>` per task.
pub struct DomListSurface {
    document: Document,
    list: Element,
}

impl DomListSurface {
    pub fn new(document: Document, list: Element) -> Self {
        Self { document, list }
    }

    pub fn element(&self) -> &Element {
        &self.list
    }

    fn create(&self, tag: &str) -> Result<Element, AppError> {
        self.document.create_element(tag).map_err(js_error)
    }

    fn item_element(&self, id: TaskId) -> Result<Option<Element>, AppError> {
        self.list
            .query_selector(&item_selector(id))
            .map_err(js_error)
    }
}

impl ListSurface for DomListSurface {
    fn clear(&mut self) -> Result<(), AppError> {
        self.list.set_inner_html("");
        Ok(())
    }

    fn append_item(&mut self, item: &ItemModel) -> Result<(), AppError> {
        let id = item.id.to_string();

        let li = self.create("li")?;
        li.set_attribute(ITEM_ID_ATTRIBUTE, &id).map_err(js_error)?;
        for class in &item.classes {
            li.class_list().add_1(class).map_err(js_error)?;
        }

        let remove = self.create("button")?;
        remove.set_text_content(Some(item.remove_label.as_str()));
        remove
            .class_list()
            .add_1(&item.remove_class)
            .map_err(js_error)?;

        let checkbox: HtmlInputElement = self
            .create("input")?
            .dyn_into()
            .map_err(|_| AppError::invalid_data("created input is not an input element"))?;
        checkbox.set_type("checkbox");
        checkbox.set_id(&id);
        checkbox.set_checked(item.checked);

        let text = self.create("p")?;
        text.set_text_content(Some(item.text.as_str()));

        li.append_child(&remove).map_err(js_error)?;
        li.append_child(&checkbox).map_err(js_error)?;
        li.append_child(&text).map_err(js_error)?;
        self.list.append_child(&li).map_err(js_error)?;
        Ok(())
    }

    fn set_completed_marker(
        &mut self,
        id: TaskId,
        completed: bool,
        config: &ViewConfig,
    ) -> Result<(), AppError> {
        let Some(li) = self.item_element(id)? else {
            return Ok(());
        };

        li.class_list()
            .toggle_with_force(&config.completed_class, completed)
            .map_err(js_error)?;
        if let Some(checkbox) = li
            .query_selector("input[type=checkbox]")
            .map_err(js_error)?
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        {
            checkbox.set_checked(completed);
        }
        Ok(())
    }
}

pub struct DomInput(HtmlInputElement);

impl DomInput {
    pub fn from_element(element: Element) -> Result<Self, AppError> {
        element
            .dyn_into::<HtmlInputElement>()
            .map(Self)
            .map_err(|_| AppError::invalid_data("task input is not an <input> element"))
    }
}

impl InputField for DomInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn clear(&mut self) {
        self.0.set_value("");
    }
}

/// Reads what the controller needs off an event target inside the list.
pub fn target_info(target: &Element) -> TargetInfo {
    let class_list = target.class_list();
    let classes = (0..class_list.length())
        .filter_map(|index| class_list.item(index))
        .collect();
    let input = target.dyn_ref::<HtmlInputElement>();
    let item_id = target
        .closest(&format!("li[{ITEM_ID_ATTRIBUTE}]"))
        .ok()
        .flatten()
        .and_then(|li| li.get_attribute(ITEM_ID_ATTRIBUTE));

    TargetInfo {
        classes,
        input_type: input.map(HtmlInputElement::type_),
        checked: input.is_some_and(HtmlInputElement::checked),
        item_id,
    }
}

pub fn item_selector(id: TaskId) -> String {
    format!("li[{ITEM_ID_ATTRIBUTE}=\"{id}\"]")
}

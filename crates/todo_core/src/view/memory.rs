use crate::error::AppError;
use crate::model::TaskId;
use crate::view::{ItemModel, ListSurface, ViewConfig};

/// A displayed list held in memory, for hosts without a DOM.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryListSurface {
    items: Vec<ItemModel>,
    redraws: usize,
}

impl MemoryListSurface {
    pub fn items(&self) -> &[ItemModel] {
        &self.items
    }

    pub fn item(&self, id: TaskId) -> Option<&ItemModel> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of times the list was cleared for a full redraw.
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl ListSurface for MemoryListSurface {
    fn clear(&mut self) -> Result<(), AppError> {
        self.items.clear();
        self.redraws += 1;
        Ok(())
    }

    fn append_item(&mut self, item: &ItemModel) -> Result<(), AppError> {
        self.items.push(item.clone());
        Ok(())
    }

    fn set_completed_marker(
        &mut self,
        id: TaskId,
        completed: bool,
        config: &ViewConfig,
    ) -> Result<(), AppError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };

        item.checked = completed;
        item.classes.retain(|class| class != &config.completed_class);
        if completed {
            item.classes.push(config.completed_class.clone());
        }
        Ok(())
    }
}

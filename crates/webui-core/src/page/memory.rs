use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::page::Page;
use crate::view::RenderedTable;

/// Headless [`Page`] that keeps everything written to it in memory.
///
/// Used by tests and by callers that want to inspect the view without a
/// real front end.
#[derive(Debug, Default)]
pub struct MemoryPage {
    cookies: HashMap<String, String>,
    containers: HashSet<String>,
    avatar_src: RefCell<Option<String>>,
    count_label: RefCell<Option<String>>,
    tables: RefCell<HashMap<String, RenderedTable>>,
    render_count: Cell<usize>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.insert(id.into());
        self
    }

    pub fn avatar_src(&self) -> Option<String> {
        self.avatar_src.borrow().clone()
    }

    pub fn count_label(&self) -> Option<String> {
        self.count_label.borrow().clone()
    }

    pub fn table(&self, id: &str) -> Option<RenderedTable> {
        self.tables.borrow().get(id).cloned()
    }

    /// Number of `render_table` calls so far.
    pub fn render_count(&self) -> usize {
        self.render_count.get()
    }
}

impl Page for MemoryPage {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn set_avatar_src(&self, src: &str) {
        *self.avatar_src.borrow_mut() = Some(src.to_string());
    }

    fn set_instance_count(&self, label: &str) {
        *self.count_label.borrow_mut() = Some(label.to_string());
    }

    fn has_container(&self, id: &str) -> bool {
        self.containers.contains(id)
    }

    fn render_table(&self, id: &str, table: &RenderedTable) {
        self.tables
            .borrow_mut()
            .insert(id.to_string(), table.clone());
        self.render_count.set(self.render_count.get() + 1);
    }
}

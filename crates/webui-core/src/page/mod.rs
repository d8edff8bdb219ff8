//! The host page the view writes into.
//!
//! A [`Page`] owns the cookie store and the three nodes the core touches:
//! the avatar image, the instance count label and the table container.
//! All methods take `&self`; implementations use interior mutability since
//! the page is shared by the probe task and the table view on one thread.

pub mod memory;

pub use memory::MemoryPage;

use crate::view::RenderedTable;

pub trait Page {
    /// Raw value of the named cookie, if set.
    fn cookie(&self, name: &str) -> Option<String>;

    /// Point the avatar image at `src`.
    fn set_avatar_src(&self, src: &str);

    /// Replace the text of the instance count label.
    fn set_instance_count(&self, label: &str);

    /// Whether a container element with this id exists.
    fn has_container(&self, id: &str) -> bool;

    /// Replace the contents of container `id` with `table`.
    fn render_table(&self, id: &str, table: &RenderedTable);
}

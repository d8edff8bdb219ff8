//! Instance table view: state machine, rendering and the reactive view
//! that ties fetches to the page.

pub mod render;
pub mod state;
pub mod table;
pub mod types;

pub use render::{INSTANCE_HEADER, RenderedTable, Row, render_row, render_table};
pub use state::TableViewState;
pub use table::TableView;
pub use types::{FetchResolution, ResponseOrdering, TableProps, ViewPhase};

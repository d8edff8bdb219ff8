use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::WebUiError;
use crate::http::Transport;
use crate::instances::{FetchError, InstanceDataSource, InstanceList, InstanceSnapshot};
use crate::page::Page;
use crate::view::render::{RenderedTable, render_table};
use crate::view::state::TableViewState;
use crate::view::types::{FetchResolution, ResponseOrdering, TableProps, ViewPhase};

struct Inner<T, P> {
    transport: Rc<T>,
    page: Rc<P>,
    container: String,
    ordering: ResponseOrdering,
    props: RefCell<TableProps>,
    state: RefCell<TableViewState>,
    mounted: Cell<bool>,
}

/// Reactive table over the remote instance list.
///
/// Every fetch runs as a detached local task and cannot be cancelled; its
/// result lands in the view whenever it arrives. Cloning the view yields
/// another handle to the same state.
///
/// # Panics
///
/// Fetches are spawned with [`tokio::task::spawn_local`], so `mount`,
/// `receive_props` and `request_fetch` must be called inside a
/// [`tokio::task::LocalSet`].
pub struct TableView<T, P> {
    inner: Rc<Inner<T, P>>,
}

impl<T, P> Clone for TableView<T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport + 'static, P: Page + 'static> TableView<T, P> {
    pub fn new(
        transport: Rc<T>,
        page: Rc<P>,
        container: impl Into<String>,
        props: TableProps,
        ordering: ResponseOrdering,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                transport,
                page,
                container: container.into(),
                ordering,
                props: RefCell::new(props),
                state: RefCell::new(TableViewState::new()),
                mounted: Cell::new(false),
            }),
        }
    }

    /// Render the (empty) table and trigger the initial fetch.
    ///
    /// Only the first call has any effect.
    pub fn mount(&self) -> Option<JoinHandle<FetchResolution>> {
        if self.inner.mounted.replace(true) {
            debug!(
                event = "core.view.mount_ignored",
                container = %self.inner.container
            );
            return None;
        }

        info!(
            event = "core.view.mounted",
            container = %self.inner.container
        );
        self.inner.render();
        Some(self.request_fetch())
    }

    /// Accept new external inputs and re-fetch from scratch.
    pub fn receive_props(&self, props: TableProps) -> JoinHandle<FetchResolution> {
        *self.inner.props.borrow_mut() = props;
        self.request_fetch()
    }

    /// Start a fetch with the current props.
    pub fn request_fetch(&self) -> JoinHandle<FetchResolution> {
        let seq = self.inner.state.borrow_mut().begin_fetch();
        let endpoint = self.inner.props.borrow().endpoint.clone();

        debug!(
            event = "core.view.fetch_requested",
            seq = seq,
            endpoint = %endpoint
        );

        let inner = Rc::clone(&self.inner);
        tokio::task::spawn_local(async move {
            let source = InstanceDataSource::new(Rc::clone(&inner.transport), endpoint);
            let result = source.fetch().await;
            inner.complete_fetch(seq, result)
        })
    }

    pub fn phase(&self) -> ViewPhase {
        self.inner.state.borrow().phase()
    }

    pub fn instances(&self) -> InstanceList {
        self.inner.state.borrow().instances().clone()
    }

    pub fn props(&self) -> TableProps {
        self.inner.props.borrow().clone()
    }

    pub fn container(&self) -> &str {
        &self.inner.container
    }

    /// Current rendering of the table.
    pub fn render(&self) -> RenderedTable {
        render_table(self.inner.state.borrow().instances())
    }
}

impl<T, P: Page> Inner<T, P> {
    fn render(&self) {
        let table = render_table(self.state.borrow().instances());
        self.page.render_table(&self.container, &table);
    }

    fn complete_fetch(
        &self,
        seq: u64,
        result: Result<InstanceSnapshot, FetchError>,
    ) -> FetchResolution {
        let label = result.as_ref().ok().map(InstanceSnapshot::count_label);

        if let Err(e) = &result {
            warn!(
                event = "core.view.fetch_failed",
                seq = seq,
                error = %e,
                error_code = e.error_code()
            );
        }

        let resolution = self
            .state
            .borrow_mut()
            .resolve_fetch(seq, result, self.ordering);

        match resolution {
            FetchResolution::Applied => {
                if let Some(label) = label {
                    self.page.set_instance_count(&label);
                }
                self.render();
                info!(
                    event = "core.view.response_applied",
                    seq = seq,
                    rows = self.state.borrow().instances().len()
                );
            }
            FetchResolution::Superseded => info!(
                event = "core.view.response_superseded",
                seq = seq,
                last_applied = ?self.state.borrow().last_applied()
            ),
            FetchResolution::Failed => {}
        }

        resolution
    }
}

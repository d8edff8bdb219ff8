//! Page-load wiring: decode the session cookie, fire the auth probe and
//! mount the table view.
//!
//! The returned [`AppContext`] is the only handle to what was started; it
//! replaces any global reference to the mounted view.

use std::rc::Rc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::auth::SessionProbe;
use crate::config::WebUiConfig;
use crate::cookie::{self, DecodeError, SessionRecord};
use crate::errors::WebUiError;
use crate::events;
use crate::http::Transport;
use crate::page::Page;
use crate::view::{FetchResolution, TableProps, TableView};

/// Everything started by [`bootstrap`].
pub struct AppContext<T, P> {
    session: SessionRecord,
    decode_error: Option<DecodeError>,
    probe: Option<JoinHandle<()>>,
    table: Option<TableView<T, P>>,
    initial_fetch: Option<JoinHandle<FetchResolution>>,
}

impl<T, P> AppContext<T, P> {
    /// Decoded session; empty when the cookie is absent or malformed.
    pub fn session(&self) -> &SessionRecord {
        &self.session
    }

    pub fn decode_error(&self) -> Option<&DecodeError> {
        self.decode_error.as_ref()
    }

    /// Whether an auth probe was started.
    pub fn probe_started(&self) -> bool {
        self.probe.is_some()
    }

    /// The mounted table, if the page has the container.
    pub fn table(&self) -> Option<&TableView<T, P>> {
        self.table.as_ref()
    }

    /// Wait for the probe and the initial fetch to finish.
    ///
    /// Neither has a timeout; against an endpoint that never answers this
    /// never returns.
    pub async fn settle(&mut self) {
        if let Some(probe) = self.probe.take()
            && let Err(e) = probe.await
        {
            warn!(event = "core.bootstrap.probe_task_failed", error = %e);
        }

        if let Some(fetch) = self.initial_fetch.take() {
            match fetch.await {
                Ok(resolution) => debug!(
                    event = "core.bootstrap.initial_fetch_settled",
                    resolution = ?resolution
                ),
                Err(e) => warn!(event = "core.bootstrap.fetch_task_failed", error = %e),
            }
        }
    }
}

/// Read and decode the session cookie. An absent cookie is an empty session.
pub fn read_session<P: Page>(page: &P, cookie_name: &str) -> Result<SessionRecord, DecodeError> {
    match page.cookie(cookie_name) {
        Some(raw) => cookie::decode(&raw),
        None => Ok(SessionRecord::default()),
    }
}

/// Run the page-load sequence.
///
/// A malformed cookie is logged and skips the probe; it does not stop the
/// table from mounting.
///
/// # Panics
///
/// Must be called inside a [`tokio::task::LocalSet`].
pub fn bootstrap<T, P>(config: &WebUiConfig, transport: Rc<T>, page: Rc<P>) -> AppContext<T, P>
where
    T: Transport + 'static,
    P: Page + 'static,
{
    let (session, decode_error) = match read_session(page.as_ref(), config.cookie_name()) {
        Ok(session) => (session, None),
        Err(e) => {
            events::log_cookie_rejected(config.cookie_name(), &e);
            (SessionRecord::default(), Some(e))
        }
    };

    let probe = session.id().is_some().then(|| {
        let probe = SessionProbe::new(Rc::clone(&transport), config.auth_endpoint())
            .with_avatar_scheme(config.avatar_scheme());
        let session = session.clone();
        let page = Rc::clone(&page);

        tokio::task::spawn_local(async move {
            if let Err(e) = probe.probe_and_apply(&session, page.as_ref()).await {
                warn!(
                    event = "core.auth.probe_failed",
                    error = %e,
                    error_code = e.error_code()
                );
            }
        })
    });

    let (table, initial_fetch) = if page.has_container(config.container()) {
        let table = TableView::new(
            Rc::clone(&transport),
            Rc::clone(&page),
            config.container(),
            TableProps::new(config.instances_endpoint()),
            config.ordering(),
        );
        let fetch = table.mount();
        (Some(table), fetch)
    } else {
        debug!(
            event = "core.bootstrap.container_missing",
            container = config.container()
        );
        (None, None)
    };

    events::log_bootstrap_completed(session.len(), probe.is_some(), table.is_some());

    AppContext {
        session,
        decode_error,
        probe,
        table,
        initial_fetch,
    }
}

use crate::instances::{InstanceList, InstanceSnapshot};
use crate::view::types::{FetchResolution, ResponseOrdering, ViewPhase};

/// State owned by the table view.
///
/// Only [`TableViewState::resolve_fetch`] replaces `instances`, and only with
/// a complete successful snapshot.
#[derive(Debug, Clone)]
pub struct TableViewState {
    phase: ViewPhase,
    instances: InstanceList,
    in_flight: usize,
    last_issued: u64,
    last_applied: Option<u64>,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Empty,
            instances: Vec::new(),
            in_flight: 0,
            last_issued: 0,
            last_applied: None,
        }
    }
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn instances(&self) -> &InstanceList {
        &self.instances
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sequence number of the last applied response, if any.
    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }

    /// Record a new fetch request and return its sequence number.
    ///
    /// Sequence numbers start at 1 and increase monotonically.
    pub fn begin_fetch(&mut self) -> u64 {
        self.last_issued += 1;
        self.in_flight += 1;
        if self.phase == ViewPhase::Empty {
            self.phase = ViewPhase::Loading;
        }
        self.last_issued
    }

    /// Resolve fetch `seq` with its result.
    ///
    /// Failures never touch `instances`. Under [`ResponseOrdering::Issue`] a
    /// success older than the last applied response is dropped.
    pub fn resolve_fetch<E>(
        &mut self,
        seq: u64,
        result: Result<InstanceSnapshot, E>,
        ordering: ResponseOrdering,
    ) -> FetchResolution {
        self.in_flight = self.in_flight.saturating_sub(1);

        let resolution = match result {
            Err(_) => FetchResolution::Failed,
            Ok(_)
                if ordering == ResponseOrdering::Issue
                    && self.last_applied.is_some_and(|applied| seq <= applied) =>
            {
                FetchResolution::Superseded
            }
            Ok(snapshot) => {
                self.instances = snapshot.instances;
                self.last_applied = Some(seq);
                self.phase = ViewPhase::Populated;
                FetchResolution::Applied
            }
        };

        if self.phase == ViewPhase::Loading && self.in_flight == 0 {
            self.phase = ViewPhase::Empty;
        }

        resolution
    }
}

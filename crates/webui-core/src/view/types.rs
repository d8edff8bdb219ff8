use serde::{Deserialize, Serialize};

/// Observable phase of the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    /// No data yet and nothing in flight.
    Empty,
    /// No data yet, at least one fetch in flight. Renders like `Empty`.
    Loading,
    /// At least one fetch has been applied. Never left again.
    Populated,
}

/// How responses of overlapping fetches are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseOrdering {
    /// Every successful response is applied when it arrives; the last one to
    /// arrive wins even if it was issued first.
    #[default]
    Arrival,
    /// A response is applied only if it was issued after the last applied
    /// one, so a superseded fetch can no longer overwrite newer data.
    Issue,
}

/// External inputs of the table view. Receiving props always triggers a
/// full re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProps {
    pub endpoint: String,
}

impl TableProps {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// The response replaced the displayed list.
    Applied,
    /// The response was valid but a newer request had already been applied.
    Superseded,
    /// The fetch failed; the displayed list is unchanged.
    Failed,
}
